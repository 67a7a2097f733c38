use tracing::debug;
use uuid::Uuid;

use shared_models::{BusinessHours, SessionDuration, Therapist};

use crate::models::Schedule;

/// Decides whether a given day/hour/duration is bookable for a therapist,
/// against the schedule store and the global business-hours window.
pub struct AvailabilityService {
    business: BusinessHours,
}

impl AvailabilityService {
    pub fn new(business: BusinessHours) -> Self {
        Self { business }
    }

    pub fn business_hours(&self) -> BusinessHours {
        self.business
    }

    /// Check one hypothetical slot. Every hour the session would span must
    /// fall inside business hours (so the session cannot spill past close),
    /// inside the therapist's work window minus breaks when a therapist
    /// record is supplied, and must be free of existing bookings for that
    /// therapist.
    pub fn is_slot_available(
        &self,
        schedule: &Schedule,
        therapist_id: Uuid,
        day: u32,
        hour: u8,
        duration: SessionDuration,
        therapist: Option<&Therapist>,
    ) -> bool {
        for offset in 0..duration.hour_span() {
            let covered = hour + offset;
            if !self.business.contains(covered) {
                debug!(
                    "slot day {} {}:00 rejected: {}:00 is outside business hours",
                    day, hour, covered
                );
                return false;
            }
            if let Some(therapist) = therapist {
                if !therapist.work_schedule.covers(covered) {
                    debug!(
                        "slot day {} {}:00 rejected: {}:00 is outside {}'s work schedule",
                        day, hour, covered, therapist.name
                    );
                    return false;
                }
            }
            if schedule.session_at(day, covered, therapist_id).is_some() {
                debug!(
                    "slot day {} {}:00 rejected: {}:00 already booked for therapist {}",
                    day, hour, covered, therapist_id
                );
                return false;
            }
        }
        true
    }

    /// Hours in the relevant work window where a minimum-duration (50-min)
    /// session still fits.
    pub fn available_slots_for_day(
        &self,
        schedule: &Schedule,
        therapist_id: Uuid,
        day: u32,
        therapist: Option<&Therapist>,
    ) -> Vec<u8> {
        let (window_start, window_end) = match therapist {
            Some(t) => (t.work_schedule.work_start_hour, t.work_schedule.work_end_hour),
            None => (self.business.open_hour, self.business.close_hour),
        };
        (window_start..window_end)
            .filter(|&hour| {
                self.is_slot_available(
                    schedule,
                    therapist_id,
                    day,
                    hour,
                    SessionDuration::Standard,
                    therapist,
                )
            })
            .collect()
    }
}

impl Default for AvailabilityService {
    fn default() -> Self {
        Self::new(BusinessHours::default())
    }
}

/// Stamina drained from a therapist by running one session. Tiered by
/// duration; higher levels pay less, never more.
pub fn calculate_energy_cost(duration: SessionDuration, therapist_level: u32) -> f64 {
    let base = match duration {
        SessionDuration::Standard => 10.0,
        SessionDuration::Extended => 16.0,
        SessionDuration::Intensive => 32.0,
    };
    let relief = 1.0 - 0.05 * therapist_level.min(10) as f64;
    base * relief
}
