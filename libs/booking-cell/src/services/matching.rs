use tracing::debug;

use schedule_cell::models::Schedule;
use schedule_cell::services::AvailabilityService;
use shared_models::{BusinessHours, Client, SessionDuration, Therapist, Weekday};

use crate::models::MatchingSlot;

/// Produces candidate slots for a therapist+client pair across a multi-day
/// horizon. Room and telehealth constraints are deliberately not applied
/// here: the same candidate list is reused for virtual and in-person flows,
/// and the caller layers `BookingConstraintsService` on top.
pub struct SlotMatchingService {
    availability: AvailabilityService,
}

impl SlotMatchingService {
    pub fn new(business: BusinessHours) -> Self {
        Self { availability: AvailabilityService::new(business) }
    }

    /// Candidate hours per day: the therapist's work hours minus breaks,
    /// intersected with the client's declared availability for that weekday,
    /// intersected with slot availability for the requested duration.
    ///
    /// Ordering is day ascending then hour ascending; `is_preferred` flags a
    /// match on the client's time preference but never reorders results.
    pub fn find_matching_slots(
        &self,
        schedule: &Schedule,
        therapist: &Therapist,
        client: &Client,
        start_day: u32,
        days_to_show: u32,
        duration: SessionDuration,
    ) -> Vec<MatchingSlot> {
        let mut slots = Vec::new();
        for day in start_day..start_day + days_to_show {
            let weekday = Weekday::from_day(day);
            let Some(client_hours) = client.availability.get(&weekday) else {
                continue;
            };
            for hour in therapist.work_schedule.working_hours() {
                if !client_hours.contains(&hour) {
                    continue;
                }
                if !self.availability.is_slot_available(
                    schedule,
                    therapist.id,
                    day,
                    hour,
                    duration,
                    Some(therapist),
                ) {
                    continue;
                }
                slots.push(MatchingSlot {
                    day,
                    hour,
                    therapist_id: therapist.id,
                    is_preferred: client.preferred_time.matches(hour),
                });
            }
        }
        debug!(
            "found {} matching slots for {} with {} over days {}..{}",
            slots.len(),
            therapist.name,
            client.name,
            start_day,
            start_day + days_to_show
        );
        slots
    }

    /// First chronological candidate within the search window, if any.
    pub fn find_next_available_slot(
        &self,
        schedule: &Schedule,
        therapist: &Therapist,
        client: &Client,
        from_day: u32,
        max_days: u32,
        duration: SessionDuration,
    ) -> Option<MatchingSlot> {
        self.find_matching_slots(schedule, therapist, client, from_day, max_days, duration)
            .into_iter()
            .next()
    }
}

impl Default for SlotMatchingService {
    fn default() -> Self {
        Self::new(BusinessHours::default())
    }
}
