use tracing::{debug, warn};

use shared_models::{Building, Session};

use crate::models::{BookingCheck, SessionTypeCheck};

/// Room-capacity and telehealth-eligibility rules layered on top of slot
/// availability. Does not look at the schedule grid: therapist-side
/// availability is the availability service's job.
pub struct BookingConstraintsService;

impl BookingConstraintsService {
    pub fn new() -> Self {
        Self
    }

    /// Decide whether a session of this modality fits the building at the
    /// proposed time. Multi-hour sessions must pass for every covered hour.
    pub fn can_book_session_type(&self, check: &SessionTypeCheck<'_>) -> BookingCheck {
        if check.is_virtual {
            if !check.telehealth_unlocked {
                debug!("virtual booking rejected: telehealth not unlocked");
                return BookingCheck::rejected("Telehealth has not been unlocked yet");
            }
            // Virtual sessions never consume rooms.
            return BookingCheck::allowed();
        }

        for offset in 0..check.duration.hour_span() {
            let hour = check.hour + offset;
            let free = self.rooms_available_at(check.building, check.sessions, check.day, hour);
            if free == 0 {
                warn!(
                    "no rooms free on day {} at {}:00 ({} total)",
                    check.day, hour, check.building.rooms
                );
                let reason = if check.telehealth_unlocked {
                    format!(
                        "All {} rooms are taken at {}:00; only a virtual session can be booked then",
                        check.building.rooms, hour
                    )
                } else {
                    format!("All {} rooms are taken at {}:00", check.building.rooms, hour)
                };
                return BookingCheck::rejected(reason);
            }
        }
        BookingCheck::allowed()
    }

    /// Rooms left in an hour: building capacity minus active in-person
    /// sessions overlapping it, across all therapists. Completed and
    /// cancelled sessions hold no room.
    pub fn rooms_available_at(
        &self,
        building: &Building,
        sessions: &[Session],
        day: u32,
        hour: u8,
    ) -> u32 {
        let in_use = sessions
            .iter()
            .filter(|session| {
                !session.is_virtual && session.is_active() && session.overlaps_hour(day, hour)
            })
            .count() as u32;
        building.rooms.saturating_sub(in_use)
    }
}

impl Default for BookingConstraintsService {
    fn default() -> Self {
        Self::new()
    }
}
