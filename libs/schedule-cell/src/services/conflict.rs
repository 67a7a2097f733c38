use tracing::{debug, warn};
use uuid::Uuid;

use shared_models::{Session, SessionDuration};

use crate::models::{Schedule, SlotConflict};

/// Existing bookings occupying one exact slot. Diagnostics for the caller;
/// booking decisions gate on `AvailabilityService::is_slot_available`.
pub fn conflicts_at(
    schedule: &Schedule,
    therapist_id: Uuid,
    day: u32,
    hour: u8,
) -> Vec<SlotConflict> {
    match schedule.session_at(day, hour, therapist_id) {
        Some(session_id) => {
            warn!(
                "conflict detected for therapist {} on day {} at {}:00",
                therapist_id, day, hour
            );
            vec![SlotConflict { session_id, therapist_id, day, hour }]
        }
        None => Vec::new(),
    }
}

/// True if any active session for the client overlaps the proposed interval.
/// Uses real interval overlap, so a multi-hour existing session blocks a new
/// session that would start inside it.
pub fn client_has_conflicting_session(
    sessions: &[Session],
    client_id: Uuid,
    day: u32,
    hour: u8,
    duration: SessionDuration,
) -> bool {
    let proposed_end = hour + duration.hour_span();
    let conflicting = sessions.iter().any(|session| {
        session.client_id == client_id
            && session.is_active()
            && session.scheduled_day == day
            && hour < session.end_hour()
            && session.scheduled_hour < proposed_end
    });
    if conflicting {
        debug!(
            "client {} already has a session overlapping day {} {}:00",
            client_id, day, hour
        );
    }
    conflicting
}

/// Count of active sessions a client has on a day; callers enforcing a
/// per-day cap compare this against their limit.
pub fn client_sessions_on_day(sessions: &[Session], client_id: Uuid, day: u32) -> usize {
    sessions
        .iter()
        .filter(|session| {
            session.client_id == client_id && session.is_active() && session.scheduled_day == day
        })
        .count()
}
