use tracing::debug;
use uuid::Uuid;

use shared_models::Session;

use crate::models::Schedule;

/// Sessions actually on the books for a day, resolved through the store's id
/// references rather than by re-filtering the raw session list. Sessions the
/// store does not reference (stale data, cancelled bookings) never appear.
pub fn sessions_for_day(schedule: &Schedule, sessions: &[Session], day: u32) -> Vec<Session> {
    resolve(schedule.session_ids_for_day(day), sessions)
}

/// Like [`sessions_for_day`], restricted to one therapist.
pub fn therapist_sessions_for_day(
    schedule: &Schedule,
    sessions: &[Session],
    therapist_id: Uuid,
    day: u32,
) -> Vec<Session> {
    resolve(schedule.therapist_session_ids_for_day(therapist_id, day), sessions)
}

fn resolve(session_ids: Vec<Uuid>, sessions: &[Session]) -> Vec<Session> {
    let mut resolved = Vec::with_capacity(session_ids.len());
    for session_id in session_ids {
        match sessions.iter().find(|session| session.id == session_id) {
            Some(session) => resolved.push(session.clone()),
            // The store referenced a session the collection no longer holds;
            // the caller should rebuild the index.
            None => debug!("schedule references unknown session {}", session_id),
        }
    }
    resolved
}
