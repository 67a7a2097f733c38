use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use shared_models::Session;

/// Session ids booked for each therapist in one hour slot.
pub type TherapistSlots = BTreeMap<Uuid, Uuid>;
/// Hour slots for one day.
pub type HourSlots = BTreeMap<u8, TherapistSlots>;

/// Sparse day -> hour -> therapist -> session-id index; the ground truth of
/// what is booked when. Absence of an entry means free.
///
/// The store is a derived index over the session collection and is always
/// re-derivable from it via [`Schedule::from_sessions`]. Every mutator is
/// copy-on-write: it returns a new value and leaves `self` untouched, so
/// callers may freely share schedule references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: BTreeMap<u32, HourSlots>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the index from scratch. Cancelled and conflict-flagged
    /// sessions contribute no occupancy.
    pub fn from_sessions(sessions: &[Session]) -> Self {
        sessions
            .iter()
            .filter(|session| session.occupies_schedule())
            .fold(Schedule::new(), |schedule, session| schedule.with_session(session))
    }

    /// A new schedule with every slot of `session` marked occupied.
    pub fn with_session(&self, session: &Session) -> Self {
        let mut next = self.clone();
        for (day, hour) in session.occupied_slots() {
            next.days
                .entry(day)
                .or_default()
                .entry(hour)
                .or_default()
                .insert(session.therapist_id, session.id);
        }
        next
    }

    /// A new schedule with `session`'s slots cleared. Only entries that still
    /// reference this exact session are removed; unrelated bookings in the
    /// same slots stay put. Empty day/hour branches are pruned so the sparse
    /// shape stays canonical.
    pub fn without_session(&self, session: &Session) -> Self {
        let mut next = self.clone();
        for (day, hour) in session.occupied_slots() {
            let Some(hours) = next.days.get_mut(&day) else { continue };
            if let Some(slots) = hours.get_mut(&hour) {
                if slots.get(&session.therapist_id) == Some(&session.id) {
                    slots.remove(&session.therapist_id);
                }
                if slots.is_empty() {
                    hours.remove(&hour);
                }
            }
            if hours.is_empty() {
                next.days.remove(&day);
            }
        }
        next
    }

    /// The session id booked for a therapist at one slot, if any.
    pub fn session_at(&self, day: u32, hour: u8, therapist_id: Uuid) -> Option<Uuid> {
        self.days
            .get(&day)?
            .get(&hour)?
            .get(&therapist_id)
            .copied()
    }

    /// All per-therapist bookings in one hour slot.
    pub fn slots_at(&self, day: u32, hour: u8) -> Option<&TherapistSlots> {
        self.days.get(&day)?.get(&hour)
    }

    /// Session ids booked on a day, in hour order, each id once even when it
    /// spans several hours.
    pub fn session_ids_for_day(&self, day: u32) -> Vec<Uuid> {
        let mut seen = Vec::new();
        if let Some(hours) = self.days.get(&day) {
            for slots in hours.values() {
                for &session_id in slots.values() {
                    if !seen.contains(&session_id) {
                        seen.push(session_id);
                    }
                }
            }
        }
        seen
    }

    /// Like [`Schedule::session_ids_for_day`], restricted to one therapist.
    pub fn therapist_session_ids_for_day(&self, therapist_id: Uuid, day: u32) -> Vec<Uuid> {
        let mut seen = Vec::new();
        if let Some(hours) = self.days.get(&day) {
            for slots in hours.values() {
                if let Some(&session_id) = slots.get(&therapist_id) {
                    if !seen.contains(&session_id) {
                        seen.push(session_id);
                    }
                }
            }
        }
        seen
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// An existing booking occupying a slot someone asked about. Diagnostic
/// output for callers and UI; booking decisions gate on availability checks
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConflict {
    pub session_id: Uuid,
    pub therapist_id: Uuid,
    pub day: u32,
    pub hour: u8,
}
