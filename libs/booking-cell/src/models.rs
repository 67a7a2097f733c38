use serde::{Deserialize, Serialize};
use uuid::Uuid;

use schedule_cell::models::Schedule;
use shared_models::{Building, Client, GameTime, Session, SessionDuration, Therapist};

// ==============================================================================
// CONSTRAINT CHECK MODELS
// ==============================================================================

/// Outcome of a booking-constraint check. Expected rejections carry a
/// human-readable reason; the caller decides presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingCheck {
    pub can_book: bool,
    pub reason: Option<String>,
}

impl BookingCheck {
    pub fn allowed() -> Self {
        Self { can_book: true, reason: None }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self { can_book: false, reason: Some(reason.into()) }
    }
}

/// Inputs for a room-capacity / telehealth-eligibility check of one
/// proposed session.
#[derive(Debug, Clone, Copy)]
pub struct SessionTypeCheck<'a> {
    pub building: &'a Building,
    pub sessions: &'a [Session],
    pub telehealth_unlocked: bool,
    pub is_virtual: bool,
    pub day: u32,
    pub hour: u8,
    pub duration: SessionDuration,
}

// ==============================================================================
// SLOT MATCHING MODELS
// ==============================================================================

/// One candidate slot for a therapist+client pair. `is_preferred` is
/// advisory metadata for the caller to highlight; results stay in
/// chronological order regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingSlot {
    pub day: u32,
    pub hour: u8,
    pub therapist_id: Uuid,
    pub is_preferred: bool,
}

// ==============================================================================
// RECURRING PLANNER MODELS
// ==============================================================================

/// Inputs for projecting a fixed-interval series of future sessions.
#[derive(Debug, Clone, Copy)]
pub struct RecurringBookingRequest<'a> {
    pub schedule: &'a Schedule,
    pub sessions: &'a [Session],
    pub therapist: &'a Therapist,
    pub client: &'a Client,
    pub building: &'a Building,
    pub telehealth_unlocked: bool,
    pub current_time: GameTime,
    pub start_day: u32,
    pub start_hour: u8,
    pub duration: SessionDuration,
    pub is_virtual: bool,
    pub count: u32,
    pub interval_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedSlot {
    pub index: usize,
    pub day: u32,
    pub hour: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFailure {
    pub index: usize,
    pub reason: String,
}

/// Full per-index report for a recurring series. The plan is informational:
/// whether partial success is acceptable ("all or nothing" in the booking
/// UI) is the caller's policy, not the planner's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringPlan {
    pub planned: Vec<PlannedSlot>,
    pub failures: Vec<PlanFailure>,
}

impl RecurringPlan {
    /// True when every projected occurrence validated.
    pub fn is_fully_bookable(&self) -> bool {
        self.failures.is_empty()
    }
}

// ==============================================================================
// SESSION FACTORY MODELS
// ==============================================================================

/// Booking parameters for constructing one session. `is_virtual` left as
/// `None` defaults from the client's modality preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSessionRequest {
    pub scheduled_day: u32,
    pub scheduled_hour: u8,
    pub duration: SessionDuration,
    pub is_virtual: Option<bool>,
}

// ==============================================================================
// BOOKING ORCHESTRATION MODELS
// ==============================================================================

/// Everything a booking or reschedule decision reads: the current schedule
/// snapshot, the session collection it indexes, the participants, and the
/// practice-level constraints. `now` is always passed in; the engine never
/// reads a clock.
#[derive(Debug, Clone, Copy)]
pub struct BookingContext<'a> {
    pub schedule: &'a Schedule,
    pub sessions: &'a [Session],
    pub therapist: &'a Therapist,
    pub client: &'a Client,
    pub building: &'a Building,
    pub telehealth_unlocked: bool,
    pub now: GameTime,
}

/// Result of a gated booking or reschedule: either the committed session
/// plus the schedule that now contains it, or the check that refused it.
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    Booked { session: Session, schedule: Schedule },
    Rejected(BookingCheck),
}

impl BookingOutcome {
    pub fn is_booked(&self) -> bool {
        matches!(self, BookingOutcome::Booked { .. })
    }
}
