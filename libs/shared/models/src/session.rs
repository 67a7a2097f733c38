use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::SchedulingError;

/// Length of a bookable session. Only three tiers exist in the practice.
///
/// Durations are not true to the minute on the schedule grid: a session
/// blocks whole hour slots starting at its scheduled hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SessionDuration {
    /// 50 minutes, one hour slot.
    Standard,
    /// 80 minutes, two hour slots.
    Extended,
    /// 180 minutes, three hour slots.
    Intensive,
}

impl SessionDuration {
    pub fn minutes(self) -> u32 {
        match self {
            SessionDuration::Standard => 50,
            SessionDuration::Extended => 80,
            SessionDuration::Intensive => 180,
        }
    }

    /// Consecutive hour slots blocked on the grid: ceil(minutes / 60).
    pub fn hour_span(self) -> u8 {
        match self {
            SessionDuration::Standard => 1,
            SessionDuration::Extended => 2,
            SessionDuration::Intensive => 3,
        }
    }

    /// Payment scaling relative to a standard 50-minute session.
    pub fn rate_multiplier(self) -> f64 {
        self.minutes() as f64 / SessionDuration::Standard.minutes() as f64
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = SchedulingError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            50 => Ok(SessionDuration::Standard),
            80 => Ok(SessionDuration::Extended),
            180 => Ok(SessionDuration::Intensive),
            other => Err(SchedulingError::InvalidDuration(other)),
        }
    }
}

impl From<SessionDuration> for u32 {
    fn from(duration: SessionDuration) -> u32 {
        duration.minutes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    /// Diagnostic state flagged by external subsystems; the engine itself
    /// never produces it and treats it as non-occupying.
    Conflict,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Cancelled)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Scheduled => write!(f, "scheduled"),
            SessionStatus::InProgress => write!(f, "in_progress"),
            SessionStatus::Completed => write!(f, "completed"),
            SessionStatus::Cancelled => write!(f, "cancelled"),
            SessionStatus::Conflict => write!(f, "conflict"),
        }
    }
}

/// The atomic bookable unit.
///
/// `therapist_name` and `client_name` are a display cache; the id fields are
/// authoritative. `payment` is computed once at booking time and never
/// recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub therapist_id: Uuid,
    pub client_id: Uuid,
    pub therapist_name: String,
    pub client_name: String,
    pub scheduled_day: u32,
    pub scheduled_hour: u8,
    pub duration: SessionDuration,
    pub is_virtual: bool,
    pub is_insurance: bool,
    pub payment: f64,
    pub status: SessionStatus,
    pub progress: f32,
    pub quality: f32,
}

impl Session {
    /// Every `(day, hour)` slot this session spans on the grid.
    pub fn occupied_slots(&self) -> Vec<(u32, u8)> {
        (0..self.duration.hour_span())
            .map(|offset| (self.scheduled_day, self.scheduled_hour + offset))
            .collect()
    }

    /// First hour after the session's blocked span.
    pub fn end_hour(&self) -> u8 {
        self.scheduled_hour + self.duration.hour_span()
    }

    /// Active sessions block a client's time and consume rooms.
    pub fn is_active(&self) -> bool {
        matches!(self.status, SessionStatus::Scheduled | SessionStatus::InProgress)
    }

    /// Statuses whose slots stay on the schedule grid when it is rebuilt.
    pub fn occupies_schedule(&self) -> bool {
        matches!(
            self.status,
            SessionStatus::Scheduled | SessionStatus::InProgress | SessionStatus::Completed
        )
    }

    pub fn overlaps_hour(&self, day: u32, hour: u8) -> bool {
        self.scheduled_day == day && hour >= self.scheduled_hour && hour < self.end_hour()
    }
}
