use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration and programmer errors surfaced by the scheduling core.
///
/// Expected domain rejections (slot taken, past time, capacity full) are not
/// errors: validating functions report those as result structs with a
/// human-readable reason. This type covers the cases the caller should never
/// produce in the first place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum SchedulingError {
    #[error("Invalid session duration: {0} minutes (expected 50, 80 or 180)")]
    InvalidDuration(u32),

    #[error("Invalid work schedule: {0}")]
    InvalidWorkSchedule(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
