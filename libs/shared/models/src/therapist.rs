use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::error::SchedulingError;
use crate::time::BusinessHours;

/// Shortest legal work day, in hours.
pub const MIN_WORK_DAY_HOURS: u8 = 4;
/// Most break hours a therapist may carve out of a day.
pub const MAX_BREAK_HOURS: usize = 3;
/// Hours that must remain workable after breaks.
pub const MIN_NET_WORKING_HOURS: u8 = 3;

/// A therapist-specific narrowing of business hours plus designated breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    pub work_start_hour: u8,
    pub work_end_hour: u8,
    pub break_hours: Vec<u8>,
}

impl Default for WorkSchedule {
    fn default() -> Self {
        let business = BusinessHours::default();
        Self {
            work_start_hour: business.open_hour,
            work_end_hour: business.close_hour,
            break_hours: Vec::new(),
        }
    }
}

impl WorkSchedule {
    /// Validate the custom-hours invariants. The type system does not enforce
    /// these; callers editing a schedule must run this before applying it.
    pub fn validate(&self) -> Result<(), SchedulingError> {
        if self.work_start_hour >= self.work_end_hour {
            return Err(SchedulingError::InvalidWorkSchedule(
                "work start must be before work end".to_string(),
            ));
        }
        let day_length = self.work_end_hour - self.work_start_hour;
        if day_length < MIN_WORK_DAY_HOURS {
            return Err(SchedulingError::InvalidWorkSchedule(format!(
                "work day must be at least {} hours",
                MIN_WORK_DAY_HOURS
            )));
        }
        if self.break_hours.len() > MAX_BREAK_HOURS {
            return Err(SchedulingError::InvalidWorkSchedule(format!(
                "at most {} break hours are allowed",
                MAX_BREAK_HOURS
            )));
        }
        for &hour in &self.break_hours {
            if hour < self.work_start_hour || hour >= self.work_end_hour {
                return Err(SchedulingError::InvalidWorkSchedule(format!(
                    "break at {}:00 falls outside working hours",
                    hour
                )));
            }
        }
        let unique: BTreeSet<u8> = self.break_hours.iter().copied().collect();
        if unique.len() != self.break_hours.len() {
            return Err(SchedulingError::InvalidWorkSchedule(
                "duplicate break hours".to_string(),
            ));
        }
        if day_length - (self.break_hours.len() as u8) < MIN_NET_WORKING_HOURS {
            return Err(SchedulingError::InvalidWorkSchedule(format!(
                "at least {} net working hours are required after breaks",
                MIN_NET_WORKING_HOURS
            )));
        }
        Ok(())
    }

    /// True if the hour is inside the work window and not a break.
    pub fn covers(&self, hour: u8) -> bool {
        hour >= self.work_start_hour
            && hour < self.work_end_hour
            && !self.break_hours.contains(&hour)
    }

    /// Workable hours in order, breaks removed.
    pub fn working_hours(&self) -> Vec<u8> {
        (self.work_start_hour..self.work_end_hour)
            .filter(|hour| !self.break_hours.contains(hour))
            .collect()
    }
}

/// Scheduling-relevant subset of a therapist record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Therapist {
    pub id: Uuid,
    pub name: String,
    pub work_schedule: WorkSchedule,
    pub is_player: bool,
    pub level: u32,
}

impl Therapist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            work_schedule: WorkSchedule::default(),
            is_player: false,
            level: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_schedule_is_valid_business_hours() {
        let schedule = WorkSchedule::default();
        assert!(schedule.validate().is_ok());
        assert_eq!(schedule.work_start_hour, 8);
        assert_eq!(schedule.work_end_hour, 17);
        assert!(schedule.break_hours.is_empty());
    }

    #[test]
    fn test_reversed_window_rejected() {
        let schedule = WorkSchedule {
            work_start_hour: 14,
            work_end_hour: 10,
            break_hours: vec![],
        };
        assert_matches!(
            schedule.validate(),
            Err(SchedulingError::InvalidWorkSchedule(_))
        );
    }

    #[test]
    fn test_short_day_rejected() {
        let schedule = WorkSchedule {
            work_start_hour: 9,
            work_end_hour: 12,
            break_hours: vec![],
        };
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_break_rules() {
        let outside = WorkSchedule {
            work_start_hour: 9,
            work_end_hour: 15,
            break_hours: vec![16],
        };
        assert!(outside.validate().is_err());

        let duplicated = WorkSchedule {
            work_start_hour: 9,
            work_end_hour: 15,
            break_hours: vec![12, 12],
        };
        assert!(duplicated.validate().is_err());

        let too_many = WorkSchedule {
            work_start_hour: 8,
            work_end_hour: 17,
            break_hours: vec![9, 11, 13, 15],
        };
        assert!(too_many.validate().is_err());

        let starved = WorkSchedule {
            work_start_hour: 9,
            work_end_hour: 14,
            break_hours: vec![10, 11, 12],
        };
        assert!(starved.validate().is_err());

        let fine = WorkSchedule {
            work_start_hour: 9,
            work_end_hour: 15,
            break_hours: vec![12],
        };
        assert!(fine.validate().is_ok());
    }

    #[test]
    fn test_covers_excludes_breaks() {
        let schedule = WorkSchedule {
            work_start_hour: 9,
            work_end_hour: 15,
            break_hours: vec![12],
        };
        assert!(schedule.covers(9));
        assert!(schedule.covers(14));
        assert!(!schedule.covers(12));
        assert!(!schedule.covers(8));
        assert!(!schedule.covers(15));
        assert_eq!(schedule.working_hours(), vec![9, 10, 11, 13, 14]);
    }
}
