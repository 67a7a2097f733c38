use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// In-game clock value. Days start at 1 and the week is a repeating
/// five-day cycle; weekends do not exist in this model.
///
/// The derived `Ord` compares lexicographically by `(day, hour, minute)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameTime {
    pub day: u32,
    pub hour: u8,
    pub minute: u8,
}

impl GameTime {
    pub fn new(day: u32, hour: u8, minute: u8) -> Self {
        Self { day, hour, minute }
    }

    /// The top of an hour, minute 0.
    pub fn at_hour(day: u32, hour: u8) -> Self {
        Self { day, hour, minute: 0 }
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} {:02}:{:02}", self.day, self.hour, self.minute)
    }
}

/// Outcome of a time-based validation check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeValidation {
    pub is_valid: bool,
    pub reason: Option<String>,
}

impl TimeValidation {
    pub fn valid() -> Self {
        Self { is_valid: true, reason: None }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self { is_valid: false, reason: Some(reason.into()) }
    }
}

/// Check that a proposed booking slot has not already passed.
///
/// The current hour is only bookable while still at minute 0 of it: once any
/// time has elapsed within the hour, the hour is considered in progress.
pub fn validate_not_in_past(now: GameTime, day: u32, hour: u8) -> TimeValidation {
    if day < now.day {
        return TimeValidation::invalid(format!("Day {} has already passed", day));
    }
    if day == now.day {
        if hour < now.hour {
            return TimeValidation::invalid(format!("{}:00 on day {} has already passed", hour, day));
        }
        if hour == now.hour && now.minute > 0 {
            return TimeValidation::invalid(format!(
                "{}:00 on day {} is already in progress",
                hour, day
            ));
        }
    }
    TimeValidation::valid()
}

/// Weekday in the five-day practice week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Day 1 is a Monday; the cycle wraps every 5 days.
    pub fn from_day(day: u32) -> Self {
        match day.saturating_sub(1) % 5 {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            _ => Weekday::Friday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weekday::Monday => write!(f, "monday"),
            Weekday::Tuesday => write!(f, "tuesday"),
            Weekday::Wednesday => write!(f, "wednesday"),
            Weekday::Thursday => write!(f, "thursday"),
            Weekday::Friday => write!(f, "friday"),
        }
    }
}

/// A client's declared time-of-day preference. Advisory only: matching slots
/// are flagged, never re-ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePreference {
    Morning,
    Afternoon,
    Evening,
    Any,
}

impl TimePreference {
    /// Morning covers 8-11, afternoon 12-15, evening 16-17, all inclusive.
    pub fn matches(self, hour: u8) -> bool {
        match self {
            TimePreference::Morning => (8..=11).contains(&hour),
            TimePreference::Afternoon => (12..=15).contains(&hour),
            TimePreference::Evening => (16..=17).contains(&hour),
            TimePreference::Any => true,
        }
    }
}

impl Default for TimePreference {
    fn default() -> Self {
        TimePreference::Any
    }
}

/// Global open/close window bounding all scheduling activity. A therapist's
/// own work schedule can only narrow it, never widen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub open_hour: u8,
    pub close_hour: u8,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self { open_hour: 8, close_hour: 17 }
    }
}

impl BusinessHours {
    /// True if sessions may start at this hour. The close hour is exclusive.
    pub fn contains(&self, hour: u8) -> bool {
        hour >= self.open_hour && hour < self.close_hour
    }

    pub fn hours(&self) -> Range<u8> {
        self.open_hour..self.close_hour
    }
}
