use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::time::{BusinessHours, TimePreference, Weekday};

/// Scheduling-relevant subset of a client record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    /// Hours the client can attend, per weekday. Absent weekday means
    /// unavailable that day.
    pub availability: BTreeMap<Weekday, Vec<u8>>,
    pub preferred_time: TimePreference,
    pub prefers_virtual: bool,
    pub is_private_pay: bool,
    pub session_rate: f64,
}

impl Client {
    pub fn new(name: impl Into<String>, session_rate: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            availability: Self::default_availability(&BusinessHours::default()),
            preferred_time: TimePreference::Any,
            prefers_virtual: false,
            is_private_pay: false,
            session_rate,
        }
    }

    /// The availability used when a booking flow has no concrete client:
    /// every weekday, every business hour.
    pub fn default_availability(business: &BusinessHours) -> BTreeMap<Weekday, Vec<u8>> {
        Weekday::ALL
            .iter()
            .map(|&weekday| (weekday, business.hours().collect()))
            .collect()
    }

    pub fn available_at(&self, day: u32, hour: u8) -> bool {
        self.availability
            .get(&Weekday::from_day(day))
            .map_or(false, |hours| hours.contains(&hour))
    }
}
