use serde::{Deserialize, Serialize};

/// Capacity-relevant subset of the practice building. Virtual sessions do
/// not consume rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub rooms: u32,
}

impl Building {
    pub fn new(name: impl Into<String>, rooms: u32) -> Self {
        Self { name: name.into(), rooms }
    }
}
