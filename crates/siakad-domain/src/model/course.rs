//! Course offering

use serde::{Deserialize, Serialize};

/// A course offering with a seat limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_code: String,
    pub name: String,
    pub credit_hours: u32,
    pub capacity: u32,
    #[serde(default)]
    pub enrolled_count: u32,
    pub instructor: String,
}

impl Course {
    pub fn is_full(&self) -> bool {
        self.enrolled_count >= self.capacity
    }

    pub fn available_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled_count)
    }
}
