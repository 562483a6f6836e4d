//! Enrollment record created when a student is admitted to a course

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub enrollment_id: String,
    pub student_id: String,
    pub course_code: String,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Create a fresh enrollment stamped with the current time
    pub fn new(student_id: &str, course_code: &str) -> Self {
        Self {
            enrollment_id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            course_code: course_code.to_string(),
            enrolled_at: Utc::now(),
        }
    }
}
