//! Grade earned in a single course

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGrade {
    pub course_code: String,
    pub credit_hours: u32,
    /// Grade point on the 0.0-4.0 scale
    pub grade_point: f64,
}

impl CourseGrade {
    pub fn new(course_code: impl Into<String>, credit_hours: u32, grade_point: f64) -> Self {
        Self {
            course_code: course_code.into(),
            credit_hours,
            grade_point,
        }
    }
}
