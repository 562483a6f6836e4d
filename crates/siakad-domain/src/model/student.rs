//! Student record

use serde::{Deserialize, Serialize};
use siakad_types::AcademicStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub program: String,
    /// Current semester, starting at 1
    pub semester: u32,
    /// Cumulative GPA on the 0.0-4.0 scale
    pub gpa: f64,
    #[serde(default)]
    pub academic_status: AcademicStatus,
}

impl Student {
    pub fn is_suspended(&self) -> bool {
        self.academic_status == AcademicStatus::Suspended
    }
}
