//! GPA, academic status and credit-limit calculations

use siakad_types::{AcademicStatus, Error, Result};

use super::grading_policy::{GradingPolicy, MAX_GPA};
use crate::model::CourseGrade;

#[derive(Debug, Clone, Default)]
pub struct GradeCalculator {
    policy: GradingPolicy,
}

impl GradeCalculator {
    /// Calculator using the default university policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator using a custom policy, rejected if it does not validate
    pub fn with_policy(policy: GradingPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &GradingPolicy {
        &self.policy
    }

    /// Credit-weighted average of grade points.
    ///
    /// Returns 0.0 when there are no grades or no credits to weight by.
    pub fn calculate_gpa(&self, grades: &[CourseGrade]) -> Result<f64> {
        let mut total_points = 0.0;
        let mut total_credits = 0u64;

        for grade in grades {
            if !(0.0..=MAX_GPA).contains(&grade.grade_point) {
                return Err(Error::InvalidArgument(format!(
                    "Invalid grade point {} for course {}",
                    grade.grade_point, grade.course_code
                )));
            }
            total_points += grade.grade_point * f64::from(grade.credit_hours);
            total_credits += u64::from(grade.credit_hours);
        }

        if total_credits == 0 {
            return Ok(0.0);
        }
        Ok(total_points / total_credits as f64)
    }

    pub fn determine_academic_status(&self, gpa: f64, semester: u32) -> Result<AcademicStatus> {
        check_gpa(gpa)?;
        if semester < 1 {
            return Err(Error::InvalidArgument(format!(
                "Invalid semester: {}",
                semester
            )));
        }

        self.policy.status_for(gpa, semester).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "No status rule covers GPA {} in semester {}",
                gpa, semester
            ))
        })
    }

    pub fn calculate_max_credits(&self, gpa: f64) -> Result<u32> {
        check_gpa(gpa)?;
        self.policy
            .max_credits_for(gpa)
            .ok_or_else(|| Error::InvalidArgument(format!("No credit limit covers GPA {}", gpa)))
    }
}

fn check_gpa(gpa: f64) -> Result<()> {
    if !(0.0..=MAX_GPA).contains(&gpa) {
        return Err(Error::InvalidArgument(format!("Invalid GPA: {}", gpa)));
    }
    Ok(())
}
