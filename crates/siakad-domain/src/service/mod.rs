//! Domain services

pub mod enrollment_service;
pub mod grade_calculator;
pub mod grading_policy;

pub use enrollment_service::EnrollmentService;
pub use grade_calculator::GradeCalculator;
pub use grading_policy::{CreditLimitRule, GradingPolicy, StatusBand, StatusRule};
