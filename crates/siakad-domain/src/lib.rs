//! Academic records domain: models, grading rules and enrollment workflow

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::{CourseRepository, NotificationService, StudentRepository};
pub use service::{EnrollmentService, GradeCalculator, GradingPolicy};
