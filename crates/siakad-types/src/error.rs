//! Error types for siakad

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid grading policy: {0}")]
    InvalidPolicy(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Course is full: {0}")]
    CourseFull(String),

    #[error("Prerequisites not met: student {student_id} for course {course_code}")]
    PrerequisiteNotMet {
        student_id: String,
        course_code: String,
    },

    #[error("Enrollment rejected: {0}")]
    Enrollment(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
