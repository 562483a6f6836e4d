//! Collaborator trait definitions for persistence and notification

use crate::model::{Course, Student};
use siakad_types::Error;

/// Repository for student records
pub trait StudentRepository {
    /// Find a student by id
    fn find_by_id(&self, id: &str) -> Result<Option<Student>, Error>;

    /// Persist changes to a student
    fn update(&self, student: &Student) -> Result<(), Error>;
}

/// Repository for course offerings
pub trait CourseRepository {
    /// Find a course by its code
    fn find_by_course_code(&self, course_code: &str) -> Result<Option<Course>, Error>;

    /// Whether the student has completed everything the course requires
    fn is_prerequisite_met(&self, student_id: &str, course_code: &str) -> Result<bool, Error>;

    /// Persist changes to a course
    fn update(&self, course: &Course) -> Result<(), Error>;
}

/// Outbound notification channel
pub trait NotificationService {
    fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), Error>;
}
