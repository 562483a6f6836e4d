//! Domain model types

pub mod course;
pub mod course_grade;
pub mod enrollment;
pub mod student;

pub use course::Course;
pub use course_grade::CourseGrade;
pub use enrollment::Enrollment;
pub use student::Student;
