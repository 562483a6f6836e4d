//! Persistence implementations
//!
//! In-memory implementations of the repository traits, seeded from vectors
//! or JSON fixture files.

mod in_memory_course_repo;
mod in_memory_student_repo;

pub use in_memory_course_repo::{CourseCatalog, InMemoryCourseRepository};
pub use in_memory_student_repo::InMemoryStudentRepository;
