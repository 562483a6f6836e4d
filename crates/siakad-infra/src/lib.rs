//! Infrastructure layer - substitute collaborators and policy loading

pub mod notification;
pub mod persistence;
pub mod policy_loader;

pub use notification::{OutboxNotifier, SentEmail};
pub use persistence::{InMemoryCourseRepository, InMemoryStudentRepository};
pub use policy_loader::PolicyLoader;
