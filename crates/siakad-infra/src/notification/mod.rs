//! Notification implementations

mod outbox;

pub use outbox::{OutboxNotifier, SentEmail};
