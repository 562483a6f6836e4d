//! Notifier that keeps every sent email in an in-memory outbox

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use siakad_domain::repository::NotificationService;
use siakad_types::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct OutboxNotifier {
    outbox: RefCell<Vec<SentEmail>>,
}

impl OutboxNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All emails in the order they were sent
    pub fn sent(&self) -> Vec<SentEmail> {
        self.outbox.borrow().clone()
    }

    pub fn sent_to(&self, recipient: &str) -> Vec<SentEmail> {
        self.outbox
            .borrow()
            .iter()
            .filter(|mail| mail.to == recipient)
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.outbox.borrow().len()
    }

    /// Remove and return everything sent so far
    pub fn drain(&self) -> Vec<SentEmail> {
        self.outbox.borrow_mut().drain(..).collect()
    }
}

impl NotificationService for OutboxNotifier {
    fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), Error> {
        debug!(to, subject, "email queued");
        self.outbox.borrow_mut().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
