mod inmemory;

pub use inmemory::InMemoryReminderRepo;
use lecture_reminder_domain::{Reminder, ID};

/// Result of asking for a status transition of a stored `Reminder`
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    /// The reminder after the transition was attempted
    pub reminder: Reminder,
    /// `false` if the reminder was already in a terminal state
    pub changed: bool,
}

/// The authoritative list of `Reminder`s for the current session.
/// Insertion order is preserved and nothing is ever removed.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Appends the reminder, or replaces a pending one with the same id in
    /// place. A terminal reminder with the same id is never touched.
    /// Returns the reminder stored afterwards.
    async fn upsert(&self, reminder: &Reminder) -> anyhow::Result<Reminder>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_by_trigger(&self, trigger_id: &ID) -> Vec<Reminder>;
    async fn all(&self) -> Vec<Reminder>;
    async fn mark_fired(&self, reminder_id: &ID) -> Option<StatusChange>;
    async fn cancel(&self, reminder_id: &ID) -> Option<StatusChange>;
}
