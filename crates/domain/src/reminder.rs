use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle of a `Reminder`. `Fired` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReminderStatus {
    Pending,
    Fired,
    Cancelled,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidReminderError {
    #[error("The subject of a reminder can not be empty")]
    EmptySubject,
}

/// A `Reminder` is a lecture `subject` that the user should be notified
/// about at `scheduled_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Derived from `subject` and `scheduled_at`, so adding the same lecture
    /// twice yields the same `Reminder`
    pub id: ID,
    /// Identity of the wake-up registered with the timer facility.
    /// It only depends on `subject`, which means that two reminders with
    /// the same subject share one trigger and the latest one scheduled wins.
    pub trigger_id: ID,
    pub subject: String,
    /// Timestamp in millis at which the reminder should fire. Instants in
    /// the past are accepted and are expected to fire immediately.
    pub scheduled_at: i64,
    pub status: ReminderStatus,
}

impl Reminder {
    pub fn new(subject: impl Into<String>, scheduled_at: i64) -> Result<Self, InvalidReminderError> {
        let subject = subject.into();
        if subject.trim().is_empty() {
            return Err(InvalidReminderError::EmptySubject);
        }

        Ok(Self {
            id: Self::derive_id(&subject, scheduled_at),
            trigger_id: Self::derive_trigger_id(&subject),
            subject,
            scheduled_at,
            status: ReminderStatus::Pending,
        })
    }

    pub fn derive_id(subject: &str, scheduled_at: i64) -> ID {
        ID::from_name(&format!("reminder:{}@{}", subject, scheduled_at))
    }

    pub fn derive_trigger_id(subject: &str) -> ID {
        ID::from_name(&format!("trigger:{}", subject))
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReminderStatus::Pending
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Returns `false` if the reminder already reached a terminal state
    pub fn mark_fired(&mut self) -> bool {
        self.transition(ReminderStatus::Fired)
    }

    /// Returns `false` if the reminder already reached a terminal state
    pub fn cancel(&mut self) -> bool {
        self.transition(ReminderStatus::Cancelled)
    }

    fn transition(&mut self, to: ReminderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.status = to;
        true
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}
