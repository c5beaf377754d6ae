use super::{IReminderRepo, StatusChange};
use crate::repos::shared::inmemory_repo::*;
use lecture_reminder_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(vec![]),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn upsert(&self, reminder: &Reminder) -> anyhow::Result<Reminder> {
        Ok(upsert_if(reminder, &self.reminders, Reminder::is_pending))
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_trigger(&self, trigger_id: &ID) -> Vec<Reminder> {
        find_by(&self.reminders, |r| r.trigger_id == *trigger_id)
    }

    async fn all(&self) -> Vec<Reminder> {
        all(&self.reminders)
    }

    async fn mark_fired(&self, reminder_id: &ID) -> Option<StatusChange> {
        update(reminder_id, &self.reminders, Reminder::mark_fired)
            .map(|(reminder, changed)| StatusChange { reminder, changed })
    }

    async fn cancel(&self, reminder_id: &ID) -> Option<StatusChange> {
        update(reminder_id, &self.reminders, Reminder::cancel)
            .map(|(reminder, changed)| StatusChange { reminder, changed })
    }
}
