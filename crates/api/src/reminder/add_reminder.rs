use crate::error::ReminderError;
use crate::shared::usecase::UseCase;
use lecture_reminder_domain::{InvalidReminderError, Reminder};
use lecture_reminder_infra::ReminderContext;
use tracing::info;

/// Stores a new `Reminder` for `subject` at `scheduled_at`.
/// It is not scheduled yet, see `ScheduleReminderUseCase`.
///
/// Adding a lecture that was already fired or cancelled returns the stored
/// reminder unchanged.
#[derive(Debug)]
pub struct AddReminderUseCase {
    pub subject: String,
    pub scheduled_at: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidSubject(InvalidReminderError),
    Storage,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidSubject(e) => Self::InvalidInput(e.to_string()),
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[async_trait::async_trait]
impl UseCase for AddReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "AddReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminder = Reminder::new(self.subject.clone(), self.scheduled_at)
            .map_err(UseCaseError::InvalidSubject)?;

        let stored = ctx
            .repos
            .reminders
            .upsert(&reminder)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        if stored.is_terminal() {
            info!(
                "Reminder {} is already {:?}, keeping it as is",
                stored.id, stored.status
            );
        }
        Ok(stored)
    }
}
