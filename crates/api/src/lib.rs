mod error;
mod job_schedulers;
mod reminder;
mod shared;

pub use error::ReminderError;
use job_schedulers::start_fire_listener;
use lecture_reminder_domain::{NotificationRequest, Reminder, ID};
use lecture_reminder_infra::ReminderContext;
use reminder::{
    add_reminder::AddReminderUseCase, cancel_reminder::CancelReminderUseCase,
    dispatch_reminder::on_fire, list_reminders::ListRemindersUseCase,
    schedule_reminder::ScheduleReminderUseCase,
};
use shared::usecase::execute;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// The reminder core as seen by the input collaborator. It owns the
/// context and the listener that dispatches fired triggers.
pub struct Application {
    context: ReminderContext,
    fire_listener: JoinHandle<()>,
}

impl Application {
    /// Must be called from within a tokio runtime
    pub fn new(context: ReminderContext, fired: mpsc::Receiver<String>) -> Self {
        let fire_listener = start_fire_listener(context.clone(), fired);
        Self {
            context,
            fire_listener,
        }
    }

    /// Stores the reminder and schedules it. A lecture that was already
    /// fired or cancelled is returned as is and not scheduled again.
    ///
    /// If exact alarms are not permitted the reminder is still stored and
    /// `ReminderError::PermissionDenied` tells which one to schedule again
    /// once the permission is granted.
    pub async fn add_reminder(
        &self,
        subject: impl Into<String>,
        scheduled_at: i64,
    ) -> Result<Reminder, ReminderError> {
        let usecase = AddReminderUseCase {
            subject: subject.into(),
            scheduled_at,
        };
        let reminder = execute(usecase, &self.context)
            .await
            .map_err(ReminderError::from)?;
        if reminder.is_terminal() {
            return Ok(reminder);
        }
        self.schedule_reminder(&reminder.id).await
    }

    pub async fn schedule_reminder(&self, reminder_id: &ID) -> Result<Reminder, ReminderError> {
        let usecase = ScheduleReminderUseCase {
            reminder_id: *reminder_id,
        };
        execute(usecase, &self.context)
            .await
            .map_err(ReminderError::from)
    }

    /// `Ok(None)` if there is no such reminder
    pub async fn cancel_reminder(&self, reminder_id: &ID) -> Result<Option<Reminder>, ReminderError> {
        let usecase = CancelReminderUseCase {
            reminder_id: *reminder_id,
        };
        execute(usecase, &self.context)
            .await
            .map_err(ReminderError::from)
    }

    pub async fn list_reminders(&self) -> Result<Vec<Reminder>, ReminderError> {
        execute(ListRemindersUseCase, &self.context)
            .await
            .map_err(ReminderError::from)
    }

    /// Entry point for a timer facility that calls back directly instead
    /// of delivering on the fired trigger channel
    pub async fn on_fire(&self, payload: String) -> NotificationRequest {
        on_fire(payload, &self.context).await
    }

    /// Stops dispatching fired triggers
    pub fn stop(self) {
        self.fire_listener.abort();
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        self.fire_listener.abort();
    }
}
