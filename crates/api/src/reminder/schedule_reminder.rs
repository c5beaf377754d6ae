use crate::error::ReminderError;
use crate::shared::usecase::UseCase;
use lecture_reminder_domain::{Reminder, ReminderStatus, TriggerRequest, ID};
use lecture_reminder_infra::{ReminderContext, TriggerError};
use tracing::warn;

/// Registers an exact wake-up for a stored `Reminder` with the timer facility.
///
/// The trigger is keyed by the trigger identity of the `Reminder`, so scheduling
/// a reminder whose identity already has a pending trigger replaces that trigger.
#[derive(Debug)]
pub struct ScheduleReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    NotPending(ID, ReminderStatus),
    /// The user has not allowed exact alarms. The caller can ask for the
    /// permission and execute this use case again.
    PermissionDenied(ID),
    TimerUnavailable(String),
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The reminder with id: {}, was not found.", id))
            }
            UseCaseError::NotPending(id, status) => Self::InvalidInput(format!(
                "The reminder with id: {} is {:?} and can not be scheduled.",
                id, status
            )),
            UseCaseError::PermissionDenied(reminder_id) => Self::PermissionDenied { reminder_id },
            UseCaseError::TimerUnavailable(_) => Self::InternalError,
        }
    }
}

#[async_trait::async_trait]
impl UseCase for ScheduleReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let reminder = ctx
            .repos
            .reminders
            .find(&self.reminder_id)
            .await
            .ok_or(UseCaseError::NotFound(self.reminder_id))?;

        if !reminder.is_pending() {
            return Err(UseCaseError::NotPending(reminder.id, reminder.status));
        }

        if reminder.scheduled_at <= ctx.sys.get_timestamp_millis() {
            warn!(
                "Reminder {} for {} is scheduled in the past and will fire immediately",
                reminder.id, reminder.subject
            );
        }

        ctx.timer
            .request_trigger(TriggerRequest::exact_wakeup(&reminder))
            .await
            .map_err(|e| match e {
                TriggerError::PermissionDenied => UseCaseError::PermissionDenied(reminder.id),
                TriggerError::Unavailable(msg) => UseCaseError::TimerUnavailable(msg),
            })?;

        Ok(reminder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::test_utils::{setup, StaticTimeSys};
    use crate::shared::usecase::execute;
    use std::sync::Arc;

    async fn insert(ctx: &ReminderContext, subject: &str, at: i64) -> Reminder {
        let reminder = Reminder::new(subject, at).unwrap();
        ctx.repos.reminders.upsert(&reminder).await.unwrap();
        reminder
    }

    #[tokio::test]
    async fn schedules_exact_wakeup() {
        let (ctx, timer) = setup();
        let reminder = insert(&ctx, "Algorithms", 5000).await;

        let usecase = ScheduleReminderUseCase {
            reminder_id: reminder.id,
        };
        assert!(execute(usecase, &ctx).await.is_ok());

        let trigger = timer
            .pending_trigger(&reminder.trigger_id)
            .expect("Trigger to be pending");
        assert_eq!(trigger.when, 5000);
        assert!(trigger.exact);
        assert!(trigger.wake_from_idle);
        assert_eq!(trigger.payload.subject, "Algorithms");
    }

    #[tokio::test]
    async fn same_subject_replaces_trigger() {
        let (ctx, timer) = setup();
        let first = insert(&ctx, "Algorithms", 5000).await;
        let second = insert(&ctx, "Algorithms", 9000).await;

        for reminder in [&first, &second] {
            let usecase = ScheduleReminderUseCase {
                reminder_id: reminder.id,
            };
            execute(usecase, &ctx).await.unwrap();
        }

        let pending = timer.pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].when, 9000);
    }

    #[tokio::test]
    async fn accepts_instants_in_the_past() {
        let (mut ctx, timer) = setup();
        ctx.sys = Arc::new(StaticTimeSys(1000 * 60 * 60 * 5));
        let reminder = insert(&ctx, "Physics", 1000 * 60 * 60 * 4).await;

        let usecase = ScheduleReminderUseCase {
            reminder_id: reminder.id,
        };
        assert!(execute(usecase, &ctx).await.is_ok());
        assert_eq!(timer.take_due(ctx.sys.get_timestamp_millis()).len(), 1);
    }

    #[tokio::test]
    async fn permission_denied_is_recoverable() {
        let (ctx, timer) = setup();
        let reminder = insert(&ctx, "Algorithms", 5000).await;
        timer.set_exact_alarms_permitted(false);

        let usecase = ScheduleReminderUseCase {
            reminder_id: reminder.id,
        };
        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::PermissionDenied(id)) if id == reminder.id));
        assert!(timer.pending().is_empty());
        assert!(ctx.repos.reminders.find(&reminder.id).await.unwrap().is_pending());

        // User granted the permission
        timer.set_exact_alarms_permitted(true);
        let usecase = ScheduleReminderUseCase {
            reminder_id: reminder.id,
        };
        assert!(execute(usecase, &ctx).await.is_ok());
        assert_eq!(timer.pending().len(), 1);
    }

    #[tokio::test]
    async fn rejects_unknown_and_terminal_reminders() {
        let (ctx, timer) = setup();
        let usecase = ScheduleReminderUseCase {
            reminder_id: ID::from_name("unknown"),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::NotFound(_))
        ));

        let reminder = insert(&ctx, "Algorithms", 5000).await;
        ctx.repos.reminders.cancel(&reminder.id).await.unwrap();
        let usecase = ScheduleReminderUseCase {
            reminder_id: reminder.id,
        };
        let err: ReminderError = execute(usecase, &ctx).await.unwrap_err().into();
        assert!(matches!(err, ReminderError::InvalidInput(_)));
        assert!(timer.pending().is_empty());
    }
}
