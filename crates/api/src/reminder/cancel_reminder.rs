use crate::error::ReminderError;
use crate::shared::usecase::UseCase;
use lecture_reminder_domain::{Reminder, ID};
use lecture_reminder_infra::ReminderContext;
use tracing::info;

/// Cancels a pending `Reminder` together with the trigger for its identity.
/// Unknown reminders and reminders in a terminal state are left alone.
#[derive(Debug)]
pub struct CancelReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait]
impl UseCase for CancelReminderUseCase {
    /// `None` if there is no such reminder
    type Response = Option<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "CancelReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let change = match ctx.repos.reminders.cancel(&self.reminder_id).await {
            Some(change) => change,
            None => {
                info!("No reminder with id: {} to cancel", self.reminder_id);
                return Ok(None);
            }
        };

        if change.changed {
            ctx.timer.cancel_trigger(&change.reminder.trigger_id).await;
        } else {
            info!(
                "Reminder {} is already {:?}, nothing to cancel",
                change.reminder.id, change.reminder.status
            );
        }

        Ok(Some(change.reminder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::schedule_reminder::ScheduleReminderUseCase;
    use crate::reminder::test_utils::setup;
    use crate::shared::usecase::execute;
    use lecture_reminder_domain::ReminderStatus;

    #[tokio::test]
    async fn cancels_pending_reminder_and_trigger() {
        let (ctx, timer) = setup();
        let reminder = Reminder::new("Algorithms", 5000).unwrap();
        ctx.repos.reminders.upsert(&reminder).await.unwrap();
        execute(
            ScheduleReminderUseCase {
                reminder_id: reminder.id,
            },
            &ctx,
        )
        .await
        .unwrap();

        let res = execute(
            CancelReminderUseCase {
                reminder_id: reminder.id,
            },
            &ctx,
        )
        .await
        .unwrap()
        .expect("Reminder to exist");
        assert_eq!(res.status, ReminderStatus::Cancelled);
        assert!(timer.pending().is_empty());
    }

    #[tokio::test]
    async fn cancel_unknown_is_noop() {
        let (ctx, timer) = setup();
        let res = execute(
            CancelReminderUseCase {
                reminder_id: ID::from_name("unknown"),
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Ok(None)));
        assert!(timer.pending().is_empty());
    }

    #[tokio::test]
    async fn cancel_unscheduled_reminder_is_noop_for_the_timer() {
        let (ctx, timer) = setup();
        let reminder = Reminder::new("Algorithms", 5000).unwrap();
        ctx.repos.reminders.upsert(&reminder).await.unwrap();

        let res = execute(
            CancelReminderUseCase {
                reminder_id: reminder.id,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(res.unwrap().status, ReminderStatus::Cancelled);
        assert!(timer.pending().is_empty());
    }

    #[tokio::test]
    async fn fired_reminder_stays_fired() {
        let (ctx, timer) = setup();
        let reminder = Reminder::new("Algorithms", 5000).unwrap();
        let other = Reminder::new("Algorithms", 9000).unwrap();
        ctx.repos.reminders.upsert(&reminder).await.unwrap();
        ctx.repos.reminders.upsert(&other).await.unwrap();
        execute(
            ScheduleReminderUseCase {
                reminder_id: other.id,
            },
            &ctx,
        )
        .await
        .unwrap();
        ctx.repos.reminders.mark_fired(&reminder.id).await.unwrap();

        let res = execute(
            CancelReminderUseCase {
                reminder_id: reminder.id,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(res.unwrap().status, ReminderStatus::Fired);
        // The trigger shared through the subject is untouched
        assert_eq!(timer.pending().len(), 1);
    }
}
