use super::dispatch_reminder::DispatchReminderUseCase;
use crate::shared::usecase::{Subscriber, UseCase};
use lecture_reminder_infra::ReminderContext;
use tracing::error;

/// Hands the notification of a fired reminder to the notification facility.
/// Delivery is attempted once and a failure is only logged.
pub struct PresentNotificationOnFire;

#[async_trait::async_trait]
impl Subscriber<DispatchReminderUseCase> for PresentNotificationOnFire {
    async fn notify(
        &self,
        e: &<DispatchReminderUseCase as UseCase>::Response,
        ctx: &ReminderContext,
    ) {
        if !e.deliver {
            return;
        }
        if let Err(err) = ctx.notifier.present(&e.notification).await {
            error!(
                "Unable to present notification {:?}. Err: {:?}",
                e.notification, err
            );
        }
    }
}
