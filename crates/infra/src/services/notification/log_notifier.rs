use super::INotificationFacility;
use lecture_reminder_domain::NotificationRequest;
use tracing::info;

/// Presents notifications as structured log events
pub struct LogNotifier {}

#[async_trait::async_trait]
impl INotificationFacility for LogNotifier {
    async fn present(&self, notification: &NotificationRequest) -> anyhow::Result<()> {
        info!(
            title = %notification.title,
            body = %notification.body,
            "Presenting notification"
        );
        Ok(())
    }
}
