mod inmemory;
mod log_notifier;

pub use inmemory::InMemoryNotifier;
pub use log_notifier::LogNotifier;
use lecture_reminder_domain::NotificationRequest;

/// The facility that presents notifications to the user.
/// Presenting is fire-and-forget: nobody retries a failed delivery.
#[async_trait::async_trait]
pub trait INotificationFacility: Send + Sync {
    async fn present(&self, notification: &NotificationRequest) -> anyhow::Result<()>;
}
