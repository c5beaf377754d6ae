use super::INotificationFacility;
use lecture_reminder_domain::NotificationRequest;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Remembers every notification it was asked to present
pub struct InMemoryNotifier {
    presented: Mutex<Vec<NotificationRequest>>,
    failing: AtomicBool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self {
            presented: Mutex::new(vec![]),
            failing: AtomicBool::new(false),
        }
    }

    /// Makes every following delivery fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn presented(&self) -> Vec<NotificationRequest> {
        self.presented
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotificationFacility for InMemoryNotifier {
    async fn present(&self, notification: &NotificationRequest) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("Notification channel is unavailable");
        }
        self.presented
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
        Ok(())
    }
}
