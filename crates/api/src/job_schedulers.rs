use crate::reminder::dispatch_reminder::on_fire;
use lecture_reminder_infra::ReminderContext;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

/// Dispatches every fired trigger delivered on `fired`, one at a time and
/// exactly once each. Stops when the sending side is gone.
pub fn start_fire_listener(ctx: ReminderContext, mut fired: mpsc::Receiver<String>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(payload) = fired.recv().await {
            on_fire(payload, &ctx).await;
        }
        info!("Fired trigger channel closed, stopping the fire listener");
    })
}
