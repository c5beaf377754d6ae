mod inmemory;
mod tokio_timer;

pub use inmemory::InMemoryTimerFacility;
pub use tokio_timer::TokioTimerFacility;
use lecture_reminder_domain::{TriggerRequest, ID};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriggerError {
    #[error("Not permitted to schedule exact alarms")]
    PermissionDenied,
    #[error("Timer facility is unavailable: {0}")]
    Unavailable(String),
}

/// The facility that holds pending one-shot wake-ups and fires them at
/// their instant. Firing hands the encoded `TriggerPayload` back to whoever
/// listens for fired triggers.
#[async_trait::async_trait]
pub trait ITimerFacility: Send + Sync {
    /// Registers the trigger. A pending trigger with the same id is replaced.
    async fn request_trigger(&self, request: TriggerRequest) -> Result<(), TriggerError>;
    /// Removes the pending trigger with the given id, if there is one
    async fn cancel_trigger(&self, trigger_id: &ID);
}
