use super::{ITimerFacility, TriggerError};
use crate::system::ISys;
use lecture_reminder_domain::{TriggerRequest, ID};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

struct PendingTrigger {
    /// Distinguishes a trigger from the one that replaced it under the same id
    generation: u64,
    handle: JoinHandle<()>,
}

type PendingTriggers = Arc<Mutex<HashMap<ID, PendingTrigger>>>;

fn lock(pending: &Mutex<HashMap<ID, PendingTrigger>>) -> MutexGuard<'_, HashMap<ID, PendingTrigger>> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Timer facility backed by the tokio runtime. Every pending trigger is a
/// task sleeping until its instant, which then sends the encoded payload
/// on the fired trigger channel.
pub struct TokioTimerFacility {
    sys: Arc<dyn ISys>,
    exact_alarms_permitted: AtomicBool,
    sender: mpsc::Sender<String>,
    pending: PendingTriggers,
    next_generation: AtomicU64,
}

impl TokioTimerFacility {
    /// Returns the facility together with the receiving end of the
    /// fired trigger channel
    pub fn new(
        sys: Arc<dyn ISys>,
        exact_alarms_permitted: bool,
        queue_size: usize,
    ) -> (Self, mpsc::Receiver<String>) {
        let (sender, receiver) = mpsc::channel(queue_size.max(1));
        let facility = Self {
            sys,
            exact_alarms_permitted: AtomicBool::new(exact_alarms_permitted),
            sender,
            pending: Default::default(),
            next_generation: AtomicU64::new(0),
        };
        (facility, receiver)
    }

    /// The user granted or revoked the exact alarm permission
    pub fn set_exact_alarms_permitted(&self, permitted: bool) {
        self.exact_alarms_permitted.store(permitted, Ordering::SeqCst);
    }

    pub fn pending_count(&self) -> usize {
        lock(&self.pending).len()
    }
}

#[async_trait::async_trait]
impl ITimerFacility for TokioTimerFacility {
    async fn request_trigger(&self, request: TriggerRequest) -> Result<(), TriggerError> {
        if !self.exact_alarms_permitted.load(Ordering::SeqCst) {
            return Err(TriggerError::PermissionDenied);
        }
        if self.sender.is_closed() {
            return Err(TriggerError::Unavailable(
                "Nobody is listening for fired triggers".into(),
            ));
        }

        // Instants in the past fire right away
        let delay_millis = request
            .when
            .saturating_sub(self.sys.get_timestamp_millis())
            .max(0) as u64;
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        let trigger_id = request.id;
        let payload = request.payload.encode();
        let sender = self.sender.clone();
        let pending = Arc::clone(&self.pending);

        // The lock is held until the trigger is registered so that a task
        // firing immediately always finds its own entry.
        let mut triggers = lock(&self.pending);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_millis)).await;
            {
                let mut triggers = lock(&pending);
                match triggers.get(&trigger_id) {
                    Some(t) if t.generation == generation => {
                        triggers.remove(&trigger_id);
                    }
                    // Replaced or cancelled while waking up
                    _ => return,
                }
            }
            debug!("Trigger {} fired", trigger_id);
            if sender.send(payload).await.is_err() {
                warn!(
                    "Trigger {} fired but nobody is listening for fired triggers",
                    trigger_id
                );
            }
        });

        if let Some(previous) = triggers.insert(trigger_id, PendingTrigger { generation, handle }) {
            debug!("Replacing pending trigger {}", trigger_id);
            previous.handle.abort();
        }
        Ok(())
    }

    async fn cancel_trigger(&self, trigger_id: &ID) {
        if let Some(trigger) = lock(&self.pending).remove(trigger_id) {
            trigger.handle.abort();
        }
    }
}

impl Drop for TokioTimerFacility {
    fn drop(&mut self) {
        for (_, trigger) in lock(&self.pending).drain() {
            trigger.handle.abort();
        }
    }
}
