use super::{ITimerFacility, TriggerError};
use lecture_reminder_domain::{TriggerRequest, ID};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keeps pending triggers in memory without ever firing them on its own.
/// Call `take_due` to simulate the instant of some triggers arriving.
pub struct InMemoryTimerFacility {
    triggers: Mutex<HashMap<ID, TriggerRequest>>,
    exact_alarms_permitted: AtomicBool,
}

impl InMemoryTimerFacility {
    pub fn new() -> Self {
        Self {
            triggers: Mutex::new(HashMap::new()),
            exact_alarms_permitted: AtomicBool::new(true),
        }
    }

    /// Simulates the user granting or revoking the exact alarm permission
    pub fn set_exact_alarms_permitted(&self, permitted: bool) {
        self.exact_alarms_permitted.store(permitted, Ordering::SeqCst);
    }

    pub fn pending(&self) -> Vec<TriggerRequest> {
        let mut pending = self.lock().values().cloned().collect::<Vec<_>>();
        pending.sort_by_key(|t| t.when);
        pending
    }

    pub fn pending_trigger(&self, trigger_id: &ID) -> Option<TriggerRequest> {
        self.lock().get(trigger_id).cloned()
    }

    /// Removes every trigger due at `now` and returns their encoded
    /// payloads, earliest first
    pub fn take_due(&self, now: i64) -> Vec<String> {
        let mut triggers = self.lock();
        let due_ids = triggers
            .values()
            .filter(|t| t.when <= now)
            .map(|t| t.id)
            .collect::<Vec<_>>();
        let mut due = due_ids
            .iter()
            .filter_map(|id| triggers.remove(id))
            .collect::<Vec<_>>();
        due.sort_by_key(|t| t.when);
        due.into_iter().map(|t| t.payload.encode()).collect()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ID, TriggerRequest>> {
        self.triggers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryTimerFacility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ITimerFacility for InMemoryTimerFacility {
    async fn request_trigger(&self, request: TriggerRequest) -> Result<(), TriggerError> {
        if !self.exact_alarms_permitted.load(Ordering::SeqCst) {
            return Err(TriggerError::PermissionDenied);
        }
        self.lock().insert(request.id, request);
        Ok(())
    }

    async fn cancel_trigger(&self, trigger_id: &ID) {
        self.lock().remove(trigger_id);
    }
}
