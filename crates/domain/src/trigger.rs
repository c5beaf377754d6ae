use crate::{reminder::Reminder, shared::entity::ID};
use serde::{Deserialize, Serialize};

/// Data carried by a trigger through the timer facility and handed back
/// when it fires. The facility is an external actor, so whatever comes back
/// has to be decoded before it can be trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerPayload {
    pub subject: String,
    pub scheduled_at: i64,
}

impl TriggerPayload {
    pub fn encode(&self) -> String {
        // Only plain strings and integers, serialization can not fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl From<&Reminder> for TriggerPayload {
    fn from(reminder: &Reminder) -> Self {
        Self {
            subject: reminder.subject.clone(),
            scheduled_at: reminder.scheduled_at,
        }
    }
}

/// A request for a one-shot wake-up at `when`
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerRequest {
    pub id: ID,
    /// Timestamp in millis
    pub when: i64,
    pub payload: TriggerPayload,
    /// Fire at the precise instant instead of an inexact window
    pub exact: bool,
    /// Fire even while the device is idle or suspended
    pub wake_from_idle: bool,
}

impl TriggerRequest {
    pub fn exact_wakeup(reminder: &Reminder) -> Self {
        Self {
            id: reminder.trigger_id,
            when: reminder.scheduled_at,
            payload: TriggerPayload::from(reminder),
            exact: true,
            wake_from_idle: true,
        }
    }
}
