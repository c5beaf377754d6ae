mod notification;
mod reminder;
mod shared;
mod trigger;

pub use notification::NotificationRequest;
pub use reminder::{InvalidReminderError, Reminder, ReminderStatus};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use trigger::{TriggerPayload, TriggerRequest};
