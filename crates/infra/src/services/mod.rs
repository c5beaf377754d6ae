mod notification;
mod timer;

pub use notification::{INotificationFacility, InMemoryNotifier, LogNotifier};
pub use timer::{ITimerFacility, InMemoryTimerFacility, TokioTimerFacility, TriggerError};
