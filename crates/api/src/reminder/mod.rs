pub mod add_reminder;
pub mod cancel_reminder;
pub mod dispatch_reminder;
pub mod list_reminders;
pub mod schedule_reminder;
mod subscribers;
