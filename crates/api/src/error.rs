use lecture_reminder_domain::ID;
use thiserror::Error;

/// Errors surfaced to the caller of the reminder core. None of them is
/// fatal: they are either recoverable by the caller or degrade silently.
#[derive(Error, Debug, PartialEq)]
pub enum ReminderError {
    #[error("Internal error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    InvalidInput(String),
    #[error(
        "Not permitted to schedule exact alarms. The reminder with id: {reminder_id} was stored but not scheduled, grant the permission and schedule it again."
    )]
    PermissionDenied { reminder_id: ID },
    #[error("Not found. Error message: `{0}`")]
    NotFound(String),
}
