use super::subscribers::PresentNotificationOnFire;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use lecture_reminder_domain::{NotificationRequest, Reminder, TriggerPayload, ID};
use lecture_reminder_infra::ReminderContext;
use tracing::{info, warn};

/// Invoked when a trigger fires. Resolves which `Reminder` fired, marks it
/// as fired and produces the notification for it.
///
/// The payload comes from the timer facility and is not trusted. Whatever
/// it contains, a notification is produced: a missed notification is worse
/// than an imprecise one.
#[derive(Debug)]
pub struct DispatchReminderUseCase {
    pub payload: String,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[derive(Debug)]
pub struct DispatchedReminder {
    pub notification: NotificationRequest,
    /// The fired reminder, `None` if it could not be resolved
    pub reminder: Option<Reminder>,
    /// `false` when the reminder was already fired or cancelled, so that a
    /// repeated fire does not notify the user twice
    pub deliver: bool,
}

impl DispatchedReminder {
    fn unresolved(notification: NotificationRequest) -> Self {
        Self {
            notification,
            reminder: None,
            deliver: true,
        }
    }
}

/// The newest pending reminder sharing the trigger identity, as that is the
/// one whose trigger replaced the others. Without a pending one the newest
/// reminder of the trigger, so that a repeated fire is recognised.
async fn newest_of_trigger(subject: &str, ctx: &ReminderContext) -> Option<ID> {
    let trigger_id = Reminder::derive_trigger_id(subject);
    let reminders = ctx.repos.reminders.find_by_trigger(&trigger_id).await;
    reminders
        .iter()
        .rev()
        .find(|r| r.is_pending())
        .or_else(|| reminders.last())
        .map(|r| r.id)
}

/// Exact match on subject and instant first, otherwise `newest_of_trigger`
async fn resolve_reminder(payload: &TriggerPayload, ctx: &ReminderContext) -> Option<ID> {
    let exact_id = Reminder::derive_id(&payload.subject, payload.scheduled_at);
    if ctx.repos.reminders.find(&exact_id).await.is_some() {
        return Some(exact_id);
    }
    newest_of_trigger(&payload.subject, ctx).await
}

#[async_trait::async_trait]
impl UseCase for DispatchReminderUseCase {
    type Response = DispatchedReminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DispatchReminder";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        let (subject, reminder_id) = match TriggerPayload::decode(&self.payload) {
            Ok(payload) => {
                let reminder_id = resolve_reminder(&payload, ctx).await;
                (payload.subject, reminder_id)
            }
            // A bare subject is what a plain alarm carries
            Err(_) if !self.payload.trim().is_empty() => {
                info!(
                    "Fired trigger payload is not structured, treating it as the subject: {}",
                    self.payload
                );
                let reminder_id = newest_of_trigger(&self.payload, ctx).await;
                (self.payload.clone(), reminder_id)
            }
            Err(e) => {
                warn!("Unable to decode fired trigger payload. Err: {:?}", e);
                return Ok(DispatchedReminder::unresolved(
                    NotificationRequest::fallback(),
                ));
            }
        };

        let change = match reminder_id {
            Some(reminder_id) => ctx.repos.reminders.mark_fired(&reminder_id).await,
            None => None,
        };
        let change = match change {
            Some(change) => change,
            None => {
                warn!(
                    "No reminder found for fired trigger with subject: {}, notifying from the payload",
                    subject
                );
                return Ok(DispatchedReminder::unresolved(
                    NotificationRequest::for_subject(&subject),
                ));
            }
        };

        if !change.changed {
            info!(
                "Reminder {} is already {:?}, ignoring repeated fire",
                change.reminder.id, change.reminder.status
            );
        }

        Ok(DispatchedReminder {
            notification: NotificationRequest::for_subject(&change.reminder.subject),
            reminder: Some(change.reminder),
            deliver: change.changed,
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(PresentNotificationOnFire)]
    }
}

/// Runs the dispatch for one fired trigger. It never fails.
pub async fn on_fire(payload: String, ctx: &ReminderContext) -> NotificationRequest {
    match execute(DispatchReminderUseCase { payload }, ctx).await {
        Ok(res) => res.notification,
        Err(e) => match e {},
    }
}
