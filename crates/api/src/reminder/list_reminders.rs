use crate::error::ReminderError;
use crate::shared::usecase::UseCase;
use lecture_reminder_domain::Reminder;
use lecture_reminder_infra::ReminderContext;

/// All `Reminder`s of the session in the order they were added
#[derive(Debug)]
pub struct ListRemindersUseCase;

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait]
impl UseCase for ListRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListReminders";

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.reminders.all().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;

    #[tokio::test]
    async fn empty_list_is_valid() {
        let ctx = ReminderContext::create_inmemory();
        let res = execute(ListRemindersUseCase, &ctx).await.unwrap();
        assert!(res.is_empty());
    }

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let ctx = ReminderContext::create_inmemory();
        let r1 = Reminder::new("Physics", 2000).unwrap();
        let r2 = Reminder::new("Algorithms", 1000).unwrap();
        ctx.repos.reminders.upsert(&r1).await.unwrap();
        ctx.repos.reminders.upsert(&r2).await.unwrap();

        let res = execute(ListRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(res, vec![r1, r2]);
    }
}
