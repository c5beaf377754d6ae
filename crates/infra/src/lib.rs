mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IReminderRepo, InMemoryReminderRepo, Repos, StatusChange};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys};
use tokio::sync::mpsc;

/// Everything the use cases need. It is created once and handed to every
/// collaborator explicitly.
#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub timer: Arc<dyn ITimerFacility>,
    pub notifier: Arc<dyn INotificationFacility>,
}

impl ReminderContext {
    /// Context where nothing fires on its own, used for testing
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            timer: Arc::new(InMemoryTimerFacility::new()),
            notifier: Arc::new(InMemoryNotifier::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment.
/// Fired triggers are delivered as encoded payloads on the returned receiver.
pub fn setup_context() -> (ReminderContext, mpsc::Receiver<String>) {
    let config = Config::new();
    let sys: Arc<dyn ISys> = Arc::new(RealSys {});
    let (timer, fired) = TokioTimerFacility::new(
        Arc::clone(&sys),
        config.exact_alarms_permitted,
        config.fire_queue_size,
    );

    let ctx = ReminderContext {
        repos: Repos::create_inmemory(),
        config,
        sys,
        timer: Arc::new(timer),
        notifier: Arc::new(LogNotifier {}),
    };
    (ctx, fired)
}
