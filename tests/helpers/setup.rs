use lecture_reminder_api::Application;
use lecture_reminder_infra::{
    InMemoryNotifier, InMemoryTimerFacility, RealSys, ReminderContext, TokioTimerFacility,
};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct TestApp {
    pub app: Application,
    pub timer: Arc<InMemoryTimerFacility>,
    pub notifier: Arc<InMemoryNotifier>,
    /// Kept alive so that the fire listener keeps running
    _fired: mpsc::Sender<String>,
}

// Launch the application with a timer that only fires when told to
pub fn spawn_app() -> TestApp {
    let timer = Arc::new(InMemoryTimerFacility::new());
    let notifier = Arc::new(InMemoryNotifier::new());
    let ctx = ReminderContext {
        timer: timer.clone(),
        notifier: notifier.clone(),
        ..ReminderContext::create_inmemory()
    };
    let (tx, rx) = mpsc::channel(8);

    TestApp {
        app: Application::new(ctx, rx),
        timer,
        notifier,
        _fired: tx,
    }
}

// Launch the application with a timer that fires on the tokio runtime
pub fn spawn_app_with_real_timer() -> (Application, Arc<InMemoryNotifier>) {
    let notifier = Arc::new(InMemoryNotifier::new());
    let (timer, fired) = TokioTimerFacility::new(Arc::new(RealSys {}), true, 8);
    let ctx = ReminderContext {
        timer: Arc::new(timer),
        notifier: notifier.clone(),
        ..ReminderContext::create_inmemory()
    };
    (Application::new(ctx, fired), notifier)
}
