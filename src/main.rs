mod input;
mod telemetry;

use input::{format_instant, parse_command, Command, InputError, HELP};
use lecture_reminder_api::{Application, ReminderError};
use lecture_reminder_domain::Reminder;
use lecture_reminder_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("lecture_reminder".into(), "info".into());
    init_subscriber(subscriber);

    let (context, fired) = setup_context();
    let timezone = context.config.timezone;
    let app = Application::new(context, fired);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line, &timezone) {
            Ok(command) => command,
            Err(InputError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Add {
                subject,
                scheduled_at,
            } => print_result(app.add_reminder(subject, scheduled_at).await, &timezone),
            Command::Schedule(id) => print_result(app.schedule_reminder(&id).await, &timezone),
            Command::Cancel(id) => match app.cancel_reminder(&id).await {
                Ok(Some(reminder)) => print_reminder(&reminder, &timezone),
                Ok(None) => println!("No reminder with id: {}", id),
                Err(e) => println!("{}", e),
            },
            Command::List => match app.list_reminders().await {
                Ok(reminders) if reminders.is_empty() => {
                    println!("No lectures yet!");
                    println!("Use `add <subject> @ YYYY-MM-DD HH:MM` to add your first lecture reminder.");
                }
                Ok(reminders) => reminders
                    .iter()
                    .for_each(|r| print_reminder(r, &timezone)),
                Err(e) => println!("{}", e),
            },
            Command::Help => println!("{}", HELP),
        }
    }

    info!("Input closed, waiting for pending reminders until interrupted");
    tokio::signal::ctrl_c().await?;
    app.stop();
    Ok(())
}

fn print_result(res: Result<Reminder, ReminderError>, timezone: &chrono_tz::Tz) {
    match res {
        Ok(reminder) => print_reminder(&reminder, timezone),
        Err(e) => println!("{}", e),
    }
}

fn print_reminder(reminder: &Reminder, timezone: &chrono_tz::Tz) {
    println!(
        "{}  {}  {}  {:?}",
        reminder.id,
        format_instant(reminder.scheduled_at, timezone),
        reminder.subject,
        reminder.status
    );
}
