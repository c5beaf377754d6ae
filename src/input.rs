use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use lecture_reminder_domain::ID;
use thiserror::Error;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One line of user input, already turned into values the core understands
#[derive(Debug, PartialEq)]
pub enum Command {
    Add { subject: String, scheduled_at: i64 },
    Schedule(ID),
    Cancel(ID),
    List,
    Help,
}

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Nothing to do")]
    Empty,
    #[error("Unknown command: `{0}`, type `help` to see what is available")]
    UnknownCommand(String),
    #[error("Missing date and time, expected: add <subject> @ YYYY-MM-DD HH:MM")]
    MissingTime,
    #[error("Invalid date and time: `{0}`, expected: YYYY-MM-DD HH:MM")]
    InvalidTime(String),
    #[error("The time `{0}` does not exist in the configured timezone")]
    NonexistentLocalTime(String),
    #[error("Invalid reminder id: `{0}`")]
    InvalidId(String),
}

pub const HELP: &str = "\
add <subject> @ YYYY-MM-DD HH:MM   add a lecture reminder
schedule <id>                      schedule a reminder again, e.g. after granting the exact alarm permission
cancel <id>                        cancel a pending reminder
list                               list all lecture reminders";

/// Collects the subject and the instant in one step. The picked date and
/// time are interpreted in `timezone` with the seconds set to zero.
pub fn parse_command(line: &str, timezone: &Tz) -> Result<Command, InputError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => Err(InputError::Empty),
        "list" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "add" => {
            let (subject, date_time) = rest.rsplit_once('@').ok_or(InputError::MissingTime)?;
            Ok(Command::Add {
                subject: subject.trim().to_string(),
                scheduled_at: parse_instant(date_time.trim(), timezone)?,
            })
        }
        "schedule" => parse_id(rest).map(Command::Schedule),
        "cancel" => parse_id(rest).map(Command::Cancel),
        other => Err(InputError::UnknownCommand(other.to_string())),
    }
}

fn parse_instant(date_time: &str, timezone: &Tz) -> Result<i64, InputError> {
    if date_time.is_empty() {
        return Err(InputError::MissingTime);
    }
    let naive = NaiveDateTime::parse_from_str(date_time, DATE_TIME_FORMAT)
        .map_err(|_| InputError::InvalidTime(date_time.to_string()))?;
    // Ambiguous times at the end of daylight saving resolve to the first one
    timezone
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| InputError::NonexistentLocalTime(date_time.to_string()))
}

fn parse_id(id: &str) -> Result<ID, InputError> {
    id.parse::<ID>()
        .map_err(|_| InputError::InvalidId(id.to_string()))
}

/// Renders a timestamp in millis as a date and time in `timezone`
pub fn format_instant(millis: i64, timezone: &Tz) -> String {
    match timezone.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format(DATE_TIME_FORMAT).to_string(),
        None => millis.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_add_command() {
        let cmd = parse_command("add Algorithms @ 2026-10-19 14:30", &Tz::UTC).unwrap();
        let expected = Utc
            .with_ymd_and_hms(2026, 10, 19, 14, 30, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(
            cmd,
            Command::Add {
                subject: "Algorithms".into(),
                scheduled_at: expected
            }
        );
    }

    #[test]
    fn subject_may_contain_spaces_and_at_signs() {
        let cmd = parse_command("add Math @ home @ 2026-10-19 08:00", &Tz::UTC).unwrap();
        match cmd {
            Command::Add { subject, .. } => assert_eq!(subject, "Math @ home"),
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn empty_subject_is_left_for_the_core_to_reject() {
        let cmd = parse_command("add @ 2026-10-19 08:00", &Tz::UTC).unwrap();
        assert!(matches!(cmd, Command::Add { subject, .. } if subject.is_empty()));
    }

    #[test]
    fn interprets_time_in_timezone() {
        let oslo = chrono_tz::Europe::Oslo;
        let cmd = parse_command("add Physics @ 2026-01-10 09:00", &oslo).unwrap();
        let expected = Utc
            .with_ymd_and_hms(2026, 1, 10, 8, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert!(matches!(cmd, Command::Add { scheduled_at, .. } if scheduled_at == expected));
    }

    #[test]
    fn rejects_bad_times() {
        assert_eq!(
            parse_command("add Physics", &Tz::UTC),
            Err(InputError::MissingTime)
        );
        assert_eq!(
            parse_command("add Physics @ ", &Tz::UTC),
            Err(InputError::MissingTime)
        );
        assert_eq!(
            parse_command("add Physics @ tomorrow", &Tz::UTC),
            Err(InputError::InvalidTime("tomorrow".into()))
        );
        // Clocks jump from 02:00 to 03:00 in Oslo on this date
        assert_eq!(
            parse_command("add Physics @ 2026-03-29 02:30", &chrono_tz::Europe::Oslo),
            Err(InputError::NonexistentLocalTime("2026-03-29 02:30".into()))
        );
    }

    #[test]
    fn parses_other_commands() {
        let id = ID::from_name("x");
        assert_eq!(parse_command(" list ", &Tz::UTC), Ok(Command::List));
        assert_eq!(parse_command("help", &Tz::UTC), Ok(Command::Help));
        assert_eq!(
            parse_command(&format!("cancel {}", id), &Tz::UTC),
            Ok(Command::Cancel(id))
        );
        assert_eq!(
            parse_command(&format!("schedule {}", id), &Tz::UTC),
            Ok(Command::Schedule(id))
        );
        assert_eq!(
            parse_command("cancel 42", &Tz::UTC),
            Err(InputError::InvalidId("42".into()))
        );
        assert_eq!(parse_command("   ", &Tz::UTC), Err(InputError::Empty));
        assert_eq!(
            parse_command("remove 42", &Tz::UTC),
            Err(InputError::UnknownCommand("remove".into()))
        );
    }

    #[test]
    fn formats_instant_in_timezone() {
        let millis = Utc
            .with_ymd_and_hms(2026, 1, 10, 8, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(format_instant(millis, &Tz::UTC), "2026-01-10 08:00");
        assert_eq!(
            format_instant(millis, &chrono_tz::Europe::Oslo),
            "2026-01-10 09:00"
        );
    }
}
