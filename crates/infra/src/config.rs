use chrono_tz::Tz;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Whether the timer facility is allowed to schedule exact alarms.
    /// When it is not, scheduling a `Reminder` fails with a recoverable
    /// permission error and the user has to grant the permission first.
    pub exact_alarms_permitted: bool,
    /// Capacity of the channel that fired triggers are delivered on
    pub fire_queue_size: usize,
    /// Timezone used to turn a picked date and time into an instant
    pub timezone: Tz,
}

impl Config {
    pub fn new() -> Self {
        let default_exact_alarms_permitted = true;
        let exact_alarms_permitted = match std::env::var("EXACT_ALARMS_PERMITTED") {
            Ok(value) => match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    warn!(
                        "The given EXACT_ALARMS_PERMITTED: {} is not valid, falling back to the default: {}.",
                        value, default_exact_alarms_permitted
                    );
                    default_exact_alarms_permitted
                }
            },
            Err(_) => default_exact_alarms_permitted,
        };

        let default_fire_queue_size = 64;
        let fire_queue_size = match std::env::var("FIRE_QUEUE_SIZE") {
            Ok(size) => match size.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    warn!(
                        "The given FIRE_QUEUE_SIZE: {} is not valid, falling back to the default: {}.",
                        size, default_fire_queue_size
                    );
                    default_fire_queue_size
                }
            },
            Err(_) => default_fire_queue_size,
        };

        let timezone = match std::env::var("REMINDER_TIMEZONE") {
            Ok(tzid) => match tzid.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given REMINDER_TIMEZONE: {} is not a valid IANA timezone, falling back to UTC.",
                        tzid
                    );
                    Tz::UTC
                }
            },
            Err(_) => Tz::UTC,
        };

        Self {
            exact_alarms_permitted,
            fire_queue_size,
            timezone,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
