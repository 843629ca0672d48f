use crate::error::{Error, NegativeDurationSnafu};
use snafu::ensure;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// A duration split into calendar-free units, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    pub fn from_seconds(total_seconds: u64) -> Self {
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

fn unit(amount: u64, name: &str) -> String {
    format!("{} {}{}", amount, name, if amount == 1 { "" } else { "s" })
}

/// Renders seconds as e.g. `"2 days, 3 hours and 5 minutes"`.
///
/// Zero-valued units are left out, so `0` renders as an empty string.
pub fn format_duration(total_seconds: u64) -> String {
    let parts = DurationParts::from_seconds(total_seconds);

    let phrases: Vec<String> = [
        (parts.days, "day"),
        (parts.hours, "hour"),
        (parts.minutes, "minute"),
        (parts.seconds, "second"),
    ]
    .into_iter()
    .filter(|(amount, _)| *amount > 0)
    .map(|(amount, name)| unit(amount, name))
    .collect();

    let output = match phrases.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    };

    output.trim().to_string()
}

/// Signed variant for magnitudes coming off the wire.
pub fn try_format_duration(total_seconds: i64) -> Result<String, Error> {
    ensure!(
        total_seconds >= 0,
        NegativeDurationSnafu {
            seconds: total_seconds
        }
    );

    Ok(format_duration(total_seconds.unsigned_abs()))
}
