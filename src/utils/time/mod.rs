//! Wall-clock time helpers for the time grid.
//!
//! Times travel through the layout engine as `HH:MM` strings. Grid geometry is
//! hour-relative, so everything here works in minutes since midnight.

use serde::Serialize;
use thiserror::Error;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time '{0}' is not in HH:MM form")]
    Format(String),
    #[error("hour {0} is outside 00-23")]
    Hour(u32),
    #[error("minute {0} is outside 00-59")]
    Minute(u32),
}

fn is_digits(field: &str) -> bool {
    field.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an `HH:MM` string into minutes since midnight.
///
/// The hour takes one or two digits, the minute exactly two. Signs and extra
/// leading zeros are rejected.
pub fn parse_time_minutes(time: &str) -> Result<u32, TimeParseError> {
    let format_err = || TimeParseError::Format(time.to_string());

    let (hour, minute) = time.trim().split_once(':').ok_or_else(format_err)?;
    if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
        return Err(format_err());
    }
    if !is_digits(hour) || !is_digits(minute) {
        return Err(format_err());
    }

    let hour: u32 = hour.parse().map_err(|_| format_err())?;
    let minute: u32 = minute.parse().map_err(|_| format_err())?;

    if hour > 23 {
        return Err(TimeParseError::Hour(hour));
    }
    if minute > 59 {
        return Err(TimeParseError::Minute(minute));
    }

    Ok(hour * MINUTES_PER_HOUR + minute)
}

/// Minutes since midnight as a float, `NaN` for anything malformed.
///
/// The layout engine never rejects an event; a bad time simply taints the
/// resulting geometry so the renderer can hide it.
pub fn time_to_minutes(time: &str) -> f64 {
    parse_time_minutes(time)
        .map(f64::from)
        .unwrap_or(f64::NAN)
}

/// Format minutes since midnight as `HH:MM`, wrapping past midnight.
pub fn minutes_to_time(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!(
        "{:02}:{:02}",
        minutes / MINUTES_PER_HOUR,
        minutes % MINUTES_PER_HOUR
    )
}

/// Marker for the top of one hour on the time grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub hour: u32,
    pub minutes: u32,
    pub label: String,
}

/// One slot per hour from `start_hour` through `end_hour` inclusive.
pub fn generate_time_slots(start_hour: u32, end_hour: u32) -> Vec<TimeSlot> {
    (start_hour..=end_hour)
        .map(|hour| {
            let minutes = hour * MINUTES_PER_HOUR;
            TimeSlot {
                hour,
                minutes,
                label: minutes_to_time(minutes),
            }
        })
        .collect()
}
