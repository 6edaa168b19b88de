//! Split events into time-grid (single-day) and banner (multi-day) sets.

use chrono::NaiveDate;

use super::multi_day_rows::is_visible_in_window;
use crate::models::event::Event;

/// Events with a day span of at most this many days stay on the time grid.
pub const SINGLE_DAY_MAX_SPAN: i64 = 1;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification<'a> {
    pub single_day: Vec<&'a Event>,
    pub multi_day: Vec<&'a Event>,
}

/// True if the event is laid out on the time grid rather than as a banner.
///
/// An overnight event ending the next day still counts as single-day.
pub fn is_single_day(event: &Event) -> bool {
    event.day_span() <= SINGLE_DAY_MAX_SPAN
}

/// Partition `events`, keeping only multi-day events visible in the window.
/// Single-day events are not window-filtered here; bucketing drops them.
pub fn classify<'a, I>(events: I, window_days: &[NaiveDate]) -> Classification<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut classification = Classification::default();

    for event in events {
        if is_single_day(event) {
            classification.single_day.push(event);
        } else if is_visible_in_window(event, window_days) {
            classification.multi_day.push(event);
        }
    }

    classification
}
