//! Calendar event layout engine.
//!
//! Pure functions from `(events, visible window, hour height)` to placements:
//! columns on the time grid for single-day events and banner rows for events
//! spanning several days. One engine serves every view; only the window
//! length differs. Nothing here keeps state between calls.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::layout::{EventPosition, MonthLayout, WeekLayout, WindowLayout};
use crate::utils::time::time_to_minutes;

pub mod classify;
pub mod day_columns;
pub mod multi_day_rows;
pub mod window;

pub use classify::{classify, is_single_day, Classification};
pub use day_columns::layout_day;
pub use multi_day_rows::{is_visible_in_window, layout_multi_day_rows};
pub use window::{bucket_single_day_events, month_weeks, VisibleWindow};

/// Column layout for every day of the window, tagged with `day_index`.
///
/// The result has one map per window day; days without events get an empty
/// map.
pub fn layout_days<'a, I>(
    events: I,
    window_days: &[NaiveDate],
    hour_height: f64,
) -> Vec<BTreeMap<String, EventPosition>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut buckets = bucket_single_day_events(events, window_days);

    (0..window_days.len())
        .map(|day_index| {
            let Some(day_events) = buckets.remove(&day_index) else {
                return BTreeMap::new();
            };
            let mut positions = layout_day(day_events, hour_height);
            for position in positions.values_mut() {
                position.day_index = Some(day_index);
            }
            positions
        })
        .collect()
}

/// Full layout of a time-grid window: classify, bucket and pack single-day
/// events per day, then allocate banner rows for the multi-day ones.
pub fn layout_window<'a, I>(
    events: I,
    window_days: &[NaiveDate],
    hour_height: f64,
) -> WindowLayout<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    let Classification {
        single_day,
        multi_day,
    } = classify(events, window_days);

    let day_positions = layout_days(single_day.iter().copied(), window_days, hour_height);
    let banners = layout_multi_day_rows(multi_day.iter().copied(), window_days);

    log::debug!(
        "window layout: {} days, {} timed events, {} banners",
        window_days.len(),
        day_positions.iter().map(BTreeMap::len).sum::<usize>(),
        banners.len()
    );

    WindowLayout {
        days: window_days.to_vec(),
        day_positions,
        banners,
    }
}

/// Month grid layout. Each week row gets its own banner allocation so banners
/// wrap at week boundaries; single-day events are listed per day in start
/// time order.
pub fn layout_month<'a, I>(
    events: I,
    month_date: NaiveDate,
    first_day_of_week: u8,
) -> MonthLayout<'a>
where
    I: IntoIterator<Item = &'a Event> + Clone,
{
    let weeks = month_weeks(month_date, first_day_of_week)
        .into_iter()
        .map(|days| {
            let Classification {
                single_day,
                multi_day,
            } = classify(events.clone(), &days);

            let mut buckets = bucket_single_day_events(single_day, &days);
            let day_events = (0..days.len())
                .map(|index| {
                    let mut list = buckets.remove(&index).unwrap_or_default();
                    list.sort_by(|a, b| {
                        time_to_minutes(&a.start_time).total_cmp(&time_to_minutes(&b.start_time))
                    });
                    list
                })
                .collect();

            let banners = layout_multi_day_rows(multi_day, &days);

            WeekLayout {
                days,
                day_events,
                banners,
            }
        })
        .collect();

    MonthLayout { weeks }
}
