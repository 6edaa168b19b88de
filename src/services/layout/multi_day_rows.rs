//! Banner rows for events spanning several days of the window.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::layout::MultiDayEventRow;

/// True if any part of `event` falls inside the window.
pub fn is_visible_in_window(event: &Event, window_days: &[NaiveDate]) -> bool {
    let (Some(&first), Some(&last)) = (window_days.first(), window_days.last()) else {
        return false;
    };

    let starts_inside = event.start_date >= first && event.start_date <= last;
    let ends_inside = event.end_date >= first && event.end_date <= last;
    let spans_window = event.start_date < first && event.end_date > last;

    starts_inside || ends_inside || spans_window
}

/// Clip each visible event to the window and stack it in the first row where
/// its day span does not collide with anything already placed.
///
/// Events are placed in input order; there is no sorting by length or start.
pub fn layout_multi_day_rows<'a, I>(
    events: I,
    window_days: &[NaiveDate],
) -> Vec<MultiDayEventRow<'a>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let Some(last_index) = window_days.len().checked_sub(1) else {
        return Vec::new();
    };

    let mut rows: Vec<Vec<(usize, usize)>> = Vec::new();
    let mut placed = Vec::new();

    for event in events {
        if !is_visible_in_window(event, window_days) {
            log::trace!("multi-day event {} is outside the window", event.id);
            continue;
        }

        let start_index = window_days
            .iter()
            .position(|day| *day == event.start_date)
            .unwrap_or(0);
        let end_index = window_days
            .iter()
            .position(|day| *day == event.end_date)
            .unwrap_or(last_index);

        let free_row = rows.iter().position(|spans| {
            spans
                .iter()
                .all(|&(start, end)| end_index < start || start_index > end)
        });
        let row = match free_row {
            Some(index) => index,
            None => {
                rows.push(Vec::new());
                rows.len() - 1
            }
        };
        rows[row].push((start_index, end_index));

        placed.push(MultiDayEventRow {
            event,
            start_index,
            end_index,
            row,
        });
    }

    log::debug!(
        "placed {} multi-day events in {} rows over {} days",
        placed.len(),
        rows.len(),
        window_days.len()
    );

    placed
}
