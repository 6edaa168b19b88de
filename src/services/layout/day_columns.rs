//! Greedy column packing for events on one day of the time grid.

use std::collections::BTreeMap;

use crate::models::event::Event;
use crate::models::layout::EventPosition;
use crate::utils::time::{time_to_minutes, MINUTES_PER_HOUR};

struct Placed<'a> {
    event: &'a Event,
    start: f64,
    end: f64,
}

/// Lay out one day's events into side-by-side columns.
///
/// Events are taken in start order (stable, so equal starts keep input order;
/// malformed times sort last) and each goes into the first column whose last
/// end is at or before its start. Every position carries the day's final
/// column count, not the count of its own overlap cluster.
pub fn layout_day<'a, I>(events: I, hour_height: f64) -> BTreeMap<String, EventPosition>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut placed: Vec<Placed<'a>> = events
        .into_iter()
        .map(|event| Placed {
            event,
            start: time_to_minutes(&event.start_time),
            end: time_to_minutes(&event.end_time),
        })
        .collect();

    placed.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut column_ends: Vec<f64> = Vec::new();
    let mut positions = BTreeMap::new();
    let hour = f64::from(MINUTES_PER_HOUR);

    for item in &placed {
        // NaN never satisfies the comparison, so a malformed event opens a
        // column of its own and nothing can join it afterwards.
        let column = match column_ends.iter().position(|&end| item.start >= end) {
            Some(index) => {
                column_ends[index] = item.end;
                index
            }
            None => {
                column_ends.push(item.end);
                column_ends.len() - 1
            }
        };

        log::trace!(
            "event {} ({}-{}) -> column {}",
            item.event.id,
            item.event.start_time,
            item.event.end_time,
            column
        );

        positions.insert(
            item.event.id.clone(),
            EventPosition {
                id: item.event.id.clone(),
                top: item.start / hour * hour_height,
                height: (item.end - item.start) / hour * hour_height,
                column,
                total_columns: 0,
                day_index: None,
            },
        );
    }

    let total_columns = column_ends.len();
    for position in positions.values_mut() {
        position.total_columns = total_columns;
    }

    positions
}
