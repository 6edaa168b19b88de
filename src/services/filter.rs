//! Category filtering applied before layout.

use crate::models::event::Event;

/// Filter events by category if a filter is active.
/// Returns only events whose category matches the filter.
/// If filter is None, all events pass through.
pub fn filter_events_by_category<'a, I>(events: I, filter: Option<&str>) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    match filter {
        None => events.into_iter().collect(),
        Some(category) => events
            .into_iter()
            .filter(|e| e.category.as_deref() == Some(category))
            .collect(),
    }
}
