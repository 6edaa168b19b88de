// Layout module
// Placement records produced by the layout engine. Recomputed on every call.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::event::Event;

/// Position of a single-day event on the time grid.
///
/// `top` and `height` are in the caller's vertical units (one `hour_height`
/// per hour); `column / total_columns` gives the horizontal fraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPosition {
    pub id: String,
    pub top: f64,
    pub height: f64,
    pub column: usize,
    pub total_columns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_index: Option<usize>,
}

impl EventPosition {
    /// Width of this event as a fraction of the day column.
    pub fn width_fraction(&self) -> f64 {
        if self.total_columns == 0 {
            return 0.0;
        }
        1.0 / self.total_columns as f64
    }

    /// Left edge as a fraction of the day column.
    pub fn left_fraction(&self) -> f64 {
        self.column as f64 * self.width_fraction()
    }

    /// True when the geometry came from a malformed time string.
    pub fn is_degenerate(&self) -> bool {
        !self.top.is_finite() || !self.height.is_finite() || self.height <= 0.0
    }
}

/// Banner placement for an event spanning several days of the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiDayEventRow<'a> {
    pub event: &'a Event,
    pub start_index: usize,
    pub end_index: usize,
    pub row: usize,
}

impl MultiDayEventRow<'_> {
    /// Number of window days the banner covers. An inverted record (end date
    /// before start date) counts as one day.
    pub fn span_days(&self) -> usize {
        self.end_index.saturating_sub(self.start_index) + 1
    }
}

/// Full layout of a time-grid window (day, week or N-day view).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowLayout<'a> {
    pub days: Vec<NaiveDate>,
    pub day_positions: Vec<BTreeMap<String, EventPosition>>,
    pub banners: Vec<MultiDayEventRow<'a>>,
}

impl WindowLayout<'_> {
    /// Number of banner rows needed above the time grid.
    pub fn banner_rows(&self) -> usize {
        self.banners.iter().map(|b| b.row + 1).max().unwrap_or(0)
    }
}

/// One 7-day row of a month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekLayout<'a> {
    pub days: Vec<NaiveDate>,
    pub day_events: Vec<Vec<&'a Event>>,
    pub banners: Vec<MultiDayEventRow<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLayout<'a> {
    pub weeks: Vec<WeekLayout<'a>>,
}
