//! Visible windows for each view type and bucketing of events into days.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::models::event::Event;
use crate::models::settings::LayoutSettings;
use crate::models::ui::ViewType;
use crate::utils::date::{days_in_window, is_same_calendar_day, month_end, month_start, week_start};

pub const DAYS_PER_WEEK: usize = 7;

/// The contiguous run of calendar days a view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleWindow {
    pub view: ViewType,
    pub days: Vec<NaiveDate>,
}

impl VisibleWindow {
    /// A window of `count` days starting at `start`.
    pub fn from_start(view: ViewType, start: NaiveDate, count: usize) -> Self {
        Self {
            view,
            days: days_in_window(start, count),
        }
    }

    /// The window `view` shows around `date`.
    ///
    /// Week views start on the configured first day of the week; the work
    /// week always starts on Monday. N-day views start on `date` itself.
    pub fn for_view(view: ViewType, date: NaiveDate, settings: &LayoutSettings) -> Self {
        match view {
            ViewType::Day => Self::from_start(view, date, 1),
            ViewType::Week => {
                Self::from_start(view, week_start(date, settings.first_day_of_week), DAYS_PER_WEEK)
            }
            ViewType::WorkWeek => {
                Self::from_start(view, week_start(date, 1), settings.work_week_days)
            }
            ViewType::Days => Self::from_start(view, date, settings.days_view_count),
            ViewType::Month => {
                let weeks = month_weeks(date, settings.first_day_of_week);
                Self {
                    view,
                    days: weeks.into_iter().flatten().collect(),
                }
            }
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.days.last().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Zero-based position of `date` in the window.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|day| *day == date)
    }
}

/// 7-day rows covering the whole month containing `date`.
pub fn month_weeks(date: NaiveDate, first_day_of_week: u8) -> Vec<Vec<NaiveDate>> {
    let last = month_end(date);
    let mut cursor = week_start(month_start(date), first_day_of_week);
    let mut weeks = Vec::new();

    while cursor <= last {
        weeks.push(days_in_window(cursor, DAYS_PER_WEEK));
        cursor += Duration::days(DAYS_PER_WEEK as i64);
    }

    weeks
}

/// Group events by the window day their start date falls on.
///
/// Each event lands in the first matching day; events starting outside the
/// window are dropped. Days with no events have no entry.
pub fn bucket_single_day_events<'a, I>(
    events: I,
    window_days: &[NaiveDate],
) -> BTreeMap<usize, Vec<&'a Event>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut buckets: BTreeMap<usize, Vec<&'a Event>> = BTreeMap::new();

    for event in events {
        if let Some(index) = window_days
            .iter()
            .position(|day| is_same_calendar_day(&event.start_date, day))
        {
            buckets.entry(index).or_default().push(event);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monday_first() -> LayoutSettings {
        LayoutSettings {
            first_day_of_week: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_day_window() {
        let settings = LayoutSettings::default();
        let window = VisibleWindow::for_view(ViewType::Day, ymd(2025, 1, 15), &settings);
        assert_eq!(window.days, vec![ymd(2025, 1, 15)]);
    }

    #[test_case(0, ymd(2025, 1, 12) ; "sunday start")]
    #[test_case(1, ymd(2025, 1, 13) ; "monday start")]
    #[test_case(6, ymd(2025, 1, 11) ; "saturday start")]
    fn test_week_window_start(first_day_of_week: u8, expected: NaiveDate) {
        let settings = LayoutSettings {
            first_day_of_week,
            ..Default::default()
        };
        // Wednesday
        let window = VisibleWindow::for_view(ViewType::Week, ymd(2025, 1, 15), &settings);
        assert_eq!(window.len(), 7);
        assert_eq!(window.first_day(), Some(expected));
    }

    #[test]
    fn test_work_week_starts_monday_regardless_of_setting() {
        // Sunday
        let settings = LayoutSettings::default();
        let window = VisibleWindow::for_view(ViewType::WorkWeek, ymd(2025, 1, 19), &settings);
        assert_eq!(window.first_day(), Some(ymd(2025, 1, 13)));
        assert_eq!(window.last_day(), Some(ymd(2025, 1, 17)));
    }

    #[test]
    fn test_days_window_starts_on_date() {
        let settings = LayoutSettings {
            days_view_count: 4,
            ..Default::default()
        };
        let window = VisibleWindow::for_view(ViewType::Days, ymd(2025, 1, 30), &settings);
        assert_eq!(
            window.days,
            vec![ymd(2025, 1, 30), ymd(2025, 1, 31), ymd(2025, 2, 1), ymd(2025, 2, 2)]
        );
        assert_eq!(window.index_of(ymd(2025, 2, 1)), Some(2));
        assert_eq!(window.index_of(ymd(2025, 2, 3)), None);
    }

    #[test]
    fn test_month_weeks_cover_month() {
        // February 2025 starts on a Saturday
        let weeks = month_weeks(ymd(2025, 2, 10), 0);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], ymd(2025, 1, 26));
        assert_eq!(weeks[0][6], ymd(2025, 2, 1));
        assert!(weeks.last().unwrap().contains(&ymd(2025, 2, 28)));
    }

    #[test]
    fn test_month_weeks_six_rows() {
        // March 2025 with Monday-first weeks needs six rows
        let weeks = month_weeks(ymd(2025, 3, 1), 1);
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[5][0], ymd(2025, 3, 31));
    }

    #[test]
    fn test_month_window_is_flattened_weeks() {
        let window = VisibleWindow::for_view(ViewType::Month, ymd(2025, 2, 10), &monday_first());
        assert_eq!(window.len() % 7, 0);
        assert_eq!(window.first_day(), Some(ymd(2025, 1, 27)));
    }

    #[test]
    fn test_bucket_single_day_events() {
        let days = days_in_window(ymd(2025, 1, 13), 3);
        let events = vec![
            Event::new("mon", "Mon", ymd(2025, 1, 13), "09:00", "10:00"),
            Event::new("wed-1", "Wed", ymd(2025, 1, 15), "09:00", "10:00"),
            Event::new("outside", "Fri", ymd(2025, 1, 17), "09:00", "10:00"),
            Event::new("wed-2", "Wed", ymd(2025, 1, 15), "08:00", "09:00"),
        ];

        let buckets = bucket_single_day_events(&events, &days);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&0].len(), 1);
        assert!(!buckets.contains_key(&1));
        let wed: Vec<&str> = buckets[&2].iter().map(|e| e.id.as_str()).collect();
        assert_eq!(wed, vec!["wed-1", "wed-2"]);
    }
}
