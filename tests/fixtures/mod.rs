// Test fixtures - reusable test data
// Provides consistent events and windows across all test files

#![allow(dead_code)]

use calendar_layout::models::event::Event;
use chrono::{Duration, NaiveDate};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Sunday, Jan 12, 2025
    pub fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()
    }

    /// Returns Monday, Jan 13, 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// `monday()` shifted by `days`
    pub fn monday_plus(days: i64) -> NaiveDate {
        monday() + Duration::days(days)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// A timed event on a single day
    pub fn timed(id: &str, date: NaiveDate, start: &str, end: &str) -> Event {
        Event::new(id, format!("Event {}", id), date, start, end)
    }

    /// An event spanning `start` through `end`
    pub fn spanning(id: &str, start: NaiveDate, end: NaiveDate) -> Event {
        Event::builder()
            .id(id)
            .title(format!("Trip {}", id))
            .start(start, "08:00")
            .end(end, "18:00")
            .build()
            .unwrap()
    }

    /// The three-event morning used by the column layout scenarios
    pub fn overlapping_morning() -> Vec<Event> {
        vec![
            timed("1", dates::monday(), "09:00", "10:00"),
            timed("2", dates::monday(), "09:30", "10:30"),
            timed("3", dates::monday(), "10:00", "11:00"),
        ]
    }

    /// A realistic week: timed meetings, an overnight shift and banners
    pub fn busy_week() -> Vec<Event> {
        let mut shift = timed("night-shift", dates::monday_plus(2), "22:00", "06:00");
        shift.end_date = dates::monday_plus(3);

        let mut events = vec![
            timed("standup-mon", dates::monday(), "09:00", "09:15"),
            timed("review", dates::monday(), "09:00", "10:30"),
            timed("lunch", dates::monday(), "12:00", "13:00"),
            timed("standup-tue", dates::monday_plus(1), "09:00", "09:15"),
            timed("dentist", dates::monday_plus(4), "15:30", "16:15"),
            shift,
            spanning("conference", dates::monday_plus(1), dates::monday_plus(3)),
            spanning("holiday", dates::monday_plus(5), dates::monday_plus(9)),
            spanning("old-trip", dates::monday_plus(-10), dates::monday_plus(-7)),
        ];
        events.push(timed("late-call", dates::monday(), "17:00", "18:00"));
        events
    }
}
