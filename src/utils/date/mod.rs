// Date utility functions
// Calendar-date arithmetic shared by the view windows and the layout engine

use chrono::{Datelike, Duration, NaiveDate};

/// True when both dates fall on the same calendar day.
pub fn is_same_calendar_day<D: Datelike>(a: &D, b: &D) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// `count` consecutive calendar dates starting at `start`.
pub fn days_in_window(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    start.iter_days().take(count).collect()
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64).rem_euclid(7);
    date - Duration::days(offset)
}

/// Whole calendar days from `start` to `end` (negative if `end` is earlier).
pub fn day_span(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_same_calendar_day_ignores_time() {
        let morning = NaiveDateTime::parse_from_str("2025-01-15 06:00", "%Y-%m-%d %H:%M").unwrap();
        let night = NaiveDateTime::parse_from_str("2025-01-15 23:30", "%Y-%m-%d %H:%M").unwrap();
        let next = NaiveDateTime::parse_from_str("2025-01-16 00:00", "%Y-%m-%d %H:%M").unwrap();

        assert!(is_same_calendar_day(&morning, &night));
        assert!(!is_same_calendar_day(&night, &next));
    }

    #[test]
    fn test_is_same_calendar_day_different_year() {
        assert!(!is_same_calendar_day(&ymd(2024, 3, 1), &ymd(2025, 3, 1)));
    }

    #[test]
    fn test_days_in_window_crosses_month() {
        let days = days_in_window(ymd(2025, 1, 30), 4);
        assert_eq!(
            days,
            vec![ymd(2025, 1, 30), ymd(2025, 1, 31), ymd(2025, 2, 1), ymd(2025, 2, 2)]
        );
    }

    #[test]
    fn test_days_in_window_zero() {
        assert!(days_in_window(ymd(2025, 1, 1), 0).is_empty());
    }

    #[test]
    fn test_week_start_sunday() {
        // Wednesday, Dec 4, 2024
        assert_eq!(week_start(ymd(2024, 12, 4), 0), ymd(2024, 12, 1));
    }

    #[test]
    fn test_week_start_monday() {
        assert_eq!(week_start(ymd(2024, 12, 4), 1), ymd(2024, 12, 2));
    }

    #[test]
    fn test_week_start_on_first_day() {
        assert_eq!(week_start(ymd(2024, 12, 2), 1), ymd(2024, 12, 2));
    }

    #[test]
    fn test_day_span() {
        assert_eq!(day_span(ymd(2025, 1, 1), ymd(2025, 1, 1)), 0);
        assert_eq!(day_span(ymd(2025, 1, 31), ymd(2025, 2, 2)), 2);
        assert_eq!(day_span(ymd(2025, 1, 2), ymd(2025, 1, 1)), -1);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_start(ymd(2024, 2, 17)), ymd(2024, 2, 1));
        assert_eq!(month_end(ymd(2024, 2, 17)), ymd(2024, 2, 29));
        assert_eq!(month_end(ymd(2025, 12, 5)), ymd(2025, 12, 31));
    }
}
