// UI models module
// View types whose visible window the layout engine works over

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewType {
    Day,
    WorkWeek,
    #[default]
    Week,
    /// Custom N-day view; the day count comes from settings or the caller.
    Days,
    Month,
}

impl ViewType {
    /// Whether the view renders a vertical time grid.
    pub fn has_time_grid(self) -> bool {
        !matches!(self, ViewType::Month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view type '{0}' (expected day, work-week, week, days or month)")]
pub struct UnknownViewType(String);

impl FromStr for ViewType {
    type Err = UnknownViewType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "day" => Ok(ViewType::Day),
            "workweek" => Ok(ViewType::WorkWeek),
            "week" => Ok(ViewType::Week),
            "days" => Ok(ViewType::Days),
            "month" => Ok(ViewType::Month),
            _ => Err(UnknownViewType(s.to_string())),
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewType::Day => "Day",
            ViewType::WorkWeek => "WorkWeek",
            ViewType::Week => "Week",
            ViewType::Days => "Days",
            ViewType::Month => "Month",
        };
        f.write_str(name)
    }
}
