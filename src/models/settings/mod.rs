// Settings module
// Layout configuration loaded from config.toml

use serde::{Deserialize, Serialize};

use crate::models::ui::ViewType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Vertical units per hour on the time grid.
    pub hour_height: f64,
    pub start_hour: u32,
    pub end_hour: u32,
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    pub work_week_days: usize,
    pub days_view_count: usize,
    pub default_view: ViewType,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            hour_height: 64.0,
            start_hour: 0,
            end_hour: 23,
            first_day_of_week: 0, // Sunday
            work_week_days: 5,
            days_view_count: 3,
            default_view: ViewType::Week,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !self.hour_height.is_finite() || self.hour_height <= 0.0 {
            return Err("hour_height must be a positive number".to_string());
        }
        if self.start_hour > 23 || self.end_hour > 23 {
            return Err("start_hour and end_hour must be between 0 and 23".to_string());
        }
        if self.start_hour > self.end_hour {
            return Err("start_hour must not be after end_hour".to_string());
        }
        if self.first_day_of_week > 6 {
            return Err("first_day_of_week must be between 0 (Sunday) and 6 (Saturday)".to_string());
        }
        if self.work_week_days == 0 || self.work_week_days > 7 {
            return Err("work_week_days must be between 1 and 7".to_string());
        }
        if self.days_view_count == 0 {
            return Err("days_view_count must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = LayoutSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.hour_height, 64.0);
        assert_eq!(settings.default_view, ViewType::Week);
    }

    #[test]
    fn test_validate_rejects_bad_hour_height() {
        let settings = LayoutSettings {
            hour_height: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().unwrap_err().contains("hour_height"));

        let settings = LayoutSettings {
            hour_height: f64::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_reversed_hours() {
        let settings = LayoutSettings {
            start_hour: 18,
            end_hour: 8,
            ..Default::default()
        };
        assert!(settings.validate().unwrap_err().contains("start_hour"));
    }

    #[test]
    fn test_validate_rejects_bad_first_day() {
        let settings = LayoutSettings {
            first_day_of_week: 7,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_day_counts() {
        let settings = LayoutSettings {
            days_view_count: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = LayoutSettings {
            work_week_days: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = "hour_height = 48.0\ndefault_view = \"Day\"";
        let settings: LayoutSettings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.hour_height, 48.0);
        assert_eq!(settings.default_view, ViewType::Day);
        assert_eq!(settings.end_hour, 23);
    }
}
