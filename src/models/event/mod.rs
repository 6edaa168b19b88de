// Event module
// Calendar event record as handed to the layout engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::day_span;
use crate::utils::time::{parse_time_minutes, TimeParseError};

/// How a repeating event recurs. Stored for display only; occurrences are
/// never expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatingType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Reasons an event fails data-entry validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event {field} is required")]
    Missing { field: &'static str },
    #[error("Invalid {field}: {source}")]
    InvalidTime {
        field: &'static str,
        #[source]
        source: TimeParseError,
    },
    #[error("Event end date must not be before start date")]
    EndDateBeforeStart,
    #[error("Event end time must be after start time")]
    EndTimeNotAfterStart,
    #[error("Color must be in hex format (#RRGGBB or #RGB)")]
    InvalidColor,
}

/// Calendar event with date-only span and `HH:MM` wall-clock times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub is_repeating: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeating_type: Option<RepeatingType>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// No validation is performed; use [`Event::validate`] at the data-entry
    /// boundary.
    ///
    /// # Examples
    /// ```
    /// use calendar_layout::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    /// let event = Event::new("standup", "Team Standup", day, "09:00", "09:15");
    /// assert!(event.validate().is_ok());
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            location: None,
            start_date: date,
            end_date: date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            category: None,
            color: None,
            is_repeating: false,
            repeating_type: None,
        }
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }

        let start = parse_time_minutes(&self.start_time).map_err(|source| {
            EventError::InvalidTime {
                field: "start time",
                source,
            }
        })?;
        let end = parse_time_minutes(&self.end_time).map_err(|source| {
            EventError::InvalidTime {
                field: "end time",
                source,
            }
        })?;

        if self.end_date < self.start_date {
            return Err(EventError::EndDateBeforeStart);
        }
        if self.start_date == self.end_date && end <= start {
            return Err(EventError::EndTimeNotAfterStart);
        }

        if let Some(ref color) = self.color {
            let hex = color.strip_prefix('#').ok_or(EventError::InvalidColor)?;
            if !matches!(hex.len(), 3 | 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(EventError::InvalidColor);
            }
        }

        Ok(())
    }

    /// Calendar days between start and end date.
    pub fn day_span(&self) -> i64 {
        day_span(self.start_date, self.end_date)
    }

    /// Check if this is a repeating event
    pub fn is_recurring(&self) -> bool {
        self.is_repeating
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    start_time: Option<String>,
    end_time: Option<String>,
    category: Option<String>,
    color: Option<String>,
    repeating_type: Option<RepeatingType>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the start date and time
    pub fn start(mut self, date: NaiveDate, time: impl Into<String>) -> Self {
        self.start_date = Some(date);
        self.start_time = Some(time.into());
        self
    }

    /// Set the end date and time
    pub fn end(mut self, date: NaiveDate, time: impl Into<String>) -> Self {
        self.end_date = Some(date);
        self.end_time = Some(time.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Mark the event as repeating
    pub fn repeating(mut self, repeating_type: RepeatingType) -> Self {
        self.repeating_type = Some(repeating_type);
        self
    }

    /// Build the event. Only presence of the required fields is checked.
    pub fn build(self) -> Result<Event, EventError> {
        let id = self.id.ok_or(EventError::Missing { field: "id" })?;
        let start_date = self.start_date.ok_or(EventError::Missing { field: "start" })?;
        let start_time = self.start_time.ok_or(EventError::Missing { field: "start" })?;
        let end_date = self.end_date.ok_or(EventError::Missing { field: "end" })?;
        let end_time = self.end_time.ok_or(EventError::Missing { field: "end" })?;

        Ok(Event {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description,
            location: self.location,
            start_date,
            end_date,
            start_time,
            end_time,
            category: self.category,
            color: self.color,
            is_repeating: self.repeating_type.is_some(),
            repeating_type: self.repeating_type,
        })
    }
}
