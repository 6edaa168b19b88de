//! Load events handed over by the persistence layer as a JSON document.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::event::{Event, EventError};

/// Parse a JSON array of events.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    serde_json::from_str(json).context("Failed to parse events JSON")
}

/// Read and parse an events file.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events = parse_events(&contents)
        .with_context(|| format!("Invalid events file {}", path.display()))?;

    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Validation failures keyed by event id. The events themselves are left
/// untouched; layout handles malformed records on its own.
pub fn validation_report(events: &[Event]) -> Vec<(&str, EventError)> {
    events
        .iter()
        .filter_map(|event| event.validate().err().map(|err| (event.id.as_str(), err)))
        .collect()
}
