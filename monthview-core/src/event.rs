//! Source-neutral calendar event type.
//!
//! Whatever fetches events (files, an API layer, a database) converts them
//! into these values; the layout core works exclusively with them and never
//! interprets the display metadata it passes through.

use std::path::Path;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{MonthViewError, MonthViewResult};

/// A calendar event as supplied by the caller's data layer.
///
/// `start`/`end` are absolute instants describing an inclusive range; the
/// bucketer assumes `start <= end` but skips events violating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,

    /// Whole-day event with no meaningful time-of-day component
    #[serde(default)]
    pub all_day: bool,

    // Display metadata (opaque pass-through for the renderer)
    /// Accent color of the owning association/collective, if any
    #[serde(default)]
    pub color: Option<String>,
    /// Logo of the owning association/collective, if any
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Parse a JSON array of events.
pub fn events_from_json(content: &str) -> MonthViewResult<Vec<CalEvent>> {
    serde_json::from_str(content).map_err(|e| MonthViewError::Serialization(e.to_string()))
}

/// Load events from a file: `.ics` documents, anything else a JSON array.
///
/// `tz` interprets DATE values and floating times in ICS input.
pub fn events_from_file(path: &Path, tz: Tz) -> MonthViewResult<Vec<CalEvent>> {
    let content = std::fs::read_to_string(path)?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("ics") => crate::ics::parse_events(&content, tz),
        _ => events_from_json(&content),
    }
}
