//! Event file loading (.json arrays or .ics documents).

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use monthview_core::CalEvent;
use monthview_core::event::events_from_file;

/// Load and concatenate all event files, preserving file order.
pub fn load_events(paths: &[PathBuf], tz: Tz) -> Result<Vec<CalEvent>> {
    let mut events = Vec::new();
    for path in paths {
        events.extend(
            events_from_file(path, tz)
                .with_context(|| format!("Failed to load {}", path.display()))?,
        );
    }
    Ok(events)
}
