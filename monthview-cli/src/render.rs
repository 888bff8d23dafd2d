//! Terminal rendering of the assembled month view.
//!
//! Turns a [`MonthView`] into a fixed-width grid: a bold title, the weekday
//! label row, then six week blocks of day numbers with event titles beneath.
//! Overflow days render dimmed; today's day number renders bold.

use chrono::{Datelike, NaiveDate};
use monthview_core::MonthView;
use owo_colors::OwoColorize;

/// Characters per grid column.
const CELL_WIDTH: usize = 14;

/// Render the full month grid.
pub fn render_grid(view: &MonthView, today: NaiveDate, max_per_day: usize) -> String {
    let mut lines = Vec::new();

    lines.push(view.title.bold().to_string());
    lines.push(label_row(view));

    for week in view.days.chunks(7) {
        lines.push(String::new());
        lines.push(day_number_row(view, week, today));

        for slot in 0..max_per_day {
            if let Some(row) = event_title_row(view, week, slot) {
                lines.push(row);
            }
        }
        if let Some(row) = overflow_row(view, week, max_per_day) {
            lines.push(row);
        }
    }

    lines.join("\n")
}

fn label_row(view: &MonthView) -> String {
    view.labels
        .iter()
        .map(|label| pad(label).dimmed().to_string())
        .collect()
}

fn day_number_row(view: &MonthView, week: &[NaiveDate], today: NaiveDate) -> String {
    week.iter()
        .map(|day| {
            let cell = pad(&day.day().to_string());
            if *day == today {
                cell.bold().to_string()
            } else if view.is_overflow(*day) {
                cell.dimmed().to_string()
            } else {
                cell
            }
        })
        .collect()
}

/// One row of event titles (the `slot`-th event of each day), or None if no
/// day in the week has that many events.
fn event_title_row(view: &MonthView, week: &[NaiveDate], slot: usize) -> Option<String> {
    let mut any = false;
    let row: String = week
        .iter()
        .map(|day| match view.events_on(*day).get(slot) {
            Some(event) => {
                any = true;
                pad(&truncate(&event.title, CELL_WIDTH - 2))
            }
            None => pad(""),
        })
        .collect();

    any.then_some(row)
}

/// The `+N more` indicator row for days whose bucket exceeds the visible cap.
fn overflow_row(view: &MonthView, week: &[NaiveDate], max_per_day: usize) -> Option<String> {
    let mut any = false;
    let row: String = week
        .iter()
        .map(|day| {
            let hidden = view.events_on(*day).len().saturating_sub(max_per_day);
            if hidden > 0 {
                any = true;
                pad(&format!("+{} more", hidden)).dimmed().to_string()
            } else {
                pad("")
            }
        })
        .collect();

    any.then_some(row)
}

fn pad(s: &str) -> String {
    format!("{:<width$}", s, width = CELL_WIDTH)
}

fn truncate(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        title.to_string()
    } else {
        let cut: String = title.chars().take(max.saturating_sub(1)).collect();
        format!("{}~", cut)
    }
}
