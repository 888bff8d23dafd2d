//! Assembled month view: grid, buckets, and labels in one structure.
//!
//! `MonthView::build` is the whole pipeline a renderer needs: cursor
//! resolution, grid expansion, day bucketing, and label generation. The
//! result is plain immutable data; callers iterate `days`, look up buckets,
//! and decide presentation (overflow styling, visible-item caps) themselves.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::bucket::{bucket_events_by_day, day_key};
use crate::cursor::{YearMonth, parse_cursor};
use crate::event::CalEvent;
use crate::grid::{WeekStart, build_grid};
use crate::labels::{month_title, weekday_labels};

/// Inputs for building a month view.
#[derive(Debug, Clone)]
pub struct MonthViewParams {
    /// Optional `YYYY-MM` designator; `None` or malformed input resolves to
    /// the current month in `timezone`.
    pub cursor: Option<String>,
    /// Zone used for the cursor fallback and for event bucketing.
    pub timezone: Tz,
    /// Locale tag for labels and the month title.
    pub locale: String,
    pub week_start: WeekStart,
    /// Injected clock; production callers pass `Utc::now()`.
    pub now: DateTime<Utc>,
}

/// Everything a renderer needs for one month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    pub cursor: YearMonth,
    /// Localized "Month Year" heading.
    pub title: String,
    /// Formatted cursor of the previous month (`YYYY-MM`).
    pub prev: String,
    /// Formatted cursor of the next month (`YYYY-MM`).
    pub next: String,
    /// The 42 consecutive grid days.
    pub days: Vec<NaiveDate>,
    /// Day-key to events covering that day, input order preserved.
    pub buckets: HashMap<String, Vec<CalEvent>>,
    /// Weekday labels in week-start order.
    pub labels: [String; 7],
}

impl MonthView {
    pub fn build(params: &MonthViewParams, events: &[CalEvent]) -> Self {
        let cursor = parse_cursor(params.cursor.as_deref(), params.timezone, params.now);

        MonthView {
            cursor,
            title: month_title(&params.locale, cursor),
            prev: cursor.shift(-1).to_string(),
            next: cursor.shift(1).to_string(),
            days: build_grid(cursor, params.week_start),
            buckets: bucket_events_by_day(events, params.timezone),
            labels: weekday_labels(&params.locale, params.week_start),
        }
    }

    /// Whether a grid cell falls outside the cursor month.
    pub fn is_overflow(&self, date: NaiveDate) -> bool {
        !self.cursor.contains(date)
    }

    /// Events bucketed on the given day, in input order.
    pub fn events_on(&self, date: NaiveDate) -> &[CalEvent] {
        self.buckets
            .get(&day_key(date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn params(cursor: Option<&str>) -> MonthViewParams {
        MonthViewParams {
            cursor: cursor.map(String::from),
            timezone: "Europe/Zurich".parse().unwrap(),
            locale: "en".to_string(),
            week_start: WeekStart::Monday,
            now: Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap(),
        }
    }

    fn sample_event() -> CalEvent {
        CalEvent {
            id: "ev-1".to_string(),
            title: "Repair café".to_string(),
            start: Utc.with_ymd_and_hms(2025, 2, 8, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 2, 8, 12, 0, 0).unwrap(),
            all_day: false,
            color: Some("#336699".to_string()),
            logo_url: None,
        }
    }

    #[test]
    fn test_february_2025_scenario() {
        let view = MonthView::build(&params(Some("2025-02")), &[sample_event()]);

        assert_eq!(view.cursor, YearMonth::new(2025, 2).unwrap());
        assert_eq!(view.title, "February 2025");
        assert_eq!(view.prev, "2025-01");
        assert_eq!(view.next, "2025-03");
        assert_eq!(view.days.len(), 42);
        assert_eq!(view.days[0], NaiveDate::from_ymd_opt(2025, 1, 27).unwrap());
        assert_eq!(view.days[41], NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert_eq!(view.labels[0], "Mon");

        let feb8 = NaiveDate::from_ymd_opt(2025, 2, 8).unwrap();
        assert_eq!(view.events_on(feb8).len(), 1);
        assert_eq!(view.events_on(feb8)[0].color.as_deref(), Some("#336699"));
    }

    #[test]
    fn test_overflow_tagging() {
        let view = MonthView::build(&params(Some("2025-02")), &[]);

        assert!(view.is_overflow(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
        assert!(view.is_overflow(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
        assert!(!view.is_overflow(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
        assert!(!view.is_overflow(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
    }

    #[test]
    fn test_missing_cursor_resolves_to_injected_now() {
        let view = MonthView::build(&params(None), &[]);
        assert_eq!(view.cursor, YearMonth::new(2025, 6).unwrap());
    }

    #[test]
    fn test_events_on_empty_day() {
        let view = MonthView::build(&params(Some("2025-02")), &[sample_event()]);
        assert!(view.events_on(NaiveDate::from_ymd_opt(2025, 2, 9).unwrap()).is_empty());
    }
}
