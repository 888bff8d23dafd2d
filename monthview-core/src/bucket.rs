//! Day bucketing: indexing events by every calendar day they cover.
//!
//! This is the one place instants become local calendar dates. The bucketer
//! converts each event's boundaries once, under a single timezone, so the
//! grid math never has to reason about zone offsets. A multi-day event is
//! duplicated into every covered day's bucket: each day cell must be
//! renderable on its own, without cross-day lookups.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::event::CalEvent;

/// Most days a single event may contribute buckets for. Spans beyond this
/// are truncated so malformed ranges cannot cause unbounded work.
pub const MAX_EVENT_SPAN_DAYS: i64 = 60;

/// Canonical bucket key for a calendar day (`YYYY-MM-DD`).
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Local calendar date of an instant under the bucketing timezone.
fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Index events by every local calendar day they cover, keyed by
/// [`day_key`], using the default [`MAX_EVENT_SPAN_DAYS`] span cap.
pub fn bucket_events_by_day(events: &[CalEvent], tz: Tz) -> HashMap<String, Vec<CalEvent>> {
    bucket_events_by_day_capped(events, tz, MAX_EVENT_SPAN_DAYS)
}

/// Index events by covered day with an explicit span cap.
///
/// Each event lands in the bucket of every date from its start day through
/// its end day (inclusive), preserving input order within a bucket. Events
/// with `end < start` are skipped. An event covering more than `cap` days
/// only gets its first `cap` buckets; a non-positive `cap` is treated as 1
/// since an event always covers at least its start day.
pub fn bucket_events_by_day_capped(
    events: &[CalEvent],
    tz: Tz,
    cap: i64,
) -> HashMap<String, Vec<CalEvent>> {
    let mut buckets: HashMap<String, Vec<CalEvent>> = HashMap::new();

    for event in events {
        if event.end < event.start {
            continue;
        }

        let first = local_date(event.start, tz);
        let last = local_date(event.end, tz);
        let covered = ((last - first).num_days() + 1).min(cap.max(1));

        for offset in 0..covered {
            let day = first + Duration::days(offset);
            buckets.entry(day_key(day)).or_default().push(event.clone());
        }
    }

    buckets
}
