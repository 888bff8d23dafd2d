//! ICS event loading using the icalendar crate's parser.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use uuid::Uuid;

use crate::error::{MonthViewError, MonthViewResult};
use crate::event::CalEvent;

/// Parse every VEVENT in an ICS document into [`CalEvent`]s.
///
/// `tz` interprets DATE values and floating times. An unreadable document is
/// an error; individual VEVENTs missing DTSTART or with unreadable dates are
/// skipped so one bad entry cannot take down the whole calendar.
pub fn parse_events(content: &str, tz: Tz) -> MonthViewResult<Vec<CalEvent>> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| MonthViewError::IcsParse(e.to_string()))?;

    Ok(calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(|vevent| to_cal_event(vevent, tz))
        .collect())
}

fn to_cal_event(vevent: &Component<'_>, tz: Tz) -> Option<CalEvent> {
    let id = vevent
        .find_prop("UID")
        .map(|p| p.val.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let title = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_else(|| "(No title)".to_string());

    let dtstart = DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?;
    let all_day = matches!(dtstart, DatePerhapsTime::Date(_));
    let start = to_instant(dtstart, tz);

    let end = match vevent.find_prop("DTEND") {
        Some(prop) => {
            let dtend = DatePerhapsTime::try_from(prop).ok()?;
            match dtend {
                // DTEND on all-day events is exclusive per RFC 5545; pull it
                // back one day to the inclusive convention the bucketer uses
                DatePerhapsTime::Date(d) => {
                    let inclusive = (d - Duration::days(1)).max(local_date(start, tz));
                    local_midnight(inclusive, tz)
                }
                other => to_instant(other, tz),
            }
        }
        None => start,
    };

    Some(CalEvent {
        id,
        title,
        start,
        end,
        all_day,
        color: None,
        logo_url: None,
    })
}

/// Convert icalendar's DatePerhapsTime to a UTC instant, interpreting DATE
/// values and floating times in `tz`.
fn to_instant(dpt: DatePerhapsTime, tz: Tz) -> DateTime<Utc> {
    match dpt {
        DatePerhapsTime::Date(d) => local_midnight(d, tz),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => dt,
            CalendarDateTime::Floating(naive) => match tz.from_local_datetime(&naive).earliest() {
                Some(dt) => dt.with_timezone(&Utc),
                None => naive.and_utc(),
            },
            CalendarDateTime::WithTimezone { date_time, tzid } => {
                let zone: Tz = tzid.parse().unwrap_or(tz);
                match zone.from_local_datetime(&date_time).earliest() {
                    Some(dt) => dt.with_timezone(&Utc),
                    None => date_time.and_utc(),
                }
            }
        },
    }
}

fn local_midnight(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap();
    match tz.from_local_datetime(&midnight).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        // A zone transition can skip midnight entirely; fall back to UTC
        None => midnight.and_utc(),
    }
}

fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::bucket_events_by_day;

    #[test]
    fn test_parse_timed_event() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:ev-123
SUMMARY:Board meeting
DTSTART:20250320T150000Z
DTEND:20250320T160000Z
END:VEVENT
END:VCALENDAR"#;

        let events = parse_events(ics, chrono_tz::UTC).unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.id, "ev-123");
        assert_eq!(event.title, "Board meeting");
        assert!(!event.all_day);
        assert_eq!(event.start.to_rfc3339(), "2025-03-20T15:00:00+00:00");
    }

    #[test]
    fn test_all_day_event_exclusive_dtend_covers_one_day() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:ev-allday
SUMMARY:Street festival
DTSTART;VALUE=DATE:20250130
DTEND;VALUE=DATE:20250131
END:VEVENT
END:VCALENDAR"#;

        let events = parse_events(ics, chrono_tz::UTC).unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].all_day);

        let buckets = bucket_events_by_day(&events, chrono_tz::UTC);
        assert_eq!(buckets.len(), 1);
        assert!(buckets.contains_key("2025-01-30"));
    }

    #[test]
    fn test_missing_uid_gets_generated_id() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
SUMMARY:Anonymous event
DTSTART:20250320T150000Z
DTEND:20250320T160000Z
END:VEVENT
END:VCALENDAR"#;

        let events = parse_events(ics, chrono_tz::UTC).unwrap();
        assert_eq!(events.len(), 1);
        assert!(!events[0].id.is_empty());
    }

    #[test]
    fn test_event_without_dtstart_is_skipped() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:broken
SUMMARY:No start
END:VEVENT
BEGIN:VEVENT
UID:ok
SUMMARY:Fine
DTSTART:20250320T150000Z
DTEND:20250320T160000Z
END:VEVENT
END:VCALENDAR"#;

        let events = parse_events(ics, chrono_tz::UTC).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "ok");
    }

    #[test]
    fn test_missing_dtend_defaults_to_start() {
        let ics = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:TEST
BEGIN:VEVENT
UID:ev-nodtend
SUMMARY:Open end
DTSTART:20250320T150000Z
END:VEVENT
END:VCALENDAR"#;

        let events = parse_events(ics, chrono_tz::UTC).unwrap();
        assert_eq!(events[0].start, events[0].end);
    }

    #[test]
    fn test_garbage_document_is_an_error() {
        assert!(parse_events("definitely not ics", chrono_tz::UTC).is_err());
    }
}
