//! Localized weekday and month names.
//!
//! Label order derives from a fixed reference week (2024-01-01 is a Monday),
//! never from the current date, so output for a given (locale, week start)
//! pair is fully deterministic.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::cursor::YearMonth;
use crate::grid::WeekStart;

/// Supported label locales.
///
/// [`Locale::En`] is the fallback for anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    De,
    Fr,
}

impl Locale {
    /// Parse a locale tag (case-insensitive, region subtags ignored).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// Short weekday name in this locale.
    pub fn short_weekday(self, weekday: Weekday) -> &'static str {
        let idx = weekday.num_days_from_monday() as usize;
        match self {
            Self::En => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"][idx],
            Self::De => ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"][idx],
            Self::Fr => ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."][idx],
        }
    }

    /// Full month name in this locale; `month` is 1-based.
    pub fn month_name(self, month: u32) -> &'static str {
        let idx = (month.saturating_sub(1) as usize) % 12;
        match self {
            Self::En => [
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ][idx],
            Self::De => [
                "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                "September", "Oktober", "November", "Dezember",
            ][idx],
            Self::Fr => [
                "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
                "septembre", "octobre", "novembre", "décembre",
            ][idx],
        }
    }
}

/// Week-start day of a fixed reference week.
fn reference_week_start(week_start: WeekStart) -> NaiveDate {
    // 2024-01-01 is a Monday; the Sunday before it is 2023-12-31
    match week_start {
        WeekStart::Monday => NaiveDate::from_ymd_opt(2024, 1, 1),
        WeekStart::Sunday => NaiveDate::from_ymd_opt(2023, 12, 31),
    }
    .unwrap()
}

/// Seven short weekday names ordered per the week-start convention.
///
/// Unrecognized locale tags degrade to English labels rather than failing.
pub fn weekday_labels(locale: &str, week_start: WeekStart) -> [String; 7] {
    let locale = Locale::parse(locale).unwrap_or_default();
    let start = reference_week_start(week_start);

    std::array::from_fn(|i| {
        let day = start + Duration::days(i as i64);
        locale.short_weekday(day.weekday()).to_string()
    })
}

/// Localized "Month Year" heading for a cursor.
pub fn month_title(locale: &str, ym: YearMonth) -> String {
    let locale = Locale::parse(locale).unwrap_or_default();
    format!("{} {}", locale.month_name(ym.month), ym.year)
}
