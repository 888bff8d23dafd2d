//! Month cursor parsing, formatting, and arithmetic.
//!
//! A cursor is the `{year, month}` pair a calendar view is positioned on.
//! Parsing from user input is deliberately forgiving: anything that is not a
//! valid `YYYY-MM` designator resolves to the current month instead of
//! failing, so a view can always be rendered.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::MonthViewError;

/// Smallest year a cursor may carry.
pub const YEAR_MIN: i32 = 1900;
/// Largest year a cursor may carry.
pub const YEAR_MAX: i32 = 9999;

/// Reference zone used when the caller has no timezone preference.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Zurich;

/// The year-month pair identifying which month a calendar view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    /// Always in [1, 12] when constructed through [`YearMonth::new`],
    /// parsing, or [`YearMonth::shift`].
    pub month: u32,
}

impl<'de> Deserialize<'de> for YearMonth {
    /// Deserializes through [`YearMonth::new`] so decoded values carry the
    /// same range invariants as constructed ones.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        YearMonth::new(raw.year, raw.month).map_err(serde::de::Error::custom)
    }
}

impl YearMonth {
    /// Create a cursor, rejecting out-of-range components.
    pub fn new(year: i32, month: u32) -> Result<Self, MonthViewError> {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(MonthViewError::Cursor(format!(
                "year {} out of range [{}, {}]",
                year, YEAR_MIN, YEAR_MAX
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(MonthViewError::Cursor(format!(
                "month {} out of range [1, 12]",
                month
            )));
        }
        Ok(YearMonth { year, month })
    }

    /// The month observed in `tz` at the given instant.
    pub fn current(tz: Tz, now: DateTime<Utc>) -> Self {
        let local = now.with_timezone(&tz).date_naive();
        YearMonth {
            year: local.year(),
            month: local.month(),
        }
    }

    /// First calendar day of this month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(YEAR_MIN, 1, 1).unwrap())
    }

    /// Add `delta` months, carrying into the year in either direction.
    ///
    /// `ym.shift(n).shift(-n) == ym` for any `n`.
    pub fn shift(&self, delta: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        YearMonth {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// Whether `date` falls inside this month (vs. a grid overflow day).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for YearMonth {
    type Err = MonthViewError;

    /// Strict parse of a `YYYY-M` or `YYYY-MM` designator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            MonthViewError::Cursor(format!(
                "invalid month designator '{}'. Expected YYYY-MM",
                s
            ))
        };

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        YearMonth::new(year, month)
    }
}

impl fmt::Display for YearMonth {
    /// Zero-padded `YYYY-MM`, the inverse of [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Resolve an optional month designator into a concrete cursor.
///
/// Missing, malformed, or out-of-range input falls back to the current month
/// as observed in `tz` at the injected instant `now`. This never fails; the
/// caller always gets a renderable month.
pub fn parse_cursor(raw: Option<&str>, tz: Tz, now: DateTime<Utc>) -> YearMonth {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| YearMonth::current(tz, now))
}
