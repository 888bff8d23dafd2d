//! Fixed 6x7 month grid construction.
//!
//! The grid always spans six full weeks so the view height never jumps
//! between months. Leading and trailing cells belong to the adjacent months;
//! callers tag them via [`crate::cursor::YearMonth::contains`].
//!
//! Everything here is plain `NaiveDate` math. Instants never enter the grid,
//! which keeps DST transitions from shifting cell boundaries.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::cursor::YearMonth;

/// Weeks shown per month view.
pub const GRID_WEEKS: usize = 6;
/// Days per week row.
pub const GRID_COLUMNS: usize = 7;
/// Total cells in the month grid.
pub const GRID_CELLS: usize = GRID_WEEKS * GRID_COLUMNS;

/// Which weekday the grid's columns start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Leading days between this week start and `weekday`.
    pub fn offset_from(self, weekday: Weekday) -> i64 {
        match self {
            WeekStart::Monday => i64::from(weekday.num_days_from_monday()),
            WeekStart::Sunday => i64::from(weekday.num_days_from_sunday()),
        }
    }
}

/// Build the 42 consecutive calendar days covering `ym`.
///
/// The first cell is the week-start day on or before the 1st of the month,
/// so a month beginning on the configured week start has zero leading
/// overflow days; trailing cells pad the grid out to six full weeks.
pub fn build_grid(ym: YearMonth, week_start: WeekStart) -> Vec<NaiveDate> {
    let first = ym.first_day();
    let grid_start = first - Duration::days(week_start.offset_from(first.weekday()));

    (0..GRID_CELLS as i64)
        .map(|i| grid_start + Duration::days(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_grid_always_has_42_cells() {
        for (year, month) in [(2024, 2), (2025, 1), (2025, 2), (2025, 12), (1900, 1), (9999, 12)] {
            for week_start in [WeekStart::Monday, WeekStart::Sunday] {
                let grid = build_grid(ym(year, month), week_start);
                assert_eq!(grid.len(), GRID_CELLS, "{}-{} {:?}", year, month, week_start);
            }
        }
    }

    #[test]
    fn test_grid_days_are_consecutive() {
        let grid = build_grid(ym(2025, 2), WeekStart::Monday);
        for pair in grid.windows(2) {
            assert_eq!(pair[1], pair[0] + Duration::days(1));
        }
    }

    #[test]
    fn test_grid_covers_every_day_of_month_exactly_once() {
        // 31-day, 30-day, and leap/non-leap February months
        for (year, month, expected_days) in [(2025, 1, 31), (2025, 4, 30), (2025, 2, 28), (2024, 2, 29)] {
            let cursor = ym(year, month);
            let grid = build_grid(cursor, WeekStart::Monday);
            let in_month = grid.iter().filter(|d| cursor.contains(**d)).count();
            assert_eq!(in_month, expected_days, "{}-{}", year, month);
        }
    }

    #[test]
    fn test_february_2025_monday_grid() {
        let grid = build_grid(ym(2025, 2), WeekStart::Monday);
        assert_eq!(grid[0], date(2025, 1, 27));
        assert_eq!(grid[41], date(2025, 3, 9));
        assert_eq!(grid[0].weekday(), Weekday::Mon);
    }

    #[test]
    fn test_february_2025_sunday_grid() {
        let grid = build_grid(ym(2025, 2), WeekStart::Sunday);
        assert_eq!(grid[0], date(2025, 1, 26));
        assert_eq!(grid[0].weekday(), Weekday::Sun);
    }

    #[test]
    fn test_month_starting_on_week_start_has_no_leading_overflow() {
        // September 2025 starts on a Monday
        let grid = build_grid(ym(2025, 9), WeekStart::Monday);
        assert_eq!(grid[0], date(2025, 9, 1));

        // June 2025 starts on a Sunday
        let grid = build_grid(ym(2025, 6), WeekStart::Sunday);
        assert_eq!(grid[0], date(2025, 6, 1));
    }
}
