//! Month-view layout core.
//!
//! Pure computations behind a month calendar view:
//! - [`cursor`]: parse/format/shift the `{year, month}` pair a view is on
//! - [`grid`]: expand a cursor into the fixed 6x7 sequence of calendar days
//! - [`bucket`]: index events by every local calendar day they cover
//! - [`labels`]: localized weekday names in week-start order
//!
//! [`view`] wires the four together into one renderable structure, and
//! [`event`]/[`ics`] load event lists from JSON or ICS input.

pub mod bucket;
pub mod cursor;
pub mod error;
pub mod event;
pub mod grid;
pub mod ics;
pub mod labels;
pub mod view;

// Re-export the main types at crate root for convenience
pub use cursor::YearMonth;
pub use error::{MonthViewError, MonthViewResult};
pub use event::CalEvent;
pub use grid::WeekStart;
pub use view::{MonthView, MonthViewParams};
