//! Error types for the monthview crates.

use thiserror::Error;

/// Errors that can occur when feeding the month-view core.
///
/// The layout computations themselves are total and never return these;
/// errors only come out of the strict constructors and the event loaders.
#[derive(Error, Debug)]
pub enum MonthViewError {
    #[error("Invalid month cursor: {0}")]
    Cursor(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for monthview operations.
pub type MonthViewResult<T> = Result<T, MonthViewError>;
