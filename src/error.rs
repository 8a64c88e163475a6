use thiserror::Error;

/// Errors raised at the catalog's input boundary.
///
/// These all mark programmer errors: filter tokens wired through from the UI
/// layer that are not in the allowed set, or rating scores the form layer
/// should have rejected. The core fails fast here instead of silently
/// coercing, so an integration bug surfaces as a typed error rather than a
/// quietly wrong list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("invalid category filter: {0}")]
    InvalidCategory(String),

    #[error("invalid difficulty filter: {0}")]
    InvalidDifficulty(String),

    #[error("invalid status filter: {0}")]
    InvalidStatusFilter(String),

    #[error("rating score out of range: {criterion} = {value} (expected 1-5)")]
    InvalidRatingScore { criterion: &'static str, value: u8 },
}
