//! User-facing validation errors raised before any inference runs.

use thiserror::Error;

/// Everything that can go wrong with an uploaded table.
///
/// Malformed CSV and wrong shape are distinct variants under one type, so
/// frontends handle a single error while messages stay descriptive. Model
/// artifact problems are not represented here: a missing or corrupt artifact
/// is a fatal startup condition, not a per-request failure.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error(
        "input data must have {expected} columns corresponding to the features \
         used in training, but row {row} has {found}"
    )]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {col}: '{value}' is not a number")]
    NonNumeric {
        row: usize,
        col: usize,
        value: String,
    },

    #[error("failed to parse CSV: {0}")]
    Csv(String),

    #[error("uploaded file contains no data rows")]
    EmptyTable,
}
