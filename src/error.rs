use thiserror::Error;

use crate::factory::FieldError;

/// Convenience result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Error type returned by the loaders and the load driver.
///
/// This is a single error enum shared by NEO (CSV) and close-approach (JSON) extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Underlying I/O error (e.g. file not found, permission denied, not a regular file).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited text (e.g. a record with the wrong number of fields).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON, or a document without the `fields`/`data` keys.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not match the documented contract (missing required column/field, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A data row does not reach one of the resolved field positions.
    #[error("row {row} has {len} values but position {required} is required")]
    RowTooShort {
        row: usize,
        required: usize,
        len: usize,
    },

    /// An entity factory rejected a value.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

/// Coarse classification of an [`ExtractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The requested path is missing, unreadable, or not a regular file.
    Resource,
    /// The input does not match the documented shape.
    Structural,
    /// A factory could not coerce a raw value.
    Coercion,
}

impl ExtractError {
    /// Attach a 1-based data row number to a factory rejection.
    pub(crate) fn from_field(row: usize, e: FieldError) -> Self {
        ExtractError::ParseError {
            row,
            column: e.column,
            raw: e.raw,
            message: e.message,
        }
    }

    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExtractError::Io(_) => ErrorCategory::Resource,
            ExtractError::Csv(err) => match err.kind() {
                csv::ErrorKind::Io(_) => ErrorCategory::Resource,
                _ => ErrorCategory::Structural,
            },
            ExtractError::Json(err) if err.is_io() => ErrorCategory::Resource,
            ExtractError::Json(_) => ErrorCategory::Structural,
            ExtractError::SchemaMismatch { .. } => ErrorCategory::Structural,
            ExtractError::RowTooShort { .. } => ErrorCategory::Structural,
            ExtractError::ParseError { .. } => ErrorCategory::Coercion,
        }
    }
}
