//! Entity factory interfaces.
//!
//! The loaders only select and marshal raw string values; turning them into entities (and any
//! numeric/boolean/date coercion that implies) is the job of a factory. Closures with the right
//! signature are factories too, which keeps test doubles short.

use thiserror::Error;

use crate::types::ApproachArgs;

/// A factory rejected one raw value.
///
/// Loaders attach the row number and surface this as [`crate::ExtractError::ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for '{column}': {message} (raw='{raw}')")]
pub struct FieldError {
    /// Name of the offending column/keyword.
    pub column: String,
    /// The raw value as received.
    pub raw: String,
    /// Why it was rejected.
    pub message: String,
}

impl FieldError {
    pub fn new(column: impl Into<String>, raw: impl Into<String>, message: impl ToString) -> Self {
        Self {
            column: column.into(),
            raw: raw.into(),
            message: message.to_string(),
        }
    }
}

/// Builds one body entity from four positional raw values.
pub trait BodyFactory {
    type Output;

    fn build(
        &self,
        designation: &str,
        name: &str,
        diameter: &str,
        hazardous: &str,
    ) -> Result<Self::Output, FieldError>;
}

impl<F, T> BodyFactory for F
where
    F: Fn(&str, &str, &str, &str) -> Result<T, FieldError>,
{
    type Output = T;

    fn build(
        &self,
        designation: &str,
        name: &str,
        diameter: &str,
        hazardous: &str,
    ) -> Result<T, FieldError> {
        self(designation, name, diameter, hazardous)
    }
}

/// Builds one close-approach entity from its keyword arguments (`des`, `cd`, `dist`, `v_rel`).
pub trait ApproachFactory {
    type Output;

    fn build(&self, kwargs: &ApproachArgs<'_>) -> Result<Self::Output, FieldError>;
}

impl<F, T> ApproachFactory for F
where
    F: Fn(&ApproachArgs<'_>) -> Result<T, FieldError>,
{
    type Output = T;

    fn build(&self, kwargs: &ApproachArgs<'_>) -> Result<T, FieldError> {
        self(kwargs)
    }
}
