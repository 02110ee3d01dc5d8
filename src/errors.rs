//! Error types produced while validating input or requesting explanations.

use thiserror::Error;

/// Error returned when a raw leg or delta value cannot be accepted.
///
/// A [`Calculator`](crate::Calculator) that receives one of these keeps its
/// previous pair, so the variants exist for callers that want to explain the
/// rejection rather than for recovery.
///
/// # Examples
///
/// ```
/// use pythagorx::{validate_and_clamp, Bounds, InvalidInput};
///
/// let error = validate_and_clamp("abc", Bounds::LEG).expect_err("text is rejected");
/// assert_eq!(error, InvalidInput::Unparseable("abc".to_string()));
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidInput {
    /// Returned when the text does not parse as a number.
    #[error("`{0}` is not a number")]
    Unparseable(String),
    /// Returned when the text parses to infinity or NaN.
    #[error("{0} is not a finite number")]
    NonFinite(f64),
    /// Returned when the value lies outside the accepted bounds.
    #[error("{value} is outside the accepted range {bounds}")]
    OutOfRange {
        /// Rejected value.
        value: f64,
        /// Human-readable rendering of the bounds that were applied.
        bounds: String,
    },
}

/// Error returned by an [`ExplanationService`](crate::ExplanationService).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExplanationError {
    /// Returned when no credential was configured for the service.
    #[error("no API key configured for the explanation service")]
    MissingApiKey,
    /// Returned when the remote service could not be reached or replied with an error.
    #[error("explanation service request failed: {0}")]
    Request(String),
}
