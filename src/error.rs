//! Error handling for color conversions.
//!
//! Conversions from RGB never fail; only HSB input (which carries unbounded
//! floats) and text parsing can be rejected.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An HSB component was outside its valid range (or NaN).
    #[error("{parameter} out of range: {value}")]
    OutOfRange {
        /// Name of the offending parameter (`"hue"`, `"saturation"` or `"brightness"`).
        parameter: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A color string could not be parsed.
    #[error("Invalid color string: {0}")]
    Parse(String),
}

/// A specialized `Result` type for color operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new out-of-range error for the named parameter.
    pub fn out_of_range(parameter: &'static str, value: f32) -> Self {
        Error::OutOfRange { parameter, value }
    }

    /// Creates a new parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Returns the parameter name if this is an out-of-range error.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Error::OutOfRange { parameter, .. } => Some(parameter),
            Error::Parse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range("hue", -1.0);
        assert_eq!(err.to_string(), "hue out of range: -1");
        assert_eq!(err.parameter(), Some("hue"));
    }

    #[test]
    fn test_parse_has_no_parameter() {
        let err = Error::parse("#12");
        assert_eq!(err.parameter(), None);
        assert_eq!(err.to_string(), "Invalid color string: #12");
    }
}
