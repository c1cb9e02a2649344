//! Error types for pvec operations.
//!
//! The stream-level readers in `pvec-io` never return errors: a failed
//! parse is reflected in the reader's state flags. [`Error`] backs the
//! strict conveniences layered on top of them (`parse_vector`,
//! `parse_color`) and the few fallible conversions in `pvec-math`.
//!
//! # Usage
//!
//! ```rust
//! use pvec_core::{Error, Result};
//!
//! fn components(slice: &[f32]) -> Result<[f32; 3]> {
//!     slice
//!         .try_into()
//!         .map_err(|_| Error::length_mismatch(3, slice.len()))
//! }
//!
//! assert!(components(&[1.0, 2.0]).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive for [`std::error::Error`] and [`std::fmt::Display`]

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by pvec conversions and strict parsing.
///
/// # Categories
///
/// - **Parse errors**: [`InvalidVector`](Error::InvalidVector),
///   [`MissingComponents`](Error::MissingComponents),
///   [`InvalidColor`](Error::InvalidColor), [`TrailingInput`](Error::TrailingInput)
/// - **Shape errors**: [`LengthMismatch`](Error::LengthMismatch)
/// - **Output errors**: [`Format`](Error::Format)
#[derive(Debug, Error)]
pub enum Error {
    /// Text is neither numeric components nor a zero keyword.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pvec_core::Error;
    ///
    /// let err = Error::invalid_vector("marsvin", 3);
    /// assert!(err.to_string().contains("marsvin"));
    /// ```
    #[error("cannot parse {input:?} as a {expected}-component vector")]
    InvalidVector {
        /// The rejected text
        input: String,
        /// Component count of the target vector
        expected: usize,
    },

    /// Input ended before every component was read.
    #[error("expected {expected} components, found {found}")]
    MissingComponents {
        /// Component count of the target vector
        expected: usize,
        /// Components actually read
        found: usize,
    },

    /// Text is not numeric components, a keyword, a named color or a hex color.
    #[error("cannot parse {input:?} as a color")]
    InvalidColor {
        /// The rejected text
        input: String,
    },

    /// A value was parsed but non-whitespace input remains.
    #[error("unexpected trailing input {rest:?}")]
    TrailingInput {
        /// The unconsumed input
        rest: String,
    },

    /// Slice length doesn't match the fixed component count.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Required length
        expected: usize,
        /// Provided length
        got: usize,
    },

    /// The output sink reported a failure while writing.
    #[error("formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

impl Error {
    /// Creates an [`Error::InvalidVector`] error.
    #[inline]
    pub fn invalid_vector(input: impl Into<String>, expected: usize) -> Self {
        Self::InvalidVector {
            input: input.into(),
            expected,
        }
    }

    /// Creates an [`Error::MissingComponents`] error.
    #[inline]
    pub fn missing_components(expected: usize, found: usize) -> Self {
        Self::MissingComponents { expected, found }
    }

    /// Creates an [`Error::InvalidColor`] error.
    #[inline]
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
        }
    }

    /// Creates an [`Error::TrailingInput`] error.
    #[inline]
    pub fn trailing_input(rest: impl Into<String>) -> Self {
        Self::TrailingInput { rest: rest.into() }
    }

    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Returns `true` if this error came from parsing text.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidVector { .. }
                | Self::MissingComponents { .. }
                | Self::InvalidColor { .. }
                | Self::TrailingInput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_vector() {
        let err = Error::invalid_vector("marsvin", 3);
        let msg = err.to_string();
        assert!(msg.contains("\"marsvin\""));
        assert!(msg.contains("3-component"));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_missing_components() {
        let err = Error::missing_components(3, 2);
        assert_eq!(err.to_string(), "expected 3 components, found 2");
    }

    #[test]
    fn test_length_mismatch() {
        let err = Error::length_mismatch(4, 3);
        assert!(err.to_string().contains("expected 4, got 3"));
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_format_error_conversion() {
        let err: Error = std::fmt::Error.into();
        assert!(matches!(err, Error::Format(_)));
    }
}
