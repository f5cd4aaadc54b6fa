//! Configuration errors
//!
//! Validation failures are never errors; they are reported through
//! [`Outcome`](crate::Outcome). The only errors this crate defines describe
//! options that can never accept anything, and they are opt-in: see
//! [`IntValidatorOptions::check_bounds`](crate::range::IntValidatorOptions::check_bounds).
//!
//! # Example
//!
//! ```
//! use fieldguard::error::BoundsError;
//! use fieldguard::range::FloatValidatorOptions;
//!
//! let options = FloatValidatorOptions::new().with_range(1.0, -1.0);
//! let err = options.check_bounds().unwrap_err();
//! assert_eq!(err, BoundsError::inverted(1.0, -1.0));
//! assert_eq!(err.to_string(), "min bound 1 is greater than max bound -1");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// A range whose bounds cannot describe any value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    /// `min` is greater than `max`.
    Inverted {
        /// Rendered lower bound.
        min: String,
        /// Rendered upper bound.
        max: String,
    },
    /// A float bound is NaN.
    NotANumber,
}

impl BoundsError {
    /// Build [`BoundsError::Inverted`] from any displayable bounds.
    pub fn inverted(min: impl fmt::Display, max: impl fmt::Display) -> Self {
        BoundsError::Inverted {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::Inverted { min, max } => {
                write!(f, "min bound {} is greater than max bound {}", min, max)
            }
            BoundsError::NotANumber => f.write_str("range bounds must not be NaN"),
        }
    }
}

impl StdError for BoundsError {}
