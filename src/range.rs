//! Numeric range validators
//!
//! [`int_range_validator`] accepts every integer width; [`float_range_validator`]
//! accepts every integer and float width, widening integers to `f64`. Any
//! other input, including null, fails with [`MessageKey::NotAValidType`]. A
//! number outside the bounds fails with [`MessageKey::NotWithinRange`].
//!
//! When `inclusive` is set the bounds themselves pass (`min <= x <= max`),
//! otherwise they fail (`min < x < max`).
//!
//! # Example
//!
//! ```rust
//! use fieldguard::range::{float_range_validator, FloatValidatorOptions};
//!
//! let ratio = float_range_validator(
//!     FloatValidatorOptions::new().with_range(0.0, 1.0).with_inclusive(false),
//! );
//!
//! assert!(ratio.validate(0.25f32).is_pass());
//! assert!(ratio.validate(1u8).is_fail());
//! assert_eq!(
//!     ratio.validate(1.5).messages(),
//!     &["1.5 is not within range 0.000000 and 1.000000".to_string()]
//! );
//! assert_eq!(
//!     ratio.validate("0.5").messages(),
//!     &["0.5 is not a validatable numeric type.".to_string()]
//! );
//! ```

use crate::error::BoundsError;
use crate::message::{MessageFuncs, MessageKey, ValueObscurator};
use crate::options::ValidatorOptions;
use crate::validator::{reject, Outcome, Validator};
use crate::{Scalar, Value};

/// Default `NotAValidType` message, shared by both range validators.
pub fn not_a_valid_type_message<O: ValidatorOptions>(options: &O, value: &Value) -> String {
    format!(
        "{} is not a validatable numeric type.",
        options.value_obscurator().obscure(value)
    )
}

/// Default `NotWithinRange` message for [`IntValidatorOptions`].
pub fn int_not_within_range_message(options: &IntValidatorOptions, value: &Value) -> String {
    format!(
        "{} is not within range {} and {}.",
        options.value_obscurator().obscure(value),
        options.min,
        options.max
    )
}

/// Default `NotWithinRange` message for [`FloatValidatorOptions`].
pub fn float_not_within_range_message(options: &FloatValidatorOptions, value: &Value) -> String {
    format!(
        "{} is not within range {:.6} and {:.6}",
        options.value_obscurator().obscure(value),
        options.min,
        options.max
    )
}

/// Returns `true` if `x` lies within `[min, max]` (inclusive) or `(min, max)`.
#[inline]
pub fn int_within_range(min: i64, max: i64, inclusive: bool, x: i64) -> bool {
    if inclusive {
        min <= x && x <= max
    } else {
        min < x && x < max
    }
}

/// Float counterpart of [`int_within_range`]. NaN is never within range.
#[inline]
pub fn float_within_range(min: f64, max: f64, inclusive: bool, x: f64) -> bool {
    if inclusive {
        min <= x && x <= max
    } else {
        min < x && x < max
    }
}

/// Options for [`int_range_validator`].
#[derive(Debug, Clone)]
pub struct IntValidatorOptions {
    /// Lower bound.
    pub min: i64,
    /// Upper bound.
    pub max: i64,
    /// Whether `min` and `max` themselves pass.
    pub inclusive: bool,
    /// Message table.
    pub message_funcs: MessageFuncs<IntValidatorOptions>,
    /// Applied to values before they are quoted in messages.
    pub obscurator: ValueObscurator,
}

impl IntValidatorOptions {
    /// Inclusive range `[0, 0]` with the default messages.
    pub fn new() -> Self {
        Self {
            min: 0,
            max: 0,
            inclusive: true,
            message_funcs: MessageFuncs::<Self>::new()
                .with(MessageKey::NotWithinRange, int_not_within_range_message)
                .with(MessageKey::NotAValidType, not_a_valid_type_message),
            obscurator: ValueObscurator::identity(),
        }
    }

    /// Set both bounds.
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set whether the bounds themselves pass.
    pub fn with_inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }

    /// Override the message for `key`.
    pub fn with_message<F>(mut self, key: MessageKey, f: F) -> Self
    where
        F: Fn(&IntValidatorOptions, &Value) -> String + Send + Sync + 'static,
    {
        self.message_funcs.insert(key, f);
        self
    }

    /// Replace the whole message table.
    pub fn with_message_funcs(mut self, funcs: MessageFuncs<IntValidatorOptions>) -> Self {
        self.message_funcs = funcs;
        self
    }

    /// Set the value obscurator.
    pub fn with_obscurator(mut self, obscurator: ValueObscurator) -> Self {
        self.obscurator = obscurator;
        self
    }

    /// Check that `min <= max`.
    ///
    /// Validators never call this; an inverted range simply rejects
    /// everything.
    pub fn check_bounds(&self) -> Result<(), BoundsError> {
        if self.min > self.max {
            return Err(BoundsError::inverted(self.min, self.max));
        }
        Ok(())
    }
}

impl Default for IntValidatorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorOptions for IntValidatorOptions {
    fn message_funcs(&self) -> &MessageFuncs<Self> {
        &self.message_funcs
    }

    fn value_obscurator(&self) -> &ValueObscurator {
        &self.obscurator
    }
}

/// Options for [`float_range_validator`].
#[derive(Debug, Clone)]
pub struct FloatValidatorOptions {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Whether `min` and `max` themselves pass.
    pub inclusive: bool,
    /// Message table.
    pub message_funcs: MessageFuncs<FloatValidatorOptions>,
    /// Applied to values before they are quoted in messages.
    pub obscurator: ValueObscurator,
}

impl FloatValidatorOptions {
    /// Inclusive range `[0.0, 0.0]` with the default messages.
    pub fn new() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            inclusive: true,
            message_funcs: MessageFuncs::<Self>::new()
                .with(MessageKey::NotWithinRange, float_not_within_range_message)
                .with(MessageKey::NotAValidType, not_a_valid_type_message),
            obscurator: ValueObscurator::identity(),
        }
    }

    /// Set both bounds.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set whether the bounds themselves pass.
    pub fn with_inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }

    /// Override the message for `key`.
    pub fn with_message<F>(mut self, key: MessageKey, f: F) -> Self
    where
        F: Fn(&FloatValidatorOptions, &Value) -> String + Send + Sync + 'static,
    {
        self.message_funcs.insert(key, f);
        self
    }

    /// Replace the whole message table.
    pub fn with_message_funcs(mut self, funcs: MessageFuncs<FloatValidatorOptions>) -> Self {
        self.message_funcs = funcs;
        self
    }

    /// Set the value obscurator.
    pub fn with_obscurator(mut self, obscurator: ValueObscurator) -> Self {
        self.obscurator = obscurator;
        self
    }

    /// Check that neither bound is NaN and that `min <= max`.
    pub fn check_bounds(&self) -> Result<(), BoundsError> {
        if self.min.is_nan() || self.max.is_nan() {
            return Err(BoundsError::NotANumber);
        }
        if self.min > self.max {
            return Err(BoundsError::inverted(self.min, self.max));
        }
        Ok(())
    }
}

impl Default for FloatValidatorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorOptions for FloatValidatorOptions {
    fn message_funcs(&self) -> &MessageFuncs<Self> {
        &self.message_funcs
    }

    fn value_obscurator(&self) -> &ValueObscurator {
        &self.obscurator
    }
}

/// Build a validator accepting integers within the configured range.
///
/// Unsigned values are compared exactly: a `u64` above `i64::MAX` is always
/// out of range rather than wrapping to a negative number.
///
/// # Example
///
/// ```rust
/// use fieldguard::range::{int_range_validator, IntValidatorOptions};
///
/// let age = int_range_validator(IntValidatorOptions::new().with_range(0, 150));
/// assert!(age.validate(42u8).is_pass());
/// assert!(age.validate(150i64).is_pass());
/// assert!(age.validate(-1).is_fail());
/// assert!(age.validate(42.0).is_fail());
/// ```
pub fn int_range_validator(options: IntValidatorOptions) -> Validator {
    Validator::from_fn(move |value| {
        let x = match value.scalar() {
            Scalar::Signed(i) => i,
            Scalar::Unsigned(u) => match i64::try_from(u) {
                Ok(i) => i,
                Err(_) => return reject(&options, MessageKey::NotWithinRange, value),
            },
            Scalar::Float(_) | Scalar::Other => {
                return reject(&options, MessageKey::NotAValidType, value)
            }
        };

        if int_within_range(options.min, options.max, options.inclusive, x) {
            Outcome::pass()
        } else {
            reject(&options, MessageKey::NotWithinRange, value)
        }
    })
}

/// Build a validator accepting integers and floats within the configured range.
pub fn float_range_validator(options: FloatValidatorOptions) -> Validator {
    Validator::from_fn(move |value| {
        let x = match value.scalar() {
            Scalar::Signed(i) => i as f64,
            Scalar::Unsigned(u) => u as f64,
            Scalar::Float(f) => f,
            Scalar::Other => return reject(&options, MessageKey::NotAValidType, value),
        };

        if float_within_range(options.min, options.max, options.inclusive, x) {
            Outcome::pass()
        } else {
            reject(&options, MessageKey::NotWithinRange, value)
        }
    })
}
