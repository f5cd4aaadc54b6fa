//! The validator contract
//!
//! A [`Validator`] is a pure function from a [`Value`] to an [`Outcome`]: a
//! pass/fail flag plus the messages explaining a failure. Validators are built
//! once from their options and can then be called any number of times, from
//! any thread.
//!
//! # Example
//!
//! ```rust
//! use fieldguard::prelude::*;
//!
//! let percent = int_range_validator(IntValidatorOptions::new().with_range(0, 100));
//!
//! let outcome = percent.validate(42);
//! assert!(outcome.is_pass());
//!
//! let (passed, messages) = percent.validate(101).into_parts();
//! assert!(!passed);
//! assert_eq!(messages, vec!["101 is not within range 0 and 100.".to_string()]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::message::MessageKey;
use crate::options::ValidatorOptions;
use crate::Value;

/// Result of running a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Outcome {
    passed: bool,
    messages: Vec<String>,
}

impl Outcome {
    /// A passing outcome with no messages.
    pub fn pass() -> Self {
        Self {
            passed: true,
            messages: Vec::new(),
        }
    }

    /// A failing outcome with a single message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            messages: vec![message.into()],
        }
    }

    /// Returns `true` if validation passed.
    pub fn is_pass(&self) -> bool {
        self.passed
    }

    /// Returns `true` if validation failed.
    pub fn is_fail(&self) -> bool {
        !self.passed
    }

    /// Failure messages, in the order they were produced.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Split into the pass flag and the messages.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.passed, self.messages)
    }

    /// Fold `other` into `self`: fails if either fails, messages concatenated.
    pub fn merge(mut self, other: Outcome) -> Self {
        self.passed &= other.passed;
        self.messages.extend(other.messages);
        self
    }
}

impl From<Outcome> for (bool, Vec<String>) {
    fn from(outcome: Outcome) -> Self {
        outcome.into_parts()
    }
}

/// A reusable, thread-safe validation function.
///
/// Cloning shares the underlying function.
#[derive(Clone)]
pub struct Validator {
    f: Arc<dyn Fn(&Value) -> Outcome + Send + Sync>,
}

impl Validator {
    /// Wrap a validation function.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldguard::{Outcome, Validator, Value};
    ///
    /// let no_nulls = Validator::from_fn(|v: &Value| {
    ///     if v.is_null() { Outcome::fail("required") } else { Outcome::pass() }
    /// });
    /// assert!(no_nulls.validate(None::<i32>).is_fail());
    /// assert!(no_nulls.validate(0).is_pass());
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Outcome + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Validate anything convertible into a [`Value`].
    pub fn validate(&self, value: impl Into<Value>) -> Outcome {
        self.validate_value(&value.into())
    }

    /// Validate an already converted [`Value`].
    pub fn validate_value(&self, value: &Value) -> Outcome {
        (self.f)(value)
    }

    /// Run `self` then `other`, keeping the messages of both.
    pub fn and(self, other: Validator) -> Self {
        Validator::from_fn(move |value| self.validate_value(value).merge(other.validate_value(value)))
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator")
    }
}

/// Failing outcome carrying the options' message for `key`.
pub(crate) fn reject<O: ValidatorOptions>(options: &O, key: MessageKey, value: &Value) -> Outcome {
    #[cfg(feature = "tracing")]
    tracing::trace!("Rejected {} value with {}", value.kind(), key);
    Outcome::fail(options.error_message_by_key(key, value))
}

/// Run every validator against the same value and collect all messages.
///
/// Passes only if every validator passes. With no validators, always passes.
///
/// # Example
///
/// ```rust
/// use fieldguard::prelude::*;
///
/// let quantity = all_of([
///     default_not_empty_validator(),
///     int_range_validator(IntValidatorOptions::new().with_range(0, 10)),
/// ]);
///
/// assert!(quantity.validate(3).is_pass());
/// assert_eq!(
///     quantity.validate(0).messages(),
///     &["Empty values are not allowed.".to_string()]
/// );
/// assert_eq!(quantity.validate("").messages().len(), 2);
/// ```
pub fn all_of<I>(validators: I) -> Validator
where
    I: IntoIterator<Item = Validator>,
{
    let validators: Vec<Validator> = validators.into_iter().collect();
    Validator::from_fn(move |value| {
        validators
            .iter()
            .fold(Outcome::pass(), |acc, v| acc.merge(v.validate_value(value)))
    })
}
