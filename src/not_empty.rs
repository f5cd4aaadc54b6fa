//! Non-empty validator
//!
//! Rejects values that satisfy [`is_empty`](crate::empty::is_empty).
//!
//! # Example
//!
//! ```rust
//! use fieldguard::not_empty::default_not_empty_validator;
//! use fieldguard::record;
//!
//! let required = default_not_empty_validator();
//!
//! assert!(required.validate(vec!["hello"]).is_pass());
//! assert!(required.validate(record! { name: "hello" }).is_pass());
//! assert_eq!(
//!     required.validate("").messages(),
//!     &["Empty values are not allowed.".to_string()]
//! );
//! ```

use crate::empty::is_empty;
use crate::message::{MessageFuncs, MessageKey, ValueObscurator};
use crate::options::ValidatorOptions;
use crate::validator::{reject, Outcome, Validator};
use crate::Value;

/// Default `EmptyNotAllowed` message.
pub const DEFAULT_EMPTY_NOT_ALLOWED_MSG: &str = "Empty values are not allowed.";

/// Options for [`not_empty_validator`].
#[derive(Debug, Clone)]
pub struct NotEmptyValidatorOptions {
    /// Message table.
    pub message_funcs: MessageFuncs<NotEmptyValidatorOptions>,
    /// Applied to values before they are quoted in messages.
    pub obscurator: ValueObscurator,
}

impl NotEmptyValidatorOptions {
    /// Options with the default message.
    pub fn new() -> Self {
        Self {
            message_funcs: MessageFuncs::<Self>::new().with(MessageKey::EmptyNotAllowed, |_, _| {
                DEFAULT_EMPTY_NOT_ALLOWED_MSG.to_string()
            }),
            obscurator: ValueObscurator::identity(),
        }
    }

    /// Override the message for `key`.
    pub fn with_message<F>(mut self, key: MessageKey, f: F) -> Self
    where
        F: Fn(&NotEmptyValidatorOptions, &Value) -> String + Send + Sync + 'static,
    {
        self.message_funcs.insert(key, f);
        self
    }

    /// Replace the whole message table.
    pub fn with_message_funcs(mut self, funcs: MessageFuncs<NotEmptyValidatorOptions>) -> Self {
        self.message_funcs = funcs;
        self
    }

    /// Set the value obscurator.
    pub fn with_obscurator(mut self, obscurator: ValueObscurator) -> Self {
        self.obscurator = obscurator;
        self
    }
}

impl Default for NotEmptyValidatorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorOptions for NotEmptyValidatorOptions {
    fn message_funcs(&self) -> &MessageFuncs<Self> {
        &self.message_funcs
    }

    fn value_obscurator(&self) -> &ValueObscurator {
        &self.obscurator
    }
}

/// Build a validator rejecting empty values.
pub fn not_empty_validator(options: NotEmptyValidatorOptions) -> Validator {
    Validator::from_fn(move |value| {
        if is_empty(value) {
            reject(&options, MessageKey::EmptyNotAllowed, value)
        } else {
            Outcome::pass()
        }
    })
}

/// [`not_empty_validator`] with the default message.
pub fn default_not_empty_validator() -> Validator {
    not_empty_validator(NotEmptyValidatorOptions::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::UNKNOWN_ERROR_MSG;

    #[test]
    fn test_custom_message() {
        let expected = "Empty values are not allowed.  Received an empty value.";
        let v = not_empty_validator(
            NotEmptyValidatorOptions::new()
                .with_message(MessageKey::EmptyNotAllowed, move |_, _| expected.to_string()),
        );
        assert_eq!(v.validate(0).into_parts(), (false, vec![expected.to_string()]));
        assert_eq!(v.validate(1).into_parts(), (true, vec![]));
    }

    #[test]
    fn test_message_can_quote_obscured_value() {
        let v = not_empty_validator(
            NotEmptyValidatorOptions::new()
                .with_obscurator(ValueObscurator::from_fn(|_| Value::from("<hidden>")))
                .with_message(MessageKey::EmptyNotAllowed, |ops, v| {
                    format!("{} is empty", ops.value_obscurator().obscure(v))
                }),
        );
        assert_eq!(v.validate("").messages(), &["<hidden> is empty".to_string()]);
    }

    #[test]
    fn test_empty_table_falls_back() {
        let v = not_empty_validator(
            NotEmptyValidatorOptions::new().with_message_funcs(MessageFuncs::new()),
        );
        assert_eq!(v.validate(false).messages(), &[UNKNOWN_ERROR_MSG.to_string()]);
    }

    #[test]
    fn test_default_validator_passes_non_empty() {
        let v = default_not_empty_validator();
        assert!(v.validate(" ").is_pass());
        assert!(v.validate(-1).is_pass());
        assert!(v.validate(true).is_pass());
        assert!(v.validate(Value::map([("k", "")])).is_pass());
    }
}
