//! The options capability shared by every validator
//!
//! Each validator has its own options type carrying only the configuration it
//! needs. What they have in common is captured by [`ValidatorOptions`]: a
//! message table, a value obscurator, and message lookup by key.

use crate::message::{resolve_message, MessageFuncs, MessageKey, ValueObscurator};
use crate::Value;

/// Configuration bound into a validator.
///
/// Implementors provide access to their message table and obscurator;
/// [`error_message_by_key`](ValidatorOptions::error_message_by_key) comes for
/// free.
///
/// # Example
///
/// ```rust
/// use fieldguard::message::{MessageFuncs, MessageKey, ValueObscurator};
/// use fieldguard::{Value, ValidatorOptions};
///
/// struct PinOptions {
///     funcs: MessageFuncs<PinOptions>,
///     obscurator: ValueObscurator,
/// }
///
/// impl ValidatorOptions for PinOptions {
///     fn message_funcs(&self) -> &MessageFuncs<Self> {
///         &self.funcs
///     }
///
///     fn value_obscurator(&self) -> &ValueObscurator {
///         &self.obscurator
///     }
/// }
///
/// let options = PinOptions {
///     funcs: MessageFuncs::new().with(MessageKey::NotWithinRange, |ops: &PinOptions, v| {
///         format!("{} is not a valid PIN", ops.value_obscurator().obscure(v))
///     }),
///     obscurator: ValueObscurator::masked('*'),
/// };
///
/// let msg = options.error_message_by_key(MessageKey::NotWithinRange, &Value::from(98765));
/// assert_eq!(msg, "***** is not a valid PIN");
/// ```
pub trait ValidatorOptions: Sized {
    /// The message table.
    fn message_funcs(&self) -> &MessageFuncs<Self>;

    /// The obscurator applied to values before they appear in messages.
    fn value_obscurator(&self) -> &ValueObscurator;

    /// Produce the message for `key`, falling back to
    /// [`UNKNOWN_ERROR_MSG`](crate::message::UNKNOWN_ERROR_MSG) when the
    /// table has no usable entry.
    fn error_message_by_key(&self, key: MessageKey, value: &Value) -> String {
        resolve_message(self, key, value)
    }
}
