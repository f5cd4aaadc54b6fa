//! Message tables and value obscuring
//!
//! Every failure a validator reports is identified by a [`MessageKey`]. The
//! text shown to the user comes from a [`MessageFuncs`] table bound into the
//! validator's options: each entry is a function of the options and the
//! offending value, so the text can quote bounds or the value itself.
//!
//! # Example
//!
//! ```rust
//! use fieldguard::message::MessageKey;
//! use fieldguard::range::IntValidatorOptions;
//! use fieldguard::ValidatorOptions;
//! use fieldguard::Value;
//!
//! let options = IntValidatorOptions::new()
//!     .with_range(1, 5)
//!     .with_message(MessageKey::NotWithinRange, |ops, v| {
//!         format!("pick a number from {} to {}, not {}", ops.min, ops.max, v)
//!     });
//!
//! let msg = options.error_message_by_key(MessageKey::NotWithinRange, &Value::from(9));
//! assert_eq!(msg, "pick a number from 1 to 5, not 9");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::options::ValidatorOptions;
use crate::Value;

/// Returned when a key has no message function, or the function produced no text.
pub const UNKNOWN_ERROR_MSG: &str = "An unknown validation error occurred.";

/// Symbolic identifier for a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKey {
    /// The input's type cannot be evaluated by this validator.
    NotAValidType,
    /// The input is outside the configured bounds.
    NotWithinRange,
    /// The input is empty.
    EmptyNotAllowed,
}

impl MessageKey {
    /// Every key, in declaration order.
    pub const ALL: [MessageKey; 3] = [
        MessageKey::NotAValidType,
        MessageKey::NotWithinRange,
        MessageKey::EmptyNotAllowed,
    ];

    /// Stable name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::NotAValidType => "NotAValidType",
            MessageKey::NotWithinRange => "NotWithinRange",
            MessageKey::EmptyNotAllowed => "EmptyNotAllowed",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message-generating function for options of type `O`.
pub type MessageFn<O> = Arc<dyn Fn(&O, &Value) -> String + Send + Sync>;

/// Table of message functions keyed by [`MessageKey`].
///
/// Cloning is cheap: the functions are reference counted.
pub struct MessageFuncs<O> {
    funcs: BTreeMap<MessageKey, MessageFn<O>>,
}

impl<O> MessageFuncs<O> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            funcs: BTreeMap::new(),
        }
    }

    /// Add (or replace) the function for `key`, builder style.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldguard::message::{MessageFuncs, MessageKey};
    /// use fieldguard::not_empty::NotEmptyValidatorOptions;
    ///
    /// let funcs = MessageFuncs::<NotEmptyValidatorOptions>::new()
    ///     .with(MessageKey::EmptyNotAllowed, |_, _| "required".to_string());
    /// assert!(funcs.contains_key(MessageKey::EmptyNotAllowed));
    /// assert_eq!(funcs.len(), 1);
    /// ```
    pub fn with<F>(mut self, key: MessageKey, f: F) -> Self
    where
        F: Fn(&O, &Value) -> String + Send + Sync + 'static,
    {
        self.insert(key, f);
        self
    }

    /// Add (or replace) the function for `key`.
    pub fn insert<F>(&mut self, key: MessageKey, f: F)
    where
        F: Fn(&O, &Value) -> String + Send + Sync + 'static,
    {
        self.funcs.insert(key, Arc::new(f));
    }

    /// Look up the function for `key`.
    pub fn get(&self, key: MessageKey) -> Option<&MessageFn<O>> {
        self.funcs.get(&key)
    }

    /// Returns `true` if `key` has a function.
    pub fn contains_key(&self, key: MessageKey) -> bool {
        self.funcs.contains_key(&key)
    }

    /// Keys that have a function, in key order.
    pub fn keys(&self) -> impl Iterator<Item = MessageKey> + '_ {
        self.funcs.keys().copied()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Returns `true` if no function is registered.
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

impl<O> Default for MessageFuncs<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Clone for MessageFuncs<O> {
    fn clone(&self) -> Self {
        Self {
            funcs: self.funcs.clone(),
        }
    }
}

impl<O> fmt::Debug for MessageFuncs<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

/// Transforms a value before it is quoted in a message.
///
/// Use [`ValueObscurator::masked`] for secrets so that failure messages
/// never echo them.
///
/// # Example
///
/// ```rust
/// use fieldguard::message::ValueObscurator;
/// use fieldguard::Value;
///
/// let mask = ValueObscurator::masked('*');
/// assert_eq!(mask.obscure(&Value::from("hunter2")), Value::from("*******"));
///
/// let id = ValueObscurator::identity();
/// assert_eq!(id.obscure(&Value::from(42)), Value::from(42));
/// ```
#[derive(Clone)]
pub struct ValueObscurator {
    f: Arc<dyn Fn(&Value) -> Value + Send + Sync>,
}

impl ValueObscurator {
    /// Wrap an arbitrary transformation.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Leaves values untouched. This is the default.
    pub fn identity() -> Self {
        Self::from_fn(Value::clone)
    }

    /// Replaces the value with `mask` repeated once per character of its
    /// display form.
    pub fn masked(mask: char) -> Self {
        Self::from_fn(move |value| {
            let len = value.to_string().chars().count();
            Value::Str(std::iter::repeat(mask).take(len).collect())
        })
    }

    /// Apply the transformation.
    pub fn obscure(&self, value: &Value) -> Value {
        (self.f)(value)
    }
}

impl Default for ValueObscurator {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for ValueObscurator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueObscurator")
    }
}

/// Produce the message for `key` from the options' table.
///
/// Never returns an empty string: an unregistered key, or a function that
/// returns `""`, resolves to [`UNKNOWN_ERROR_MSG`].
pub fn resolve_message<O: ValidatorOptions>(options: &O, key: MessageKey, value: &Value) -> String {
    let message = options
        .message_funcs()
        .get(key)
        .map(|f| f(options, value))
        .filter(|msg| !msg.is_empty());

    match message {
        Some(msg) => msg,
        None => {
            #[cfg(feature = "tracing")]
            tracing::warn!("No message for {} (value kind {}), using fallback", key, value.kind());
            UNKNOWN_ERROR_MSG.to_string()
        }
    }
}
