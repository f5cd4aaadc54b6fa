//! # fieldguard
//!
//! Small, composable value validators with configurable messages.
//!
//! A [`Validator`] maps a [`Value`] to an [`Outcome`]: pass, or fail with
//! exactly one human-readable message. Each validator is built from an
//! options value carrying its bounds and a message table, so every word the
//! user sees can be replaced without touching the validation logic.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldguard::prelude::*;
//!
//! let age = int_range_validator(IntValidatorOptions::new().with_range(18, 130));
//! let name = default_not_empty_validator();
//!
//! assert!(age.validate(42u8).is_pass());
//! assert_eq!(
//!     age.validate(12).messages(),
//!     &["12 is not within range 18 and 130.".to_string()]
//! );
//!
//! assert!(name.validate("Ada").is_pass());
//! assert_eq!(
//!     name.validate("").messages(),
//!     &["Empty values are not allowed.".to_string()]
//! );
//! ```
//!
//! ## Custom messages
//!
//! ```rust
//! use fieldguard::prelude::*;
//!
//! let pin = int_range_validator(
//!     IntValidatorOptions::new()
//!         .with_range(1000, 9999)
//!         .with_obscurator(ValueObscurator::masked('*'))
//!         .with_message(MessageKey::NotWithinRange, |ops, v| {
//!             format!("PIN {} must have {} digits", ops.value_obscurator().obscure(v), 4)
//!         }),
//! );
//!
//! assert_eq!(pin.validate(12).messages(), &["PIN ** must have 4 digits".to_string()]);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod empty;
pub mod error;
pub mod message;
pub mod not_empty;
pub mod options;
pub mod range;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use error::BoundsError;
pub use message::{MessageFn, MessageFuncs, MessageKey, ValueObscurator};
pub use options::ValidatorOptions;
pub use validator::{all_of, Outcome, Validator};
pub use value::{Scalar, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::message::{MessageFuncs, MessageKey, ValueObscurator};
    pub use crate::not_empty::{
        default_not_empty_validator, not_empty_validator, NotEmptyValidatorOptions,
    };
    pub use crate::options::ValidatorOptions;
    pub use crate::range::{
        float_range_validator, int_range_validator, FloatValidatorOptions, IntValidatorOptions,
    };
    pub use crate::validator::{all_of, Outcome, Validator};
    pub use crate::value::{Scalar, Value};
}
