//! Testing utilities
//!
//! Assertion macros for [`Outcome`](crate::Outcome) and, with the `proptest`
//! feature, an [`Arbitrary`](proptest::arbitrary::Arbitrary) implementation
//! for [`Value`](crate::Value).
//!
//! # Example
//!
//! ```rust
//! use fieldguard::prelude::*;
//! use fieldguard::{assert_fails, assert_fails_with, assert_passes};
//!
//! let v = int_range_validator(IntValidatorOptions::new().with_range(1, 3));
//!
//! assert_passes!(v.validate(2));
//! assert_fails!(v.validate(4));
//! assert_fails_with!(v.validate(0), ["0 is not within range 1 and 3."]);
//! ```

/// Assert that an outcome passed.
///
/// Panics with the failure messages otherwise.
#[macro_export]
macro_rules! assert_passes {
    ($outcome:expr) => {
        match $outcome {
            outcome if outcome.is_pass() => {}
            outcome => {
                panic!("Expected pass, got failure: {:?}", outcome.messages());
            }
        }
    };
}

/// Assert that an outcome failed.
///
/// Also checks the invariant that a failure carries at least one non-empty
/// message.
#[macro_export]
macro_rules! assert_fails {
    ($outcome:expr) => {
        match $outcome {
            outcome if outcome.is_fail() => {
                assert!(
                    !outcome.messages().is_empty(),
                    "Failure carried no messages"
                );
                assert!(
                    outcome.messages().iter().all(|m| !m.is_empty()),
                    "Failure carried an empty message: {:?}",
                    outcome.messages()
                );
            }
            _ => {
                panic!("Expected failure, got pass");
            }
        }
    };
}

/// Assert that an outcome failed with exactly the given messages.
///
/// # Example
///
/// ```rust
/// use fieldguard::{assert_fails_with, Outcome};
///
/// assert_fails_with!(Outcome::fail("bad"), ["bad"]);
/// ```
#[macro_export]
macro_rules! assert_fails_with {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            outcome if outcome.is_fail() => {
                let expected: ::std::vec::Vec<::std::string::String> = $expected
                    .iter()
                    .map(|m| ::std::string::ToString::to_string(m))
                    .collect();
                assert_eq!(outcome.messages(), expected.as_slice());
            }
            _ => {
                panic!("Expected failure with messages {:?}, got pass", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use crate::Value;

        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            any::<u64>().prop_map(Value::Uint),
            any::<f64>().prop_map(Value::Float),
            any::<f32>().prop_map(Value::Float32),
            ".{0,8}".prop_map(Value::Str),
        ];

        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
                prop::collection::btree_map("[a-z]{1,4}", inner.clone(), 0..4)
                    .prop_map(Value::Map),
                prop::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(Value::Record),
            ]
        })
        .boxed()
    }
}
