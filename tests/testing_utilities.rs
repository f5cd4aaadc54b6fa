//! Validators composed into a form pipeline, checked with the assertion macros

use fieldguard::prelude::*;
use fieldguard::{assert_fails, assert_fails_with, assert_passes, record};

struct SignupForm {
    username: Validator,
    age: Validator,
    discount: Validator,
    pin: Validator,
}

impl SignupForm {
    fn new() -> Self {
        Self {
            username: default_not_empty_validator(),
            age: all_of([
                not_empty_validator(
                    NotEmptyValidatorOptions::new()
                        .with_message(MessageKey::EmptyNotAllowed, |_, _| "Age is required.".into()),
                ),
                int_range_validator(IntValidatorOptions::new().with_range(18, 130)),
            ]),
            discount: float_range_validator(
                FloatValidatorOptions::new()
                    .with_range(0.0, 1.0)
                    .with_inclusive(false),
            ),
            pin: int_range_validator(
                IntValidatorOptions::new()
                    .with_range(1000, 9999)
                    .with_obscurator(ValueObscurator::masked('*')),
            ),
        }
    }
}

#[test]
fn valid_submission_passes_every_field() {
    let form = SignupForm::new();
    assert_passes!(form.username.validate("ada"));
    assert_passes!(form.age.validate(36u8));
    assert_passes!(form.discount.validate(0.15));
    assert_passes!(form.pin.validate(4821));
}

#[test]
fn invalid_submission_reports_each_problem() {
    let form = SignupForm::new();
    assert_fails_with!(form.username.validate(""), ["Empty values are not allowed."]);
    assert_fails_with!(
        form.age.validate(None::<u8>),
        ["Age is required.", "null is not a validatable numeric type."]
    );
    assert_fails_with!(form.age.validate(12), ["12 is not within range 18 and 130."]);
    assert_fails_with!(
        form.discount.validate(1),
        ["1 is not within range 0.000000 and 1.000000"]
    );
    assert_fails_with!(form.pin.validate(42), ["** is not within range 1000 and 9999."]);
}

#[test]
fn record_values_are_checked_field_by_field() {
    let required = default_not_empty_validator();
    assert_fails!(required.validate(record! { street: "", number: 0u32 }));
    assert_passes!(required.validate(record! { street: "", number: 12u32 }));
    assert_passes!(required.validate(record! { address: record! { street: "Main" } }));
}

#[test]
fn validators_are_shared_across_threads() {
    let form = std::sync::Arc::new(SignupForm::new());
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            let form = std::sync::Arc::clone(&form);
            std::thread::spawn(move || form.age.validate(10 + i * 10).is_pass())
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![false, true, true, true, true, true, true, true]
    );
}
