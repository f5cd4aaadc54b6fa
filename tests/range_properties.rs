//! Property-based tests for the range validators

use fieldguard::prelude::*;
use proptest::prelude::*;

const NOT_A_TYPE: &str = "not a number, sorry";

fn int_validator(min: i64, max: i64, inclusive: bool) -> Validator {
    int_range_validator(
        IntValidatorOptions::new()
            .with_range(min, max)
            .with_inclusive(inclusive)
            .with_message(MessageKey::NotAValidType, |_, _| NOT_A_TYPE.to_string()),
    )
}

fn float_validator(min: f64, max: f64, inclusive: bool) -> Validator {
    float_range_validator(
        FloatValidatorOptions::new()
            .with_range(min, max)
            .with_inclusive(inclusive)
            .with_message(MessageKey::NotAValidType, |_, _| NOT_A_TYPE.to_string()),
    )
}

/// A failure has exactly one non-empty message, a pass has none.
fn assert_message_shape(outcome: &Outcome) {
    if outcome.is_pass() {
        assert!(outcome.messages().is_empty());
    } else {
        assert_eq!(outcome.messages().len(), 1);
        assert!(!outcome.messages()[0].is_empty());
    }
}

fn non_numeric() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        ".{0,6}".prop_map(Value::Str),
        prop::collection::vec(any::<i32>(), 0..3).prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn prop_int_bounds_pass_iff_inclusive(
        min in -1_000_000i64..1_000_000,
        span in 1i64..1_000_000,
        inclusive in any::<bool>(),
    ) {
        let max = min + span;
        let v = int_validator(min, max, inclusive);

        prop_assert_eq!(v.validate(min).is_pass(), inclusive);
        prop_assert_eq!(v.validate(max).is_pass(), inclusive);
        prop_assert!(v.validate(min - 1).is_fail());
        prop_assert!(v.validate(max + 1).is_fail());
    }

    #[test]
    fn prop_int_narrow_widths_agree_with_i64(
        x in any::<i16>(),
        inclusive in any::<bool>(),
    ) {
        let v = int_validator(-100, 100, inclusive);
        let wide = v.validate(i64::from(x));
        prop_assert_eq!(v.validate(x), wide.clone());
        prop_assert_eq!(v.validate(i32::from(x)), wide.clone());
        if x >= 0 {
            prop_assert_eq!(v.validate(x as u16), wide.clone());
            prop_assert_eq!(v.validate(x as u64), wide);
        }
    }

    #[test]
    fn prop_unsigned_above_i64_max_always_fails(
        x in (i64::MAX as u64 + 1)..=u64::MAX,
        inclusive in any::<bool>(),
    ) {
        let outcome = int_validator(i64::MIN, i64::MAX, inclusive).validate(x);
        prop_assert!(outcome.is_fail());
        assert_message_shape(&outcome);
    }

    #[test]
    fn prop_float_bounds_pass_iff_inclusive(
        min in -1.0e6f64..1.0e6,
        span in 1.0f64..1.0e6,
        inclusive in any::<bool>(),
    ) {
        let max = min + span;
        let v = float_validator(min, max, inclusive);

        prop_assert_eq!(v.validate(min).is_pass(), inclusive);
        prop_assert_eq!(v.validate(max).is_pass(), inclusive);
        prop_assert!(v.validate(min - 1.0).is_fail());
        prop_assert!(v.validate(max + 1.0).is_fail());
    }

    #[test]
    fn prop_float_widens_integers(
        x in -10_000i32..10_000,
        inclusive in any::<bool>(),
    ) {
        let v = float_validator(-500.0, 500.0, inclusive);
        prop_assert_eq!(v.validate(x), v.validate(f64::from(x)));
    }

    #[test]
    fn prop_non_numeric_inputs_fail_with_type_message(
        value in non_numeric(),
        inclusive in any::<bool>(),
    ) {
        for v in [int_validator(-10, 10, inclusive), float_validator(-10.0, 10.0, inclusive)] {
            let (passed, messages) = v.validate_value(&value).into_parts();
            prop_assert!(!passed);
            prop_assert_eq!(messages, vec![NOT_A_TYPE.to_string()]);
        }
    }

    #[test]
    fn prop_every_outcome_has_the_right_shape(
        x in any::<i64>(),
        min in any::<i64>(),
        max in any::<i64>(),
        inclusive in any::<bool>(),
    ) {
        let v = int_validator(min, max, inclusive);
        let first = v.validate(x);
        assert_message_shape(&first);
        prop_assert_eq!(first, v.validate(x));
    }

    #[test]
    fn prop_floats_are_rejected_by_int_validator(x in any::<f64>()) {
        let outcome = int_validator(i64::MIN, i64::MAX, true).validate(x);
        prop_assert_eq!(outcome.messages(), &[NOT_A_TYPE.to_string()]);
    }
}

#[test]
fn default_messages_are_verbatim() {
    let ints = int_range_validator(IntValidatorOptions::new());
    assert_eq!(
        ints.validate(1).messages(),
        &["1 is not within range 0 and 0.".to_string()]
    );
    assert_eq!(
        ints.validate("1").messages(),
        &["1 is not a validatable numeric type.".to_string()]
    );

    let floats = float_range_validator(FloatValidatorOptions::new());
    assert_eq!(
        floats.validate(0.5).messages(),
        &["0.5 is not within range 0.000000 and 0.000000".to_string()]
    );
    assert!(floats.validate(0).is_pass());
}
