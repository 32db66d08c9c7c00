//! Built-in functions called through the default registry.

use im::OrdMap;
use stackbind::prelude::*;

fn call(name: &str, values: Vec<Value>) -> Result<OperandStack, StackError> {
    let registry = build_default_registry().unwrap();
    let mut stack = OperandStack::from_values(values);
    registry.call(name, &mut stack)?;
    Ok(stack)
}

fn named(entries: &[(&str, Value)]) -> Value {
    let map: OrdMap<String, Value> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    Value::Map(map)
}

fn top_double(stack: &OperandStack) -> f64 {
    stack.peek().unwrap().as_double().unwrap()
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn test_default_registry_lists_builtins() {
        let registry = build_default_registry().unwrap();
        assert_eq!(registry.names(), vec!["ATAN2", "DEPTH", "PAD", "ROUND"]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_unknown_function() {
        let err = call("NOPE", vec![]).unwrap_err();
        assert!(matches!(err, StackError::UnknownFunction { ref name } if name == "NOPE"));
        assert!(err.is_recoverable());
    }
}

#[cfg(test)]
mod atan2_tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, PI};

    #[test]
    fn test_positional_last_argument_is_x() {
        // y = 1 below, x = 0 on top: straight up.
        let stack = call("ATAN2", vec![Value::Long(1), Value::Long(0)]).unwrap();
        assert!((top_double(&stack) - PI / 2.0).abs() < 1e-12);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_named_arguments() {
        let stack = call(
            "ATAN2",
            vec![named(&[("y", Value::Double(1.0)), ("x", Value::Long(1))])],
        )
        .unwrap();
        assert!((top_double(&stack) - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_non_numeric_operand() {
        let err = call("ATAN2", vec![Value::from("1"), Value::Long(1)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ATAN2 expects to find a 'y' (a NUMBER) below the top of the stack."
        );
    }

    #[test]
    fn test_keeps_deeper_levels() {
        let stack = call(
            "ATAN2",
            vec![Value::from("keep"), Value::Long(0), Value::Long(1)],
        )
        .unwrap();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.get(1).unwrap(), &Value::from("keep"));
    }
}

#[cfg(test)]
mod round_tests {
    use super::*;

    #[test]
    fn test_default_digits_gives_long() {
        let stack = call("ROUND", vec![Value::Double(2.5)]).unwrap();
        assert_eq!(stack.peek().unwrap(), &Value::Long(3));
    }

    #[test]
    fn test_named_digits() {
        let stack = call(
            "ROUND",
            vec![named(&[("value", Value::Double(3.14159)), ("digits", Value::Long(2))])],
        )
        .unwrap();
        assert!((top_double(&stack) - 3.14).abs() < 1e-12);
    }

    #[test]
    fn test_negative_digits_round_to_tens() {
        let stack = call(
            "ROUND",
            vec![named(&[("value", Value::Long(1234)), ("digits", Value::Long(-2))])],
        )
        .unwrap();
        assert_eq!(stack.peek().unwrap(), &Value::Long(1200));
    }

    #[test]
    fn test_long_is_unchanged() {
        let stack = call("ROUND", vec![Value::Long(7)]).unwrap();
        assert_eq!(stack.peek().unwrap(), &Value::Long(7));
    }

    #[test]
    fn test_digits_out_of_range() {
        let err = call(
            "ROUND",
            vec![named(&[("value", Value::Double(1.0)), ("digits", Value::Long(40))])],
        )
        .unwrap_err();
        assert!(matches!(err, StackError::Eval { .. }));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = call("ROUND", vec![Value::Double(value)]).unwrap_err();
            assert!(matches!(err, StackError::Eval { .. }), "{value} gave {err:?}");
        }
    }

    #[test]
    fn test_value_beyond_long_range_rejected() {
        let err = call("ROUND", vec![Value::Double(1e300)]).unwrap_err();
        assert!(err.to_string().contains("cannot fit"));
        let err = call("ROUND", vec![Value::Double(-1e19)]).unwrap_err();
        assert!(matches!(err, StackError::Eval { .. }));
    }

    #[test]
    fn test_huge_value_with_digits_stays_finite() {
        let stack = call(
            "ROUND",
            vec![named(&[("value", Value::Double(1e300)), ("digits", Value::Long(15))])],
        )
        .unwrap();
        assert_eq!(stack.peek().unwrap(), &Value::Double(1e300));
    }

    #[test]
    fn test_long_with_positive_digits_stays_long() {
        let stack = call(
            "ROUND",
            vec![named(&[("value", Value::Long(42)), ("digits", Value::Long(3))])],
        )
        .unwrap();
        assert_eq!(stack.peek().unwrap(), &Value::Long(42));
    }

    #[test]
    fn test_double_digits_rejected() {
        let err = call(
            "ROUND",
            vec![named(&[("value", Value::Double(1.0)), ("digits", Value::Double(2.0))])],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "ROUND expects the argument 'digits' to be a LONG.");
    }
}

#[cfg(test)]
mod pad_tests {
    use super::*;

    #[test]
    fn test_all_defaults() {
        let stack = call("PAD", vec![Value::empty_map()]).unwrap();
        assert_eq!(stack.peek().unwrap(), &Value::from("        "));
    }

    #[test]
    fn test_custom_fill() {
        let stack = call(
            "PAD",
            vec![named(&[
                ("text", Value::from("7")),
                ("width", Value::Long(3)),
                ("fill", Value::from("0")),
            ])],
        )
        .unwrap();
        assert_eq!(stack.peek().unwrap(), &Value::from("007"));
    }

    #[test]
    fn test_wide_text_unchanged() {
        let stack = call(
            "PAD",
            vec![named(&[("text", Value::from("abcdef")), ("width", Value::Long(2))])],
        )
        .unwrap();
        assert_eq!(stack.peek().unwrap(), &Value::from("abcdef"));
    }

    #[test]
    fn test_positional_call_rejected() {
        let err = call("PAD", vec![Value::from("abc")]).unwrap_err();
        assert!(matches!(err, StackError::ExpectedMap { .. }));
    }

    #[test]
    fn test_multi_character_fill_rejected() {
        let err = call("PAD", vec![named(&[("fill", Value::from("ab"))])]).unwrap_err();
        assert!(err.to_string().contains("single character"));
    }
}

#[cfg(test)]
mod depth_tests {
    use super::*;

    #[test]
    fn test_consumes_nothing() {
        let stack = call("DEPTH", vec![Value::Long(1), Value::empty_map()]).unwrap();
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.peek().unwrap(), &Value::Long(2));
        assert!(stack.get(1).unwrap().is_map());
    }
}
