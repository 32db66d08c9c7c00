//! Binding behaviour across both calling conventions.
//!
//! Stacks are built bottom first: the last value listed is on top.

use im::OrdMap;
use stackbind::prelude::*;

fn map(entries: &[(&str, Value)]) -> Value {
    let map: OrdMap<String, Value> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    Value::Map(map)
}

/// Required `[x:NUMBER]`, optional `[y:NUMBER=10]`.
fn x_required_y_optional() -> Signature {
    Signature::builder("F")
        .arg(ArgSpec::required("x", ValueType::Number, "x"))
        .opt(ArgSpec::optional("y", ValueType::Number, "y", 10))
        .build()
        .unwrap()
}

/// Required `[a:STRING, b:LONG, c:BOOLEAN, d:NUMBER]`.
fn four_required() -> Signature {
    Signature::builder("FOUR")
        .arg(ArgSpec::required("a", ValueType::String, "a"))
        .arg(ArgSpec::required("b", ValueType::Long, "b"))
        .arg(ArgSpec::required("c", ValueType::Boolean, "c"))
        .arg(ArgSpec::required("d", ValueType::Number, "d"))
        .build()
        .unwrap()
}

#[cfg(test)]
mod no_argument_tests {
    use super::*;

    #[test]
    fn test_consumes_nothing() {
        let sig = Signature::empty("NOARGS");
        let mut stack = OperandStack::from_values([Value::Long(1), Value::empty_map()]);
        let before = stack.clone();

        let args = bind(&sig, &mut stack).unwrap();

        assert!(args.is_empty());
        assert_eq!(stack, before);
    }

    #[test]
    fn test_succeeds_on_empty_stack() {
        let sig = Signature::builder("NOARGS").build().unwrap();
        let mut stack = OperandStack::new();
        assert!(bind(&sig, &mut stack).unwrap().is_empty());
    }
}

#[cfg(test)]
mod optional_only_tests {
    use super::*;

    fn optional_only() -> Signature {
        Signature::builder("OPTS")
            .opt(ArgSpec::optional("width", ValueType::Long, "w", 8))
            .opt(ArgSpec::optional("fill", ValueType::String, "f", " "))
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_map_yields_all_defaults() {
        let mut stack = OperandStack::from_values([Value::Long(99), Value::empty_map()]);
        let args = bind(&optional_only(), &mut stack).unwrap();

        assert_eq!(args.len(), 2);
        assert_eq!(args.get("width"), Some(&Value::Long(8)));
        assert_eq!(args.get("fill"), Some(&Value::from(" ")));
        assert_eq!(stack.into_values(), vec![Value::Long(99)]);
    }

    #[test]
    fn test_supplied_values_override_defaults() {
        let mut stack = OperandStack::from_values([map(&[("width", Value::Long(3))])]);
        let args = bind(&optional_only(), &mut stack).unwrap();

        assert_eq!(args.get("width"), Some(&Value::Long(3)));
        assert_eq!(args.get("fill"), Some(&Value::from(" ")));
    }

    #[test]
    fn test_non_map_top_fails() {
        let mut stack = OperandStack::from_values([Value::Long(3)]);
        let err = bind(&optional_only(), &mut stack).unwrap_err();

        assert!(matches!(err, StackError::ExpectedMap { ref function } if function == "OPTS"));
        assert!(err.to_string().contains("expects a MAP on top of the stack"));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_empty_stack_fails() {
        let mut stack = OperandStack::new();
        let err = bind(&optional_only(), &mut stack).unwrap_err();
        assert!(matches!(err, StackError::ExpectedMap { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_mistyped_optional_key_fails() {
        let mut stack = OperandStack::from_values([map(&[("width", Value::from("wide"))])]);
        let err = bind(&optional_only(), &mut stack).unwrap_err();

        assert!(matches!(err, StackError::KeyType { ref key, .. } if key == "width"));
        assert_eq!(err.to_string(), "OPTS expects the argument 'width' to be a LONG.");
        assert!(stack.peek().unwrap().is_map());
    }
}

#[cfg(test)]
mod positional_tests {
    use super::*;

    #[test]
    fn test_scenario_extra_depth_stays_on_stack() {
        // top -> bottom: [3, 7]
        let mut stack = OperandStack::from_values([Value::Long(7), Value::Long(3)]);
        let args = bind(&x_required_y_optional(), &mut stack).unwrap();

        assert_eq!(args.len(), 2);
        assert_eq!(args.get("x"), Some(&Value::Long(3)));
        assert_eq!(args.get("y"), Some(&Value::Long(10)));
        assert_eq!(stack.into_values(), vec![Value::Long(7)]);
    }

    #[test]
    fn test_reverse_declaration_order() {
        let mut stack = OperandStack::from_values([
            Value::from("bottom"),
            Value::from("a"),
            Value::Long(2),
            Value::Bool(true),
            Value::Double(4.5),
        ]);
        let args = bind(&four_required(), &mut stack).unwrap();

        assert_eq!(args.get("a"), Some(&Value::from("a")));
        assert_eq!(args.get("b"), Some(&Value::Long(2)));
        assert_eq!(args.get("c"), Some(&Value::Bool(true)));
        assert_eq!(args.get("d"), Some(&Value::Double(4.5)));
        assert_eq!(args.len(), 4);
        assert_eq!(stack.into_values(), vec![Value::from("bottom")]);
    }

    #[test]
    fn test_underflow_reports_counts() {
        let mut stack = OperandStack::from_values([Value::Bool(true), Value::Long(1)]);
        let err = bind(&four_required(), &mut stack).unwrap_err();

        assert!(matches!(
            err,
            StackError::Underflow { required: 4, available: 2, .. }
        ));
        assert_eq!(
            err.to_string(),
            "FOUR expects to find 4 arguments off the top of the stack, \
             but the stack contains only 2 levels."
        );
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_underflow_on_empty_stack() {
        let mut stack = OperandStack::new();
        let err = bind(&x_required_y_optional(), &mut stack).unwrap_err();
        assert!(matches!(err, StackError::Underflow { required: 1, available: 0, .. }));
    }

    #[test]
    fn test_type_mismatch_on_top() {
        let mut stack = OperandStack::from_values([Value::from("three")]);
        let err = bind(&x_required_y_optional(), &mut stack).unwrap_err();

        assert_eq!(
            err.to_string(),
            "F expects to find a 'x' (a NUMBER) on top of the stack."
        );
    }

    #[test]
    fn test_ordinal_descriptions() {
        let good = || {
            vec![
                Value::from("a"),
                Value::Long(2),
                Value::Bool(true),
                Value::Double(4.5),
            ]
        };
        let cases = [
            (3, "on top of the stack"),
            (2, "below the top of the stack"),
            (1, "on 3rd position counting from the top of the stack"),
            (0, "on 4th position counting from the top of the stack"),
        ];

        for (index, wording) in cases {
            let mut values = good();
            values[index] = Value::Nil;
            let mut stack = OperandStack::from_values(values);
            let err = bind(&four_required(), &mut stack).unwrap_err();
            assert!(
                err.to_string().ends_with(&format!("{}.", wording)),
                "unexpected message: {}",
                err
            );
        }
    }

    #[test]
    fn test_failed_bind_pops_nothing() {
        // Top two levels are valid, the deepest one is not.
        let mut stack = OperandStack::from_values([
            Value::Long(0),
            Value::Bool(true),
            Value::Double(4.5),
        ]);
        let sig = Signature::builder("THREE")
            .arg(ArgSpec::required("a", ValueType::String, "a"))
            .arg(ArgSpec::required("c", ValueType::Boolean, "c"))
            .arg(ArgSpec::required("d", ValueType::Number, "d"))
            .build()
            .unwrap();
        let before = stack.clone();

        let err = bind(&sig, &mut stack).unwrap_err();

        assert!(matches!(err, StackError::PositionalType { ref argument, .. } if argument == "a"));
        assert_eq!(stack, before);
    }

    #[test]
    fn test_display_override_used_in_messages() {
        let sig = Signature::builder("G")
            .arg(ArgSpec::required("gts", ValueType::List, "series").with_display("GTS"))
            .build()
            .unwrap();
        let mut stack = OperandStack::from_values([Value::Long(1)]);
        let err = bind(&sig, &mut stack).unwrap_err();
        assert!(err.to_string().contains("(a GTS)"));
    }
}

#[cfg(test)]
mod map_convention_tests {
    use super::*;

    #[test]
    fn test_scenario_map_supplies_everything() {
        let mut stack = OperandStack::from_values([
            Value::Long(5),
            map(&[("x", Value::Long(3)), ("y", Value::Long(99))]),
        ]);
        let args = bind(&x_required_y_optional(), &mut stack).unwrap();

        assert_eq!(args.get("x"), Some(&Value::Long(3)));
        assert_eq!(args.get("y"), Some(&Value::Long(99)));
        assert_eq!(stack.into_values(), vec![Value::Long(5)]);
    }

    #[test]
    fn test_scenario_missing_required_key() {
        let mut stack = OperandStack::from_values([map(&[("y", Value::Long(99))])]);
        let err = bind(&x_required_y_optional(), &mut stack).unwrap_err();

        assert!(matches!(
            err,
            StackError::MissingKey { ref key, ref expected, .. }
                if key == "x" && expected == "NUMBER"
        ));
        assert_eq!(
            err.to_string(),
            "The MAP that is on top of the stack does not have the argument 'x' \
             (of type NUMBER) that is required by F."
        );
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_defaults_fill_absent_optionals() {
        let mut stack = OperandStack::from_values([map(&[("x", Value::Double(1.5))])]);
        let args = bind(&x_required_y_optional(), &mut stack).unwrap();

        assert_eq!(args.get("x"), Some(&Value::Double(1.5)));
        assert_eq!(args.get("y"), Some(&Value::Long(10)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_mistyped_required_key() {
        let mut stack = OperandStack::from_values([map(&[("x", Value::from("3"))])]);
        let err = bind(&x_required_y_optional(), &mut stack).unwrap_err();

        assert!(matches!(err, StackError::KeyType { ref key, .. } if key == "x"));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_extra_keys_are_carried_through() {
        let mut stack = OperandStack::from_values([map(&[
            ("x", Value::Long(1)),
            ("extra", Value::Bool(true)),
        ])]);
        let args = bind(&x_required_y_optional(), &mut stack).unwrap();

        assert_eq!(args.get("extra"), Some(&Value::Bool(true)));
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_map_is_preferred_over_positional_values() {
        // Positional values are below the map and must not be consumed.
        let mut stack = OperandStack::from_values([
            Value::Long(1),
            map(&[("x", Value::Long(2))]),
        ]);
        let args = bind(&x_required_y_optional(), &mut stack).unwrap();
        assert_eq!(args.get("x"), Some(&Value::Long(2)));
        assert_eq!(stack.into_values(), vec![Value::Long(1)]);
    }

    #[test]
    fn test_single_map_typed_required_argument_binds_by_name() {
        let sig = Signature::builder("M")
            .arg(ArgSpec::required("config", ValueType::Map, "configuration"))
            .opt(ArgSpec::optional("strict", ValueType::Boolean, "strict", false))
            .build()
            .unwrap();
        let inner = map(&[("k", Value::Long(1))]);
        let mut stack = OperandStack::from_values([map(&[("config", inner.clone())])]);

        let args = bind(&sig, &mut stack).unwrap();
        assert_eq!(args.get("config"), Some(&inner));
        assert_eq!(args.get("strict"), Some(&Value::Bool(false)));
    }
}
