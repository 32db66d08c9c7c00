//! # Mathematical functions
//!
//! - `ATAN2`: two required numbers, positional or named.
//! - `ROUND`: one required number and an optional digit count.

use crate::arg::ArgSpec;
use crate::bound::BoundArgs;
use crate::diagnostics::StackError;
use crate::doc::DocInfo;
use crate::err_msg;
use crate::function::FormattedFunction;
use crate::signature::Signature;
use crate::stack::Stack;
use crate::types::ValueType;
use crate::value::Value;

/// Arc tangent of `y / x`, using the signs of both to pick the quadrant.
///
/// Usage: `y x ATAN2` or `{ 'y' y 'x' x } ATAN2`
///
/// Returns: DOUBLE in radians, within `[-pi, pi]`.
pub struct Atan2 {
    signature: Signature,
}

impl Atan2 {
    pub const NAME: &'static str = "ATAN2";

    pub fn new() -> Result<Self, StackError> {
        let signature = Signature::builder(Self::NAME)
            .arg(ArgSpec::required("y", ValueType::Number, "Ordinate of the point."))
            .arg(ArgSpec::required("x", ValueType::Number, "Abscissa of the point."))
            .build()?;
        Ok(Self { signature })
    }
}

impl FormattedFunction for Atan2 {
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn apply(&self, args: BoundArgs, stack: &mut dyn Stack) -> Result<(), StackError> {
        let y = args.number("y")?;
        let x = args.number("x")?;
        stack.push(Value::Double(y.atan2(x)));
        Ok(())
    }

    fn description(&self) -> &str {
        "Computes the angle theta of the polar coordinates (r, theta) of the point (x, y). \
         The last parameter, x, is expected on top of the stack."
    }

    fn unit_tests(&self) -> &[&str] {
        &[
            "1 1 ATAN2 PI 4 / - ABS 1e-12 < ASSERT",
            "{ 'y' 0 'x' -1 } ATAN2 PI == ASSERT",
        ]
    }

    fn outputs(&self) -> Vec<ArgSpec> {
        vec![ArgSpec::required("theta", ValueType::Double, "Angle in radians.")]
    }

    fn doc_info(&self) -> DocInfo {
        DocInfo::default()
            .since("1.0.0")
            .tags(["math"])
            .related(["ROUND"])
    }
}

/// Rounds a number to a given count of decimal digits.
///
/// Usage: `value ROUND` or `{ 'value' value 'digits' n } ROUND`
///
/// Returns: a LONG input with `digits >= 0` unchanged. Otherwise LONG when
/// `digits <= 0` and DOUBLE when `digits > 0`. A negative digit count rounds
/// to tens, hundreds, and so on.
pub struct Round {
    signature: Signature,
}

impl Round {
    pub const NAME: &'static str = "ROUND";
    const MAX_DIGITS: i64 = 15;

    pub fn new() -> Result<Self, StackError> {
        let signature = Signature::builder(Self::NAME)
            .arg(ArgSpec::required("value", ValueType::Number, "Number to round."))
            .opt(ArgSpec::optional(
                "digits",
                ValueType::Long,
                "Count of decimal digits to keep.",
                0,
            ))
            .build()?;
        Ok(Self { signature })
    }
}

impl FormattedFunction for Round {
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn apply(&self, args: BoundArgs, stack: &mut dyn Stack) -> Result<(), StackError> {
        let digits = args.long("digits")?;
        if digits.abs() > Self::MAX_DIGITS {
            return Err(err_msg!(
                Eval,
                "{} expects 'digits' between -{} and {}, got {}.",
                Self::NAME,
                Self::MAX_DIGITS,
                Self::MAX_DIGITS,
                digits
            ));
        }

        if let (Some(n), true) = (args.value("value")?.as_long(), digits >= 0) {
            stack.push(Value::Long(n));
            return Ok(());
        }

        let value = args.number("value")?;
        if !value.is_finite() {
            return Err(err_msg!(
                Eval,
                "{} expects a finite 'value', got {}.",
                Self::NAME,
                Value::Double(value)
            ));
        }

        let factor = 10f64.powi(digits as i32);
        let scaled = value * factor;
        if digits > 0 {
            // Past 2^53 a double has no fractional digits left to round.
            let rounded = if scaled.is_finite() {
                scaled.round() / factor
            } else {
                value
            };
            stack.push(Value::Double(rounded));
            return Ok(());
        }

        let rounded = scaled.round() / factor;
        if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
            return Err(err_msg!(
                Eval,
                "{} cannot fit {} in a LONG.",
                Self::NAME,
                Value::Double(value)
            ));
        }
        stack.push(Value::Long(rounded as i64));
        Ok(())
    }

    fn description(&self) -> &str {
        "Rounds a number half away from zero, keeping the requested count of decimal digits."
    }

    fn unit_tests(&self) -> &[&str] {
        &["2.5 ROUND 3 == ASSERT", "{ 'value' 3.14159 'digits' 2 } ROUND 3.14 == ASSERT"]
    }

    fn outputs(&self) -> Vec<ArgSpec> {
        vec![ArgSpec::required("rounded", ValueType::Number, "Rounded value.")]
    }

    fn doc_info(&self) -> DocInfo {
        DocInfo::default().since("1.0.0").tags(["math"])
    }
}
