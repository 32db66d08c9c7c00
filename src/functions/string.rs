//! # String functions
//!
//! `PAD` declares only optional arguments, so it is always called with a MAP.

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

/// Left-pads a string to a width with a fill character.
///
/// Usage: `{ 'text' 'ab' 'width' 4 'fill' '.' } PAD` or `{ } PAD`
///
/// Returns: STRING. Text already wider than `width` is pushed unchanged.
pub struct Pad {
    signature: Signature,
}

impl Pad {
    pub const NAME: &'static str = "PAD";

    pub fn new() -> Result<Self, StackError> {
        let signature = Signature::builder(Self::NAME)
            .opt(ArgSpec::optional("text", ValueType::String, "Text to pad.", ""))
            .opt(ArgSpec::optional("width", ValueType::Long, "Minimum width in characters.", 8))
            .opt(ArgSpec::optional("fill", ValueType::String, "Single fill character.", " "))
            .build()?;
        Ok(Self { signature })
    }
}

impl FormattedFunction for Pad {
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn apply(&self, args: BoundArgs, stack: &mut dyn Stack) -> Result<(), StackError> {
        let text = args.string("text")?;
        let width = args.long("width")?;
        let fill = args.string("fill")?;

        let mut chars = fill.chars();
        let fill = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(err_msg!(
                    Eval,
                    "{} expects 'fill' to be a single character, got '{}'.",
                    Self::NAME,
                    fill
                ))
            }
        };
        let width = usize::try_from(width).map_err(|_| {
            err_msg!(Eval, "{} expects a non-negative 'width', got {}.", Self::NAME, width)
        })?;

        let len = text.chars().count();
        let mut padded = String::with_capacity(width.max(len));
        padded.extend(std::iter::repeat(fill).take(width.saturating_sub(len)));
        padded.push_str(text);
        stack.push(Value::String(padded));
        Ok(())
    }

    fn description(&self) -> &str {
        "Pads a string on the left with a fill character until it reaches a minimum width."
    }

    fn unit_tests(&self) -> &[&str] {
        &["{ 'text' '7' 'width' 3 'fill' '0' } PAD '007' == ASSERT"]
    }

    fn outputs(&self) -> Vec<ArgSpec> {
        vec![ArgSpec::required("padded", ValueType::String, "Padded text.")]
    }

    fn doc_info(&self) -> DocInfo {
        DocInfo::default().since("1.0.0").tags(["strings"])
    }
}
