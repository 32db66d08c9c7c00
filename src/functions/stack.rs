//! # Stack functions

use crate::arg::ArgSpec;
use crate::bound::BoundArgs;
use crate::diagnostics::StackError;
use crate::doc::DocInfo;
use crate::function::FormattedFunction;
use crate::signature::Signature;
use crate::stack::Stack;
use crate::types::ValueType;
use crate::value::Value;

/// Pushes the depth of the stack. Declares no arguments and consumes nothing.
pub struct Depth {
    signature: Signature,
}

impl Depth {
    pub const NAME: &'static str = "DEPTH";

    pub fn new() -> Self {
        Self {
            signature: Signature::empty(Self::NAME),
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self::new()
    }
}

impl FormattedFunction for Depth {
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn apply(&self, _args: BoundArgs, stack: &mut dyn Stack) -> Result<(), StackError> {
        let depth = stack.depth() as i64;
        stack.push(Value::Long(depth));
        Ok(())
    }

    fn description(&self) -> &str {
        "Pushes the number of levels on the stack."
    }

    fn unit_tests(&self) -> &[&str] {
        &["CLEAR 1 2 DEPTH 2 == ASSERT"]
    }

    fn outputs(&self) -> Vec<ArgSpec> {
        vec![ArgSpec::required("depth", ValueType::Long, "Depth before the call.")]
    }

    fn doc_info(&self) -> DocInfo {
        DocInfo::default().since("1.0.0").tags(["stack"])
    }
}
