//! Functions whose arguments are bound through the formatted calling convention.

use crate::arg::ArgSpec;
use crate::binder;
use crate::bound::BoundArgs;
use crate::diagnostics::StackError;
use crate::doc::DocInfo;
use crate::signature::Signature;
use crate::stack::Stack;

/// A built-in whose parameters are declared once and bound on every call.
///
/// Implementors declare a [`Signature`] at construction and write their logic
/// in [`apply`](FormattedFunction::apply), which receives the resolved
/// arguments and the stack with those arguments already consumed. The body is
/// responsible for pushing its results.
pub trait FormattedFunction: Send + Sync {
    fn signature(&self) -> &Signature;

    fn apply(&self, args: BoundArgs, stack: &mut dyn Stack) -> Result<(), StackError>;

    fn name(&self) -> &str {
        self.signature().function()
    }

    /// Free-form description used as `desc` in generated documentation.
    fn description(&self) -> &str {
        ""
    }

    /// Script snippets appended to the doc macro; loading the macro runs them.
    fn unit_tests(&self) -> &[&str] {
        &[]
    }

    /// Outputs are documentation only and never checked at runtime.
    fn outputs(&self) -> Vec<ArgSpec> {
        Vec::new()
    }

    fn doc_info(&self) -> DocInfo {
        DocInfo::default()
    }

    /// Binds arguments off `stack`, then runs the body.
    fn call(&self, stack: &mut dyn Stack) -> Result<(), StackError> {
        let args = binder::bind(self.signature(), stack)?;
        self.apply(args, stack)
    }
}
