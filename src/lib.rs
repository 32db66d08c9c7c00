//! # Stackbind
//!
//! Argument binding for the built-in functions of a stack-based scripting
//! engine. A function declares its required and optional arguments once, as a
//! [`Signature`]; every call then binds them off the operand stack, either
//! positionally or from a single MAP of named values, checks their types,
//! fills defaults, and hands the result to the function body. The same
//! declarations drive documentation generation.
//!
//! ```rust
//! use stackbind::prelude::*;
//!
//! let registry = build_default_registry().unwrap();
//! let mut stack = OperandStack::from_values([Value::Long(1), Value::Long(1)]);
//! registry.call("ATAN2", &mut stack).unwrap();
//! assert_eq!(stack.depth(), 1);
//! ```

pub use crate::diagnostics::{ErrorType, StackError};

pub mod arg;
pub mod binder;
pub mod bound;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod doc;
pub mod function;
pub mod functions;
pub mod registry;
pub mod signature;
pub mod snapshot;
pub mod stack;
pub mod types;
pub mod value;

pub mod prelude {
    pub use crate::arg::ArgSpec;
    pub use crate::binder::{bind, Call};
    pub use crate::bound::BoundArgs;
    pub use crate::doc::{DocGenerator, DocInfo};
    pub use crate::function::FormattedFunction;
    pub use crate::registry::{build_default_registry, FunctionRegistry};
    pub use crate::signature::{Signature, SignatureBuilder};
    pub use crate::stack::{Level, OperandStack, Stack};
    pub use crate::types::ValueType;
    pub use crate::value::Value;
    pub use crate::{ErrorType, StackError};
}
