//! # Built-in functions
//!
//! Each built-in declares its arguments once and relies on the binder for
//! extraction, type checks and defaults.
//!
//! - **`math`**: `ATAN2`, `ROUND`
//! - **`string`**: `PAD`
//! - **`stack`**: `DEPTH`

use std::sync::Arc;

use crate::diagnostics::StackError;
use crate::registry::FunctionRegistry;

pub mod math;
pub mod stack;
pub mod string;

/// Registers every built-in with `registry`.
pub fn register_builtins(registry: &mut FunctionRegistry) -> Result<(), StackError> {
    registry.register(Arc::new(math::Atan2::new()?))?;
    registry.register(Arc::new(math::Round::new()?))?;
    registry.register(Arc::new(string::Pad::new()?))?;
    registry.register(Arc::new(stack::Depth::new()))?;
    Ok(())
}
