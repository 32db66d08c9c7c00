//! Registry of formatted functions, inspectable at runtime.
//!
//! ## Registry Invariant
//! Every registered function holds a [`Signature`](crate::signature::Signature)
//! that passed validation when it was built, so a function reachable through
//! the registry can never fail binding because of its own declaration.

use std::sync::Arc;

use im::HashMap;

use crate::diagnostics::StackError;
use crate::function::FormattedFunction;
use crate::functions;
use crate::stack::Stack;

#[derive(Default, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn FormattedFunction>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `function` under its own name. Names are unique.
    pub fn register(&mut self, function: Arc<dyn FormattedFunction>) -> Result<(), StackError> {
        let name = function.name().to_string();
        if self.functions.contains_key(&name) {
            return Err(StackError::configuration(
                &name,
                "a function with this name is already registered",
            ));
        }
        tracing::debug!(function = %name, "function registered");
        self.functions.insert(name, function);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn FormattedFunction>> {
        self.functions.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn FormattedFunction>> {
        self.functions.remove(name)
    }

    /// Registered names in lexical order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Looks `name` up and calls it against `stack`.
    pub fn call(&self, name: &str, stack: &mut dyn Stack) -> Result<(), StackError> {
        let function = self.get(name).ok_or_else(|| StackError::UnknownFunction {
            name: name.to_string(),
        })?;
        let _span = tracing::debug_span!("call", function = name).entered();
        function.call(stack)
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}

/// Builds the registry holding every built-in function.
///
/// # Example
/// ```rust
/// use stackbind::registry::build_default_registry;
/// let registry = build_default_registry().unwrap();
/// assert!(registry.has("ATAN2"));
/// ```
pub fn build_default_registry() -> Result<FunctionRegistry, StackError> {
    let mut registry = FunctionRegistry::new();
    functions::register_builtins(&mut registry)?;
    Ok(registry)
}
