//! # Argument binding
//!
//! Turns the top of an operand stack into a [`BoundArgs`] mapping according to
//! a function's [`Signature`]. Two calling conventions exist:
//!
//! - **Positional**: the required arguments sit on the stack, the last declared
//!   one on top. Optional arguments take their defaults.
//! - **Map**: a single MAP on top of the stack names every required argument
//!   and any optional one.
//!
//! A function declaring only optional arguments accepts the map convention
//! alone. A function declaring nothing consumes nothing.
//!
//! Every check runs before the first pop, so a failed bind leaves the stack
//! exactly as it found it. Levels below the consumed arguments are left for
//! the function body.

use im::OrdMap;

use crate::bound::BoundArgs;
use crate::diagnostics::StackError;
use crate::signature::Signature;
use crate::stack::{Level, Stack};
use crate::value::Value;

/// The convention a call uses, resolved from the value on top of the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call<'a> {
    Positional,
    Map(&'a OrdMap<String, Value>),
}

impl<'a> Call<'a> {
    /// A MAP on top selects the map convention; anything else, including an
    /// empty stack, is positional.
    pub fn detect<S: Stack + ?Sized>(stack: &'a S) -> Self {
        match stack.peek() {
            Ok(Value::Map(map)) => Call::Map(map),
            _ => Call::Positional,
        }
    }
}

/// Binds the arguments of `signature` from the top of `stack`.
///
/// On success the consumed levels have been popped; on failure the stack is
/// untouched.
pub fn bind<S: Stack + ?Sized>(
    signature: &Signature,
    stack: &mut S,
) -> Result<BoundArgs, StackError> {
    debug_assert!(signature.validate().is_ok());
    let function = signature.function();

    if signature.is_empty() {
        tracing::trace!(function, "no arguments declared");
        return Ok(BoundArgs::new(function, OrdMap::new()));
    }

    let mut args = match Call::detect(stack) {
        Call::Map(map) => {
            check_map(signature, map)?;
            tracing::debug!(function, keys = map.len(), "binding named arguments");
            match stack.pop()? {
                Value::Map(map) => BoundArgs::new(function, map),
                other => {
                    return Err(crate::err_msg!(
                        Internal,
                        "{} popped a {} where a MAP was checked",
                        function,
                        other.type_name()
                    ))
                }
            }
        }
        Call::Positional if signature.required().is_empty() => {
            return Err(StackError::ExpectedMap {
                function: function.to_string(),
            });
        }
        Call::Positional => bind_positional(signature, stack)?,
    };

    for arg in signature.optional() {
        if let Some(default) = arg.default_value() {
            if args.insert_default(arg.name(), default) {
                tracing::trace!(function, argument = arg.name(), "default applied");
            }
        }
    }

    Ok(args)
}

fn check_map(signature: &Signature, map: &OrdMap<String, Value>) -> Result<(), StackError> {
    let function = signature.function();

    for arg in signature.required() {
        match map.get(arg.name()) {
            None => {
                return Err(StackError::MissingKey {
                    function: function.to_string(),
                    key: arg.name().to_string(),
                    expected: arg.display_type().to_string(),
                })
            }
            Some(value) if !arg.accepts(value) => {
                return Err(StackError::KeyType {
                    function: function.to_string(),
                    key: arg.name().to_string(),
                    expected: arg.display_type().to_string(),
                })
            }
            Some(_) => {}
        }
    }

    for arg in signature.optional() {
        if let Some(value) = map.get(arg.name()) {
            if !arg.accepts(value) {
                return Err(StackError::KeyType {
                    function: function.to_string(),
                    key: arg.name().to_string(),
                    expected: arg.display_type().to_string(),
                });
            }
        }
    }

    Ok(())
}

fn bind_positional<S: Stack + ?Sized>(
    signature: &Signature,
    stack: &mut S,
) -> Result<BoundArgs, StackError> {
    let function = signature.function();
    let required = signature.required();

    if stack.depth() < required.len() {
        return Err(StackError::Underflow {
            function: function.to_string(),
            required: required.len(),
            available: stack.depth(),
        });
    }

    for (level, arg) in required.iter().rev().enumerate() {
        let candidate = stack.get(level)?;
        if !arg.accepts(candidate) {
            return Err(StackError::PositionalType {
                function: function.to_string(),
                argument: arg.name().to_string(),
                expected: arg.display_type().to_string(),
                level: Level(level),
            });
        }
    }

    let mut values = OrdMap::new();
    for arg in required.iter().rev() {
        values.insert(arg.name().to_string(), stack.pop()?);
    }
    tracing::debug!(function, consumed = required.len(), "bound positional arguments");

    Ok(BoundArgs::new(function, values))
}
