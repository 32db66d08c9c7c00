//! The operand stack consumed by bound functions.
//!
//! Level 0 is the top of the stack. The binder only ever reads levels and pops
//! from the top; it never retains a reference to the stack beyond one call.

use std::fmt;

use crate::diagnostics::StackError;
use crate::value::Value;

/// A position on the stack counted from the top, 0 being the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(pub usize);

/// Renders the ordinal wording used in positional error messages.
///
/// ```rust
/// use stackbind::stack::Level;
/// assert_eq!(Level(0).to_string(), "on top of the stack");
/// assert_eq!(Level(1).to_string(), "below the top of the stack");
/// assert_eq!(Level(2).to_string(), "on 3rd position counting from the top of the stack");
/// assert_eq!(Level(6).to_string(), "on 7th position counting from the top of the stack");
/// ```
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "on top of the stack"),
            1 => write!(f, "below the top of the stack"),
            2 => write!(f, "on 3rd position counting from the top of the stack"),
            n => write!(f, "on {}th position counting from the top of the stack", n + 1),
        }
    }
}

/// Contract the binder consumes. Owned by the calling execution context.
pub trait Stack {
    fn depth(&self) -> usize;

    /// Returns the value at `level`, 0 being the top.
    fn get(&self, level: usize) -> Result<&Value, StackError>;

    fn pop(&mut self) -> Result<Value, StackError>;

    fn push(&mut self, value: Value);

    fn peek(&self) -> Result<&Value, StackError> {
        self.get(0)
    }

    fn is_empty(&self) -> bool {
        self.depth() == 0
    }
}

/// Vec-backed stack; the last element is the top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandStack {
    values: Vec<Value>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a stack by pushing `values` in order, so the last one ends on top.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Iterates from the top of the stack downwards.
    pub fn iter_from_top(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().rev()
    }

    /// Consumes the stack, returning values bottom first.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl Stack for OperandStack {
    fn depth(&self) -> usize {
        self.values.len()
    }

    fn get(&self, level: usize) -> Result<&Value, StackError> {
        let depth = self.values.len();
        if level >= depth {
            return Err(StackError::EmptyStack {
                level: Level(level),
                depth,
            });
        }
        Ok(&self.values[depth - 1 - level])
    }

    fn pop(&mut self) -> Result<Value, StackError> {
        self.values.pop().ok_or(StackError::EmptyStack {
            level: Level(0),
            depth: 0,
        })
    }

    fn push(&mut self, value: Value) {
        self.values.push(value);
    }
}

/// One level per line, deepest first, the top on the last line.
impl fmt::Display for OperandStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            let level = self.values.len() - i;
            writeln!(f, "{}: {}", level, value)?;
        }
        Ok(())
    }
}
