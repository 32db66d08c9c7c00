//! Unified error type for argument binding, stack access, and the tooling around them.
//!
//! # Overview
//!
//! Errors fall into two families:
//!
//! - **Configuration errors** describe a function whose own declaration is
//!   inconsistent (duplicate argument names, a required argument carrying a
//!   default, an ambiguous trailing map argument). They surface when the
//!   signature is built, before the function can be registered, and are never
//!   recoverable by a script.
//! - **Script errors** describe a caller mistake: too few levels on the stack,
//!   a value of the wrong type, a missing map key. A surrounding
//!   error-handling construct may catch and recover from them.
//!
//! Message-only errors are built with [`err_msg!`](crate::err_msg).

use miette::Diagnostic;
use thiserror::Error;

use crate::stack::Level;

/// Type-safe error classification used by callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A function declaration is internally inconsistent.
    Configuration,
    /// The calling script passed bad operands.
    Script,
    /// Settings could not be read or parsed.
    Settings,
    /// Engine bugs.
    Internal,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Configuration => "Configuration",
            ErrorType::Script => "Script",
            ErrorType::Settings => "Settings",
            ErrorType::Internal => "Internal",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StackError {
    #[error("{function} is incorrectly declared: {message}")]
    Configuration { function: String, message: String },

    #[error(
        "{function} expects to find {required} arguments off the top of the stack, \
         but the stack contains only {available} levels."
    )]
    Underflow {
        function: String,
        required: usize,
        available: usize,
    },

    #[error("{function} expects to find a '{argument}' (a {expected}) {level}.")]
    PositionalType {
        function: String,
        argument: String,
        expected: String,
        level: Level,
    },

    #[error(
        "The MAP that is on top of the stack does not have the argument '{key}' \
         (of type {expected}) that is required by {function}."
    )]
    MissingKey {
        function: String,
        key: String,
        expected: String,
    },

    #[error("{function} expects the argument '{key}' to be a {expected}.")]
    KeyType {
        function: String,
        key: String,
        expected: String,
    },

    #[error(
        "{function} expects a MAP on top of the stack. \
         To use default argument values, an empty MAP is expected."
    )]
    ExpectedMap { function: String },

    #[error("Empty stack: nothing {level}, the stack contains {depth} levels.")]
    EmptyStack { level: Level, depth: usize },

    #[error("Unknown function '{name}'.")]
    UnknownFunction { name: String },

    #[error("Evaluation error: {message}")]
    Eval { message: String },

    #[error("Settings error: {message}")]
    Settings {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl StackError {
    /// Returns the type-safe classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            StackError::Configuration { .. } => ErrorType::Configuration,
            StackError::Underflow { .. }
            | StackError::PositionalType { .. }
            | StackError::MissingKey { .. }
            | StackError::KeyType { .. }
            | StackError::ExpectedMap { .. }
            | StackError::EmptyStack { .. }
            | StackError::UnknownFunction { .. }
            | StackError::Eval { .. } => ErrorType::Script,
            StackError::Settings { .. } => ErrorType::Settings,
            StackError::Internal { .. } => ErrorType::Internal,
        }
    }

    /// Script errors may be caught by the calling script; everything else aborts.
    pub fn is_recoverable(&self) -> bool {
        self.error_type() == ErrorType::Script
    }

    /// Name of the function the error is attributed to, when there is one.
    pub fn function(&self) -> Option<&str> {
        match self {
            StackError::Configuration { function, .. }
            | StackError::Underflow { function, .. }
            | StackError::PositionalType { function, .. }
            | StackError::MissingKey { function, .. }
            | StackError::KeyType { function, .. }
            | StackError::ExpectedMap { function } => Some(function),
            StackError::UnknownFunction { name } => Some(name),
            _ => None,
        }
    }

    pub const fn code_suffix(&self) -> &'static str {
        match self {
            StackError::Configuration { .. } => "configuration",
            StackError::Underflow { .. } => "underflow",
            StackError::PositionalType { .. } => "positional_type",
            StackError::MissingKey { .. } => "missing_key",
            StackError::KeyType { .. } => "key_type",
            StackError::ExpectedMap { .. } => "expected_map",
            StackError::EmptyStack { .. } => "empty_stack",
            StackError::UnknownFunction { .. } => "unknown_function",
            StackError::Eval { .. } => "eval",
            StackError::Settings { .. } => "settings",
            StackError::Internal { .. } => "internal",
        }
    }

    pub(crate) fn configuration(function: &str, message: impl Into<String>) -> Self {
        StackError::Configuration {
            function: function.to_string(),
            message: message.into(),
        }
    }
}

impl Diagnostic for StackError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let phase = match self.error_type() {
            ErrorType::Configuration => "declaration",
            ErrorType::Script => "bind",
            ErrorType::Settings => "settings",
            ErrorType::Internal => "internal",
        };
        Some(Box::new(format!("stackbind::{}::{}", phase, self.code_suffix())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let help = match self {
            StackError::Underflow { required, .. } => {
                format!("push {} values, or a MAP holding every argument by name", required)
            }
            StackError::ExpectedMap { .. } => {
                "push a MAP of named arguments, e.g. {} for all defaults".to_string()
            }
            StackError::MissingKey { key, .. } => format!("add the key '{}' to the MAP", key),
            StackError::Configuration { .. } => {
                "this is a defect in the function's declaration, not in the calling script"
                    .to_string()
            }
            StackError::Internal { .. } => {
                "This is an internal engine error. Please report this as a bug.".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Constructs a message-only `StackError` variant (`Eval` or `Internal`).
///
/// ```rust
/// use stackbind::{err_msg, StackError};
/// let err: StackError = err_msg!(Eval, "width must be positive, got {}", -1);
/// assert_eq!(err.to_string(), "Evaluation error: width must be positive, got -1");
/// ```
#[macro_export]
macro_rules! err_msg {
    ($variant:ident, $($arg:tt)+) => {
        $crate::StackError::$variant {
            message: format!($($arg)+),
        }
    };
}
