//! Type tags used by argument declarations to test candidate stack values.

use crate::value::Value;
use std::fmt;

/// The closed set of types an argument can declare.
///
/// Each tag is a predicate over [`Value`] variants; binding reduces to a
/// variant match rather than an open-ended runtime type test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Any,
    Number,
    Long,
    Double,
    Boolean,
    String,
    List,
    Map,
}

impl ValueType {
    /// Returns true if `value` satisfies this type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackbind::types::ValueType;
    /// use stackbind::value::Value;
    /// assert!(ValueType::Number.accepts(&Value::Long(3)));
    /// assert!(ValueType::Number.accepts(&Value::Double(3.5)));
    /// assert!(!ValueType::Long.accepts(&Value::Double(3.0)));
    /// assert!(ValueType::Any.accepts(&Value::Nil));
    /// ```
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            ValueType::Any => true,
            ValueType::Number => value.is_number(),
            ValueType::Long => matches!(value, Value::Long(_)),
            ValueType::Double => matches!(value, Value::Double(_)),
            ValueType::Boolean => matches!(value, Value::Bool(_)),
            ValueType::String => matches!(value, Value::String(_)),
            ValueType::List => matches!(value, Value::List(_)),
            ValueType::Map => matches!(value, Value::Map(_)),
        }
    }

    /// Returns true if a map value would pass this type's test.
    pub fn accepts_map(self) -> bool {
        matches!(self, ValueType::Any | ValueType::Map)
    }

    /// The label shown in error messages and generated signatures.
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Any => "ANY",
            ValueType::Number => "NUMBER",
            ValueType::Long => "LONG",
            ValueType::Double => "DOUBLE",
            ValueType::Boolean => "BOOLEAN",
            ValueType::String => "STRING",
            ValueType::List => "LIST",
            ValueType::Map => "MAP",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
