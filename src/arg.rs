//! Declaration of a single function parameter.

use crate::types::ValueType;
use crate::value::Value;

/// Describes one parameter of a formatted function.
///
/// A parameter is optional exactly when it carries a default value. Outputs
/// declared for documentation reuse this type as required entries.
///
/// # Examples
///
/// ```rust
/// use stackbind::arg::ArgSpec;
/// use stackbind::types::ValueType;
/// use stackbind::value::Value;
///
/// let x = ArgSpec::required("x", ValueType::Number, "Abscissa");
/// assert!(!x.is_optional());
/// assert_eq!(x.signature_entry(), "x:NUMBER");
///
/// let digits = ArgSpec::optional("digits", ValueType::Long, "Decimal digits", 0);
/// assert_eq!(digits.default_value(), Some(&Value::Long(0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArgSpec {
    name: String,
    value_type: ValueType,
    doc: String,
    default: Option<Value>,
    display: Option<String>,
}

impl ArgSpec {
    pub fn required(
        name: impl Into<String>,
        value_type: ValueType,
        doc: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value_type,
            doc: doc.into(),
            default: None,
            display: None,
        }
    }

    pub fn optional(
        name: impl Into<String>,
        value_type: ValueType,
        doc: impl Into<String>,
        default: impl Into<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            value_type,
            doc: doc.into(),
            default: Some(default.into()),
            display: None,
        }
    }

    /// Overrides the label used in messages and signatures (defaults to the type name).
    pub fn with_display(mut self, label: impl Into<String>) -> Self {
        self.display = Some(label.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }

    pub fn display_type(&self) -> &str {
        self.display.as_deref().unwrap_or(self.value_type.name())
    }

    pub fn accepts(&self, value: &Value) -> bool {
        self.value_type.accepts(value)
    }

    /// `name:TYPE`, the form used in generated signatures.
    pub fn signature_entry(&self) -> String {
        format!("{}:{}", self.name, self.display_type())
    }
}
