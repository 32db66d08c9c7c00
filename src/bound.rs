//! The resolved name → value mapping handed to a function body.

use im::OrdMap;

use crate::diagnostics::StackError;
use crate::err_msg;
use crate::value::Value;

/// Arguments resolved for one invocation.
///
/// Holds every required argument and every optional one (caller value or
/// declared default). Built fresh per call and dropped after the body runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundArgs {
    function: String,
    values: OrdMap<String, Value>,
}

impl BoundArgs {
    pub fn new(function: impl Into<String>, values: OrdMap<String, Value>) -> Self {
        Self {
            function: function.into(),
            values,
        }
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn into_inner(self) -> OrdMap<String, Value> {
        self.values
    }

    pub(crate) fn insert_default(&mut self, name: &str, value: &Value) -> bool {
        if self.values.contains_key(name) {
            return false;
        }
        self.values.insert(name.to_string(), value.clone());
        true
    }

    /// Returns the bound value, failing if the body asks for an undeclared name.
    pub fn value(&self, name: &str) -> Result<&Value, StackError> {
        self.values.get(name).ok_or_else(|| {
            err_msg!(
                Internal,
                "{} has no bound argument named '{}'",
                self.function,
                name
            )
        })
    }

    pub fn number(&self, name: &str) -> Result<f64, StackError> {
        let value = self.value(name)?;
        value
            .as_number()
            .ok_or_else(|| self.mismatch(name, "NUMBER", value))
    }

    pub fn long(&self, name: &str) -> Result<i64, StackError> {
        let value = self.value(name)?;
        value.as_long().ok_or_else(|| self.mismatch(name, "LONG", value))
    }

    pub fn double(&self, name: &str) -> Result<f64, StackError> {
        let value = self.value(name)?;
        value.as_double().ok_or_else(|| self.mismatch(name, "DOUBLE", value))
    }

    pub fn boolean(&self, name: &str) -> Result<bool, StackError> {
        let value = self.value(name)?;
        value.as_bool().ok_or_else(|| self.mismatch(name, "BOOLEAN", value))
    }

    pub fn string(&self, name: &str) -> Result<&str, StackError> {
        let value = self.value(name)?;
        value.as_str().ok_or_else(|| self.mismatch(name, "STRING", value))
    }

    pub fn list(&self, name: &str) -> Result<&[Value], StackError> {
        let value = self.value(name)?;
        value.as_list().ok_or_else(|| self.mismatch(name, "LIST", value))
    }

    pub fn map(&self, name: &str) -> Result<&OrdMap<String, Value>, StackError> {
        let value = self.value(name)?;
        value.as_map().ok_or_else(|| self.mismatch(name, "MAP", value))
    }

    fn mismatch(&self, name: &str, expected: &str, found: &Value) -> StackError {
        err_msg!(
            Eval,
            "{} expects the argument '{}' to be a {}, found a {}.",
            self.function,
            name,
            expected,
            found.type_name()
        )
    }
}
