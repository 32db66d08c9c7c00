//! Immutable, validated argument declarations of one function.
//!
//! A [`Signature`] can only be obtained through [`SignatureBuilder::build`],
//! which rejects inconsistent declarations. Configuration defects therefore
//! surface when a function is constructed, never on a script's first call.

use std::collections::HashSet;
use std::sync::Arc;

use crate::arg::ArgSpec;
use crate::diagnostics::StackError;

/// Required and optional arguments declared by a function.
///
/// Cloning is cheap; the argument lists are shared read-only between every
/// invocation of the function.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    function: Arc<str>,
    required: Arc<[ArgSpec]>,
    optional: Arc<[ArgSpec]>,
}

impl Signature {
    pub fn builder(function: impl Into<String>) -> SignatureBuilder {
        SignatureBuilder {
            function: function.into(),
            required: Vec::new(),
            optional: Vec::new(),
        }
    }

    /// A signature with no arguments at all.
    pub fn empty(function: impl Into<String>) -> Self {
        let function: String = function.into();
        Self {
            function: function.into(),
            required: Arc::from(Vec::new()),
            optional: Arc::from(Vec::new()),
        }
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn required(&self) -> &[ArgSpec] {
        &self.required
    }

    pub fn optional(&self) -> &[ArgSpec] {
        &self.optional
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }

    /// Looks an argument up by name among required then optional arguments.
    pub fn get(&self, name: &str) -> Option<&ArgSpec> {
        self.required
            .iter()
            .chain(self.optional.iter())
            .find(|arg| arg.name() == name)
    }

    /// Checks every declaration rule, returning the first violation.
    pub fn validate(&self) -> Result<(), StackError> {
        let function = self.function();
        let mut seen = HashSet::new();

        for arg in self.required.iter().chain(self.optional.iter()) {
            if arg.name().is_empty() {
                return Err(StackError::configuration(function, "argument names must not be empty"));
            }
            if !seen.insert(arg.name()) {
                return Err(StackError::configuration(
                    function,
                    format!("argument name '{}' is declared more than once", arg.name()),
                ));
            }
        }

        if let Some(arg) = self.required.iter().find(|arg| arg.is_optional()) {
            return Err(StackError::configuration(
                function,
                format!(
                    "required argument '{}' must not declare a default value",
                    arg.name()
                ),
            ));
        }

        if let Some(arg) = self.optional.iter().find(|arg| !arg.is_optional()) {
            return Err(StackError::configuration(
                function,
                format!("optional argument '{}' must declare a default value", arg.name()),
            ));
        }

        // A trailing map-typed required argument could not be told apart from
        // the map of named arguments.
        if self.required.len() > 1 && !self.optional.is_empty() {
            if let Some(last) = self.required.last() {
                if last.value_type().accepts_map() {
                    return Err(StackError::configuration(
                        function,
                        format!(
                            "the last required argument '{}' accepts a MAP, which is ambiguous \
                             when optional arguments are declared",
                            last.name()
                        ),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Accumulates argument declarations for a [`Signature`].
///
/// ```rust
/// use stackbind::arg::ArgSpec;
/// use stackbind::signature::Signature;
/// use stackbind::types::ValueType;
///
/// let sig = Signature::builder("ROUND")
///     .arg(ArgSpec::required("value", ValueType::Number, "Value to round"))
///     .opt(ArgSpec::optional("digits", ValueType::Long, "Decimal digits", 0))
///     .build()
///     .unwrap();
/// assert_eq!(sig.required().len(), 1);
/// assert!(sig.get("digits").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    function: String,
    required: Vec<ArgSpec>,
    optional: Vec<ArgSpec>,
}

impl SignatureBuilder {
    /// Appends a required argument. The last one declared is expected on top of the stack.
    pub fn arg(mut self, arg: ArgSpec) -> Self {
        self.required.push(arg);
        self
    }

    pub fn opt(mut self, arg: ArgSpec) -> Self {
        self.optional.push(arg);
        self
    }

    pub fn build(self) -> Result<Signature, StackError> {
        let signature = Signature {
            function: self.function.into(),
            required: self.required.into(),
            optional: self.optional.into(),
        };
        signature.validate()?;
        tracing::trace!(
            function = signature.function(),
            required = signature.required.len(),
            optional = signature.optional.len(),
            "signature declared"
        );
        Ok(signature)
    }
}
