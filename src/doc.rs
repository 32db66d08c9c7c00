//! # Documentation generation
//!
//! Builds the metadata record of a formatted function and the doc macro text
//! that external tooling loads. Both are derived from the function's
//! [`Signature`](crate::signature::Signature) and never touch a stack.
//!
//! The record is a MAP with the keys `name`, `since`, `deprecated`, `deleted`,
//! `version`, `tags`, `desc`, `related`, `examples`, `conf`, `params` and
//! `sig`. `sig` holds two `[ input output ]` pairs: the positional form and
//! the map form.

use im::OrdMap;

use crate::arg::ArgSpec;
use crate::config::DocSettings;
use crate::function::FormattedFunction;
use crate::snapshot;
use crate::value::Value;

/// Lifecycle and cross-reference metadata of a documented function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocInfo {
    pub since: String,
    pub deprecated: String,
    pub deleted: String,
    pub version: String,
    pub tags: Vec<String>,
    pub related: Vec<String>,
    pub examples: Vec<String>,
    pub conf: Vec<String>,
}

impl DocInfo {
    pub fn since(mut self, version: impl Into<String>) -> Self {
        self.since = version.into();
        self
    }

    pub fn deprecated(mut self, version: impl Into<String>) -> Self {
        self.deprecated = version.into();
        self
    }

    pub fn deleted(mut self, version: impl Into<String>) -> Self {
        self.deleted = version.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related = related.into_iter().map(Into::into).collect();
        self
    }

    pub fn examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    pub fn conf<I, S>(mut self, conf: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conf = conf.into_iter().map(Into::into).collect();
        self
    }
}

/// Renders metadata records and doc macros.
#[derive(Debug, Clone, Default)]
pub struct DocGenerator {
    settings: DocSettings,
}

impl DocGenerator {
    pub fn new(settings: DocSettings) -> Self {
        Self { settings }
    }

    /// Metadata record using the function's own [`DocInfo`] and outputs.
    pub fn info(&self, function: &dyn FormattedFunction) -> Value {
        self.info_with(function, &function.doc_info(), &function.outputs())
    }

    /// Metadata record with explicit lifecycle data and outputs.
    pub fn info_with(
        &self,
        function: &dyn FormattedFunction,
        meta: &DocInfo,
        outputs: &[ArgSpec],
    ) -> Value {
        let signature = function.signature();
        let version = if meta.version.is_empty() {
            &self.settings.version
        } else {
            &meta.version
        };

        let mut info = OrdMap::new();
        info.insert("name".to_string(), Value::from(function.name()));
        info.insert("since".to_string(), Value::from(meta.since.as_str()));
        info.insert("deprecated".to_string(), Value::from(meta.deprecated.as_str()));
        info.insert("deleted".to_string(), Value::from(meta.deleted.as_str()));
        info.insert("version".to_string(), Value::from(version.as_str()));
        info.insert("tags".to_string(), string_list(&meta.tags));
        info.insert("desc".to_string(), Value::from(function.description()));
        info.insert("related".to_string(), string_list(&meta.related));
        info.insert("examples".to_string(), string_list(&meta.examples));
        info.insert("conf".to_string(), string_list(&meta.conf));

        let params: OrdMap<String, Value> = signature
            .required()
            .iter()
            .chain(signature.optional())
            .chain(outputs)
            .map(|arg| (arg.name().to_string(), Value::from(arg.doc())))
            .collect();
        info.insert("params".to_string(), Value::Map(params));

        let output = Value::List(
            outputs
                .iter()
                .map(|arg| Value::from(arg.signature_entry()))
                .collect(),
        );

        let mut positional = Vec::with_capacity(signature.required().len() + 1);
        if signature.required().is_empty() && !signature.optional().is_empty() {
            positional.push(Value::empty_map());
        }
        positional.extend(
            signature
                .required()
                .iter()
                .map(|arg| Value::from(arg.signature_entry())),
        );

        let named: OrdMap<String, Value> = signature
            .required()
            .iter()
            .chain(signature.optional())
            .map(|arg| (arg.name().to_string(), Value::from(arg.signature_entry())))
            .collect();

        let sig = vec![
            Value::List(vec![Value::List(positional), output.clone()]),
            Value::List(vec![Value::List(vec![Value::Map(named)]), output]),
        ];
        info.insert("sig".to_string(), Value::List(sig));

        Value::Map(info)
    }

    /// Doc macro text using the function's own [`DocInfo`] and outputs.
    pub fn mc2(&self, function: &dyn FormattedFunction) -> String {
        self.mc2_with(function, &function.doc_info(), &function.outputs())
    }

    /// Doc macro text: a macro pushing the record and calling `INFO` and the
    /// function, stored under the macro symbol, then the unit tests, then a
    /// reference to the stored macro.
    pub fn mc2_with(
        &self,
        function: &dyn FormattedFunction,
        meta: &DocInfo,
        outputs: &[ArgSpec],
    ) -> String {
        let sep = &self.settings.line_separator;
        let symbol = &self.settings.macro_symbol;
        let info = self.info_with(function, meta, outputs);

        let mut mc2 = String::new();
        mc2.push_str("<%");
        mc2.push_str(sep);
        snapshot::write_value(&mut mc2, &info);
        mc2.push_str(sep);
        mc2.push_str("INFO");
        mc2.push_str(sep);
        mc2.push_str(function.name());
        mc2.push_str(sep);
        mc2.push_str("%>");
        mc2.push_str(sep);
        mc2.push_str(&format!("'{}' STORE", symbol));
        mc2.push_str(sep);
        mc2.push_str("// Unit tests");
        mc2.push_str(sep);
        for test in function.unit_tests() {
            mc2.push_str(test);
            mc2.push_str(sep);
        }
        mc2.push('$');
        mc2.push_str(symbol);
        mc2.push_str(sep);

        tracing::debug!(function = function.name(), bytes = mc2.len(), "doc macro generated");
        mc2
    }
}

fn string_list(items: &[String]) -> Value {
    Value::List(items.iter().map(|s| Value::from(s.as_str())).collect())
}
