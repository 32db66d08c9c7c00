//! Settings for documentation output and logging, read from YAML.
//!
//! Every field has a default, so an empty file (or no file) is valid.
//!
//! ```yaml
//! doc:
//!   line_separator: "\n"
//!   macro_symbol: macro
//!   version: "1.0"
//! log:
//!   filter: stackbind=debug
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::StackError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub doc: DocSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocSettings {
    /// Appended after every line of the doc macro.
    pub line_separator: String,
    /// Symbol the doc macro stores the documented function under.
    pub macro_symbol: String,
    /// Used as `version` when a function declares none.
    pub version: String,
}

impl Default for DocSettings {
    fn default() -> Self {
        Self {
            line_separator: "\n".to_string(),
            macro_symbol: "macro".to_string(),
            version: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// `EnvFilter` directives used when `STACKBIND_LOG` is unset.
    pub filter: Option<String>,
}

impl Settings {
    pub fn from_yaml_str(text: &str) -> Result<Self, StackError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| StackError::Settings {
            message: format!("invalid settings: {}", e),
            source: Some(Box::new(e)),
        })
    }

    pub fn load(path: &Path) -> Result<Self, StackError> {
        let text = std::fs::read_to_string(path).map_err(|e| StackError::Settings {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(e)),
        })?;
        let settings = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }
}
