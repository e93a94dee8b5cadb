//! Rule definitions and YAML rule files
//!
//! A rule file is a YAML sequence:
//!
//! ```yaml
//! - name: motd
//!   module: file
//!   params:
//!     target: /etc/motd
//!     content: "managed host"
//!     mode: "0644"
//! - module: log
//!   params:
//!     message: "motd written"
//! ```
//!
//! Rules without a name are called `<module>-<position>`, counting from 1.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::modules::params::ModuleParams;
use crate::runtime::error::RuleFileError;

/// A single configuration step: a module name plus its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub module: String,
    #[serde(default)]
    pub params: ModuleParams,
}

impl Rule {
    pub fn new(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
            params: ModuleParams::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Deserialize)]
struct RawRule {
    name: Option<String>,
    module: String,
    params: Option<ModuleParams>,
}

/// Parse rules from YAML text, preserving declaration order
pub fn parse_rules(text: &str) -> Result<Vec<Rule>, RuleFileError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let raw: Option<Vec<RawRule>> = serde_yaml::from_str(text)?;

    let mut seen = HashSet::new();
    let mut rules = Vec::new();
    for (index, raw) in raw.unwrap_or_default().into_iter().enumerate() {
        let name = raw
            .name
            .unwrap_or_else(|| format!("{}-{}", raw.module, index + 1));
        if !seen.insert(name.clone()) {
            return Err(RuleFileError::DuplicateName { name });
        }

        rules.push(Rule {
            name,
            module: raw.module,
            params: raw.params.unwrap_or_default(),
        });
    }

    Ok(rules)
}

/// Load and parse a rule file
pub fn load_rules(path: &Path) -> Result<Vec<Rule>, RuleFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| RuleFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_rules(&text)
}
