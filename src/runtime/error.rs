use thiserror::Error;

use crate::modules::{ModuleError, ValidationError};

/// Failure to dispatch a single rule
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Rule {rule}: unknown module {module}")]
    UnknownModule { rule: String, module: String },

    #[error("Rule {rule}: invalid parameters: {source}")]
    Validation {
        rule: String,
        #[source]
        source: ValidationError,
    },

    #[error("Rule {rule}: execution failed: {source}")]
    Execution {
        rule: String,
        #[source]
        source: ModuleError,
    },
}

impl DispatchError {
    /// Name of the rule that failed
    pub fn rule(&self) -> &str {
        match self {
            DispatchError::UnknownModule { rule, .. }
            | DispatchError::Validation { rule, .. }
            | DispatchError::Execution { rule, .. } => rule,
        }
    }
}

#[derive(Debug, Error)]
pub enum RuleFileError {
    #[error("Failed to read rule file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rules: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Duplicate rule name: {name}")]
    DuplicateName { name: String },
}
