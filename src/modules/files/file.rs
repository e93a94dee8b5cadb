//! File module for managing file content, presence and permissions

use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::environment::Environment;
use crate::modules::error::{ModuleError, ValidationError};
use crate::modules::interface::Module;
use crate::modules::params::{has_param, string_param, ModuleParams};

use super::utils::{apply_mode, file_sha256, sha256_hex, write_atomic};
use super::{mode_from_params, PathState};

/// Typed view of the `file` module parameters
#[derive(Debug, Clone)]
pub struct FileArgs {
    pub target: PathBuf,
    pub state: PathState,
    pub content: Option<FileContent>,
    pub mode: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Inline(String),
    Source(PathBuf),
}

impl FileArgs {
    pub fn from_params(params: &ModuleParams, config: &Config) -> Result<Self, ValidationError> {
        let target = string_param(params, "target");
        if target.is_empty() {
            return Err(ValidationError::missing("target"));
        }

        if has_param(params, "content") && has_param(params, "source") {
            return Err(ValidationError::MutuallyExclusive {
                first: "content".to_string(),
                second: "source".to_string(),
            });
        }

        for key in ["content", "source"] {
            match params.get(key) {
                None | Some(Value::String(_)) => {}
                Some(other) => {
                    return Err(ValidationError::invalid(
                        key,
                        other.to_string(),
                        "expected a string",
                    ))
                }
            }
        }

        let source = string_param(params, "source");
        let content = if has_param(params, "content") {
            Some(FileContent::Inline(string_param(params, "content")))
        } else if !source.is_empty() {
            Some(FileContent::Source(config.resolve_path(&source)))
        } else {
            None
        };

        Ok(Self {
            target: config.resolve_path(&target),
            state: PathState::from_params(params)?,
            content,
            mode: mode_from_params(params)?,
        })
    }
}

/// File module implementation
pub struct FileModule {
    config: Arc<Config>,
}

impl FileModule {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn create(config: Arc<Config>, _env: Arc<Environment>) -> Box<dyn Module> {
        Box::new(Self::new(config))
    }

    fn ensure_absent(&self, args: &FileArgs) -> Result<bool, ModuleError> {
        match fs::remove_file(&args.target) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ModuleError::io("remove", &args.target, e)),
        }
    }

    fn ensure_present(&self, args: &FileArgs) -> Result<bool, ModuleError> {
        let current = file_sha256(&args.target)?;

        let desired = match &args.content {
            Some(FileContent::Inline(text)) => Some(text.as_bytes().to_vec()),
            Some(FileContent::Source(src)) => {
                Some(fs::read(src).map_err(|e| ModuleError::io("read", src, e))?)
            }
            None => None,
        };

        let mut changed = match (desired, current) {
            (Some(data), current) if current.as_deref() != Some(sha256_hex(&data).as_str()) => {
                debug!(target = %args.target.display(), "writing file content");
                write_atomic(&args.target, &data)?;
                true
            }
            (None, None) => {
                debug!(target = %args.target.display(), "creating empty file");
                write_atomic(&args.target, &[])?;
                true
            }
            _ => false,
        };

        if let Some(mode) = args.mode {
            changed |= apply_mode(&args.target, mode)?;
        }

        Ok(changed)
    }
}

impl Module for FileModule {
    fn check(&mut self, params: &ModuleParams) -> Result<(), ValidationError> {
        FileArgs::from_params(params, &self.config)?;
        Ok(())
    }

    fn execute(&mut self, params: &ModuleParams) -> Result<bool, ModuleError> {
        let args = FileArgs::from_params(params, &self.config)?;

        match args.state {
            PathState::Present => self.ensure_present(&args),
            PathState::Absent => self.ensure_absent(&args),
        }
    }
}
