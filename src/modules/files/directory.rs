//! Directory module - ensures directories exist or are removed

use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::environment::Environment;
use crate::modules::error::{ModuleError, ValidationError};
use crate::modules::interface::Module;
use crate::modules::params::{array_param, ModuleParams};

use super::utils::apply_mode;
use super::{mode_from_params, PathState};

/// Directory module - ensures directories exist or are removed
///
/// `target` accepts a single path or a list of paths. Directories are
/// created with their parents.
pub struct DirectoryModule {
    config: Arc<Config>,
}

impl DirectoryModule {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn create(config: Arc<Config>, _env: Arc<Environment>) -> Box<dyn Module> {
        Box::new(Self::new(config))
    }

    fn ensure_present(&self, dir: &Path, mode: Option<u32>) -> Result<bool, ModuleError> {
        let mut changed = false;

        if !dir.exists() {
            debug!(dir = %dir.display(), "creating directory");
            fs::create_dir_all(dir).map_err(|e| ModuleError::io("mkdir", dir, e))?;
            changed = true;
        } else if !dir.is_dir() {
            return Err(ModuleError::ExecutionFailed {
                message: format!("{} exists and is not a directory", dir.display()),
            });
        }

        if let Some(mode) = mode {
            changed |= apply_mode(dir, mode)?;
        }

        Ok(changed)
    }

    fn ensure_absent(&self, dir: &Path) -> Result<bool, ModuleError> {
        if !dir.exists() {
            return Ok(false);
        }
        if !dir.is_dir() {
            return Err(ModuleError::ExecutionFailed {
                message: format!("{} exists and is not a directory", dir.display()),
            });
        }

        debug!(dir = %dir.display(), "removing directory");
        fs::remove_dir_all(dir).map_err(|e| ModuleError::io("rmdir", dir, e))?;
        Ok(true)
    }
}

impl Module for DirectoryModule {
    fn check(&mut self, params: &ModuleParams) -> Result<(), ValidationError> {
        if array_param(params, "target").is_empty() {
            return Err(ValidationError::missing("target"));
        }
        PathState::from_params(params)?;
        mode_from_params(params)?;
        Ok(())
    }

    fn execute(&mut self, params: &ModuleParams) -> Result<bool, ModuleError> {
        let state = PathState::from_params(params)?;
        let mode = mode_from_params(params)?;

        let mut changed = false;
        for target in array_param(params, "target") {
            let dir = self.config.resolve_path(&target);
            changed |= match state {
                PathState::Present => self.ensure_present(&dir, mode)?,
                PathState::Absent => self.ensure_absent(&dir)?,
            };
        }

        Ok(changed)
    }
}
