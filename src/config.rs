//! Runtime configuration shared by every module instance

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report every rule, not only the ones that changed something
    pub verbose: bool,
    /// Base directory for relative paths in rule parameters
    pub working_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            working_directory: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = dir.into();
        self
    }

    /// Resolve a path from rule parameters against the working directory
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.working_directory.join(candidate)
        }
    }
}
