//! File operation modules
//!
//! - `file`: content, presence and permissions of a single file
//! - `directory`: presence and permissions of one or more directories

pub mod directory;
pub mod file;

// Utility modules
pub mod utils;

pub use directory::DirectoryModule;
pub use file::FileModule;

use crate::modules::error::ValidationError;
use crate::modules::params::{string_param, ModuleParams};

/// Desired state of a managed path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathState {
    #[default]
    Present,
    Absent,
}

impl std::str::FromStr for PathState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(PathState::Present),
            "absent" => Ok(PathState::Absent),
            _ => Err(format!("Invalid state: {s}")),
        }
    }
}

impl PathState {
    /// Read the `state` parameter, defaulting to `present`
    pub fn from_params(params: &ModuleParams) -> Result<Self, ValidationError> {
        match string_param(params, "state") {
            state if state.is_empty() => Ok(PathState::default()),
            state => state
                .parse::<PathState>()
                .map_err(|reason| ValidationError::invalid("state", state, reason)),
        }
    }
}

/// Read the optional `mode` parameter
pub(crate) fn mode_from_params(params: &ModuleParams) -> Result<Option<u32>, ValidationError> {
    match string_param(params, "mode") {
        mode if mode.is_empty() => Ok(None),
        mode => utils::parse_mode(&mode).map(Some),
    }
}
