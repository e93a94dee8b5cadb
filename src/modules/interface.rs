//! Module interface traits and types

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::environment::Environment;
use crate::modules::error::{ModuleError, ValidationError};
use crate::modules::params::ModuleParams;

/// Builds a fresh module instance for a single rule invocation.
///
/// This is the only extension point for new module kinds: register a
/// constructor under a name with [`ModuleRegistry::register`] and rules can
/// refer to it.
///
/// [`ModuleRegistry::register`]: crate::modules::ModuleRegistry::register
pub type ModuleConstructor = fn(Arc<Config>, Arc<Environment>) -> Box<dyn Module>;

/// Contract every module implements.
///
/// An instance is driven through exactly one `check` then `execute` cycle
/// and dropped afterwards. `execute` is never called when `check` failed.
pub trait Module: Send {
    /// Ensure mandatory parameters are present and well formed.
    fn check(&mut self, params: &ModuleParams) -> Result<(), ValidationError>;

    /// Apply the rule. Returns `true` if system state was changed.
    ///
    /// Running a module again with the same parameters against a system it
    /// already converged must return `false`.
    fn execute(&mut self, params: &ModuleParams) -> Result<bool, ModuleError>;

    /// Expose the output capability, if this module has one.
    fn as_output(&self) -> Option<&dyn ModuleOutput> {
        None
    }
}

/// Optional capability for modules that publish values into the environment
pub trait ModuleOutput {
    /// Key/value pairs to store under the rule's name.
    ///
    /// Only meaningful after a successful `execute`.
    fn outputs(&self) -> HashMap<String, String>;
}
