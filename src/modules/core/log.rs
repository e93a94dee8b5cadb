//! Log module - writes a message to the log

use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::environment::Environment;
use crate::modules::{
    error::{ModuleError, ValidationError},
    interface::Module,
    params::{string_param, ModuleParams},
};

/// Log module - writes a message to the log
pub struct LogModule;

impl LogModule {
    pub fn create(_config: Arc<Config>, _env: Arc<Environment>) -> Box<dyn Module> {
        Box::new(LogModule)
    }
}

impl Module for LogModule {
    fn check(&mut self, params: &ModuleParams) -> Result<(), ValidationError> {
        if string_param(params, "message").is_empty() {
            return Err(ValidationError::missing("message"));
        }
        Ok(())
    }

    fn execute(&mut self, params: &ModuleParams) -> Result<bool, ModuleError> {
        let message = string_param(params, "message");
        info!("{message}");

        // Logging leaves the system untouched
        Ok(false)
    }
}
