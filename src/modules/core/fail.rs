//! Fail module - aborts the run with a message

use std::sync::Arc;

use crate::config::Config;
use crate::environment::Environment;
use crate::modules::{
    error::{ModuleError, ValidationError},
    interface::Module,
    params::{string_param, ModuleParams},
};

pub struct FailModule;

impl FailModule {
    pub fn create(_config: Arc<Config>, _env: Arc<Environment>) -> Box<dyn Module> {
        Box::new(FailModule)
    }
}

impl Module for FailModule {
    fn check(&mut self, params: &ModuleParams) -> Result<(), ValidationError> {
        if string_param(params, "message").is_empty() {
            return Err(ValidationError::missing("message"));
        }
        Ok(())
    }

    fn execute(&mut self, params: &ModuleParams) -> Result<bool, ModuleError> {
        Err(ModuleError::ExecutionFailed {
            message: string_param(params, "message"),
        })
    }
}
