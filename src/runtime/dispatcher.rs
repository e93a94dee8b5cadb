//! Rule dispatch: registry lookup, construction, check, execute and output
//! harvesting for a single rule

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::environment::Environment;
use crate::modules::ModuleRegistry;
use crate::runtime::error::DispatchError;
use crate::runtime::rules::Rule;

/// Result of a successfully dispatched rule
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub rule: String,
    pub changed: bool,
    /// Outputs published to the environment, for modules that have them
    pub outputs: Option<HashMap<String, String>>,
}

/// Outcomes of a sequence of rules
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<RuleOutcome>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn changed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.changed).count()
    }
}

/// Turns rules into constructed modules and drives them.
///
/// The dispatcher holds no per-rule state, so one instance may dispatch
/// different rules from several threads at once.
pub struct Dispatcher<'r> {
    registry: &'r ModuleRegistry,
    config: Arc<Config>,
    env: Arc<Environment>,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r ModuleRegistry, config: Arc<Config>, env: Arc<Environment>) -> Self {
        Self {
            registry,
            config,
            env,
        }
    }

    /// Dispatch one rule.
    ///
    /// Unknown modules fail before anything is constructed. `execute` only
    /// runs after `check` succeeded, and outputs are only collected from
    /// modules exposing the output capability after a successful `execute`.
    pub fn dispatch(&self, rule: &Rule) -> Result<RuleOutcome, DispatchError> {
        let constructor =
            self.registry
                .lookup(&rule.module)
                .ok_or_else(|| DispatchError::UnknownModule {
                    rule: rule.name.clone(),
                    module: rule.module.clone(),
                })?;

        let params = self.env.expand_params(&rule.params);
        let mut module = constructor(Arc::clone(&self.config), Arc::clone(&self.env));

        debug!(rule = %rule.name, module = %rule.module, "checking rule");
        module
            .check(&params)
            .map_err(|source| DispatchError::Validation {
                rule: rule.name.clone(),
                source,
            })?;

        debug!(rule = %rule.name, module = %rule.module, "executing rule");
        let changed = module
            .execute(&params)
            .map_err(|source| DispatchError::Execution {
                rule: rule.name.clone(),
                source,
            })?;

        let outputs = module.as_output().map(|output| output.outputs());
        if let Some(outputs) = &outputs {
            debug!(rule = %rule.name, count = outputs.len(), "publishing outputs");
            self.env.set_outputs(&rule.name, outputs.clone());
        }

        if changed {
            info!(rule = %rule.name, module = %rule.module, "rule changed state");
        } else {
            debug!(rule = %rule.name, module = %rule.module, "rule unchanged");
        }

        Ok(RuleOutcome {
            rule: rule.name.clone(),
            changed,
            outputs,
        })
    }

    /// Dispatch rules in the order given, stopping at the first failure
    pub fn run(&self, rules: &[Rule]) -> Result<RunSummary, DispatchError> {
        let mut summary = RunSummary::default();
        for rule in rules {
            summary.outcomes.push(self.dispatch(rule)?);
        }
        Ok(summary)
    }
}
