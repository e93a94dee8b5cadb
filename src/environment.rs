//! Shared variable store
//!
//! Rules read variables through `${name}` references in their parameters,
//! and modules with the output capability publish values back here under
//! `<rule>.<key>`. The store carries its own lock so rules running on
//! different threads can share one handle.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::trace;

use crate::modules::params::ModuleParams;

static VARIABLE_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("variable reference pattern is valid"));

#[derive(Debug, Default)]
pub struct Environment {
    vars: RwLock<HashMap<String, String>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment seeded with facts about the local host
    pub fn with_defaults() -> Self {
        let env = Self::new();

        env.set("ARCH", std::env::consts::ARCH);
        env.set("OS", std::env::consts::OS);

        let host = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "unknown".to_string());
        env.set("HOSTNAME", host);

        if let Some(home) = dirs::home_dir() {
            env.set("HOMEDIR", home.display().to_string());
        }

        if let Some(user) = std::env::var("USER")
            .ok()
            .or_else(|| std::env::var("USERNAME").ok())
        {
            env.set("USERNAME", user);
        }

        env
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        trace!(%key, %value, "set variable");
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Snapshot of every variable currently set
    pub fn variables(&self) -> HashMap<String, String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Store module outputs as `<rule>.<key>`
    pub fn set_outputs(&self, rule: &str, outputs: HashMap<String, String>) {
        let mut vars = self.vars.write().unwrap_or_else(PoisonError::into_inner);
        for (key, value) in outputs {
            vars.insert(format!("{rule}.{key}"), value);
        }
    }

    /// Replace `${name}` references with their values. Unknown names expand
    /// to the empty string.
    pub fn expand(&self, text: &str) -> String {
        if !text.contains("${") {
            return text.to_string();
        }

        let vars = self.vars.read().unwrap_or_else(PoisonError::into_inner);
        VARIABLE_REF
            .replace_all(text, |caps: &Captures| {
                vars.get(caps[1].trim()).cloned().unwrap_or_default()
            })
            .into_owned()
    }

    /// Copy of `params` with every string, and every string inside a list,
    /// expanded. Values of other shapes are copied as-is.
    pub fn expand_params(&self, params: &ModuleParams) -> ModuleParams {
        params
            .iter()
            .map(|(key, value)| (key.clone(), self.expand_value(value)))
            .collect()
    }

    fn expand_value(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.expand(s)),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => Value::String(self.expand(s)),
                        other => other.clone(),
                    })
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}
