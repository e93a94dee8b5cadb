//! Rustle Rules - module plugin core for rule-based configuration management
//!
//! Rules name a module and carry loosely typed parameters. This crate turns
//! them into typed, validated module invocations: the [`modules`] layer
//! defines the module contract, parameter coercion and the constructor
//! registry, and [`runtime`] dispatches rules against it, publishing module
//! outputs into the shared [`Environment`].

pub mod config;
pub mod environment;
pub mod modules;
pub mod runtime;

pub use config::Config;
pub use environment::Environment;
pub use modules::{Module, ModuleConstructor, ModuleOutput, ModuleParams, ModuleRegistry};
pub use runtime::{Dispatcher, DispatchError, Rule, RuleOutcome};
