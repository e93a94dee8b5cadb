//! Core modules

pub mod fail;
pub mod log;
pub mod shell;

pub use fail::FailModule;
pub use log::LogModule;
pub use shell::ShellModule;
