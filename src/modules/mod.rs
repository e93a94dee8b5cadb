//! Module plugin core: the module contract, parameter coercion and the
//! registry of module constructors, plus the bundled modules

pub mod core;
pub mod error;
pub mod files;
pub mod interface;
pub mod params;
pub mod registry;

// Re-export commonly used types
pub use error::*;
pub use interface::*;
pub use params::*;
pub use registry::ModuleRegistry;
