pub mod dispatcher;
pub mod error;
pub mod rules;

pub use dispatcher::*;
pub use error::*;
pub use rules::*;
