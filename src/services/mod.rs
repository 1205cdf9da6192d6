//! Service implementations for schema resolution

mod local;
mod remote;
mod resolver;

pub use local::*;
pub use remote::*;
pub use resolver::*;
