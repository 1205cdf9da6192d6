//! Tool implementations

mod resolve;

pub use resolve::*;
