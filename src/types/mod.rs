//! Type definitions for the schema resolver

mod config;
mod error;
mod schema;

pub use config::*;
pub use error::*;
pub use schema::*;
