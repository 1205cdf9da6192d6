//! OpenAPI Schema Resolver Library
//!
//! Resolves the OpenAPI schema used at build time: a local file in
//! development when one is configured, the pinned remote document otherwise.

pub mod services;
pub mod tools;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use services::{PINNED_SCHEMA_URL, SchemaResolver, fetch_remote, read_local};
pub use tools::{ResolveInput, ResolveOutput, content_hash, resolve_schema};
pub use types::{
    LocalReadOutcome, OriginKind, ResolverConfig, SchemaDocument, SchemaError, SchemaOrigin,
    SchemaResult,
};
