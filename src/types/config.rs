//! Resolver configuration

use std::path::{Path, PathBuf};

/// Primary environment-name variable
pub const PRIMARY_ENV_VAR: &str = "GATSBY_ENV";

/// Secondary environment-name variable, consulted when the primary is unset
pub const SECONDARY_ENV_VAR: &str = "NODE_ENV";

/// Path to a local schema document, honoured only in development
pub const LOCAL_PATH_VAR: &str = "OPENAPI_LOCAL_PATH";

/// Environment name used when neither environment variable is set
pub const DEVELOPMENT_ENV: &str = "development";

/// Configuration consumed by [`crate::SchemaResolver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub environment_name: String,
    pub local_schema_path: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            environment_name: DEVELOPMENT_ENV.to_string(),
            local_schema_path: None,
        }
    }
}

impl ResolverConfig {
    pub fn new(environment_name: impl Into<String>, local_schema_path: Option<PathBuf>) -> Self {
        Self {
            environment_name: environment_name.into(),
            local_schema_path,
        }
    }

    /// Build configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let environment_name = non_empty(PRIMARY_ENV_VAR)
            .or_else(|| non_empty(SECONDARY_ENV_VAR))
            .unwrap_or_else(|| DEVELOPMENT_ENV.to_string());

        let local_schema_path = non_empty(LOCAL_PATH_VAR).map(PathBuf::from);

        Self {
            environment_name,
            local_schema_path,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment_name == DEVELOPMENT_ENV
    }

    /// Local path to try first, if the active environment allows one
    pub fn local_override(&self) -> Option<&Path> {
        if !self.is_development() {
            return None;
        }
        self.local_schema_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}
