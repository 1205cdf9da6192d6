//! Schema resolution: local override first, pinned remote otherwise

use super::local::read_local;
use super::remote::{PINNED_SCHEMA_URL, fetch_remote, shared_client};
use crate::types::*;

/// Resolves the OpenAPI schema text for downstream consumers
#[derive(Debug, Clone)]
pub struct SchemaResolver {
    config: ResolverConfig,
    client: reqwest::Client,
    remote_url: String,
}

impl SchemaResolver {
    /// Create a resolver backed by the shared HTTP client
    pub fn new(config: ResolverConfig) -> SchemaResult<Self> {
        Ok(Self::with_client(config, shared_client()?))
    }

    /// Create a resolver with a caller-supplied HTTP client (e.g. different
    /// timeout or proxy settings). The remote URL stays pinned.
    pub fn with_client(config: ResolverConfig, client: reqwest::Client) -> Self {
        Self {
            config,
            client,
            remote_url: PINNED_SCHEMA_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = url.into();
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the schema document.
    ///
    /// In development with a local path configured, the file is tried first
    /// and returned if readable. A failed local read is logged and the pinned
    /// remote document is fetched instead. Only a remote failure is returned
    /// as an error.
    pub async fn resolve(&self) -> SchemaResult<SchemaDocument> {
        if let Some(path) = self.config.local_override() {
            tracing::info!(path = %path.display(), "Fetching schema from local path");

            match read_local(path).await {
                LocalReadOutcome::Found(content) => {
                    tracing::debug!(bytes = content.len(), "Loaded local schema");
                    return Ok(SchemaDocument::new(
                        content,
                        SchemaOrigin::Local(path.to_path_buf()),
                    ));
                }
                LocalReadOutcome::NotAvailable { path, reason } => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %reason,
                        "Failed to read local schema, continuing with versioned schema from GitHub"
                    );
                }
            }
        }

        tracing::info!(url = %self.remote_url, "Fetching pinned schema");
        let content = fetch_remote(&self.client, &self.remote_url).await?;
        tracing::debug!(bytes = content.len(), "Fetched remote schema");

        Ok(SchemaDocument::new(
            content,
            SchemaOrigin::Remote(self.remote_url.clone()),
        ))
    }
}
