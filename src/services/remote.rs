//! Remote fetch of the pinned schema

use crate::types::{SchemaError, SchemaResult};
use once_cell::sync::Lazy;
use std::time::Duration;

/// Pinned revision of the derefed Sentry API schema
pub const PINNED_SCHEMA_URL: &str = "https://raw.githubusercontent.com/getsentry/sentry-api-schema/03ccef5d80c6e636994e0594312778e1186ba41c/openapi-derefed.json";

/// Request timeout for the remote fetch
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Global HTTP client for connection pooling
static HTTP_CLIENT: Lazy<Result<reqwest::Client, String>> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())
});

/// Shared client used by resolvers that don't bring their own
pub fn shared_client() -> SchemaResult<reqwest::Client> {
    (*HTTP_CLIENT).clone().map_err(SchemaError::ClientBuild)
}

/// GET `url` and return the body verbatim.
///
/// Any status outside 2xx is a failure; nothing is retried.
pub async fn fetch_remote(client: &reqwest::Client, url: &str) -> SchemaResult<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SchemaError::fetch_failed(url, e))?;

    if !response.status().is_success() {
        return Err(SchemaError::HttpStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| SchemaError::fetch_failed(url, e))
}
