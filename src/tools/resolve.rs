//! resolve tool implementation

use crate::services::SchemaResolver;
use crate::types::*;
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct ResolveInput {
    /// File to write the resolved document to
    pub output: Option<String>,
    /// Create missing parent directories of `output`
    pub create_dirs: bool,
}

#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub document: Option<SchemaDocument>,
}

impl ResolveOutput {
    fn failure(err: SchemaError) -> Self {
        Self {
            success: false,
            origin: None,
            location: None,
            output: None,
            bytes: None,
            sha256: None,
            resolved_at: None,
            error: Some(err.to_string()),
            document: None,
        }
    }
}

/// Hex SHA-256 of the document text
pub fn content_hash(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// Resolve the schema and optionally write it to a file
pub async fn resolve_schema(resolver: &SchemaResolver, input: ResolveInput) -> ResolveOutput {
    let document = match resolver.resolve().await {
        Ok(doc) => doc,
        Err(e) => return ResolveOutput::failure(e),
    };

    if let Some(ref output) = input.output {
        if let Err(e) = write_document(output, &document, input.create_dirs).await {
            return ResolveOutput::failure(e);
        }
        tracing::info!(path = %output, bytes = document.len(), "Wrote schema");
    }

    ResolveOutput {
        success: true,
        origin: Some(document.origin().kind()),
        location: Some(document.origin().location()),
        output: input.output,
        bytes: Some(document.len()),
        sha256: Some(content_hash(document.as_str())),
        resolved_at: Some(Utc::now().to_rfc3339()),
        error: None,
        document: Some(document),
    }
}

/// Write via temp file + rename so readers never see a partial document
async fn write_document(
    output: &str,
    document: &SchemaDocument,
    create_dirs: bool,
) -> SchemaResult<()> {
    let path = Path::new(output);

    if create_dirs
        && let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| SchemaError::write_failed(output, e))?;
    }

    let temp_path = temp_path_for(path);
    tokio::fs::write(&temp_path, document.as_str())
        .await
        .map_err(|e| SchemaError::write_failed(output, e))?;

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(SchemaError::write_failed(output, e));
    }

    Ok(())
}

/// `openapi.json` -> `openapi.json.tmp`, next to the target
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
