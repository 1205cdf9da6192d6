//! Schema document and local read outcome

use serde::Serialize;
use std::path::PathBuf;

/// Where a resolved document came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaOrigin {
    Local(PathBuf),
    Remote(String),
}

impl SchemaOrigin {
    pub fn kind(&self) -> OriginKind {
        match self {
            Self::Local(_) => OriginKind::Local,
            Self::Remote(_) => OriginKind::Remote,
        }
    }

    /// File path or URL, for display
    pub fn location(&self) -> String {
        match self {
            Self::Local(path) => path.display().to_string(),
            Self::Remote(url) => url.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginKind {
    Local,
    Remote,
}

/// Raw OpenAPI text, passed through without inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    content: String,
    origin: SchemaOrigin,
}

impl SchemaDocument {
    pub fn new(content: String, origin: SchemaOrigin) -> Self {
        Self { content, origin }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn origin(&self) -> &SchemaOrigin {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

/// Result of trying the local override. A failed read is not an error,
/// only a reason to go remote.
#[derive(Debug)]
pub enum LocalReadOutcome {
    Found(String),
    NotAvailable {
        path: PathBuf,
        reason: std::io::Error,
    },
}
