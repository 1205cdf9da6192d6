//! Local override reader

use crate::types::LocalReadOutcome;
use std::path::Path;

/// Read the local schema file as UTF-8 text.
///
/// Never fails: any I/O problem (missing file, permissions, a directory,
/// invalid UTF-8) is reported as [`LocalReadOutcome::NotAvailable`].
pub async fn read_local(path: &Path) -> LocalReadOutcome {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => LocalReadOutcome::Found(content),
        Err(reason) => LocalReadOutcome::NotAvailable {
            path: path.to_path_buf(),
            reason,
        },
    }
}
