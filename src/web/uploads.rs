// Uploaded document storage.
//
// Each upload is written under the configured upload directory using the
// client's file name, stripped to its last path component. Two requests
// uploading the same name overwrite each other.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// A document received in a multipart form field.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Reduce a client-supplied file name to a safe single path component.
///
/// Falls back to `fallback` when nothing usable is left.
pub fn sanitize_file_name(raw: &str, fallback: &str) -> String {
    let last = raw.rsplit(['/', '\\']).next().unwrap_or("").trim();
    if last.is_empty() || last == "." || last == ".." {
        fallback.to_string()
    } else {
        last.to_string()
    }
}

/// Write an upload into `dir`, creating the directory if needed.
pub async fn save_upload(dir: &Path, upload: &Upload) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create upload directory {}", dir.display()))?;

    let path = dir.join(&upload.file_name);
    tokio::fs::write(&path, &upload.bytes)
        .await
        .with_context(|| format!("Failed to save upload {}", path.display()))?;

    debug!(path = %path.display(), bytes = upload.bytes.len(), "Saved upload");
    Ok(path)
}
