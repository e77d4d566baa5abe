// Document-to-text conversion.
//
// Uploaded documents are either PDFs, which go through pdf-extract, or
// already plain text (.txt, .md, anything else), which is decoded as UTF-8
// with invalid bytes replaced. PDF page breaks come back as form feeds and
// are normalized to newlines so pages read as one continuous text.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// How a document's bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Decide by extension first, then by the PDF magic header.
    pub fn detect(file_name: &str, bytes: &[u8]) -> Self {
        let is_pdf_name = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

        if is_pdf_name || bytes.starts_with(PDF_MAGIC) {
            DocumentKind::Pdf
        } else {
            DocumentKind::PlainText
        }
    }
}

/// Extract the text of an in-memory document.
///
/// CPU-bound for PDFs; async callers should run it on a blocking thread.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String> {
    let kind = DocumentKind::detect(file_name, bytes);
    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| anyhow::anyhow!("Failed to extract text from PDF '{file_name}': {e}"))?
            .replace('\u{c}', "\n"),
        DocumentKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
    };

    debug!(
        file = file_name,
        kind = ?kind,
        bytes = bytes.len(),
        chars = text.chars().count(),
        "Extracted document text"
    );
    Ok(text)
}

/// Read a document from disk and extract its text.
pub async fn read_document(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    tokio::task::spawn_blocking(move || extract_text(&file_name, &bytes))
        .await
        .context("Text extraction task panicked")?
}
