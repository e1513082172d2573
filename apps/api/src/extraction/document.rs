//! Text Acquisition — turns an uploaded PDF binary into page-ordered text.

use crate::errors::AppError;

/// Raw text of a parsed document. Ephemeral: produced once per upload,
/// consumed immediately by the field extractor, never persisted.
#[derive(Debug, Clone)]
pub struct DocumentText {
    /// All page text in ascending page order, pages joined with `\n`.
    pub text: String,
    pub page_count: usize,
}

/// Extracts text from a PDF held in memory.
///
/// A binary that cannot be parsed fails with `DocumentParse`; a single
/// unreadable page fails the whole document. No partial recovery is
/// attempted, so callers must treat the resume as unextractable and fall
/// back to manual entry.
pub fn extract_document_text(bytes: &[u8]) -> Result<DocumentText, AppError> {
    let pages = pdf_extract::extract_text_by_pages_from_mem(bytes)
        .map_err(|e| AppError::DocumentParse(format!("Could not read PDF: {e}")))?;

    let page_count = pages.len();
    let text = pages.join("\n");

    Ok(DocumentText { text, page_count })
}
