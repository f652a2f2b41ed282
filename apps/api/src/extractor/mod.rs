//! File Extractor — turns an uploaded resume into plain text.
//!
//! Two formats are accepted: PDF (decoded by `pdf-extract`) and DOCX
//! (decoded by `docx-rs`). Anything else is rejected with `ExtractError::UnsupportedType` before decoding starts.
//!
//! An empty result is not an error here; the upload handler decides what
//! to do with it.

use thiserror::Error;

mod docx;
#[cfg(test)]
pub(crate) mod fixtures;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}. Only PDF and DOCX files are accepted")]
    UnsupportedType(String),

    #[error("PDF parsing error: {0}")]
    Pdf(String),

    #[error("DOCX parsing error: {0}")]
    Docx(String),
}

/// The media types the extractor knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Docx,
}

impl MediaType {
    pub fn from_mime(mime: &str) -> Result<Self, ExtractError> {
        // Browsers occasionally append parameters, e.g. "application/pdf; charset=binary"
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence {
            PDF_MIME => Ok(MediaType::Pdf),
            DOCX_MIME => Ok(MediaType::Docx),
            _ => Err(ExtractError::UnsupportedType(mime.to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            MediaType::Pdf => "pdf",
            MediaType::Docx => "docx",
        }
    }
}

/// Extracts plain text from `bytes` declared as `media_type`.
/// Synchronous and CPU-bound; async callers should use [`extract_text`].
pub fn extract(bytes: &[u8], media_type: MediaType) -> Result<String, ExtractError> {
    match media_type {
        MediaType::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
        }
        MediaType::Docx => docx::extract_docx_text(bytes),
    }
}

/// Runs [`extract`] on the blocking pool. A decoder panic is reported as a
/// format error rather than taking the worker down.
pub async fn extract_text(bytes: Vec<u8>, media_type: MediaType) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract(&bytes, media_type))
        .await
        .unwrap_or_else(|e| {
            let msg = format!("decoder aborted: {e}");
            Err(match media_type {
                MediaType::Pdf => ExtractError::Pdf(msg),
                MediaType::Docx => ExtractError::Docx(msg),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::fixtures::{build_docx_paragraphs, build_pdf};

    #[test]
    fn test_from_mime_accepts_pdf_and_docx() {
        assert_eq!(MediaType::from_mime(PDF_MIME).unwrap(), MediaType::Pdf);
        assert_eq!(MediaType::from_mime(DOCX_MIME).unwrap(), MediaType::Docx);
        assert_eq!(
            MediaType::from_mime("application/pdf; charset=binary").unwrap(),
            MediaType::Pdf
        );
    }

    #[test]
    fn test_from_mime_rejects_everything_else() {
        for mime in ["text/plain", "application/msword", "image/png", ""] {
            match MediaType::from_mime(mime) {
                Err(ExtractError::UnsupportedType(m)) => assert_eq!(m, mime),
                other => panic!("expected UnsupportedType for {mime:?}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_a_pdf_error() {
        let result = extract_text(b"definitely not a pdf".to_vec(), MediaType::Pdf).await;
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }

    #[tokio::test]
    async fn test_docx_round_through_blocking_pool() {
        let bytes = build_docx_paragraphs(&["Jane Doe"]);
        let text = extract_text(bytes, MediaType::Docx).await.unwrap();
        assert_eq!(text.trim(), "Jane Doe");
    }

    #[test]
    fn test_pdf_text_is_extracted() {
        let text = extract(&build_pdf("Jane Doe Rust Engineer"), MediaType::Pdf).unwrap();
        assert!(text.contains("Jane Doe"), "got {text:?}");
        assert!(text.contains("Rust Engineer"), "got {text:?}");
    }

    #[tokio::test]
    async fn test_pdf_round_through_blocking_pool() {
        let text = extract_text(build_pdf("Jane Doe"), MediaType::Pdf)
            .await
            .unwrap();
        assert_eq!(text.trim(), "Jane Doe");
    }
}
