use std::path::Path;

use anyhow::Context;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extractor::{extract_text, MediaType};
use crate::models::resume::{NewResume, Resume};
use crate::store::ResumeStore;

/// A file pulled out of the multipart body, not yet written anywhere.
#[derive(Debug)]
pub struct UploadedFile {
    pub original_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Upload pipeline: type check → spool to the upload dir → extract →
/// reject blank text → persist. The spooled file is removed before
/// returning on every path; a failed removal is logged, never surfaced.
pub async fn ingest_upload(
    store: &dyn ResumeStore,
    upload_dir: &Path,
    upload: UploadedFile,
) -> Result<Resume, AppError> {
    // Unsupported types never touch the disk.
    let media_type = MediaType::from_mime(&upload.content_type)?;

    let spooled = spool(upload_dir, upload.bytes.clone(), media_type).await?;
    let stored_name = spooled
        .path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let result = extract_and_store(store, spooled.path(), stored_name, media_type, &upload).await;
    discard(spooled);
    result
}

async fn extract_and_store(
    store: &dyn ResumeStore,
    path: &Path,
    stored_name: String,
    media_type: MediaType,
    upload: &UploadedFile,
) -> Result<Resume, AppError> {
    let on_disk = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read spooled upload {}", path.display()))?;

    let extracted_text = extract_text(on_disk, media_type).await?;

    if extracted_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from the resume. Please ensure the file contains readable text."
                .to_string(),
        ));
    }

    let resume = store
        .create_resume(NewResume {
            filename: stored_name,
            original_name: upload.original_name.clone(),
            file_size: upload.bytes.len() as i64,
            extracted_text,
        })
        .await?;

    info!(
        "Parsed upload {} as {:?} into resume {}",
        upload.original_name, media_type, resume.id
    );
    Ok(resume)
}

async fn spool(
    upload_dir: &Path,
    bytes: Bytes,
    media_type: MediaType,
) -> Result<NamedTempFile, AppError> {
    let dir = upload_dir.to_path_buf();
    let suffix = format!(".{}", media_type.extension());

    let spooled = tokio::task::spawn_blocking(move || -> anyhow::Result<NamedTempFile> {
        use std::io::Write;

        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(&suffix)
            .tempfile_in(&dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        file.write_all(&bytes).context("Failed to write upload")?;
        file.flush().context("Failed to flush upload")?;
        Ok(file)
    })
    .await
    .context("Upload spooling task failed")??;

    Ok(spooled)
}

fn discard(spooled: NamedTempFile) {
    let path = spooled.path().to_path_buf();
    if let Err(e) = spooled.close() {
        warn!("Error deleting file {}: {e}", path.display());
    }
}
