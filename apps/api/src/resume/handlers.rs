use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeSummary;
use crate::resume::upload::{ingest_upload, UploadedFile};
use crate::routes::envelope::Envelope;
use crate::state::AppState;

/// Multipart field carrying the document.
const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub resume_id: Uuid,
    pub filename: String,
    pub text_length: usize,
    pub extracted_text: String,
}

/// POST /api/resume/upload
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Envelope<UploadResponse>>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;

    let max_bytes = state.config.max_upload_bytes;
    let upload = read_upload_field(&mut multipart, max_bytes)
        .await?
        .ok_or_else(|| AppError::Validation("Please upload a resume file".to_string()))?;

    if upload.bytes.len() > max_bytes {
        return Err(too_large(max_bytes));
    }

    let resume = ingest_upload(state.store.as_ref(), &state.config.upload_dir, upload).await?;

    Ok(Json(Envelope::ok(
        "Resume uploaded and parsed successfully",
        UploadResponse {
            resume_id: resume.id,
            filename: resume.original_name,
            // UTF-16 code units, the way a JavaScript client measures `.length`
            text_length: resume.extracted_text.encode_utf16().count(),
            extracted_text: resume.extracted_text,
        },
    )))
}

fn too_large(max_bytes: usize) -> AppError {
    AppError::Validation(format!("File too large (max {}MB)", max_bytes / 1024 / 1024))
}

/// A body cut off by the request body limit reports 413; that is the same
/// condition as an oversized file and gets the same message.
fn multipart_error(e: MultipartError, context: &str, max_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large(max_bytes)
    } else {
        AppError::Validation(format!("{context}: {}", e.body_text()))
    }
}

/// Returns the first `resume` field that actually carries bytes.
async fn read_upload_field(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Multipart error", max_bytes))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, "Read error", max_bytes))?;

        if bytes.is_empty() {
            continue;
        }

        return Ok(Some(UploadedFile {
            original_name,
            content_type,
            bytes,
        }));
    }
    Ok(None)
}

/// GET /api/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<ResumeSummary>>>, AppError> {
    let resumes = state.store.list_resumes().await?;
    Ok(Json(Envelope::list("Resumes retrieved", resumes)))
}
