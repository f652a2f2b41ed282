use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored resume: upload metadata plus the extracted text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    /// Name of the temporary file the upload was spooled to.
    pub filename: String,
    pub original_name: String,
    pub file_size: i64,
    pub extracted_text: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Listing projection of [`Resume`]. Carries no extracted text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub id: Uuid,
    pub filename: String,
    pub original_name: String,
    pub file_size: i64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<&Resume> for ResumeSummary {
    fn from(r: &Resume) -> Self {
        ResumeSummary {
            id: r.id,
            filename: r.filename.clone(),
            original_name: r.original_name.clone(),
            file_size: r.file_size,
            uploaded_at: r.uploaded_at,
        }
    }
}

/// The parent-resume fields resolved alongside each history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRef {
    pub id: Uuid,
    pub original_name: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewResume {
    pub filename: String,
    pub original_name: String,
    pub file_size: i64,
    pub extracted_text: String,
}
