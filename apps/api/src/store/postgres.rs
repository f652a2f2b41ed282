use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::{Analysis, AnalysisKind, AnalysisWithResume, NewAnalysis};
use crate::models::resume::{NewResume, Resume, ResumeRef, ResumeSummary};
use crate::store::ResumeStore;

/// PostgreSQL-backed store. Ids are generated here, timestamps by the database.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AnalysisRow {
    id: Uuid,
    resume_id: Uuid,
    prompt: String,
    response: String,
    analysis_type: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AnalysisRow> for Analysis {
    type Error = AppError;

    fn try_from(row: AnalysisRow) -> Result<Self, AppError> {
        let analysis_type = row
            .analysis_type
            .parse::<AnalysisKind>()
            .map_err(|e| AppError::Internal(anyhow!("analysis {}: {e}", row.id)))?;
        Ok(Analysis {
            id: row.id,
            resume_id: row.resume_id,
            prompt: row.prompt,
            response: row.response,
            analysis_type,
            created_at: row.created_at,
        })
    }
}

#[derive(FromRow)]
struct HistoryRow {
    #[sqlx(flatten)]
    analysis: AnalysisRow,
    resume_original_name: Option<String>,
    resume_uploaded_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl ResumeStore for PgStore {
    async fn create_resume(&self, new: NewResume) -> Result<Resume, AppError> {
        let resume = sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resumes (id, filename, original_name, file_size, extracted_text)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, filename, original_name, file_size, extracted_text, uploaded_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.filename)
        .bind(&new.original_name)
        .bind(new.file_size)
        .bind(&new.extracted_text)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Inserted resume {} ({}, {} chars)",
            resume.id,
            resume.original_name,
            resume.extracted_text.len()
        );
        Ok(resume)
    }

    async fn find_resume(&self, id: Uuid) -> Result<Option<Resume>, AppError> {
        Ok(sqlx::query_as::<_, Resume>(
            "SELECT id, filename, original_name, file_size, extracted_text, uploaded_at \
             FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_resumes(&self) -> Result<Vec<ResumeSummary>, AppError> {
        // extracted_text is deliberately not selected
        Ok(sqlx::query_as::<_, ResumeSummary>(
            "SELECT id, filename, original_name, file_size, uploaded_at \
             FROM resumes ORDER BY uploaded_at DESC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create_analysis(&self, new: NewAnalysis) -> Result<Analysis, AppError> {
        let row = sqlx::query_as::<_, AnalysisRow>(
            r#"
            INSERT INTO analyses (id, resume_id, prompt, response, analysis_type)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, resume_id, prompt, response, analysis_type, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.resume_id)
        .bind(new.kind.prompt_label())
        .bind(&new.response)
        .bind(new.kind.as_str())
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Inserted {} analysis {} for resume {}",
            new.kind, row.id, new.resume_id
        );
        row.try_into()
    }

    async fn list_analyses(&self, resume_id: Uuid) -> Result<Vec<AnalysisWithResume>, AppError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT a.id, a.resume_id, a.prompt, a.response, a.analysis_type, a.created_at,
                   r.original_name AS resume_original_name,
                   r.uploaded_at AS resume_uploaded_at
            FROM analyses a
            LEFT JOIN resumes r ON r.id = a.resume_id
            WHERE a.resume_id = $1
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(resume_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let resume = match (row.resume_original_name, row.resume_uploaded_at) {
                    (Some(original_name), Some(uploaded_at)) => Some(ResumeRef {
                        id: row.analysis.resume_id,
                        original_name,
                        uploaded_at,
                    }),
                    _ => None,
                };
                Ok(AnalysisWithResume {
                    analysis: row.analysis.try_into()?,
                    resume,
                })
            })
            .collect()
    }
}
