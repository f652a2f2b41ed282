//! Document Store — persistence for resumes and their analyses.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`. Production uses `PgStore`;
//! handler tests run against `MemoryStore`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::{Analysis, AnalysisWithResume, NewAnalysis};
use crate::models::resume::{NewResume, Resume, ResumeSummary};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn create_resume(&self, new: NewResume) -> Result<Resume, AppError>;

    async fn find_resume(&self, id: Uuid) -> Result<Option<Resume>, AppError>;

    /// All resumes, newest upload first, without extracted text.
    async fn list_resumes(&self) -> Result<Vec<ResumeSummary>, AppError>;

    async fn create_analysis(&self, new: NewAnalysis) -> Result<Analysis, AppError>;

    /// Analyses for one resume, newest first, each with its parent's summary fields.
    async fn list_analyses(&self, resume_id: Uuid) -> Result<Vec<AnalysisWithResume>, AppError>;
}
