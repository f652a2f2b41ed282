use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::{Analysis, AnalysisWithResume, NewAnalysis};
use crate::models::resume::{NewResume, Resume, ResumeRef, ResumeSummary};
use crate::store::ResumeStore;

/// In-process store used by handler tests. Same ordering rules as `PgStore`;
/// records with equal timestamps list in reverse insertion order.
#[derive(Default)]
pub struct MemoryStore {
    resumes: RwLock<Vec<Resume>>,
    analyses: RwLock<Vec<Analysis>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn resume_count(&self) -> usize {
        self.resumes.read().await.len()
    }

    pub async fn analyses(&self) -> Vec<Analysis> {
        self.analyses.read().await.clone()
    }
}

#[async_trait]
impl ResumeStore for MemoryStore {
    async fn create_resume(&self, new: NewResume) -> Result<Resume, AppError> {
        let resume = Resume {
            id: Uuid::new_v4(),
            filename: new.filename,
            original_name: new.original_name,
            file_size: new.file_size,
            extracted_text: new.extracted_text,
            uploaded_at: Utc::now(),
        };
        self.resumes.write().await.push(resume.clone());
        Ok(resume)
    }

    async fn find_resume(&self, id: Uuid) -> Result<Option<Resume>, AppError> {
        Ok(self.resumes.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn list_resumes(&self) -> Result<Vec<ResumeSummary>, AppError> {
        let mut out: Vec<ResumeSummary> = self
            .resumes
            .read()
            .await
            .iter()
            .rev()
            .map(ResumeSummary::from)
            .collect();
        out.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(out)
    }

    async fn create_analysis(&self, new: NewAnalysis) -> Result<Analysis, AppError> {
        let analysis = Analysis {
            id: Uuid::new_v4(),
            resume_id: new.resume_id,
            prompt: new.kind.prompt_label().to_string(),
            response: new.response,
            analysis_type: new.kind,
            created_at: Utc::now(),
        };
        self.analyses.write().await.push(analysis.clone());
        Ok(analysis)
    }

    async fn list_analyses(&self, resume_id: Uuid) -> Result<Vec<AnalysisWithResume>, AppError> {
        let resumes = self.resumes.read().await;
        let parent = resumes.iter().find(|r| r.id == resume_id).map(|r| ResumeRef {
            id: r.id,
            original_name: r.original_name.clone(),
            uploaded_at: r.uploaded_at,
        });

        let mut out: Vec<AnalysisWithResume> = self
            .analyses
            .read()
            .await
            .iter()
            .rev()
            .filter(|a| a.resume_id == resume_id)
            .map(|a| AnalysisWithResume {
                analysis: a.clone(),
                resume: parent.clone(),
            })
            .collect();
        out.sort_by(|a, b| b.analysis.created_at.cmp(&a.analysis.created_at));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::AnalysisKind;

    fn new_resume(name: &str) -> NewResume {
        NewResume {
            filename: format!("resume-{name}.pdf"),
            original_name: name.to_string(),
            file_size: 42,
            extracted_text: format!("text of {name}"),
        }
    }

    #[tokio::test]
    async fn test_list_resumes_newest_first() {
        let store = MemoryStore::new();
        store.create_resume(new_resume("first.pdf")).await.unwrap();
        store.create_resume(new_resume("second.pdf")).await.unwrap();

        let listed = store.list_resumes().await.unwrap();
        let names: Vec<_> = listed.iter().map(|r| r.original_name.as_str()).collect();
        assert_eq!(names, ["second.pdf", "first.pdf"]);
    }

    #[tokio::test]
    async fn test_list_analyses_filters_by_resume_and_resolves_parent() {
        let store = MemoryStore::new();
        let a = store.create_resume(new_resume("a.pdf")).await.unwrap();
        let b = store.create_resume(new_resume("b.pdf")).await.unwrap();

        for kind in AnalysisKind::ALL {
            store
                .create_analysis(NewAnalysis {
                    resume_id: a.id,
                    kind,
                    response: kind.to_string(),
                })
                .await
                .unwrap();
        }
        store
            .create_analysis(NewAnalysis {
                resume_id: b.id,
                kind: AnalysisKind::ResumeAnalysis,
                response: "other".to_string(),
            })
            .await
            .unwrap();

        let history = store.list_analyses(a.id).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].analysis.analysis_type, AnalysisKind::CareerGuidance);
        assert_eq!(history[2].analysis.analysis_type, AnalysisKind::ResumeAnalysis);
        let parent = history[0].resume.as_ref().unwrap();
        assert_eq!(parent.original_name, "a.pdf");
    }
}
