use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::prompts::system_role;
use crate::errors::AppError;
use crate::llm_client::ChatModel;
use crate::models::analysis::{AnalysisKind, NewAnalysis};
use crate::store::ResumeStore;

/// Body accepted by all three analysis endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub resume_id: Option<String>,
    pub resume_text: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolves the text to analyse, asks the model, and records the result
/// when a resume id was given. Returns the model's reply.
///
/// `resumeText` takes precedence as the model input. A supplied `resumeId`
/// must still name a stored resume so no analysis points at nothing.
pub async fn run_analysis(
    store: &dyn ResumeStore,
    model: &dyn ChatModel,
    kind: AnalysisKind,
    request: AnalysisRequest,
) -> Result<String, AppError> {
    let resume_id = non_blank(request.resume_id);
    let resume_text = non_blank(request.resume_text);

    let resume = match resume_id {
        Some(raw) => {
            let id = Uuid::parse_str(raw.trim())
                .map_err(|_| AppError::NotFound("Resume not found".to_string()))?;
            let resume = store
                .find_resume(id)
                .await?
                .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
            Some(resume)
        }
        None => None,
    };

    let input = match (resume_text, &resume) {
        (Some(text), _) => text,
        (None, Some(resume)) => resume.extracted_text.clone(),
        (None, None) => {
            return Err(AppError::Validation(
                "Please provide either resumeId or resumeText".to_string(),
            ))
        }
    };

    let text = model.chat(&input, system_role(kind)).await?;

    let persisted = match resume {
        Some(resume) => {
            store
                .create_analysis(NewAnalysis {
                    resume_id: resume.id,
                    kind,
                    response: text.clone(),
                })
                .await?;
            true
        }
        None => false,
    };

    info!(
        "{kind} completed ({} chars in, {} chars out, persisted: {persisted})",
        input.len(),
        text.len(),
    );

    Ok(text)
}
