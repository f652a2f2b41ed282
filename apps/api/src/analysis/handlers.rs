//! Axum route handlers for the AI analysis and history endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::analysis::service::{run_analysis, AnalysisRequest};
use crate::errors::AppError;
use crate::models::analysis::{AnalysisKind, AnalysisWithResume};
use crate::routes::envelope::Envelope;
use crate::state::AppState;

type AnalysisBody = Result<Json<AnalysisRequest>, JsonRejection>;

/// POST /api/ai/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: AnalysisBody,
) -> Result<Json<Envelope<Value>>, AppError> {
    respond(&state, AnalysisKind::ResumeAnalysis, body).await
}

/// POST /api/ai/interview
pub async fn handle_interview(
    State(state): State<AppState>,
    body: AnalysisBody,
) -> Result<Json<Envelope<Value>>, AppError> {
    respond(&state, AnalysisKind::InterviewPrep, body).await
}

/// POST /api/ai/career
pub async fn handle_career(
    State(state): State<AppState>,
    body: AnalysisBody,
) -> Result<Json<Envelope<Value>>, AppError> {
    respond(&state, AnalysisKind::CareerGuidance, body).await
}

async fn respond(
    state: &AppState,
    kind: AnalysisKind,
    body: AnalysisBody,
) -> Result<Json<Envelope<Value>>, AppError> {
    let Json(request) = body.map_err(|e| AppError::Validation(e.body_text()))?;

    let text = run_analysis(state.store.as_ref(), state.llm.as_ref(), kind, request).await?;

    // data is keyed per kind: analysis / questions / guidance
    let mut data = Map::new();
    data.insert(kind.response_field().to_string(), Value::String(text));

    Ok(Json(Envelope::ok(kind.success_message(), Value::Object(data))))
}

/// GET /api/history/:resume_id
///
/// Newest first. An id that is not a UUID cannot own analyses, so it yields
/// an empty list like any other unknown id.
pub async fn handle_history(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<Envelope<Vec<AnalysisWithResume>>>, AppError> {
    let analyses = match Uuid::parse_str(resume_id.trim()) {
        Ok(id) => state.store.list_analyses(id).await?,
        Err(_) => Vec::new(),
    };
    Ok(Json(Envelope::list("Analysis history retrieved", analyses)))
}
