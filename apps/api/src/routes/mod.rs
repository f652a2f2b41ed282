pub mod envelope;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Headroom over the file limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        // Resume intake
        .route("/api/resume/upload", post(resume::handle_upload))
        .route("/api/resumes", get(resume::handle_list_resumes))
        // AI analysis
        .route("/api/ai/analyze", post(analysis::handle_analyze))
        .route("/api/ai/interview", post(analysis::handle_interview))
        .route("/api/ai/career", post(analysis::handle_career))
        .route("/api/history/:resume_id", get(analysis::handle_history))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
