use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api"
    }))
}

/// GET /
/// Lists the public endpoints.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "AI-Powered Resume Analyzer API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/resume/upload": "Upload and parse resume",
            "POST /api/ai/analyze": "Analyze resume with AI",
            "POST /api/ai/interview": "Generate interview questions",
            "POST /api/ai/career": "Get career guidance",
            "GET /api/history/:resumeId": "Get analysis history",
            "GET /api/resumes": "Get all uploaded resumes"
        }
    }))
}
