// AI analysis: resume analysis, interview preparation, career guidance.
// All model calls go through the ChatModel in AppState.

pub mod handlers;
pub mod prompts;
pub mod service;
