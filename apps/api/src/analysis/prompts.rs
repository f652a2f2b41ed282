// System roles for the analysis endpoints.
// The user message is always the raw resume text; only the role changes.

use crate::models::analysis::AnalysisKind;

pub const RESUME_ANALYST_ROLE: &str = "You are an expert AI resume analyst and career advisor.";

pub const INTERVIEWER_ROLE: &str = "You are an expert technical interviewer and career coach.";

pub const CAREER_COUNSELOR_ROLE: &str = "You are a senior career counselor and industry expert.";

pub fn system_role(kind: AnalysisKind) -> &'static str {
    match kind {
        AnalysisKind::ResumeAnalysis => RESUME_ANALYST_ROLE,
        AnalysisKind::InterviewPrep => INTERVIEWER_ROLE,
        AnalysisKind::CareerGuidance => CAREER_COUNSELOR_ROLE,
    }
}
