use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::ResumeRef;

/// Which canned role the model plays for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    ResumeAnalysis,
    InterviewPrep,
    CareerGuidance,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 3] = [
        AnalysisKind::ResumeAnalysis,
        AnalysisKind::InterviewPrep,
        AnalysisKind::CareerGuidance,
    ];

    /// Tag persisted in `analysis_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisKind::ResumeAnalysis => "resume_analysis",
            AnalysisKind::InterviewPrep => "interview_prep",
            AnalysisKind::CareerGuidance => "career_guidance",
        }
    }

    /// Human-readable label stored as the analysis `prompt`.
    pub fn prompt_label(self) -> &'static str {
        match self {
            AnalysisKind::ResumeAnalysis => "Resume Analysis",
            AnalysisKind::InterviewPrep => "Interview Preparation",
            AnalysisKind::CareerGuidance => "Career Guidance",
        }
    }

    /// Key under which the generated text is returned in the response `data`.
    pub fn response_field(self) -> &'static str {
        match self {
            AnalysisKind::ResumeAnalysis => "analysis",
            AnalysisKind::InterviewPrep => "questions",
            AnalysisKind::CareerGuidance => "guidance",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AnalysisKind::ResumeAnalysis => "Resume analysis completed",
            AnalysisKind::InterviewPrep => "Interview questions generated",
            AnalysisKind::CareerGuidance => "Career guidance generated",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown analysis type '{s}'"))
    }
}

/// One generated response tied to a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub prompt: String,
    pub response: String,
    pub analysis_type: AnalysisKind,
    pub created_at: DateTime<Utc>,
}

/// History entry: the analysis plus a few fields of its parent resume.
/// `resume` is null when the parent record no longer resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisWithResume {
    #[serde(flatten)]
    pub analysis: Analysis,
    pub resume: Option<ResumeRef>,
}

#[derive(Debug, Clone)]
pub struct NewAnalysis {
    pub resume_id: Uuid,
    pub kind: AnalysisKind,
    pub response: String,
}
