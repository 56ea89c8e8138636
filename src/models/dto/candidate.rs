use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Unvalidated question submission.
///
/// Discriminant fields arrive as raw strings and every type-specific field is
/// optional, so a malformed submission deserializes cleanly and is rejected
/// with a full error report instead of failing at the parse boundary.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuestionCandidate {
    pub question_type: String,

    pub category: String,

    #[validate(length(min = 1, message = "question text must not be empty"))]
    pub question_text: String,

    #[validate(range(min = 1, max = 10, message = "difficulty must be between 1 and 10"))]
    pub difficulty: i32,

    #[serde(default)]
    pub school_level: Option<String>,

    #[serde(default)]
    pub class_number: Option<i32>,

    #[serde(default)]
    pub options: Option<Vec<String>>,

    #[serde(default)]
    pub answer: Option<String>,

    #[serde(default)]
    pub items: Option<Vec<String>>,

    #[serde(default)]
    pub solution: Option<Vec<String>>,

    #[serde(default)]
    pub pairs: Option<Vec<MatchingPairInput>>,

    #[serde(default)]
    pub memory_pairs: Option<Vec<MemoryCardInput>>,

    #[validate(length(min = 1, message = "created_by is required"))]
    pub created_by: String,

    #[serde(default)]
    pub approved: Option<bool>,

    #[serde(default)]
    pub approved_by: Option<String>,

    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingPairInput {
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemoryCardInput {
    #[serde(default)]
    pub front: Option<String>,
    #[serde(default)]
    pub back: Option<String>,
}
