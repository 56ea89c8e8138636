use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fully validated, persisted question document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub question_text: String,
    pub category: Category,
    pub difficulty: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_level: Option<SchoolLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_number: Option<i32>,
    #[serde(flatten)]
    pub payload: QuestionPayload,
    pub created_by: String,
    pub approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// Validator output: a candidate that passed every check, with defaults
/// filled in. Carries no id and no timestamps, both are assigned at the
/// persistence boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedQuestion {
    pub question_text: String,
    pub category: Category,
    pub difficulty: i32,
    pub school_level: Option<SchoolLevel>,
    pub class_number: Option<i32>,
    pub payload: QuestionPayload,
    pub created_by: String,
    pub approved: bool,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn from_normalized(normalized: NormalizedQuestion) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            question_text: normalized.question_text,
            category: normalized.category,
            difficulty: normalized.difficulty,
            school_level: normalized.school_level,
            class_number: normalized.class_number,
            payload: normalized.payload,
            created_by: normalized.created_by,
            approved: normalized.approved,
            approved_by: normalized.approved_by,
            approved_at: normalized.approved_at,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }
}

/// Type-specific content of a question. Exactly one variant exists per
/// question type, so a quiz question carrying sorting fields is not
/// representable.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "question_type", rename_all = "lowercase")]
pub enum QuestionPayload {
    Quiz { options: Vec<String>, answer: String },
    Sorting { items: Vec<String>, solution: Vec<String> },
    Matching { pairs: Vec<MatchingPair> },
    Memory { pairs: Vec<MemoryCard> },
}

impl QuestionPayload {
    pub fn question_type(&self) -> QuestionType {
        match self {
            QuestionPayload::Quiz { .. } => QuestionType::Quiz,
            QuestionPayload::Sorting { .. } => QuestionType::Sorting,
            QuestionPayload::Matching { .. } => QuestionType::Matching,
            QuestionPayload::Memory { .. } => QuestionType::Memory,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchingPair {
    pub left: String,
    pub right: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryCard {
    pub front: String,
    pub back: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Quiz,
    Sorting,
    Matching,
    Memory,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Quiz => "quiz",
            QuestionType::Sorting => "sorting",
            QuestionType::Matching => "matching",
            QuestionType::Memory => "memory",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "quiz" => Ok(QuestionType::Quiz),
            "sorting" => Ok(QuestionType::Sorting),
            "matching" => Ok(QuestionType::Matching),
            "memory" => Ok(QuestionType::Memory),
            other => Err(format!("unknown question type '{}'", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Matematica,
    Italiano,
    Storia,
    Scienze,
    Geografia,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Matematica => "matematica",
            Category::Italiano => "italiano",
            Category::Storia => "storia",
            Category::Scienze => "scienze",
            Category::Geografia => "geografia",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "matematica" => Ok(Category::Matematica),
            "italiano" => Ok(Category::Italiano),
            "storia" => Ok(Category::Storia),
            "scienze" => Ok(Category::Scienze),
            "geografia" => Ok(Category::Geografia),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolLevel {
    Prim,
    Sec1,
    Sec2,
}

impl SchoolLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchoolLevel::Prim => "prim",
            SchoolLevel::Sec1 => "sec1",
            SchoolLevel::Sec2 => "sec2",
        }
    }
}

impl fmt::Display for SchoolLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchoolLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "prim" => Ok(SchoolLevel::Prim),
            "sec1" => Ok(SchoolLevel::Sec1),
            "sec2" => Ok(SchoolLevel::Sec2),
            other => Err(format!("unknown school level '{}'", other)),
        }
    }
}
