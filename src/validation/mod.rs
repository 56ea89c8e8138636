mod question_validator;
mod school_level;
mod shape;

pub use question_validator::QuestionValidator;
pub use school_level::SchoolLevelClassTable;
pub use shape::TypeShapeValidator;

use serde::Serialize;
use thiserror::Error;

/// Every way a candidate question can fail acceptance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    InvalidEnum,
    OutOfRange,
    ClassNotAllowedForLevel,
    MissingField,
    IncompletePair,
    InvalidReference,
    ShapeMismatch,
    InconsistentApprovalState,
    UnknownSchoolLevel,
}

/// One validation failure, tied to the field that caused it. A rejected
/// candidate carries the complete list, never just the first failure.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationError {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }
}
