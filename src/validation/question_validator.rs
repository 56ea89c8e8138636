use validator::Validate;

use crate::models::domain::question::{
    Category, MatchingPair, MemoryCard, NormalizedQuestion, QuestionPayload, QuestionType,
    SchoolLevel,
};
use crate::models::dto::candidate::QuestionCandidate;

use super::{SchoolLevelClassTable, TypeShapeValidator, ValidationError, ValidationErrorKind};

/// Full acceptance decision for a candidate question.
///
/// Every check runs and every failure is collected, so one pass yields the
/// complete error report. Pure: no I/O, no clock, no id assignment. The
/// `created_by` existence check is the caller's job, against whatever user
/// lookup it has injected.
pub struct QuestionValidator;

impl QuestionValidator {
    pub fn validate(
        candidate: &QuestionCandidate,
    ) -> Result<NormalizedQuestion, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let question_type = Self::parse_enum::<QuestionType>(
            &candidate.question_type,
            "question_type",
            &mut errors,
        );
        let category = Self::parse_enum::<Category>(&candidate.category, "category", &mut errors);
        let school_level = candidate.school_level.as_deref().and_then(|raw| {
            Self::parse_enum::<SchoolLevel>(raw, "school_level", &mut errors)
        });

        errors.extend(Self::scalar_errors(candidate));

        // Level and class are checked against each other only when both are
        // present; a half-specified placement is left for later.
        if let (Some(level), Some(class_number)) = (school_level, candidate.class_number) {
            if !SchoolLevelClassTable::allows(level, class_number) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ClassNotAllowedForLevel,
                    "class_number",
                    format!("class {} is not taught at school level '{}'", class_number, level),
                ));
            }
        }

        let payload = question_type.and_then(|question_type| {
            let shape_errors = TypeShapeValidator::check_shape(question_type, candidate);
            if shape_errors.is_empty() {
                Some(Self::build_payload(question_type, candidate))
            } else {
                errors.extend(shape_errors);
                None
            }
        });

        let approved = candidate.approved.unwrap_or(false);
        let approval_consistent = if approved {
            candidate.approved_by.is_some() && candidate.approved_at.is_some()
        } else {
            candidate.approved_by.is_none() && candidate.approved_at.is_none()
        };
        if !approval_consistent {
            errors.push(ValidationError::new(
                ValidationErrorKind::InconsistentApprovalState,
                "approved",
                "approved_by and approved_at must be set exactly when approved is true",
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        match (question_type, category, payload) {
            (Some(_), Some(category), Some(payload)) => Ok(NormalizedQuestion {
                question_text: candidate.question_text.clone(),
                category,
                difficulty: candidate.difficulty,
                school_level,
                class_number: candidate.class_number,
                payload,
                created_by: candidate.created_by.clone(),
                approved,
                approved_by: candidate.approved_by.clone(),
                approved_at: candidate.approved_at,
            }),
            // Parses only fail after recording an error, so an empty error
            // list guarantees all three are present.
            _ => unreachable!("candidate accepted without a parsed type, category and payload"),
        }
    }

    fn parse_enum<T: std::str::FromStr<Err = String>>(
        raw: &str,
        field: &'static str,
        errors: &mut Vec<ValidationError>,
    ) -> Option<T> {
        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(message) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidEnum,
                    field,
                    message,
                ));
                None
            }
        }
    }

    fn scalar_errors(candidate: &QuestionCandidate) -> Vec<ValidationError> {
        let Err(field_errors) = candidate.validate() else {
            return Vec::new();
        };

        let mut errors = Vec::new();
        for (field, failures) in field_errors.field_errors() {
            for failure in failures {
                let kind = match failure.code.as_ref() {
                    "range" => ValidationErrorKind::OutOfRange,
                    _ => ValidationErrorKind::MissingField,
                };
                let message = failure
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("invalid value for {}", field));
                errors.push(ValidationError::new(kind, field.to_string(), message));
            }
        }

        errors
    }

    fn build_payload(
        question_type: QuestionType,
        candidate: &QuestionCandidate,
    ) -> QuestionPayload {
        match question_type {
            QuestionType::Quiz => QuestionPayload::Quiz {
                options: candidate.options.clone().unwrap_or_default(),
                answer: candidate.answer.clone().unwrap_or_default(),
            },
            QuestionType::Sorting => QuestionPayload::Sorting {
                items: candidate.items.clone().unwrap_or_default(),
                solution: candidate.solution.clone().unwrap_or_default(),
            },
            QuestionType::Matching => QuestionPayload::Matching {
                pairs: candidate
                    .pairs
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(|pair| MatchingPair {
                        left: pair.left.clone().unwrap_or_default(),
                        right: pair.right.clone().unwrap_or_default(),
                    })
                    .collect(),
            },
            QuestionType::Memory => QuestionPayload::Memory {
                pairs: candidate
                    .memory_pairs
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(|card| MemoryCard {
                        front: card.front.clone().unwrap_or_default(),
                        back: card.back.clone().unwrap_or_default(),
                    })
                    .collect(),
            },
        }
    }
}
