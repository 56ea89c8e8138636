use std::collections::{HashMap, HashSet};

use crate::models::domain::question::QuestionType;
use crate::models::dto::candidate::QuestionCandidate;

use super::{ValidationError, ValidationErrorKind};

/// Per-type shape rules: which fields a question must carry for its type and
/// how they must relate to each other. Pure over its input.
pub struct TypeShapeValidator;

impl TypeShapeValidator {
    pub fn check_shape(
        question_type: QuestionType,
        candidate: &QuestionCandidate,
    ) -> Vec<ValidationError> {
        match question_type {
            QuestionType::Quiz => Self::check_quiz(candidate),
            QuestionType::Sorting => Self::check_sorting(candidate),
            QuestionType::Matching => Self::check_matching(candidate),
            QuestionType::Memory => Self::check_memory(candidate),
        }
    }

    fn check_quiz(candidate: &QuestionCandidate) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        match &candidate.options {
            None => errors.push(missing("options", "quiz questions require an options list")),
            Some(options) => {
                if options.len() < 2 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ShapeMismatch,
                        "options",
                        format!("quiz questions need at least 2 options, got {}", options.len()),
                    ));
                }

                let mut seen = HashSet::new();
                let duplicates: Vec<&str> = options
                    .iter()
                    .filter(|option| !seen.insert(option.as_str()))
                    .map(String::as_str)
                    .collect();
                if !duplicates.is_empty() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ShapeMismatch,
                        "options",
                        format!("duplicate options: {}", duplicates.join(", ")),
                    ));
                }
            }
        }

        match &candidate.answer {
            None => errors.push(missing("answer", "quiz questions require an answer")),
            Some(answer) => {
                if let Some(options) = &candidate.options {
                    if !options.contains(answer) {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::InvalidReference,
                            "answer",
                            format!("answer '{}' is not one of the options", answer),
                        ));
                    }
                }
            }
        }

        errors
    }

    fn check_sorting(candidate: &QuestionCandidate) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let items = match candidate.items.as_deref() {
            None | Some([]) => {
                errors.push(missing("items", "sorting questions require at least one item"));
                None
            }
            Some(items) => Some(items),
        };

        let solution = match candidate.solution.as_deref() {
            None => {
                errors.push(missing("solution", "sorting questions require a solution"));
                None
            }
            Some(solution) => Some(solution),
        };

        if let (Some(items), Some(solution)) = (items, solution) {
            if !is_permutation(items, solution) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ShapeMismatch,
                    "solution",
                    "solution must be a reordering of items with the same elements",
                ));
            }
        }

        errors
    }

    fn check_matching(candidate: &QuestionCandidate) -> Vec<ValidationError> {
        let pairs = match candidate.pairs.as_deref() {
            None | Some([]) => {
                return vec![missing("pairs", "matching questions require at least one pair")];
            }
            Some(pairs) => pairs,
        };

        let mut errors = Vec::new();
        for (index, pair) in pairs.iter().enumerate() {
            let mut blank = Vec::new();
            if is_blank(pair.left.as_deref()) {
                blank.push("left");
            }
            if is_blank(pair.right.as_deref()) {
                blank.push("right");
            }
            if !blank.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IncompletePair,
                    "pairs",
                    format!("pair {} is missing {}", index, blank.join(" and ")),
                ));
            }
        }

        errors
    }

    fn check_memory(candidate: &QuestionCandidate) -> Vec<ValidationError> {
        let pairs = match candidate.memory_pairs.as_deref() {
            None | Some([]) => {
                return vec![missing(
                    "memory_pairs",
                    "memory questions require at least one pair",
                )];
            }
            Some(pairs) => pairs,
        };

        let mut errors = Vec::new();
        for (index, card) in pairs.iter().enumerate() {
            let mut blank = Vec::new();
            if is_blank(card.front.as_deref()) {
                blank.push("front");
            }
            if is_blank(card.back.as_deref()) {
                blank.push("back");
            }
            if !blank.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IncompletePair,
                    "memory_pairs",
                    format!("pair {} is missing {}", index, blank.join(" and ")),
                ));
            }
        }

        errors
    }
}

fn missing(field: &'static str, message: &str) -> ValidationError {
    ValidationError::new(ValidationErrorKind::MissingField, field, message)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |side| side.trim().is_empty())
}

/// True when `solution` contains exactly the same multiset of elements as
/// `items`, in any order.
fn is_permutation(items: &[String], solution: &[String]) -> bool {
    if items.len() != solution.len() {
        return false;
    }

    let mut counts: HashMap<&str, i32> = HashMap::new();
    for item in items {
        *counts.entry(item.as_str()).or_insert(0) += 1;
    }
    for entry in solution {
        match counts.get_mut(entry.as_str()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dto::candidate::{MatchingPairInput, MemoryCardInput};
    use crate::test_utils::fixtures;

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|error| error.kind).collect()
    }

    #[test]
    fn well_formed_quiz_shape_passes() {
        let candidate = fixtures::quiz_candidate();
        assert!(TypeShapeValidator::check_shape(QuestionType::Quiz, &candidate).is_empty());
    }

    #[test]
    fn quiz_missing_options_and_answer_reports_both() {
        let mut candidate = fixtures::quiz_candidate();
        candidate.options = None;
        candidate.answer = None;

        let errors = TypeShapeValidator::check_shape(QuestionType::Quiz, &candidate);
        assert_eq!(
            kinds(&errors),
            vec![ValidationErrorKind::MissingField, ValidationErrorKind::MissingField]
        );
    }

    #[test]
    fn quiz_answer_outside_options_is_invalid_reference() {
        let mut candidate = fixtures::quiz_candidate();
        candidate.answer = Some("9".to_string());

        let errors = TypeShapeValidator::check_shape(QuestionType::Quiz, &candidate);
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::InvalidReference]);
    }

    #[test]
    fn quiz_single_option_is_shape_mismatch() {
        let mut candidate = fixtures::quiz_candidate();
        candidate.options = Some(vec!["4".to_string()]);
        candidate.answer = Some("4".to_string());

        let errors = TypeShapeValidator::check_shape(QuestionType::Quiz, &candidate);
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::ShapeMismatch]);
    }

    #[test]
    fn quiz_duplicate_options_are_shape_mismatch() {
        let mut candidate = fixtures::quiz_candidate();
        candidate.options = Some(vec!["4".to_string(), "4".to_string(), "5".to_string()]);

        let errors = TypeShapeValidator::check_shape(QuestionType::Quiz, &candidate);
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::ShapeMismatch]);
    }

    #[test]
    fn sorting_permutation_is_accepted() {
        let mut candidate = fixtures::sorting_candidate();
        candidate.solution = Some(vec!["c".to_string(), "a".to_string(), "b".to_string()]);

        assert!(TypeShapeValidator::check_shape(QuestionType::Sorting, &candidate).is_empty());
    }

    #[test]
    fn sorting_shorter_solution_is_shape_mismatch() {
        let mut candidate = fixtures::sorting_candidate();
        candidate.solution = Some(vec!["b".to_string(), "a".to_string()]);

        let errors = TypeShapeValidator::check_shape(QuestionType::Sorting, &candidate);
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::ShapeMismatch]);
    }

    #[test]
    fn sorting_duplicated_element_is_shape_mismatch() {
        let mut candidate = fixtures::sorting_candidate();
        candidate.solution = Some(vec!["a".to_string(), "a".to_string(), "b".to_string()]);

        let errors = TypeShapeValidator::check_shape(QuestionType::Sorting, &candidate);
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::ShapeMismatch]);
    }

    #[test]
    fn sorting_duplicate_items_with_matching_solution_pass() {
        let mut candidate = fixtures::sorting_candidate();
        candidate.items = Some(vec!["a".to_string(), "a".to_string(), "b".to_string()]);
        candidate.solution = Some(vec!["b".to_string(), "a".to_string(), "a".to_string()]);

        assert!(TypeShapeValidator::check_shape(QuestionType::Sorting, &candidate).is_empty());
    }

    #[test]
    fn sorting_empty_items_is_missing_field() {
        let mut candidate = fixtures::sorting_candidate();
        candidate.items = Some(vec![]);

        let errors = TypeShapeValidator::check_shape(QuestionType::Sorting, &candidate);
        assert!(errors
            .iter()
            .any(|error| error.kind == ValidationErrorKind::MissingField && error.field == "items"));
    }

    #[test]
    fn matching_blank_side_is_incomplete_pair() {
        let mut candidate = fixtures::matching_candidate();
        candidate.pairs = Some(vec![
            MatchingPairInput {
                left: Some("cane".to_string()),
                right: Some("dog".to_string()),
            },
            MatchingPairInput {
                left: Some("gatto".to_string()),
                right: Some("  ".to_string()),
            },
        ]);

        let errors = TypeShapeValidator::check_shape(QuestionType::Matching, &candidate);
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::IncompletePair]);
        assert!(errors[0].message.contains("pair 1"));
        assert!(errors[0].message.contains("right"));
    }

    #[test]
    fn memory_missing_pairs_is_missing_field() {
        let mut candidate = fixtures::memory_candidate();
        candidate.memory_pairs = None;

        let errors = TypeShapeValidator::check_shape(QuestionType::Memory, &candidate);
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::MissingField]);
        assert_eq!(errors[0].field, "memory_pairs");
    }

    #[test]
    fn memory_pair_missing_both_sides_reports_once() {
        let mut candidate = fixtures::memory_candidate();
        candidate.memory_pairs = Some(vec![MemoryCardInput { front: None, back: None }]);

        let errors = TypeShapeValidator::check_shape(QuestionType::Memory, &candidate);
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::IncompletePair]);
        assert!(errors[0].message.contains("front and back"));
    }
}
