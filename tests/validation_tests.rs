use played_server::models::domain::question::{Category, QuestionPayload, SchoolLevel};
use played_server::models::dto::candidate::QuestionCandidate;
use played_server::validation::{QuestionValidator, ValidationErrorKind};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn quiz_candidate_json(answer: &str) -> QuestionCandidate {
    let json = format!(
        r#"{{
            "question_type": "quiz",
            "category": "matematica",
            "question_text": "2+2?",
            "difficulty": 3,
            "school_level": "prim",
            "class_number": 2,
            "options": ["3", "4", "5"],
            "answer": "{}",
            "created_by": "u1"
        }}"#,
        answer
    );
    serde_json::from_str(&json).expect("candidate should deserialize")
}

#[test]
fn well_formed_quiz_submission_is_accepted() {
    init_logging();

    let candidate = quiz_candidate_json("4");
    let normalized = QuestionValidator::validate(&candidate).expect("should be accepted");

    assert_eq!(normalized.category, Category::Matematica);
    assert_eq!(normalized.school_level, Some(SchoolLevel::Prim));
    assert_eq!(normalized.class_number, Some(2));
    assert_eq!(normalized.difficulty, 3);
    assert!(!normalized.approved);
    assert!(matches!(normalized.payload, QuestionPayload::Quiz { .. }));
}

#[test]
fn answer_outside_options_is_the_only_failure() {
    init_logging();

    let candidate = quiz_candidate_json("9");
    let errors = QuestionValidator::validate(&candidate).expect_err("should be rejected");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::InvalidReference);
    assert_eq!(errors[0].field, "answer");
}

#[test]
fn sorting_solution_missing_an_element_is_rejected() {
    init_logging();

    let json = r#"{
        "question_type": "sorting",
        "category": "storia",
        "question_text": "Ordina gli eventi",
        "difficulty": 4,
        "items": ["a", "b", "c"],
        "solution": ["b", "a"],
        "created_by": "u1"
    }"#;
    let candidate: QuestionCandidate =
        serde_json::from_str(json).expect("candidate should deserialize");

    let errors = QuestionValidator::validate(&candidate).expect_err("should be rejected");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::ShapeMismatch);
    assert_eq!(errors[0].field, "solution");
}

#[test]
fn every_permutation_of_items_is_a_valid_solution() {
    init_logging();

    let permutations = [
        ["a", "b", "c"],
        ["a", "c", "b"],
        ["b", "a", "c"],
        ["b", "c", "a"],
        ["c", "a", "b"],
        ["c", "b", "a"],
    ];

    for permutation in permutations {
        let json = format!(
            r#"{{
                "question_type": "sorting",
                "category": "storia",
                "question_text": "Ordina gli eventi",
                "difficulty": 4,
                "items": ["a", "b", "c"],
                "solution": [{}],
                "created_by": "u1"
            }}"#,
            permutation
                .iter()
                .map(|entry| format!("\"{}\"", entry))
                .collect::<Vec<_>>()
                .join(", ")
        );
        let candidate: QuestionCandidate =
            serde_json::from_str(&json).expect("candidate should deserialize");

        assert!(
            QuestionValidator::validate(&candidate).is_ok(),
            "permutation {:?} should be accepted",
            permutation
        );
    }
}

#[test]
fn class_six_is_never_valid_at_primary_school() {
    init_logging();

    let mut candidate = quiz_candidate_json("4");
    candidate.class_number = Some(6);

    let errors = QuestionValidator::validate(&candidate).expect_err("should be rejected");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::ClassNotAllowedForLevel);
}

#[test]
fn rejection_reports_every_failure_at_once() {
    init_logging();

    let json = r#"{
        "question_type": "flashcard",
        "category": "matematica",
        "question_text": "",
        "difficulty": 12,
        "school_level": "prim",
        "class_number": 9,
        "created_by": "u1"
    }"#;
    let candidate: QuestionCandidate =
        serde_json::from_str(json).expect("candidate should deserialize");

    let errors = QuestionValidator::validate(&candidate).expect_err("should be rejected");
    let kinds: Vec<ValidationErrorKind> = errors.iter().map(|error| error.kind).collect();

    assert!(kinds.contains(&ValidationErrorKind::InvalidEnum));
    assert!(kinds.contains(&ValidationErrorKind::MissingField));
    assert!(kinds.contains(&ValidationErrorKind::OutOfRange));
    assert!(kinds.contains(&ValidationErrorKind::ClassNotAllowedForLevel));
}

#[test]
fn memory_submission_round_trips_through_validation() {
    init_logging();

    let json = r#"{
        "question_type": "memory",
        "category": "geografia",
        "question_text": "Trova le coppie",
        "difficulty": 2,
        "memory_pairs": [
            {"front": "Italia", "back": "Roma"},
            {"front": "Spagna", "back": "Madrid"}
        ],
        "created_by": "u3"
    }"#;
    let candidate: QuestionCandidate =
        serde_json::from_str(json).expect("candidate should deserialize");

    let normalized = QuestionValidator::validate(&candidate).expect("should be accepted");
    match normalized.payload {
        QuestionPayload::Memory { pairs } => {
            assert_eq!(pairs.len(), 2);
            assert_eq!(pairs[1].front, "Spagna");
        }
        other => panic!("expected memory payload, got {:?}", other),
    }
}
