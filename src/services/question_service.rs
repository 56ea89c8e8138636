use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{question::Category, Question},
    models::dto::candidate::QuestionCandidate,
    repositories::{QuestionRepository, UserRepository},
    validation::QuestionValidator,
};

/// Acceptance workflow around the pure validator: validate, resolve the
/// author reference, assign identity and timestamps, persist.
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    users: Arc<dyn UserRepository>,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { questions, users }
    }

    pub async fn create_question(&self, candidate: QuestionCandidate) -> AppResult<Question> {
        let normalized = match QuestionValidator::validate(&candidate) {
            Ok(normalized) => normalized,
            Err(errors) => {
                log::debug!("rejected question candidate with {} errors", errors.len());
                return Err(AppError::Validation(errors));
            }
        };

        if !self.users.exists(&normalized.created_by).await? {
            return Err(AppError::NotFound(format!(
                "User with id '{}' not found",
                normalized.created_by
            )));
        }

        let question = Question::from_normalized(normalized);
        log::info!(
            "accepted {} question '{}' from user '{}'",
            question.payload.question_type(),
            question.id,
            question.created_by
        );

        self.questions.create(question).await
    }

    pub async fn get_question(&self, id: &str) -> AppResult<Question> {
        self.questions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    pub async fn list_questions(&self, offset: i64, limit: i64) -> AppResult<(Vec<Question>, i64)> {
        self.questions.list(offset, limit).await
    }

    pub async fn list_by_category(
        &self,
        category: Category,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Question>, i64)> {
        self.questions.list_by_category(category, offset, limit).await
    }

    pub async fn approve_question(&self, id: &str, approver_id: &str) -> AppResult<Question> {
        let mut question = self.get_question(id).await?;

        if question.approved {
            return Err(AppError::AlreadyExists(format!(
                "Question '{}' is already approved",
                id
            )));
        }

        if !self.users.exists(approver_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id '{}' not found",
                approver_id
            )));
        }

        let now = Utc::now();
        question.approved = true;
        question.approved_by = Some(approver_id.to_string());
        question.approved_at = Some(now);
        question.modified_at = Some(now);

        self.questions.update(question).await
    }

    pub async fn delete_question(&self, id: &str) -> AppResult<()> {
        self.questions.delete(id).await
    }
}
