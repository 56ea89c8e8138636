use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoObjectiveRepository, MongoQuestionRepository, MongoTrophyRepository,
        MongoUserRepository, ObjectiveRepository, TrophyRepository,
    },
    services::QuestionService,
};

/// Composition root: connects the database and wires repositories into
/// services for whatever surface embeds this crate.
#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub trophies: Arc<dyn TrophyRepository>,
    pub objectives: Arc<dyn ObjectiveRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;

        let question_service = Arc::new(QuestionService::new(
            question_repository,
            user_repository,
        ));

        Ok(Self {
            question_service,
            trophies: Arc::new(MongoTrophyRepository::new(&db)),
            objectives: Arc::new(MongoObjectiveRepository::new(&db)),
            config: Arc::new(config),
        })
    }
}
