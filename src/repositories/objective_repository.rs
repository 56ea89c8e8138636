use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Objective};

#[async_trait]
pub trait ObjectiveRepository: Send + Sync {
    async fn create(&self, objective: Objective) -> AppResult<Objective>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Objective>>;
    async fn find_all(&self) -> AppResult<Vec<Objective>>;
}

pub struct MongoObjectiveRepository {
    collection: Collection<Objective>,
}

impl MongoObjectiveRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("objectives");
        Self { collection }
    }
}

#[async_trait]
impl ObjectiveRepository for MongoObjectiveRepository {
    async fn create(&self, objective: Objective) -> AppResult<Objective> {
        self.collection.insert_one(&objective).await?;
        Ok(objective)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Objective>> {
        let objective = self.collection.find_one(doc! { "id": id }).await?;
        Ok(objective)
    }

    async fn find_all(&self) -> AppResult<Vec<Objective>> {
        let cursor = self.collection.find(doc! {}).await?;
        let objectives: Vec<Objective> = cursor.try_collect().await?;
        Ok(objectives)
    }
}
