use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Trophy};

#[async_trait]
pub trait TrophyRepository: Send + Sync {
    async fn create(&self, trophy: Trophy) -> AppResult<Trophy>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Trophy>>;
    async fn find_all(&self) -> AppResult<Vec<Trophy>>;
}

pub struct MongoTrophyRepository {
    collection: Collection<Trophy>,
}

impl MongoTrophyRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("trophies");
        Self { collection }
    }
}

#[async_trait]
impl TrophyRepository for MongoTrophyRepository {
    async fn create(&self, trophy: Trophy) -> AppResult<Trophy> {
        self.collection.insert_one(&trophy).await?;
        Ok(trophy)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Trophy>> {
        let trophy = self.collection.find_one(doc! { "id": id }).await?;
        Ok(trophy)
    }

    async fn find_all(&self) -> AppResult<Vec<Trophy>> {
        let cursor = self.collection.find(doc! {}).await?;
        let trophies: Vec<Trophy> = cursor.try_collect().await?;
        Ok(trophies)
    }
}
