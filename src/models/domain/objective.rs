use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recurring goal that rewards points when its target count is reached.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Objective {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_count: i32,
    pub reward_points: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Objective {
    pub fn new(title: &str, description: &str, target_count: i32, reward_points: i32) -> Self {
        Objective {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            target_count,
            reward_points,
            created_at: Some(Utc::now()),
        }
    }
}
