use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gamification award unlocked once a player accumulates enough points.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Trophy {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub required_points: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Trophy {
    pub fn new(name: &str, description: &str, icon: &str, required_points: i32) -> Self {
        Trophy {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            required_points,
            created_at: Some(Utc::now()),
        }
    }
}
