use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewActivity {
    pub user_id: i64,
    pub content: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
}
