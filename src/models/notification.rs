use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    /// NEW_CONNECTION、ALERT、MENTION、RESOURCE 等，不做限制
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub action_label: Option<String>,
    pub action_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: i64,
    pub kind: String,
    pub message: String,
    pub read: bool,
    pub action_label: Option<String>,
    pub action_url: Option<String>,
}
