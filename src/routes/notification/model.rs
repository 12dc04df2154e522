use serde::Deserialize;

use crate::models::NewNotification;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub read: Option<bool>,
    #[serde(default)]
    pub action_label: Option<String>,
    #[serde(default)]
    pub action_url: Option<String>,
}

impl From<CreateNotificationRequest> for NewNotification {
    fn from(req: CreateNotificationRequest) -> Self {
        NewNotification {
            user_id: req.user_id,
            kind: req.kind,
            message: req.message,
            read: req.read.unwrap_or(false),
            action_label: req.action_label,
            action_url: req.action_url,
        }
    }
}
