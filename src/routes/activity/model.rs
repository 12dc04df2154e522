use serde::{Deserialize, Serialize};

use crate::models::{Activity, NewActivity, PublicProfile};
use crate::storage::Store;

// 创建动态请求，计数字段可省略或为 null
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    pub user_id: i64,
    pub content: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub likes: Option<u32>,
    #[serde(default)]
    pub comments: Option<u32>,
    #[serde(default)]
    pub shares: Option<u32>,
}

impl From<CreateActivityRequest> for NewActivity {
    fn from(req: CreateActivityRequest) -> Self {
        NewActivity {
            user_id: req.user_id,
            content: req.content,
            tags: req.tags.unwrap_or_default(),
            likes: req.likes.unwrap_or(0),
            comments: req.comments.unwrap_or(0),
            shares: req.shares.unwrap_or(0),
        }
    }
}

/// 带作者信息的动态，作者信息在读取时查询，不随动态保存
#[derive(Debug, Serialize)]
pub struct EnrichedActivity {
    #[serde(flatten)]
    pub activity: Activity,
    pub user: Option<PublicProfile>,
}

impl EnrichedActivity {
    pub fn load(store: &Store, activity: Activity) -> Self {
        let user = store
            .get_user(activity.user_id)
            .map(|user| PublicProfile::from(&user));
        EnrichedActivity { activity, user }
    }
}
