use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_BURNOUT_SCORE: i32 = 50;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: String,
    pub company: String,
    pub burnout_score: i32,
    pub avatar_initials: String,
    pub joined_at: DateTime<Utc>,
}

/// 新用户，id 与 joined_at 由存储层生成
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub company: String,
    pub burnout_score: Option<i32>,
    pub avatar_initials: String,
}

/// 可修改的用户字段。id、用户名、邮箱、密码和注册时间不在其中
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub display_name: Option<String>,
    pub company: Option<String>,
    pub burnout_score: Option<i32>,
    pub avatar_initials: Option<String>,
}

impl UserPatch {
    pub(crate) fn apply(self, user: &mut User) {
        if let Some(display_name) = self.display_name {
            user.display_name = display_name;
        }
        if let Some(company) = self.company {
            user.company = company;
        }
        if let Some(score) = self.burnout_score {
            user.burnout_score = score;
        }
        if let Some(initials) = self.avatar_initials {
            user.avatar_initials = initials;
        }
    }
}

// 动态列表里附带的作者信息
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub username: String,
    pub display_name: String,
    pub avatar_initials: String,
    pub company: String,
}

impl From<&User> for PublicProfile {
    fn from(user: &User) -> Self {
        PublicProfile {
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            avatar_initials: user.avatar_initials.clone(),
            company: user.company.clone(),
        }
    }
}

// 排行榜条目，不含邮箱和密码
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub burnout_score: i32,
    pub avatar_initials: String,
    pub company: String,
}

impl From<User> for LeaderboardEntry {
    fn from(user: User) -> Self {
        LeaderboardEntry {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            burnout_score: user.burnout_score,
            avatar_initials: user.avatar_initials,
            company: user.company,
        }
    }
}
