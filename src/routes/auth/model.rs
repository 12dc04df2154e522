use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub company: String,
    pub avatar_initials: String,
    #[serde(default)]
    pub burnout_score: Option<i32>,
}

// 缺字段或类型不对时由 handler 返回统一的提示，所以这里不限定类型
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}
