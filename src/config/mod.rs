use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("BCRYPT_COST must be between {min} and {max}, got {0}", min = MIN_BCRYPT_COST, max = MAX_BCRYPT_COST)]
    BcryptCost(u32),
}

pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
    pub bcrypt_cost: u32,
    pub leaderboard_limit: usize,
    pub activity_feed_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_host: "0.0.0.0".into(),
            server_port: 5000,
            api_base_uri: "/api".into(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            leaderboard_limit: 10,
            activity_feed_limit: 20,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let defaults = Config::default();
        let bcrypt_cost = var_or("BCRYPT_COST", defaults.bcrypt_cost)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::BcryptCost(bcrypt_cost));
        }

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: var_or("SERVER_PORT", defaults.server_port)?,
            api_base_uri: normalize_base_uri(
                &env::var("API_BASE_URI").unwrap_or(defaults.api_base_uri),
            ),
            bcrypt_cost,
            leaderboard_limit: var_or("LEADERBOARD_LIMIT", defaults.leaderboard_limit)?,
            activity_feed_limit: var_or("ACTIVITY_FEED_LIMIT", defaults.activity_feed_limit)?,
        })
    }
}

fn var_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

// 统一成 "/xxx" 形式，空串表示挂在根路径
fn normalize_base_uri(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_uri_is_normalized() {
        assert_eq!(normalize_base_uri("/api"), "/api");
        assert_eq!(normalize_base_uri("api/"), "/api");
        assert_eq!(normalize_base_uri(" /v1/api/ "), "/v1/api");
        assert_eq!(normalize_base_uri("/"), "");
        assert_eq!(normalize_base_uri(""), "");
    }

    #[test]
    fn defaults_match_public_limits() {
        let config = Config::default();
        assert_eq!(config.leaderboard_limit, 10);
        assert_eq!(config.activity_feed_limit, 20);
        assert_eq!(config.api_base_uri, "/api");
    }
}
