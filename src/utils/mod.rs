use std::sync::LazyLock;

use bcrypt::{hash, verify};
use regex::Regex;

static CORPORATE_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(google|apple|meta|amazon|netflix|microsoft)\.(com|net|org)$")
        .expect("corporate domain pattern is valid")
});

pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), cost)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password.as_bytes(), hash)
}

/// 只接受六家大厂的企业邮箱，域名取第一个 '@' 之后的部分
pub fn is_corporate_email(email: &str) -> bool {
    email
        .split('@')
        .nth(1)
        .is_some_and(|domain| CORPORATE_DOMAIN.is_match(domain))
}

/// 取路径参数开头的整数部分，"12abc" 得到 12；没有数字或超出范围时视为不存在
pub fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    let sign = raw.len() - unsigned.len();
    raw[..sign + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corporate_domains_are_allowed() {
        for email in [
            "neo@meta.com",
            "tim@APPLE.com",
            "jeff@amazon.net",
            "reed@netflix.org",
            "sundar@Google.com",
            "satya@microsoft.net",
        ] {
            assert!(is_corporate_email(email), "{email}");
        }
    }

    #[test]
    fn other_domains_are_rejected() {
        for email in [
            "neo@gmail.com",
            "neo@meta.io",
            "neo@mail.meta.com",
            "neo@metacorp.com",
            "neo@amazon.co.uk",
            "neo@yahoo.org",
            "neo.meta.com",
            "",
        ] {
            assert!(!is_corporate_email(email), "{email}");
        }
    }

    #[test]
    fn domain_is_the_segment_after_first_at() {
        assert!(is_corporate_email("a@meta.com@evil.com"));
        assert!(!is_corporate_email("a@evil.com@meta.com"));
    }

    #[test]
    fn ids_parse_or_vanish() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-"), None);
    }

    #[test]
    fn ids_use_leading_digits() {
        assert_eq!(parse_id("1abc"), Some(1));
        assert_eq!(parse_id("4.2"), Some(4));
        assert_eq!(parse_id("  7 "), Some(7));
        assert_eq!(parse_id("+3"), Some(3));
        assert_eq!(parse_id("-3x"), Some(-3));
        assert_eq!(parse_id("a1"), None);
        assert_eq!(parse_id("99999999999999999999"), None);
    }

    #[test]
    fn password_round_trip() {
        let hashed = hash_password("hunter2", 4).unwrap();
        assert_ne!(hashed, "hunter2");
        assert!(verify_password("hunter2", &hashed).unwrap());
        assert!(!verify_password("hunter3", &hashed).unwrap());
    }
}
