use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried inside a session token.
///
/// A small RFC 7519 subset: subject, expiry, issued-at, plus arbitrary
/// extra fields flattened into the payload. Standard fields are optional
/// so that malformed tokens decode far enough to be rejected for the
/// right reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (username the token represents)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Additional custom fields (flattened into the payload)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for a subject expiring `ttl` from now.
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: Some(subject.to_string()),
            exp: Some((now + ttl).timestamp()),
            iat: Some(now.timestamp()),
            extra: HashMap::new(),
        }
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

impl Default for Claims {
    fn default() -> Self {
        Self {
            sub: None,
            exp: None,
            iat: None,
            extra: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("johndoe", Duration::minutes(30));

        assert_eq!(claims.sub, Some("johndoe".to_string()));

        let exp = claims.exp.expect("exp should be set");
        let iat = claims.iat.expect("iat should be set");
        assert_eq!(exp - iat, 30 * 60);
    }

    #[test]
    fn test_builder() {
        let claims = Claims::new()
            .with_subject("johndoe")
            .with_expiration(1234567890)
            .with_extra("scope", "emoticons")
            .with_extra("version", 2);

        assert_eq!(claims.sub, Some("johndoe".to_string()));
        assert_eq!(claims.exp, Some(1234567890));
        assert_eq!(
            claims.extra.get("scope").and_then(|v| v.as_str()),
            Some("emoticons")
        );
        assert_eq!(
            claims.extra.get("version").and_then(|v| v.as_i64()),
            Some(2)
        );
    }
}
