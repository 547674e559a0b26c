//! # Authentication Token
//!
//! Bearer token held by the API client for the duration of a session.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}

/// Authentication token with optional expiry.
///
/// A token without `expires_at` never expires; the server stays the final
/// judge through `401` responses.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
    #[serde(default = "default_token_type")]
    token_type: String,
}

impl AuthToken {
    /// Bearer token that never expires.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
            token_type: default_token_type(),
        }
    }

    /// Bearer token expiring at `expires_at`.
    pub fn with_expiry(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            expires_at: Some(expires_at),
            ..Self::new(token)
        }
    }

    /// Same token under a different scheme (`Token`, `JWT`, ...).
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = token_type.into();
        self
    }

    /// Bearer token whose expiry is read from the JWT `exp` claim.
    ///
    /// The signature is not verified; the claim only decides whether the
    /// client bothers sending the token. Opaque or malformed tokens get no
    /// expiry.
    pub fn from_jwt(token: impl Into<String>) -> Self {
        let token = token.into();
        let expires_at = jwt_expiry(&token);
        Self {
            token,
            expires_at,
            token_type: default_token_type(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Check whether the token has expired as of now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(lib_utils::now_utc())
    }

    /// Check whether the token has expired as of `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .field("token_type", &self.token_type)
            .finish()
    }
}

fn jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);

    let claims: Value = serde_json::from_str(&lib_utils::b64u_decode_to_string(payload).ok()?).ok()?;
    let exp = claims.get("exp")?;
    let seconds = exp.as_i64().or_else(|| exp.as_f64().map(|secs| secs as i64))?;

    lib_utils::from_unix_seconds(seconds).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn jwt_with_claims(claims: &str) -> String {
        format!(
            "{}.{}.signature",
            lib_utils::b64u_encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            lib_utils::b64u_encode(claims)
        )
    }

    #[test]
    fn test_token_without_expiry_never_expires() {
        let token = AuthToken::new("abc");
        assert!(!token.is_expired());
        assert!(!token.is_expired_at(DateTime::<Utc>::MAX_UTC));
        assert_eq!(token.token_type(), "Bearer");
    }

    #[test]
    fn test_expiry_boundary() {
        let at = lib_utils::parse_utc("2025-11-01T10:00:00Z").unwrap();
        let token = AuthToken::with_expiry("abc", at);

        assert!(!token.is_expired_at(at - Duration::seconds(1)));
        assert!(token.is_expired_at(at));
        assert!(token.is_expired_at(at + Duration::seconds(1)));
    }

    #[test]
    fn test_header_value() {
        assert_eq!(AuthToken::new("abc").header_value(), "Bearer abc");
        assert_eq!(
            AuthToken::new("abc").with_token_type("Token").header_value(),
            "Token abc"
        );
    }

    #[test]
    fn test_from_jwt_reads_exp_claim() {
        let token = AuthToken::from_jwt(jwt_with_claims(r#"{"sub":"alice","exp":1761991200}"#));
        assert_eq!(
            token.expires_at(),
            Some(lib_utils::parse_utc("2025-11-01T10:00:00Z").unwrap())
        );
        assert!(token.is_expired());
    }

    #[test]
    fn test_from_jwt_without_exp_or_opaque_token() {
        assert_eq!(AuthToken::from_jwt(jwt_with_claims(r#"{"sub":"alice"}"#)).expires_at(), None);
        assert_eq!(AuthToken::from_jwt("opaque-token").expires_at(), None);
        assert_eq!(AuthToken::from_jwt("a.%%%.c").expires_at(), None);
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", AuthToken::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_deserialize_defaults_token_type() {
        let token: AuthToken = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(token, AuthToken::new("abc"));
    }
}
