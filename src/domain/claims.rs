use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Marker distinguishing the two kinds of token this service mints.
///
/// Verification always names the kind it expects, so a refresh token can
/// never be replayed where an access token is required (or vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
        }
    }
}

/// Signed payload embedded in every token.
///
/// Decoding is strict: unknown or missing fields are rejected rather than
/// tolerated as a generic key-value bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Claims {
    pub sub: i64, // subject (user id)
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub iat: i64, // issued at (unix seconds)
    pub exp: i64, // expiration time (unix seconds)
}

impl Claims {
    /// Build claims expiring `ttl` from now. `ttl` is positive by
    /// construction (config rejects non-positive TTLs), so `exp > iat`.
    pub fn new(sub: i64, token_type: TokenType, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub,
            token_type,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
