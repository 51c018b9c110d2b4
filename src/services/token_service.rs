/// Token issuance and verification.
///
/// This module provides the `TokenService`, which coordinates:
/// - Signing of typed claims into compact HS256 JWTs
/// - Issuance of access + refresh token pairs with independent TTLs
/// - Verification (signature + expiry + token type) of presented tokens
///
/// Security model:
/// 1. Verification is always tied to an expected `TokenType` at the call
///    site, so a refresh token presented where an access token is required
///    fails with `TypeMismatch` regardless of caller logic.
/// 2. Tokens are stateless: validity is a function of the signature and the
///    embedded expiry alone. There is no revocation store, so a rotated
///    refresh token stays valid until its own expiry.
///
/// Concurrency:
/// - The service holds only the derived signing keys and the TTLs, all
///   immutable after construction, so it is freely shared across requests.
use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::{Claims, TokenPair, TokenType, User};
use crate::errors::TokenError;
use crate::utils::config::Config;

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// Construct a new `TokenService` from an already validated `Config`.
    /// The secret is non-empty and the TTLs positive there, which is why
    /// this constructor is infallible.
    pub fn new(config: &Config) -> Self {
        let secret = config.jwt_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_ttl: Duration::seconds(config.token_ttl_seconds()),
            refresh_ttl: Duration::seconds(config.refresh_token_ttl_seconds()),
        }
    }

    /// Issue a fresh access + refresh pair for `user`. The two tokens share
    /// the subject but are independent claims, signed independently.
    pub fn issue_token_pair(&self, user: &User) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.create_access_token(user.id)?,
            refresh_token: self.create_refresh_token(user.id)?,
        })
    }

    pub fn create_access_token(&self, user_id: i64) -> Result<String, TokenError> {
        self.sign(&Claims::new(user_id, TokenType::Access, self.access_ttl))
    }

    pub fn create_refresh_token(&self, user_id: i64) -> Result<String, TokenError> {
        self.sign(&Claims::new(user_id, TokenType::Refresh, self.refresh_ttl))
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Decode and verify a token: signature, expiry (no leeway) and token
    /// type, in that order. Failures stay distinguishable as `Malformed`,
    /// `InvalidSignature`, `Expired` or `TypeMismatch`.
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(TokenError::from)?;

        if data.claims.token_type != expected {
            return Err(TokenError::TypeMismatch);
        }

        Ok(data.claims)
    }
}
