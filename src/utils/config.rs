use std::env;

use dotenvy::dotenv;
use thiserror::Error;

// Short-lived access tokens, week-long refresh tokens.
const DEFAULT_ACCESS_TTL_SECONDS: i64 = 900;
const DEFAULT_REFRESH_TTL_SECONDS: i64 = 604_800;
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Immutable process configuration. Built once at startup; every token
/// operation depends on it, so construction failure must abort startup.
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
    listen_addr: String,
}

impl Config {
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_token_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Direct constructor, used by tests to thread a distinct secret per
    /// case instead of going through process-wide env vars.
    pub fn new(
        jwt_secret: impl Into<String>,
        access_ttl_seconds: i64,
        refresh_ttl_seconds: i64,
    ) -> Result<Self, ConfigError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if access_ttl_seconds <= 0 || refresh_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid("token TTLs must be positive"));
        }

        Ok(Self {
            jwt_secret,
            access_ttl_seconds,
            refresh_ttl_seconds,
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let jwt_secret = req_var("JWT_SECRET")?;
        let access_ttl_seconds = opt_i64("ACCESS_TTL_SECONDS", DEFAULT_ACCESS_TTL_SECONDS)?;
        let refresh_ttl_seconds = opt_i64("REFRESH_TTL_SECONDS", DEFAULT_REFRESH_TTL_SECONDS)?;

        let mut config = Config::new(jwt_secret, access_ttl_seconds, refresh_ttl_seconds)?;
        if let Ok(addr) = env::var("LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        Ok(config)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),

    #[error("{0}")]
    Invalid(&'static str),

    #[error("JWT secret must not be empty")]
    EmptySecret,
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_i64(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(v) => v.parse::<i64>().map_err(|_| ConfigError::Invalid(key)),
    }
}
