use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::TokenError;

/// Rejections produced by the protected-route gate. Everything maps to 401
/// before the handler runs.
#[derive(Error, Debug)]
pub enum AuthGateError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken(#[source] TokenError),
}

impl IntoResponse for AuthGateError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}
