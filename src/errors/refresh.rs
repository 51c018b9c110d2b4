use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::TokenError;

#[derive(Error, Debug)]
pub enum RefreshError {
    // The wrapped kind stays available for logging, but the wire message
    // is the same for expired, tampered and wrong-type tokens.
    #[error("Invalid or expired token")]
    Token(#[source] TokenError),

    // Unlike login, this case is called out: the token itself already
    // proved a past authentication, so naming the missing user leaks
    // nothing new.
    #[error("User not found")]
    UserNotFound,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl From<TokenError> for RefreshError {
    fn from(err: TokenError) -> Self {
        RefreshError::Token(err)
    }
}

impl IntoResponse for RefreshError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RefreshError::Token(_) | RefreshError::UserNotFound => StatusCode::UNAUTHORIZED,
            RefreshError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
