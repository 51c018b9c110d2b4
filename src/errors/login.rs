use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("invalid email address")]
    InvalidEmail,

    // Unknown user and wrong password share this variant on purpose:
    // the response must not reveal which one happened.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LoginError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
