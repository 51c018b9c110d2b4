use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{Email, LoginRequestBody};
use crate::errors::LoginError;
use crate::services::AuthService;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let email = Email::parse(request.email).or(Err(LoginError::InvalidEmail))?;
    // No password shape check here: any wrong password must come back as
    // 401, identical to an unknown user.
    let pair = AuthService::login(state, email, request.password).await?;

    Ok((StatusCode::OK, Json(pair)))
}
