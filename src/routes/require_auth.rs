use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;
use crate::domain::TokenType;
use crate::errors::AuthGateError;

/// Gate in front of every protected route: a valid, unexpired access token
/// must be presented as a bearer token. On success the verified claims are
/// attached to the request for the handler; otherwise the request
/// short-circuits with 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthGateError> {
    let token = bearer_token(request.headers()).ok_or(AuthGateError::MissingToken)?;

    let claims = state
        .token_service
        .verify(&token, TokenType::Access)
        .map_err(AuthGateError::InvalidToken)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
