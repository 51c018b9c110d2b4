use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::RefreshRequestBody;
use crate::errors::RefreshError;
use crate::services::AuthService;

pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequestBody>,
) -> Result<impl IntoResponse, RefreshError> {
    let pair = AuthService::refresh(state, &request.token)
        .await
        .inspect_err(|e| log::debug!("refresh rejected: {e:?}"))?;

    Ok((StatusCode::OK, Json(pair)))
}
