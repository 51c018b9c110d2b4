use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domain::Claims;

#[derive(Serialize, Deserialize, Debug)]
pub struct MeResponse {
    pub id: i64,
}

/// Minimal protected handler: the claims come from the `require_auth` gate,
/// never from the request itself.
pub async fn me(Extension(claims): Extension<Claims>) -> Json<MeResponse> {
    Json(MeResponse { id: claims.sub })
}
