use serde::{Deserialize, Serialize};

/// Access + refresh token pair returned by login and refresh. Both tokens
/// share the same subject but carry independent claims and expiries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
