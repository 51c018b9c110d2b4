use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct RefreshRequestBody {
    pub token: String,
}
