use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::UserStore;
use crate::services::TokenService;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
// The token service is immutable after construction, so no lock is needed.
pub type TokenServiceType = Arc<TokenService>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub token_service: TokenServiceType,
}

impl AppState {
    pub fn new(user_store: UserStoreType, token_service: TokenServiceType) -> Self {
        Self {
            user_store,
            token_service,
        }
    }
}
