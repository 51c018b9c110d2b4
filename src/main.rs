use cawall_auth::app_state::AppState;
use cawall_auth::services::{HashmapUserStore, TokenService};
use cawall_auth::utils::Config;
use cawall_auth::Application;
use std::sync::Arc;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Config::from_env().expect("Failed to load config");
    let token_service = Arc::new(TokenService::new(&config));
    let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
    let app_state = AppState::new(user_store, token_service);

    let app = Application::build(app_state, config.listen_addr())
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
