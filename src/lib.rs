use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use std::error::Error;
use tokio::net::TcpListener;

use app_state::AppState;
use routes::{login, me, refresh, require_auth};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;

pub fn app_router(app_state: AppState) -> Router {
    let protected = Router::new()
        .route("/me", get(me::me))
        .route_layer(from_fn_with_state(
            app_state.clone(),
            require_auth::require_auth,
        ));

    Router::new()
        .route("/login", post(login::login))
        .route("/refresh", post(refresh::refresh))
        .merge(protected)
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    listener: TcpListener,
    router: Router,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);
        let listener = TcpListener::bind(address).await?;
        let address = format!("http://{}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            address,
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        axum::serve(self.listener, self.router).await
    }
}
