use reqwest::{Client, Response};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use cawall_auth::app_router;
use cawall_auth::app_state::AppState;
use cawall_auth::domain::{
    Claims, Email, LoginRequestBody, RefreshRequestBody, TokenType, User, UserStore,
};
use cawall_auth::services::password::hash_password;
use cawall_auth::services::{HashmapUserStore, TokenService};
use cawall_auth::utils::Config;

/// Each test app is built from an explicit config, not process env vars.
pub const TEST_SECRET: &str = "api-test-secret";
pub const ACCESS_TTL_SECONDS: i64 = 60;
pub const REFRESH_TTL_SECONDS: i64 = 300;

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub user_store: Arc<RwLock<HashmapUserStore>>,
    pub token_service: Arc<TokenService>,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config::new(TEST_SECRET, ACCESS_TTL_SECONDS, REFRESH_TTL_SECONDS)
            .expect("failed to build test config");
        let token_service = Arc::new(TokenService::new(&config));
        let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
        let app_state = AppState::new(user_store.clone(), token_service.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));
        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            user_store,
            token_service,
        }
    }

    /// Insert a user with an argon2 hash of `password` directly into the
    /// store, the way the external registration flow would have.
    pub async fn seed_user(&self, email: &str, password: &str) -> User {
        let hash = hash_password(password.to_string())
            .await
            .expect("failed hashing seed password");
        let email = Email::parse(email.to_string()).expect("invalid seed email");
        self.user_store
            .write()
            .await
            .add_user(email, hash)
            .await
            .expect("failed seeding user")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        let body = LoginRequestBody {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.http_client
            .post(format!("{}/login", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn refresh(&self, token: &str) -> Response {
        let body = RefreshRequestBody {
            token: token.to_string(),
        };

        self.http_client
            .post(format!("{}/refresh", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute refresh request.")
    }

    pub async fn me(&self, bearer: Option<&str>) -> Response {
        let mut request = self.http_client.get(format!("{}/me", &self.address));
        if let Some(token) = bearer {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        request.send().await.expect("Failed to execute me request.")
    }
}

pub fn get_random_email() -> String {
    format!("{}@test.com", Uuid::new_v4())
}

/// Decode a token with the shared test secret, skipping type checks, so
/// tests can inspect the embedded subject.
pub fn decode_claims(token: &str) -> Claims {
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &validation,
    )
    .expect("failed decoding token with test secret")
    .claims
}

pub fn assert_token_type(token: &str, expected: TokenType) {
    assert_eq!(decode_claims(token).token_type, expected);
}
