use crate::helpers::{assert_token_type, decode_claims, get_random_email, TestApp};
use cawall_auth::domain::{TokenPair, TokenType};

#[tokio::test]
async fn should_return_200_and_token_pair_for_valid_credentials() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let user = app.seed_user(&email, "password").await;

    let response = app.login(&email, "password").await;
    assert_eq!(response.status().as_u16(), 200);

    let pair: TokenPair = response.json().await.expect("token pair body");
    assert_eq!(decode_claims(&pair.access_token).sub, user.id);
    assert_eq!(decode_claims(&pair.refresh_token).sub, user.id);
    assert_token_type(&pair.access_token, TokenType::Access);
    assert_token_type(&pair.refresh_token, TokenType::Refresh);
}

#[tokio::test]
async fn should_return_401_if_wrong_password() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.seed_user(&email, "password").await;

    let response = app.login(&email, "wrongpw").await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response.text().await.unwrap(), "Invalid credentials");
}

#[tokio::test]
async fn should_return_401_with_same_body_if_user_unknown() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.seed_user(&email, "password").await;

    let wrong_password = app.login(&email, "wrongpw").await;
    let unknown_user = app.login("nobody@test.com", "password").await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_user.status().as_u16(), 401);
    // Identical responses: the caller cannot tell which case happened.
    assert_eq!(
        wrong_password.text().await.unwrap(),
        unknown_user.text().await.unwrap()
    );
}

#[tokio::test]
async fn should_return_422_if_malformed_email() {
    let app = TestApp::new().await;

    let response = app.login("", "Password123!").await;

    assert_eq!(response.status().as_u16(), 422);
}
