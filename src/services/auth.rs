use crate::app_state::AppState;
use crate::domain::{Email, TokenPair, TokenType, UserStoreError};
use crate::errors::{LoginError, RefreshError};
use crate::services::password::verify_password;

pub struct AuthService {}

impl AuthService {
    /// Credential login: resolve by email, verify the password against the
    /// stored hash, issue a token pair. Unknown user and wrong password are
    /// indistinguishable in the result.
    pub async fn login(
        state: AppState,
        email: Email,
        password: String,
    ) -> Result<TokenPair, LoginError> {
        let user = match state
            .user_store
            .read()
            .await
            .find_by_email(email.as_ref())
            .await
        {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(LoginError::InvalidCredentials),
            Err(_) => return Err(LoginError::InternalServerError),
        };

        let password_matches = verify_password(password, user.password_hash.clone())
            .await
            .map_err(|_| LoginError::InternalServerError)?;
        if !password_matches {
            return Err(LoginError::InvalidCredentials);
        }

        state
            .token_service
            .issue_token_pair(&user)
            .map_err(|_| LoginError::InternalServerError)
    }

    /// Token refresh: verify the presented token as a refresh token,
    /// re-resolve the subject, and rotate to a brand-new pair. The old
    /// refresh token is not tracked afterwards; it lapses at its own expiry.
    pub async fn refresh(state: AppState, token: &str) -> Result<TokenPair, RefreshError> {
        let claims = state.token_service.verify(token, TokenType::Refresh)?;

        let user = match state.user_store.read().await.find_by_id(claims.sub).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(RefreshError::UserNotFound),
            Err(_) => return Err(RefreshError::InternalServerError),
        };

        state
            .token_service
            .issue_token_pair(&user)
            .map_err(|_| RefreshError::InternalServerError)
    }
}
