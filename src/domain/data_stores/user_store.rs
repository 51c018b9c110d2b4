use super::UserStoreError;
use crate::domain::{Email, User};

/// Lookup boundary the auth flows depend on. Login resolves by email,
/// refresh re-resolves by the id carried in the verified claims.
///
/// A store failure is reported as `UnexpectedError`, never folded into
/// `UserNotFound`, so callers can keep credential failures and
/// infrastructure failures apart.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&mut self, email: Email, password_hash: String)
        -> Result<User, UserStoreError>;
    async fn find_by_email(&self, email: &str) -> Result<User, UserStoreError>;
    async fn find_by_id(&self, id: i64) -> Result<User, UserStoreError>;
    async fn remove_user(&mut self, id: i64) -> Result<(), UserStoreError>;
}
