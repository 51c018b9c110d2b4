use super::email::Email;

/// User record as resolved from the user store. Read-only here: the auth
/// flows look users up and verify against the stored hash, never write.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: Email,
    pub password_hash: String,
}
