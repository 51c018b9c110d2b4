use std::collections::HashMap;

use crate::domain::{Email, User, UserStore, UserStoreError};

/// In-memory `UserStore`. Stands in for the database-backed store at the
/// composition root and in tests.
#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<i64, User>,
    next_id: i64,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(
        &mut self,
        email: Email,
        password_hash: String,
    ) -> Result<User, UserStoreError> {
        if self.users.values().any(|u| u.email == email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        self.next_id += 1;
        let user = User {
            id: self.next_id,
            email,
            password_hash,
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<User, UserStoreError> {
        self.users
            .values()
            .find(|u| u.email.as_ref() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_id(&self, id: i64) -> Result<User, UserStoreError> {
        self.users
            .get(&id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn remove_user(&mut self, id: i64) -> Result<(), UserStoreError> {
        self.users
            .remove(&id)
            .map(|_| ())
            .ok_or(UserStoreError::UserNotFound)
    }
}
