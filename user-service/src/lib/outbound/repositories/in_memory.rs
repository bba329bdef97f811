use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store.
///
/// Uniqueness is checked and the record written under a single write lock,
/// so concurrent inserts of the same username or email cannot both succeed.
/// Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Username clashes are reported before email clashes, whatever the map order.
fn conflict(users: &HashMap<UserId, User>, candidate: &User) -> Option<UserError> {
    let clashes = |same: fn(&User, &User) -> bool| {
        users
            .values()
            .any(|u| u.id != candidate.id && same(u, candidate))
    };

    if clashes(|a, b| a.username == b.username) {
        return Some(UserError::UsernameAlreadyExists(
            candidate.username.as_str().to_string(),
        ));
    }
    if clashes(|a, b| a.email == b.email) {
        return Some(UserError::EmailAlreadyExists(
            candidate.email.as_str().to_string(),
        ));
    }
    None
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| &u.username == username))
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| &u.email == email))
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| &u.username == username).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.id) {
            return Err(UserError::DatabaseError(format!(
                "duplicate primary key {}",
                user.id
            )));
        }
        if let Some(err) = conflict(&users, &user) {
            return Err(err);
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.username.as_str().to_string()));
        }
        if let Some(err) = conflict(&users, &user) {
            return Err(err);
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
