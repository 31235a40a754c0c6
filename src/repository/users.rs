//! User store

use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::simulate_latency;
use crate::{
    error::{AppError, AppResult},
    models::{UpdateUser, User},
};

/// User collection operations. Emails are unique; inserts and updates that
/// would duplicate one fail with Conflict. Users are never deleted.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<User>>;

    async fn get(&self, id: Uuid) -> AppResult<User>;

    /// Tolerant lookup used for read-time assignee resolution
    async fn find(&self, id: Uuid) -> AppResult<Option<User>>;

    async fn insert(&self, user: User) -> AppResult<User>;

    async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User>;
}

pub struct MemoryUsersRepository {
    latency: Duration,
    users: RwLock<IndexMap<Uuid, User>>,
}

impl MemoryUsersRepository {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            users: RwLock::new(IndexMap::new()),
        }
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}

fn duplicate_email(email: &str) -> AppError {
    AppError::Conflict(format!("Email {} is already registered", email))
}

#[async_trait]
impl UsersRepository for MemoryUsersRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        simulate_latency(self.latency).await;
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> AppResult<User> {
        simulate_latency(self.latency).await;
        let users = self.users.read().await;
        users.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn find(&self, id: Uuid) -> AppResult<Option<User>> {
        simulate_latency(self.latency).await;
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        simulate_latency(self.latency).await;
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(duplicate_email(&user.email));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User> {
        simulate_latency(self.latency).await;
        let mut users = self.users.write().await;
        if let Some(ref email) = data.email {
            if users.values().any(|u| u.id != id && &u.email == email) {
                return Err(duplicate_email(email));
            }
        }
        let user = users.get_mut(&id).ok_or_else(|| not_found(id))?;
        data.apply(user);
        Ok(user.clone())
    }
}
