//! User management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{CreateUser, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<User> {
        self.repository.users.get(id).await
    }

    pub async fn create(&self, data: CreateUser) -> AppResult<User> {
        data.validate()?;
        self.repository.users.insert(User::create(data)).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User> {
        self.repository.users.update(id, data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        services::testing::{sample_user, services},
    };

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let services = services();
        services
            .users
            .create(sample_user("user@example.com"))
            .await
            .unwrap();

        let result = services.users.create(sample_user("user@example.com")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn update_cannot_steal_another_users_email() {
        let services = services();
        services
            .users
            .create(sample_user("admin@example.com"))
            .await
            .unwrap();
        let user = services
            .users
            .create(sample_user("user@example.com"))
            .await
            .unwrap();

        let update = UpdateUser {
            email: Some("admin@example.com".to_string()),
            ..Default::default()
        };
        let result = services.users.update(user.id, &update).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let services = services();
        let result = services.users.create(sample_user("not-an-email")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let services = services();
        for email in ["admin@example.com", "manager@example.com", "user@example.com"] {
            services.users.create(sample_user(email)).await.unwrap();
        }

        let users = services.users.list().await.unwrap();
        let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(
            emails,
            vec!["admin@example.com", "manager@example.com", "user@example.com"]
        );
    }
}
