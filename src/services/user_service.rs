//! User service - Handles user-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, NewUser, UpdateUser, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user from the request payload
    async fn create_user(&self, data: CreateUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Replace a user's mutable fields
    async fn update_user(&self, id: i32, data: UpdateUser) -> AppResult<User>;

    /// Delete a user, returning the record as it existed before deletion
    async fn delete_user(&self, id: i32) -> AppResult<User>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, data: CreateUser) -> AppResult<User> {
        self.repo.insert(NewUser::from(data)).await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn update_user(&self, id: i32, data: UpdateUser) -> AppResult<User> {
        self.repo.update(id, data).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<User> {
        self.repo.delete_returning(id).await
    }
}
