//! Staff account repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{User, UserRole};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the account registered under `username` (exact match)
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert an account unless the username is already taken.
    /// Returns `true` when a row was inserted.
    async fn insert_if_absent(
        &self,
        username: &str,
        password_hash: String,
        role: UserRole,
    ) -> AppResult<bool>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn insert_if_absent(
        &self,
        username: &str,
        password_hash: String,
        role: UserRole,
    ) -> AppResult<bool> {
        let existing = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        let active_model = ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            role: Set(role.as_str().to_string()),
            ..Default::default()
        };

        active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(true)
    }
}
