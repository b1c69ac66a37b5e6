//! User repository - SeaORM-backed persistence for user records.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, Set, TransactionTrait,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a draft record, returning the persisted row with its assigned id
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// Find a user by surrogate key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// List all users in store order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Replace the mutable fields of the row matching the key
    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<User>;

    /// Delete the row matching the key, returning it as it existed
    async fn delete_returning(&self, id: i32) -> AppResult<User>;
}

/// Concrete implementation of UserRepository backed by SeaORM.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create a new repository over a database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Read-then-delete within an open transaction.
    async fn delete_in_txn(txn: &DatabaseTransaction, id: i32) -> AppResult<User> {
        let model = UserEntity::find_by_id(id)
            .one(txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let result = UserEntity::delete_by_id(id).exec(txn).await?;
        // A concurrent delete may have removed the row after our read
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(User::from(model))
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let active = ActiveModel {
            uuid: Set(user.uuid),
            username: Set(user.username),
            current_game: Set(user.current_game),
            current_level: Set(user.current_level),
            created_at: Set(user.created_at),
            ..Default::default()
        };

        let model = active.insert(&self.db).await.map_err(AppError::from)?;

        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        let model = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        // uuid and created_at stay as stored
        let mut active: ActiveModel = model.into();
        active.username = Set(changes.username);
        active.current_game = Set(changes.current_game);
        active.current_level = Set(changes.current_level);

        let model = active.update(&self.db).await.map_err(AppError::from)?;

        Ok(User::from(model))
    }

    async fn delete_returning(&self, id: i32) -> AppResult<User> {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        match Self::delete_in_txn(&txn, id).await {
            Ok(user) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(user)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use super::super::entities::user::Model;
    use super::*;

    fn row(id: i32) -> Model {
        Model {
            id,
            uuid: Uuid::new_v4(),
            username: "Beakie".to_owned(),
            current_game: "Black Desert Online".to_owned(),
            current_level: 65,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_returns_row_with_assigned_id() {
        let expected = row(7);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![expected.clone()]])
            .into_connection();

        let store = UserStore::new(db);
        let draft = NewUser::new("Beakie".into(), "Black Desert Online".into(), 65);
        let user = store.insert(draft).await.unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "Beakie");
        assert_eq!(user.current_game, "Black Desert Online");
        assert_eq!(user.current_level, 65);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let store = UserStore::new(db);
        let found = store.find_by_id(99).await.unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn list_returns_all_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1), row(2)]])
            .into_connection();

        let store = UserStore::new(db);
        let users = store.list().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[1].id, 2);
    }

    #[tokio::test]
    async fn update_preserves_uuid_and_created_at() {
        let original = row(3);
        let updated = Model {
            username: "Beakie2".to_owned(),
            current_level: 66,
            ..original.clone()
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![original.clone()], vec![updated]])
            .into_connection();

        let store = UserStore::new(db);
        let user = store
            .update(
                3,
                UpdateUser {
                    username: "Beakie2".to_owned(),
                    current_game: "Black Desert Online".to_owned(),
                    current_level: 66,
                },
            )
            .await
            .unwrap();

        assert_eq!(user.username, "Beakie2");
        assert_eq!(user.uuid, original.uuid);
        assert_eq!(user.created_at, original.created_at);
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let store = UserStore::new(db);
        let result = store
            .update(
                99,
                UpdateUser {
                    username: "x".to_owned(),
                    current_game: "y".to_owned(),
                    current_level: 1,
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn delete_returning_yields_previous_row() {
        let existing = row(5);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let store = UserStore::new(db);
        let user = store.delete_returning(5).await.unwrap();

        assert_eq!(user.id, 5);
        assert_eq!(user.uuid, existing.uuid);
    }

    #[tokio::test]
    async fn delete_returning_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let store = UserStore::new(db);
        let result = store.delete_returning(99).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }
}
