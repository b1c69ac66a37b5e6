//! User service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use mockall::predicate::eq;
use uuid::Uuid;

use playtrack::domain::{CreateUser, NewUser, UpdateUser, User};
use playtrack::errors::{AppError, AppResult};
use playtrack::infra::UserRepository;
use playtrack::services::{UserManager, UserService};

mock! {
    UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn insert(&self, user: NewUser) -> AppResult<User>;
        async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;
        async fn list(&self) -> AppResult<Vec<User>>;
        async fn update(&self, id: i32, changes: UpdateUser) -> AppResult<User>;
        async fn delete_returning(&self, id: i32) -> AppResult<User>;
    }
}

fn create_test_user(id: i32) -> User {
    User {
        id,
        uuid: Uuid::new_v4(),
        username: "Test User".to_string(),
        current_game: "Test Game".to_string(),
        current_level: 10,
        created_at: Utc::now(),
    }
}

#[test]
fn new_user_generates_unique_external_ids() {
    let a = NewUser::new("a".to_string(), "g".to_string(), 1);
    let b = NewUser::new("a".to_string(), "g".to_string(), 1);

    assert_ne!(a.uuid, b.uuid);
    assert_eq!(a.uuid.get_version(), Some(uuid::Version::Random));
}

#[tokio::test]
async fn test_create_user_persists_draft() {
    let mut repo = MockUserRepo::new();
    repo.expect_insert()
        .withf(|draft: &NewUser| draft.username == "Beakie" && !draft.uuid.is_nil())
        .returning(|draft| {
            Ok(User {
                id: 1,
                uuid: draft.uuid,
                username: draft.username,
                current_game: draft.current_game,
                current_level: draft.current_level,
                created_at: draft.created_at,
            })
        });

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .create_user(CreateUser {
            username: "Beakie".to_string(),
            current_game: "Black Desert Online".to_string(),
            current_level: 65,
        })
        .await;

    let user = result.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "Beakie");
    assert_eq!(user.current_game, "Black Desert Online");
    assert_eq!(user.current_level, 65);
}

#[tokio::test]
async fn test_get_user_success() {
    let user_id = 7;

    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id()
        .with(eq(user_id))
        .returning(|id| Ok(Some(create_test_user(id))));

    let service = UserManager::new(Arc::new(repo));
    let result = service.get_user(user_id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user_id);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let result = service.get_user(99).await;

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_users_success() {
    let mut repo = MockUserRepo::new();
    repo.expect_list()
        .returning(|| Ok(vec![create_test_user(1), create_test_user(2)]));

    let service = UserManager::new(Arc::new(repo));
    let result = service.list_users().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_user_passes_changes_through() {
    let original = create_test_user(3);
    let original_uuid = original.uuid;
    let original_created_at = original.created_at;

    let mut repo = MockUserRepo::new();
    repo.expect_update()
        .with(eq(3), eq(UpdateUser {
            username: "Renamed".to_string(),
            current_game: "New Game".to_string(),
            current_level: 20,
        }))
        .returning(move |id, changes| {
            Ok(User {
                id,
                uuid: original_uuid,
                username: changes.username,
                current_game: changes.current_game,
                current_level: changes.current_level,
                created_at: original_created_at,
            })
        });

    let service = UserManager::new(Arc::new(repo));
    let result = service
        .update_user(
            3,
            UpdateUser {
                username: "Renamed".to_string(),
                current_game: "New Game".to_string(),
                current_level: 20,
            },
        )
        .await;

    let user = result.unwrap();
    assert_eq!(user.username, "Renamed");
    assert_eq!(user.uuid, original_uuid);
    assert_eq!(user.created_at, original_created_at);
}

#[tokio::test]
async fn test_delete_user_returns_deleted_record() {
    let mut repo = MockUserRepo::new();
    repo.expect_delete_returning()
        .with(eq(5))
        .returning(|id| Ok(create_test_user(id)));

    let service = UserManager::new(Arc::new(repo));
    let result = service.delete_user(5).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, 5);
}

#[tokio::test]
async fn test_storage_error_propagates() {
    let mut repo = MockUserRepo::new();
    repo.expect_list()
        .returning(|| Err(AppError::Database(sea_orm::DbErr::Custom("boom".to_string()))));

    let service = UserManager::new(Arc::new(repo));
    let result = service.list_users().await;

    assert!(matches!(result.unwrap_err(), AppError::Database(_)));
}
