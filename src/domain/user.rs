//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted user record.
///
/// The surrogate `id` is assigned by the database at insert time; an
/// unpersisted record is represented by [`NewUser`] instead, so an
/// `id` of a `User` value is always meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub uuid: Uuid,
    pub username: String,
    pub current_game: String,
    pub current_level: i32,
    pub created_at: DateTime<Utc>,
}

/// A user record that has not been inserted yet.
///
/// Carries everything except the store-assigned surrogate key.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: Uuid,
    pub username: String,
    pub current_game: String,
    pub current_level: i32,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Create a new draft record, generating its external identifier
    /// and creation timestamp.
    pub fn new(username: String, current_game: String, current_level: i32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            username,
            current_game,
            current_level,
            created_at: Utc::now(),
        }
    }
}

impl From<CreateUser> for NewUser {
    fn from(data: CreateUser) -> Self {
        Self::new(data.username, data.current_game, data.current_level)
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct CreateUser {
    /// Display name
    #[schema(example = "Beakie")]
    pub username: String,
    /// Game the user is currently playing
    #[schema(example = "Black Desert Online")]
    pub current_game: String,
    /// Level in the current game
    #[schema(example = 65)]
    pub current_level: i32,
}

/// User update data transfer object.
///
/// Replaces all mutable fields of the record; the external identifier
/// and creation timestamp are preserved from the original row.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct UpdateUser {
    /// New display name
    #[schema(example = "Beakie")]
    pub username: String,
    /// New current game
    #[schema(example = "Black Desert Online")]
    pub current_game: String,
    /// New level in the current game
    #[schema(example = 66)]
    pub current_level: i32,
}

/// User response (returned to the client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Store-assigned record identifier
    #[schema(example = 1)]
    pub id: i32,
    /// External unique identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub uuid: Uuid,
    /// Display name
    #[schema(example = "Beakie")]
    pub username: String,
    /// Game the user is currently playing
    #[schema(example = "Black Desert Online")]
    pub current_game: String,
    /// Level in the current game
    #[schema(example = 65)]
    pub current_level: i32,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            uuid: user.uuid,
            username: user.username,
            current_game: user.current_game,
            current_level: user.current_level,
            created_at: user.created_at,
        }
    }
}
