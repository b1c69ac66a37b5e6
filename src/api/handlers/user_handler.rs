//! User CRUD handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

use crate::api::extractors::{ApiJson, ApiPath};
use crate::api::AppState;
use crate::domain::{CreateUser, UpdateUser, UserResponse};
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
        .route("/create", post(create_user))
        .route("/update/:id", put(update_user))
        .route("/delete/:id", delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "All user records", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User record id")
    ),
    responses(
        (status = 200, description = "The matching user record", body = UserResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/user/create",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "The created record, including assigned id", body = UserResponse),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.create_user(payload).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Replace a user's mutable fields
#[utoipa::path(
    put,
    path = "/user/update/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User record id")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "The updated record", body = UserResponse),
        (status = 400, description = "Malformed id or request body"),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.update_user(id, payload).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user, returning the deleted record
#[utoipa::path(
    delete,
    path = "/user/delete/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User record id")
    ),
    responses(
        (status = 200, description = "The record as it existed before deletion", body = UserResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.delete_user(id).await?;

    Ok(Json(UserResponse::from(user)))
}
