//! JSON body extractor with application-level rejection mapping.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose decode failures surface as the standard
/// JSON error body instead of axum's plain-text rejection.
///
/// # Example
///
/// ```rust,ignore
/// use playtrack::api::extractors::ApiJson;
/// use playtrack::domain::CreateUser;
///
/// async fn create_user(ApiJson(payload): ApiJson<CreateUser>) {
///     // payload decoded, malformed bodies already answered with 400
/// }
/// ```
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(ApiJson(value))
    }
}
