use crate::error::ApiError;
use crate::routes;
use crate::store::MemoryStore;
use axum::{
    body::Bytes,
    http::{HeaderValue, StatusCode},
    response::Response,
};

use super::plain_text;

/// POST /{database}/{key} handler - Create a key that must not exist yet
///
/// The database is created first, so it exists afterwards even when the
/// request is rejected.
#[utoipa::path(
    post,
    path = routes::ITEM,
    params(
        ("database" = String, Path, description = "Database name, created if missing"),
        ("key" = String, Path, description = "Key; may contain '/'")
    ),
    request_body(
        content = String,
        description = "Opaque payload, stored verbatim",
        content_type = "application/octet-stream"
    ),
    responses(
        (status = 201, description = "Key created", body = String, content_type = "text/plain"),
        (
            status = 400,
            description = "Key not specified",
            body = String,
            content_type = "text/plain"
        ),
        (
            status = 409,
            description = "Key already exists",
            body = String,
            content_type = "text/plain"
        )
    ),
    tag = "database"
)]
pub async fn post_handler(
    store: &MemoryStore,
    database: &str,
    key: Option<&str>,
    content_type: HeaderValue,
    body: Bytes,
) -> Result<Response, ApiError> {
    let mut db = store.get_or_create(database).await;
    let key = key.ok_or(ApiError::KeyNotSpecified)?;

    db.insert_if_absent(key, body, content_type)?;

    Ok(plain_text(StatusCode::CREATED, "Key created".to_string()))
}
