use crate::error::ApiError;
use crate::routes;
use crate::store::MemoryStore;
use axum::{http::StatusCode, response::Response};

use super::plain_text;

/// DELETE /{database}/{key} handler - Remove a key
///
/// Like the other write methods this registers the database before
/// checking the key.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("database" = String, Path, description = "Database name, created if missing"),
        ("key" = String, Path, description = "Key; may contain '/'")
    ),
    responses(
        (status = 200, description = "Key deleted", body = String, content_type = "text/plain"),
        (
            status = 400,
            description = "No key specified",
            body = String,
            content_type = "text/plain"
        ),
        (
            status = 404,
            description = "Key does not exist",
            body = String,
            content_type = "text/plain"
        )
    ),
    tag = "database"
)]
pub async fn delete_handler(
    store: &MemoryStore,
    database: &str,
    key: Option<&str>,
) -> Result<Response, ApiError> {
    let mut db = store.get_or_create(database).await;
    let key = key.ok_or(ApiError::NoKeySpecified)?;

    db.delete(key)?;

    Ok(plain_text(StatusCode::OK, format!("Key deleted: {}", key)))
}
