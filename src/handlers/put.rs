use crate::error::ApiError;
use crate::routes;
use crate::store::MemoryStore;
use axum::{
    body::Bytes,
    http::{HeaderValue, StatusCode},
    response::Response,
};

use super::plain_text;

/// PUT /{database}/{key} handler - Create or overwrite a key
#[utoipa::path(
    put,
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
        (
            status = 201,
            description = "Key created or updated",
            body = String,
            content_type = "text/plain"
        ),
        (status = 400, description = "No key specified", body = String, content_type = "text/plain")
    ),
    tag = "database"
)]
pub async fn put_handler(
    store: &MemoryStore,
    database: &str,
    key: Option<&str>,
    content_type: HeaderValue,
    body: Bytes,
) -> Result<Response, ApiError> {
    let mut db = store.get_or_create(database).await;
    let key = key.ok_or(ApiError::NoKeySpecified)?;

    db.put(key, body, content_type);

    Ok(plain_text(
        StatusCode::CREATED,
        format!("Key created/updated: {}", key),
    ))
}
