use crate::error::ApiError;
use crate::handlers::{CREATED, LAST_ACCESSED, SIZE};
use crate::record::unix_seconds;
use crate::routes;
use crate::store::MemoryStore;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// GET /{database}/{key} handler - Fetch a stored value
///
/// Serves the payload with its stored content type. The metadata headers
/// describe the record as it was before this request; the read itself is
/// then recorded as an access.
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("database" = String, Path, description = "Database name"),
        ("key" = String, Path, description = "Key; may contain '/'")
    ),
    responses(
        (status = 200, description = "Stored payload, served with its stored content type"),
        (
            status = 404,
            description = "Database or key not found",
            body = String,
            content_type = "text/plain"
        )
    ),
    tag = "database"
)]
pub async fn get_handler(
    store: &MemoryStore,
    database: &str,
    key: &str,
) -> Result<Response, ApiError> {
    let mut db = store.lookup(database).await?;
    let record = db.get_mut(key).map_err(|_| ApiError::KeyNotFound)?;

    let metadata = record.metadata();
    let payload = record.read();

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, metadata.content_type)],
        [
            (CREATED, unix_seconds(metadata.created_at)),
            (header::LAST_MODIFIED, unix_seconds(metadata.last_modified_at)),
            (LAST_ACCESSED, unix_seconds(metadata.last_accessed_at)),
            (SIZE, metadata.size.to_string()),
        ],
        payload,
    )
        .into_response())
}
