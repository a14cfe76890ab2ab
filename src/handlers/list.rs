use crate::error::ApiError;
use crate::routes;
use crate::store::MemoryStore;
use axum::{http::StatusCode, response::Response};

use super::plain_text;

/// GET /{database} handler - List the keys of a database
///
/// Keys are separated by a single carriage return. Listing never creates
/// the database.
#[utoipa::path(
    get,
    path = routes::DATABASE,
    params(
        ("database" = String, Path, description = "Database name")
    ),
    responses(
        (
            status = 200,
            description = "Carriage-return separated keys",
            body = String,
            content_type = "text/plain"
        ),
        (
            status = 404,
            description = "Database not found",
            body = String,
            content_type = "text/plain"
        )
    ),
    tag = "database"
)]
pub async fn list_handler(store: &MemoryStore, database: &str) -> Result<Response, ApiError> {
    let db = store.lookup_read(database).await?;
    tracing::debug!("Listing {} keys in database {:?}", db.len(), database);
    Ok(plain_text(StatusCode::OK, db.list_keys()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{body_text, send, test_app};
    use axum::http::{header, Method};

    #[tokio::test]
    async fn test_list_endpoint_unknown_database() {
        let app = test_app();

        let response = send(&app, Method::GET, "/nonexistent", None, "").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // the failed listing must not have registered the database
        let response = send(&app, Method::GET, "/nonexistent", None, "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_endpoint_empty_database() {
        let app = test_app();

        send(&app, Method::PUT, "/db/k", None, "v").await;
        send(&app, Method::DELETE, "/db/k", None, "").await;

        let response = send(&app, Method::GET, "/db", None, "").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        assert_eq!(body_text(response).await, "");
    }

    #[tokio::test]
    async fn test_list_endpoint_with_data() {
        let app = test_app();

        send(&app, Method::PUT, "/db/zeta", None, "1").await;
        send(&app, Method::PUT, "/db/alpha", None, "2").await;
        send(&app, Method::POST, "/db/dir/file", None, "3").await;
        send(&app, Method::PUT, "/elsewhere/other", None, "4").await;

        let response = send(&app, Method::GET, "/db", None, "").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "alpha\rdir/file\rzeta");
    }
}
