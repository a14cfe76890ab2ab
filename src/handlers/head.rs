use crate::error::ApiError;
use crate::handlers::{LAST_ACCESSED, SIZE};
use crate::record::unix_seconds;
use crate::routes;
use crate::store::MemoryStore;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::plain_text;

/// HEAD /{database}/{key} handler - Check whether a database or key exists
///
/// `/{database}` and `/{database}/` both check the database itself. A key
/// check reports the record's metadata headers without counting as an
/// access. HEAD never creates a database.
#[utoipa::path(
    head,
    path = routes::ITEM,
    params(
        ("database" = String, Path, description = "Database name"),
        ("key" = String, Path, description = "Key; may contain '/'; empty addresses the database")
    ),
    responses(
        (status = 200, description = "Database or key exists"),
        (status = 404, description = "Database or key does not exist")
    ),
    tag = "database"
)]
pub async fn head_handler(
    store: &MemoryStore,
    database: &str,
    key: Option<&str>,
) -> Result<Response, ApiError> {
    let db = store.lookup_read(database).await?;

    match key {
        None | Some("") => Ok(plain_text(
            StatusCode::OK,
            format!("Database exists: {}", db.name()),
        )),
        Some(key) => {
            let metadata = db.get(key)?.metadata();
            Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, metadata.content_type)],
                [
                    (header::LAST_MODIFIED, unix_seconds(metadata.last_modified_at)),
                    (LAST_ACCESSED, unix_seconds(metadata.last_accessed_at)),
                    (SIZE, metadata.size.to_string()),
                ],
                format!("Key exists: {}", key),
            )
                .into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{send, test_app};
    use axum::{
        body::Bytes,
        http::{HeaderValue, Method},
    };

    #[tokio::test]
    async fn test_head_endpoint_unknown_database() {
        let app = test_app();

        let response = send(&app, Method::HEAD, "/nope", None, "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, Method::HEAD, "/nope/k", None, "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // a HEAD must not register the database
        let response = send(&app, Method::GET, "/nope", None, "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_head_endpoint_database_exists() {
        let app = test_app();

        send(&app, Method::PUT, "/db/k", None, "v").await;

        let response = send(&app, Method::HEAD, "/db", None, "").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, Method::HEAD, "/db/", None, "").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_head_endpoint_key_metadata() {
        let app = test_app();

        send(&app, Method::PUT, "/db/k", Some("image/png"), "12345").await;

        let response = send(&app, Method::HEAD, "/db/k", None, "").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(response.headers()["size"], "5");
        assert!(response.headers().contains_key("last-modified"));
        assert!(response.headers().contains_key("last-accessed"));
        assert!(!response.headers().contains_key("created"));
    }

    #[tokio::test]
    async fn test_head_endpoint_does_not_touch_access_time() {
        let app = test_app();

        send(&app, Method::PUT, "/db/k", None, "v").await;

        let first = send(&app, Method::HEAD, "/db/k", None, "").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = send(&app, Method::HEAD, "/db/k", None, "").await;

        assert_eq!(
            first.headers()["last-accessed"],
            second.headers()["last-accessed"]
        );
    }

    #[tokio::test]
    async fn test_head_endpoint_missing_key() {
        let app = test_app();

        send(&app, Method::PUT, "/db/k", None, "v").await;

        let response = send(&app, Method::HEAD, "/db/other", None, "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_head_messages() {
        let store = MemoryStore::new();
        drop(store.get_or_create("db").await);

        let err = head_handler(&store, "missing", None).await.err().unwrap();
        assert_eq!(err.to_string(), "Database does not exist: missing");

        let err = head_handler(&store, "db", Some("k")).await.err().unwrap();
        assert_eq!(err.to_string(), "Key does not exist: k");

        let response = head_handler(&store, "db", None).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Database exists: db");

        store.get_or_create("db").await.put(
            "k",
            Bytes::from_static(b"v"),
            HeaderValue::from_static("text/plain"),
        );

        let response = head_handler(&store, "db", Some("k")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Key exists: k");
    }
}
