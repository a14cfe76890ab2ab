pub mod delete;
pub mod get;
pub mod head;
pub mod list;
pub mod post;
pub mod put;
pub mod root;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::path::ResourcePath;
use crate::record::DEFAULT_CONTENT_TYPE;
use crate::state::AppState;

pub use delete::delete_handler;
pub use get::get_handler;
pub use head::head_handler;
pub use list::list_handler;
pub use post::post_handler;
pub use put::put_handler;
pub use root::root_handler;

/// Creation time of a stored value, Unix seconds
pub const CREATED: HeaderName = HeaderName::from_static("created");
/// Last read of a stored value, Unix seconds
pub const LAST_ACCESSED: HeaderName = HeaderName::from_static("last-accessed");
/// Payload length in bytes
pub const SIZE: HeaderName = HeaderName::from_static("size");

/// Fallback handler for every path below `/`
///
/// Splits the raw path into database and key and dispatches on the method.
pub async fn database_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let Some(ResourcePath { database, key }) = ResourcePath::parse(uri.path()) else {
        return Ok(root_handler().await);
    };
    let store = &state.store;
    let key = key.as_deref();

    match method {
        Method::GET => match key {
            None => list_handler(store, &database).await,
            Some(key) => get_handler(store, &database, key).await,
        },
        Method::POST => post_handler(store, &database, key, content_type(&headers), body).await,
        Method::PUT => put_handler(store, &database, key, content_type(&headers), body).await,
        Method::DELETE => delete_handler(store, &database, key).await,
        Method::HEAD => head_handler(store, &database, key).await,
        other => Err(ApiError::MethodNotAllowed(other)),
    }
}

/// Content type of a write request, the raw header bytes kept as-is
fn content_type(headers: &HeaderMap) -> HeaderValue {
    headers
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE))
}

fn plain_text(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
}
