use crate::routes;
use axum::{http::StatusCode, response::Response};

use super::plain_text;

/// GET / handler - Placeholder root page
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (
            status = 200,
            description = "Placeholder greeting",
            body = String,
            content_type = "text/plain"
        )
    ),
    tag = "root"
)]
pub async fn root_handler() -> Response {
    plain_text(StatusCode::OK, "Hello, world".to_string())
}
