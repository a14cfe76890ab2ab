use axum::{
    body::{Body, Bytes},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use tower::ServiceExt;

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

pub fn test_app() -> Router {
    test_app_with(Config::default())
}

pub fn test_app_with(config: Config) -> Router {
    build_router(AppState::new(config))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }

    app.clone()
        .oneshot(request.body(body.into()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}
