// Route path constants - single source of truth for all API paths

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{database_handler, root_handler};
use crate::state::AppState;

pub const ROOT: &str = "/";
pub const DATABASE: &str = "/{database}";
pub const ITEM: &str = "/{database}/{key}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the application router.
///
/// Only `/` is a real route; every other path lands in `database_handler`,
/// which does its own path splitting so keys can span several segments.
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        .route(ROOT, get(root_handler))
        .fallback(database_handler)
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    if config.api_docs {
        router = router.merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()));
    }

    // request logging is debug-only
    if config.debug {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}
