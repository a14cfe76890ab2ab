use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-memory-kv API",
        version = "1.0.0",
        description = "An in-memory, multi-database key-value store for opaque payloads"
    ),
    paths(
        handlers::root::root_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::post::post_handler,
        handlers::put::put_handler,
        handlers::delete::delete_handler,
        handlers::head::head_handler
    ),
    tags(
        (name = "root", description = "Placeholder root page"),
        (name = "database", description = "Per-database key-value operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;

    #[test]
    fn test_openapi_lists_every_operation() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = &doc["paths"];

        assert!(paths[routes::ROOT]["get"].is_object());
        assert!(paths[routes::DATABASE]["get"].is_object());
        for method in ["get", "post", "put", "delete", "head"] {
            assert!(
                paths[routes::ITEM][method].is_object(),
                "missing {} {}",
                method,
                routes::ITEM
            );
        }
    }
}
