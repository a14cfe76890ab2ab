use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::store::StoreError;

/// Custom error type for database endpoints
///
/// Every variant renders as a short `text/plain` body. The wording differs
/// between methods for what is conceptually the same failure, and clients
/// match on these strings, so each method picks its own variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Read-only request against a database that was never created
    DatabaseNotFound(String),
    /// GET of a missing key
    KeyNotFound,
    /// DELETE or HEAD of a missing key
    KeyDoesNotExist(String),
    /// POST without a key segment
    KeyNotSpecified,
    /// PUT or DELETE without a key segment
    NoKeySpecified,
    /// POST of a key that is already present
    KeyAlreadyExists,
    /// Any method other than GET, POST, PUT, DELETE or HEAD
    MethodNotAllowed(Method),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::DatabaseNotFound(_)
            | ApiError::KeyNotFound
            | ApiError::KeyDoesNotExist(_) => StatusCode::NOT_FOUND,
            ApiError::KeyNotSpecified | ApiError::NoKeySpecified => StatusCode::BAD_REQUEST,
            ApiError::KeyAlreadyExists => StatusCode::CONFLICT,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::DatabaseNotFound(name) => write!(f, "Database does not exist: {}", name),
            ApiError::KeyNotFound => write!(f, "Key not found"),
            ApiError::KeyDoesNotExist(key) => write!(f, "Key does not exist: {}", key),
            ApiError::KeyNotSpecified => write!(f, "Key not specified"),
            ApiError::NoKeySpecified => write!(f, "No key specified"),
            ApiError::KeyAlreadyExists => write!(f, "Key already exists"),
            ApiError::MethodNotAllowed(method) => write!(f, "Method not allowed: {}", method),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (
            status,
            [(header::CONTENT_TYPE, "text/plain")],
            self.to_string(),
        )
            .into_response();

        if status == StatusCode::METHOD_NOT_ALLOWED {
            response.headers_mut().insert(
                header::ALLOW,
                header::HeaderValue::from_static("GET, HEAD, POST, PUT, DELETE"),
            );
        }

        response
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DatabaseNotFound(name) => ApiError::DatabaseNotFound(name),
            StoreError::KeyNotFound(key) => ApiError::KeyDoesNotExist(key),
            StoreError::KeyAlreadyExists(_) => ApiError::KeyAlreadyExists,
        }
    }
}
