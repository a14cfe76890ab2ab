use axum::body::Bytes;
use axum::http::HeaderValue;
use chrono::{DateTime, Utc};

/// Content type recorded when a write carries no `Content-type` header
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// A single stored value with its content type and lifecycle timestamps
///
/// The payload is opaque; nothing here inspects or validates it. The content
/// type is held as the raw header value, so its bytes come back exactly as
/// the client sent them, including non-UTF-8 ones.
#[derive(Debug, Clone)]
pub struct ValueRecord {
    payload: Bytes,
    content_type: HeaderValue,
    size: usize,
    created_at: DateTime<Utc>,
    last_modified_at: DateTime<Utc>,
    last_accessed_at: DateTime<Utc>,
}

/// Point-in-time copy of a record's metadata, used to render response headers
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMetadata {
    pub content_type: HeaderValue,
    pub size: usize,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl ValueRecord {
    /// Create a record; all three timestamps start at the current time.
    pub fn create(payload: Bytes, content_type: HeaderValue) -> Self {
        let now = Utc::now();
        let size = payload.len();
        Self {
            payload,
            content_type,
            size,
            created_at: now,
            last_modified_at: now,
            last_accessed_at: now,
        }
    }

    /// Replace payload and content type in place.
    ///
    /// `created_at` and `last_accessed_at` are left alone. The modification
    /// time never moves backwards, even if the wall clock does.
    pub fn update(&mut self, payload: Bytes, content_type: HeaderValue) {
        self.size = payload.len();
        self.payload = payload;
        self.content_type = content_type;
        self.last_modified_at = self.last_modified_at.max(Utc::now());
    }

    /// Return the payload and count the call as an access.
    pub fn read(&mut self) -> Bytes {
        self.touch();
        self.payload.clone()
    }

    fn touch(&mut self) {
        self.last_accessed_at = self.last_accessed_at.max(Utc::now());
    }

    pub fn content_type(&self) -> &HeaderValue {
        &self.content_type
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn metadata(&self) -> RecordMetadata {
        RecordMetadata {
            content_type: self.content_type.clone(),
            size: self.size,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
            last_accessed_at: self.last_accessed_at,
        }
    }
}

/// Render a timestamp as Unix seconds with microsecond precision, e.g. `1700000000.123456`
pub fn unix_seconds(ts: DateTime<Utc>) -> String {
    format!("{}.{:06}", ts.timestamp(), ts.timestamp_subsec_micros() % 1_000_000)
}
