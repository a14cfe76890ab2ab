/// A request path resolved into a database name and an optional key
///
/// `/db` yields `key: None`, while `/db/` yields `key: Some("")`. Everything
/// after the database segment is rejoined with `/`, so keys may contain
/// slashes and are preserved verbatim (no percent-decoding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    pub database: String,
    pub key: Option<String>,
}

impl ResourcePath {
    /// Parse a raw request path. Returns `None` for the root path `/`.
    pub fn parse(path: &str) -> Option<Self> {
        let rest = path.strip_prefix('/').unwrap_or(path);
        if rest.is_empty() {
            return None;
        }

        let (database, key) = match rest.split_once('/') {
            Some((database, key)) => (database, Some(key.to_string())),
            None => (rest, None),
        };

        Some(Self {
            database: database.to_string(),
            key,
        })
    }
}
