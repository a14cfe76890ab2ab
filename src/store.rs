use axum::body::Bytes;
use axum::http::HeaderValue;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockMappedWriteGuard, RwLockReadGuard, RwLockWriteGuard};

use crate::record::ValueRecord;

/// Separator placed between keys in a database listing
pub const KEY_SEPARATOR: &str = "\r";

/// Errors raised by store lookups and create-only inserts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DatabaseNotFound(String),
    KeyNotFound(String),
    KeyAlreadyExists(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::DatabaseNotFound(name) => write!(f, "Database does not exist: {}", name),
            StoreError::KeyNotFound(key) => write!(f, "Key does not exist: {}", key),
            StoreError::KeyAlreadyExists(key) => write!(f, "Key already exists: {}", key),
        }
    }
}

impl std::error::Error for StoreError {}

/// Whether a `put` inserted a new record or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Created,
    Updated,
}

/// A named key space holding value records
///
/// Keys are kept in a `BTreeMap`, so listings come out in byte-wise
/// lexicographic order regardless of insertion order.
#[derive(Debug, Default)]
pub struct Database {
    name: String,
    entries: BTreeMap<String, ValueRecord>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert the key, or update its record in place if it already exists.
    pub fn put(&mut self, key: &str, payload: Bytes, content_type: HeaderValue) -> PutOutcome {
        match self.entries.get_mut(key) {
            Some(record) => {
                record.update(payload, content_type);
                tracing::debug!(
                    "Updated key {:?} in database {:?} ({} bytes, {:?})",
                    key,
                    self.name,
                    record.size(),
                    record.content_type()
                );
                PutOutcome::Updated
            }
            None => {
                let record = ValueRecord::create(payload, content_type);
                tracing::debug!(
                    "Created key {:?} in database {:?} ({} bytes, {:?})",
                    key,
                    self.name,
                    record.size(),
                    record.content_type()
                );
                self.entries.insert(key.to_string(), record);
                PutOutcome::Created
            }
        }
    }

    /// Insert the key only if it is not already present; an existing record is left untouched.
    pub fn insert_if_absent(
        &mut self,
        key: &str,
        payload: Bytes,
        content_type: HeaderValue,
    ) -> Result<(), StoreError> {
        if self.contains_key(key) {
            return Err(StoreError::KeyAlreadyExists(key.to_string()));
        }
        self.put(key, payload, content_type);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&ValueRecord, StoreError> {
        self.entries
            .get(key)
            .ok_or_else(|| StoreError::KeyNotFound(key.to_string()))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut ValueRecord, StoreError> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| StoreError::KeyNotFound(key.to_string()))
    }

    /// Remove the key and hand back its record.
    pub fn delete(&mut self, key: &str) -> Result<ValueRecord, StoreError> {
        let record = self
            .entries
            .remove(key)
            .ok_or_else(|| StoreError::KeyNotFound(key.to_string()))?;
        tracing::debug!("Deleted key {:?} from database {:?}", key, self.name);
        Ok(record)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All keys joined with [`KEY_SEPARATOR`]; empty for an empty database.
    pub fn list_keys(&self) -> String {
        self.keys().collect::<Vec<_>>().join(KEY_SEPARATOR)
    }
}

/// Process-wide registry of databases, shared by every request handler
///
/// A single lock guards the registry and every database in it, so each
/// request observes and applies its change atomically. Guards returned from
/// the accessors hold that lock until dropped.
#[derive(Clone, Default)]
pub struct MemoryStore {
    databases: Arc<RwLock<HashMap<String, Database>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        tracing::info!("Initializing in-memory store");
        Self::default()
    }

    /// Return the named database, creating and registering an empty one if needed.
    pub async fn get_or_create(&self, name: &str) -> RwLockMappedWriteGuard<'_, Database> {
        let databases = self.databases.write().await;
        RwLockWriteGuard::map(databases, |databases| {
            databases
                .entry(name.to_string())
                .or_insert_with(|| {
                    tracing::debug!("Creating database {:?}", name);
                    Database::new(name)
                })
        })
    }

    /// Return the named database for mutation without ever creating it.
    pub async fn lookup(
        &self,
        name: &str,
    ) -> Result<RwLockMappedWriteGuard<'_, Database>, StoreError> {
        let databases = self.databases.write().await;
        RwLockWriteGuard::try_map(databases, |databases| databases.get_mut(name))
            .map_err(|_| StoreError::DatabaseNotFound(name.to_string()))
    }

    /// Read-only variant of [`MemoryStore::lookup`].
    pub async fn lookup_read(
        &self,
        name: &str,
    ) -> Result<RwLockReadGuard<'_, Database>, StoreError> {
        let databases = self.databases.read().await;
        RwLockReadGuard::try_map(databases, |databases| databases.get(name))
            .map_err(|_| StoreError::DatabaseNotFound(name.to_string()))
    }

    /// Names of all registered databases, sorted.
    pub async fn database_names(&self) -> Vec<String> {
        let mut names: Vec<String> =
            self.databases.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}
