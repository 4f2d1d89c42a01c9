//! Key-value storage layer
//!
//! The collection store only needs `get`/`set` of string values under string
//! keys. Backends decide where the bytes live.

use crate::error::StorageError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use uuid::Uuid;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Asynchronous key-value storage primitive
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if it was never written
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: String) -> StorageResult<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> StorageResult<()>;

    /// Check if a value is stored under `key`
    async fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

/// Keys become file names, so only a conservative character set is accepted
fn validate_key(key: &str) -> StorageResult<()> {
    if !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Local filesystem storage: one file per key under a root directory
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create a new local storage provider with the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory holding the key files
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => {
                tracing::debug!(key, bytes = value.len(), "read key");
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes to a temp file then renames over the key file, so a crash never
    /// leaves a half-written value behind
    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let path = self.key_path(key)?;
        tokio::fs::create_dir_all(&self.root).await?;

        // Same directory as the target so the rename stays on one filesystem.
        // A fresh name per write keeps concurrent writers off each other's file.
        let temp_path = self
            .root
            .join(format!("{}.{}.tmp", key, Uuid::new_v4().simple()));
        tokio::fs::write(&temp_path, value.as_bytes()).await?;
        tokio::fs::rename(&temp_path, &path).await?;

        tracing::debug!(key, bytes = value.len(), "wrote key");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.key_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage provider (for testing and embedding)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Backend("memory storage lock poisoned".to_string())
}

#[async_trait]
impl KeyValueStore for MemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.data.read().map_err(poisoned)?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        validate_key(key)?;
        self.data
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.data.write().map_err(poisoned)?.remove(key);
        Ok(())
    }
}
