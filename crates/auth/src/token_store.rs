//! Session token persistence over a pluggable key-value store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::token::AuthToken;

/// Key under which the session token is stored.
pub const AUTH_TOKEN_KEY: &str = "authToken";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key-value store failure: {0}")]
    Backend(String),
}

/// Persistent string key-value capability (one value per key).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value`, overwriting any previous value for `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Process-local store, lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

/// Bearer-token holder backed by a `KeyValueStore`.
///
/// Cheap to clone; clones share the same underlying store.
#[derive(Clone)]
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Token store over a fresh in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub async fn get(&self) -> Result<Option<AuthToken>, StoreError> {
        Ok(self.store.get(AUTH_TOKEN_KEY).await?.map(AuthToken::new))
    }

    pub async fn set(&self, token: &AuthToken) -> Result<(), StoreError> {
        self.store.set(AUTH_TOKEN_KEY, token.as_str()).await?;
        tracing::debug!("auth token stored");
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(AUTH_TOKEN_KEY).await?;
        tracing::debug!("auth token cleared");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> Result<bool, StoreError> {
        Ok(self.get().await?.is_some())
    }
}

impl core::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_clear_lifecycle() {
        let tokens = TokenStore::in_memory();
        assert!(!tokens.is_authenticated().await.unwrap());

        tokens.set(&AuthToken::new("token_1")).await.unwrap();
        assert_eq!(tokens.get().await.unwrap(), Some(AuthToken::new("token_1")));
        assert!(tokens.is_authenticated().await.unwrap());

        tokens.set(&AuthToken::new("token_2")).await.unwrap();
        assert_eq!(tokens.get().await.unwrap(), Some(AuthToken::new("token_2")));

        tokens.clear().await.unwrap();
        assert_eq!(tokens.get().await.unwrap(), None);
        assert!(!tokens.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn clones_share_the_backing_store() {
        let backend = Arc::new(MemoryStore::new());
        let a = TokenStore::new(backend.clone());
        let b = a.clone();

        a.set(&AuthToken::new("token_9")).await.unwrap();
        assert!(b.is_authenticated().await.unwrap());
        assert_eq!(
            backend.get(AUTH_TOKEN_KEY).await.unwrap().as_deref(),
            Some("token_9")
        );
    }

    #[tokio::test]
    async fn clearing_an_empty_store_is_fine() {
        let tokens = TokenStore::in_memory();
        tokens.clear().await.unwrap();
        assert!(!tokens.is_authenticated().await.unwrap());
    }
}
