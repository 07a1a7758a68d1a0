//! Application wiring shared by the front-ends.

use std::sync::Arc;

use partstock_auth::{KeyValueStore, MemoryStore, TokenStore};

use crate::config::ClientConfig;
use crate::controller::ComponentController;
use crate::http::{Api, RestClient};
use crate::kv_store::SqliteStore;
use crate::login::LoginController;
use crate::notify::Notifier;

/// Everything a screen needs: config, token store, HTTP client, notifier.
#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,
    pub tokens: TokenStore,
    pub api: Arc<dyn Api>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Build the state from `config`.
    ///
    /// A configured `store_path` is opened as a SQLite store; otherwise the
    /// session lives in memory.
    pub async fn new(config: ClientConfig, notifier: Arc<dyn Notifier>) -> anyhow::Result<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.store_path {
            Some(path) => Arc::new(SqliteStore::open(path).await?),
            None => Arc::new(MemoryStore::new()),
        };
        let tokens = TokenStore::new(store);
        let api = Arc::new(RestClient::new(tokens.clone()));

        Ok(Self {
            config,
            tokens,
            api,
            notifier,
        })
    }

    pub fn login(&self) -> LoginController {
        LoginController::new(
            self.api.clone(),
            self.tokens.clone(),
            self.notifier.clone(),
            self.config.users_url(),
        )
    }

    pub fn components(&self) -> ComponentController {
        ComponentController::new(
            self.api.clone(),
            self.notifier.clone(),
            self.config.components_url(),
        )
    }
}
