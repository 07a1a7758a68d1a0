//! Client configuration.

use std::path::PathBuf;

use anyhow::Context;

/// Base URL of the mock API the application is built against.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    /// SQLite file holding the session token. `None` keeps it in memory.
    pub store_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            store_path: None,
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    pub fn with_store_path(mut self, path: PathBuf) -> Self {
        self.store_path = Some(path);
        self
    }

    fn base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// User list endpoint (`GET /user`).
    pub fn users_url(&self) -> String {
        format!("{}/user", self.base())
    }

    /// Component collection endpoint (`/components`).
    pub fn components_url(&self) -> String {
        format!("{}/components", self.base())
    }
}

/// Default location of the persistent store (`<data dir>/partstock/store.db`).
pub fn default_store_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    let mut path = base;
    path.push("partstock");
    path.push("store.db");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_derive_from_base_url() {
        let config = ClientConfig::new("http://api.local:8080/");
        assert_eq!(config.users_url(), "http://api.local:8080/user");
        assert_eq!(config.components_url(), "http://api.local:8080/components");
    }

    #[test]
    fn default_points_at_local_mock_api() {
        let config = ClientConfig::default();
        assert_eq!(config.components_url(), "http://localhost:3000/components");
        assert!(config.store_path.is_none());
    }
}
