//! Login flow against the mock user list.
//!
//! The whole user list is fetched and passwords are compared in plaintext on
//! the client. That is what the mock API supports; it is not an
//! authentication scheme to reuse.

use std::sync::Arc;

use partstock_auth::{AuthToken, TokenStore, User, authenticate};
use partstock_core::{DomainError, FieldError};
use partstock_validation::is_empty_field;

use crate::error::ControllerError;
use crate::http::{Api, get_as};
use crate::notify::{Notification, Notifier};

pub struct LoginController {
    api: Arc<dyn Api>,
    tokens: TokenStore,
    notifier: Arc<dyn Notifier>,
    users_url: String,
}

impl LoginController {
    pub fn new(
        api: Arc<dyn Api>,
        tokens: TokenStore,
        notifier: Arc<dyn Notifier>,
        users_url: impl Into<String>,
    ) -> Self {
        Self {
            api,
            tokens,
            notifier,
            users_url: users_url.into(),
        }
    }

    /// Match `name`/`password` against the user list and store `token_<id>`.
    pub async fn login(&self, name: &str, password: &str) -> Result<User, ControllerError> {
        let mut missing = Vec::new();
        if is_empty_field(Some(name)) {
            missing.push(FieldError::new("name", "required"));
        }
        if is_empty_field(Some(password)) {
            missing.push(FieldError::new("password", "required"));
        }
        if !missing.is_empty() {
            self.notifier
                .notify(Notification::error("Fill in user name and password."));
            return Err(DomainError::InvalidFields(missing).into());
        }

        let users: Vec<User> = match get_as(self.api.as_ref(), &self.users_url).await {
            Ok(users) => users,
            Err(err) => {
                self.notifier
                    .notify(Notification::error(format!("Login failed: {err}")));
                return Err(err.into());
            }
        };

        let Some(user) = authenticate(&users, name, password) else {
            tracing::info!(%name, "login rejected");
            self.notifier
                .notify(Notification::error("Invalid user name or password."));
            return Err(ControllerError::InvalidCredentials);
        };

        self.tokens.set(&AuthToken::for_user(&user.id)).await?;
        tracing::info!(user_id = %user.id, "logged in");
        self.notifier
            .notify(Notification::info(format!("Welcome, {}!", user.name)));
        Ok(user.clone())
    }

    pub async fn logout(&self) -> Result<(), ControllerError> {
        self.tokens.clear().await?;
        self.notifier.notify(Notification::info("Logged out."));
        Ok(())
    }

    pub async fn is_authenticated(&self) -> Result<bool, ControllerError> {
        Ok(self.tokens.is_authenticated().await?)
    }
}
