//! `partstock-client`
//!
//! **Responsibility:** the client side of the parts inventory application.
//!
//! This crate provides:
//! - an HTTP client that attaches the session token to every request
//! - the component list controller (load, filter, create, update, delete)
//! - the login controller
//! - a SQLite-backed key-value store for the session token
//!
//! The API remains the authority: the local component list is a cache that
//! is replaced wholesale after every mutation.

pub mod app;
pub mod config;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod http;
pub mod kv_store;
pub mod login;
pub mod notify;

pub use app::AppState;
pub use config::ClientConfig;
pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm};
pub use controller::{ComponentController, ListState, ListView};
pub use error::{ApiError, ControllerError};
pub use http::{Api, Method, RestClient};
pub use kv_store::SqliteStore;
pub use login::LoginController;
pub use notify::{Level, Notification, Notifier, RecordingNotifier, TracingNotifier};

#[cfg(test)]
mod testing;
