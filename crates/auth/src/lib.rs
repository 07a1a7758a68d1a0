//! `partstock-auth` — login matching and session token storage.
//!
//! This crate is decoupled from HTTP; persistence goes through the
//! `KeyValueStore` capability so callers choose the backing store.

pub mod token;
pub mod token_store;
pub mod user;

pub use token::AuthToken;
pub use token_store::{AUTH_TOKEN_KEY, KeyValueStore, MemoryStore, StoreError, TokenStore};
pub use user::{User, authenticate};
