//! Inventory (component) domain module.
//!
//! Business rules for the parts inventory screen, implemented purely as
//! deterministic logic (no IO, no HTTP, no storage).

pub mod component;
pub mod filter;
pub mod view;

pub use component::{Component, ComponentDraft, ComponentForm};
pub use filter::{ComponentFilter, categories, filter_components};
pub use view::{ComponentRow, render_rows};
