//! Explicit user confirmation for destructive actions.

pub trait Confirm: Send + Sync {
    /// Ask the user; `true` lets the action proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Pre-approved (e.g. `--yes` on the command line).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}
