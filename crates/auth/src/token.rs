use serde::{Deserialize, Serialize};

use partstock_core::UserId;

/// Opaque session token.
///
/// Tokens are synthesised client-side as `token_<userId>` after a successful
/// login. They are illustrative only: nothing verifies or expires them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn for_user(id: &UserId) -> Self {
        Self(format!("token_{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header carrying this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl core::fmt::Display for AuthToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
