use serde::{Deserialize, Serialize};

use partstock_core::{Entity, UserId};

/// User record served by the user list endpoint.
///
/// The password is plaintext and compared client-side. This mirrors the mock
/// API the application talks to and is not a model for real authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub password: String,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Find the first user whose name and password both match exactly.
pub fn authenticate<'a>(users: &'a [User], name: &str, password: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|u| u.name == name && u.password == password)
}
