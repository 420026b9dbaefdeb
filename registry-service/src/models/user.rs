// User model
// The record held by the registry and the request body used to create or update it

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(id: u64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Overwrite the mutable fields, keeping the id.
    pub fn apply(&mut self, payload: UserPayload) {
        self.username = payload.username;
        self.email = payload.email;
    }
}

/// Body of a create or update request.
///
/// Both fields are required. Unknown fields, including a client-supplied `id`,
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
}

impl UserPayload {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}
