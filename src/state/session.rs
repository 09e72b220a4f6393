//! Read-only access to the signed-in identity

use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Platform role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// Authenticated user as reported by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Source of the current identity and its API credential.
///
/// Form and toggle logic only ever reads from it.
pub trait SessionContext: Send + Sync {
    fn current_user(&self) -> Option<User>;

    /// Bearer token attached to API requests
    fn credential(&self) -> Option<String>;
}

/// Session seeded from configuration
pub struct StaticSession {
    user: RwLock<Option<User>>,
    token: Option<String>,
}

impl StaticSession {
    pub fn new(user: Option<User>, token: Option<String>) -> Self {
        Self {
            user: RwLock::new(user),
            token,
        }
    }

    /// Replace the cached user after the platform confirmed a profile change
    pub fn replace_user(&self, user: User) {
        match self.user.write() {
            Ok(mut guard) => *guard = Some(user),
            Err(poisoned) => *poisoned.into_inner() = Some(user),
        }
    }
}

impl SessionContext for StaticSession {
    fn current_user(&self) -> Option<User> {
        match self.user.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn credential(&self) -> Option<String> {
        self.token.clone()
    }
}
