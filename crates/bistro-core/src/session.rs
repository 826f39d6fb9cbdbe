//! # Session Store
//!
//! Holds the signed-in user for the lifetime of the process.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌─────────────┐   set_current_user(u)   ┌──────────────────────┐     │
//! │   │  Anonymous  │ ──────────────────────► │  Authenticated(u)    │     │
//! │   │  (sentinel) │                         │                      │──┐  │
//! │   └─────────────┘                         └──────────────────────┘  │  │
//! │                                                     ▲               │  │
//! │                                                     └───────────────┘  │
//! │                                               set_current_user(u2)     │
//! │                                                                         │
//! │   There is no way back to Anonymous: signing out only navigates.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is persisted; a restart begins Anonymous again.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::User;

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(User),
}

/// The current user, or the empty sentinel before anyone signs in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStore {
    current_user: User,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current user wholesale. No validation is applied.
    pub fn set_current_user(&mut self, user: User) {
        debug!(user_id = user.id, "current user replaced");
        self.current_user = user;
    }

    /// The last user set, or `User::default()`.
    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    /// True once a non-sentinel user has been set.
    pub fn is_authenticated(&self) -> bool {
        !self.current_user.is_anonymous()
    }

    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated(self.current_user.clone())
        } else {
            SessionState::Anonymous
        }
    }
}
