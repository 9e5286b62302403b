//! Session context for the logged-in user.
//!
//! Authentication itself is out of scope; the identity comes from
//! configuration. The role gates moderation controls: Ban and Restrict
//! render and run only for admin sessions.

use std::sync::{Arc, RwLock};

use crate::domain::{Role, User};

/// Thread-safe holder of the current logged-in user.
#[derive(Clone)]
pub struct SessionContext {
    inner: Arc<RwLock<User>>,
}

impl SessionContext {
    pub fn new(user: User) -> Self {
        Self {
            inner: Arc::new(RwLock::new(user)),
        }
    }

    /// Snapshot of the logged-in user.
    pub fn current_user(&self) -> User {
        self.inner.read().expect("session lock poisoned").clone()
    }

    pub fn user_id(&self) -> String {
        self.inner.read().expect("session lock poisoned").id.clone()
    }

    pub fn is_admin(&self) -> bool {
        self.inner.read().expect("session lock poisoned").role == Role::Admin
    }

    /// Replace the logged-in user (e.g. after a profile refresh).
    pub fn set_user(&self, user: User) {
        *self.inner.write().expect("session lock poisoned") = user;
    }
}
