//! Who the current user is
//!
//! Authentication lives outside this crate; a provider only answers with
//! the id of the signed-in user, if any.

use crate::models::UserId;
use std::sync::Arc;

/// Session reference type
pub type SessionRef = Arc<dyn SessionProvider>;

pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}

/// Session with a fixed user, taken from configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSession {
    user_id: Option<UserId>,
}

impl StaticSession {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Session with nobody signed in
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<UserId> {
        self.user_id
    }
}
