//! Auth Collaborator
//!
//! Actions only ever ask "who is the current user?". The desktop host answers from
//! configuration through `StaticSession`; tests plug in their own providers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// `Ok(None)` when signed out; `Err` when the provider itself failed
    async fn current_user(&self) -> DomainResult<Option<User>>;
}

/// Session fixed at startup from configuration
#[derive(Debug, Default)]
pub struct StaticSession {
    user: Option<User>,
}

impl StaticSession {
    /// An empty id means signed out
    pub fn new(user_id: &str, email: Option<String>) -> Self {
        let user = (!user_id.trim().is_empty()).then(|| User {
            id: user_id.trim().to_string(),
            email,
        });
        match &user {
            Some(user) => log::info!("Session user {}", user.id),
            None => log::info!("No session user configured"),
        }
        Self { user }
    }
}

#[async_trait]
impl AuthProvider for StaticSession {
    async fn current_user(&self) -> DomainResult<Option<User>> {
        Ok(self.user.clone())
    }
}
