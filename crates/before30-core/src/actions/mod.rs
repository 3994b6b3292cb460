//! Mutation Actions
//!
//! Each action checks the signed-in user, validates its typed request, performs a
//! single persistence change and reports a structured `ActionResult`. Failures are
//! returned as data; nothing here panics or propagates an error to the caller.

mod requests;
mod list_actions;
mod item_actions;
mod style_actions;
mod community_actions;
mod feedback_actions;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::{AuthProvider, User};
use crate::domain::{BucketList, DomainError, DomainResult};
use crate::repository::{
    DbState, ItemRepository, ListRepository, ProfileRepository, StyleOptionsRepository,
    SuggestionRepository,
};

pub use requests::{
    browse_limit, AddFromCommunityRequest, AddItemRequest, DeleteItemRequest, EditItemTextRequest,
    PositionUpdate, ReorderRequest, SaveStyleOptionsRequest, SubmitSuggestionRequest, ToggleItemRequest,
    UpdateProfileRequest, UpdateTitleRequest, UpdateVisibilityRequest, DEFAULT_BROWSE_LIMIT, MAX_BROWSE_LIMIT,
};

/// Outcome of an action as seen by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult<T> {
    pub message: String,
    pub error: bool,
    pub success: bool,
    pub data: Option<T>,
}

impl<T> ActionResult<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            error: false,
            success: true,
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: true,
            success: false,
            data: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.success && !self.error
    }
}

/// Turn a domain result into an `ActionResult`, logging failures
fn report<T>(
    action: &str,
    result: DomainResult<T>,
    success: impl FnOnce(&T) -> String,
    fallback: &str,
) -> ActionResult<T> {
    match result {
        Ok(data) => {
            log::debug!("{} succeeded", action);
            ActionResult::ok(success(&data), data)
        }
        Err(e) => {
            match &e {
                DomainError::InvalidInput(_) | DomainError::Unauthenticated => {
                    log::warn!("{} rejected: {}", action, e)
                }
                _ => log::error!("{} failed: {}", action, e),
            }
            let message = e.user_message();
            if message.trim().is_empty() {
                ActionResult::fail(fallback)
            } else {
                ActionResult::fail(message)
            }
        }
    }
}

/// Entry point for every mutation, bound to one database and auth collaborator
pub struct Actions {
    items: ItemRepository,
    lists: ListRepository,
    styles: StyleOptionsRepository,
    profiles: ProfileRepository,
    suggestions: SuggestionRepository,
    auth: Arc<dyn AuthProvider>,
    browse_limit: usize,
}

impl Actions {
    pub fn new(db: &DbState, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            items: ItemRepository::new(db.conn.clone()),
            lists: ListRepository::new(db.conn.clone()),
            styles: StyleOptionsRepository::new(db.conn.clone()),
            profiles: ProfileRepository::new(db.conn.clone()),
            suggestions: SuggestionRepository::new(db.conn.clone()),
            auth,
            browse_limit: DEFAULT_BROWSE_LIMIT,
        }
    }

    /// Default page size for community browsing
    pub fn with_browse_limit(mut self, limit: usize) -> Self {
        self.browse_limit = browse_limit(Some(limit));
        self
    }

    async fn require_user(&self) -> DomainResult<User> {
        self.auth
            .current_user()
            .await?
            .ok_or(DomainError::Unauthenticated)
    }

    /// The list, provided it belongs to `user`
    async fn owned_list(&self, list_id: u32, user: &User) -> DomainResult<BucketList> {
        match self.lists.find_by_id(list_id).await? {
            Some(list) if list.user_id == user.id => Ok(list),
            _ => Err(DomainError::NotFound("List not found.".to_string())),
        }
    }
}
