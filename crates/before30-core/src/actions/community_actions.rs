//! Profile and community actions: username, public lists, copying goals.

use super::{browse_limit, report, ActionResult, Actions, AddFromCommunityRequest, UpdateProfileRequest};
use crate::domain::{
    BucketList, CommunityItem, CommunityList, DomainError, DomainResult, GoalItem, Profile,
    DEFAULT_LIST_TITLE,
};
use crate::repository::ItemPositioningOperations;

impl Actions {
    pub async fn update_profile(&self, req: UpdateProfileRequest) -> ActionResult<Profile> {
        report(
            "update_profile",
            self.try_update_profile(req).await,
            |_| "Profile updated successfully!".to_string(),
            "Failed to update profile.",
        )
    }

    async fn try_update_profile(&self, req: UpdateProfileRequest) -> DomainResult<Profile> {
        let user = self.require_user().await?;
        let username = req.validate()?;
        self.profiles.set_username(&user.id, &username).await
    }

    /// Public lists with their goals; `limit` falls back to the configured page size
    pub async fn browse_public_lists(&self, limit: Option<usize>) -> ActionResult<Vec<CommunityList>> {
        report(
            "browse_public_lists",
            self.try_browse_public_lists(limit).await,
            |lists| format!("Found {} public lists.", lists.len()),
            "Could not load community lists.",
        )
    }

    async fn try_browse_public_lists(&self, limit: Option<usize>) -> DomainResult<Vec<CommunityList>> {
        self.require_user().await?;
        let limit = browse_limit(limit.or(Some(self.browse_limit)));
        let mut lists = Vec::new();
        for (list, username) in self.lists.list_public(limit).await? {
            lists.push(self.community_list(list, username).await?);
        }
        Ok(lists)
    }

    /// A user's list, only when it is public
    pub async fn get_public_list(&self, username: &str) -> ActionResult<CommunityList> {
        report(
            "get_public_list",
            self.try_get_public_list(username).await,
            |list| list.title.clone(),
            "List not found.",
        )
    }

    async fn try_get_public_list(&self, username: &str) -> DomainResult<CommunityList> {
        let not_found = || DomainError::NotFound("This list is private or does not exist.".to_string());
        let list = self
            .lists
            .find_by_username(username.trim())
            .await?
            .ok_or_else(not_found)?;
        if !list.is_public {
            return Err(not_found());
        }
        self.community_list(list, Some(username.trim().to_string())).await
    }

    async fn community_list(&self, list: BucketList, username: Option<String>) -> DomainResult<CommunityList> {
        let items = self.items.list_by_list(list.id).await?;
        Ok(CommunityList {
            id: list.id,
            title: list.title,
            username,
            items: items.iter().map(CommunityItem::from).collect(),
        })
    }

    /// Copy a goal into the current user's list, creating the list if needed
    pub async fn add_item_from_community(&self, req: AddFromCommunityRequest) -> ActionResult<GoalItem> {
        report(
            "add_item_from_community",
            self.try_add_item_from_community(req).await,
            |item| format!("Added \"{}\" to your list!", item.text),
            "An unexpected error occurred.",
        )
    }

    async fn try_add_item_from_community(&self, req: AddFromCommunityRequest) -> DomainResult<GoalItem> {
        let user = self.require_user().await?;
        let text = req.validate()?;
        let list = self.lists.ensure_for_user(&user.id, DEFAULT_LIST_TITLE).await?;
        self.items.append(&GoalItem::new(list.id, user.id.as_str(), text)).await
    }
}
