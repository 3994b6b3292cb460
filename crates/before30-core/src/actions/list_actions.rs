//! List-level actions: page load, title and visibility.

use super::{report, ActionResult, Actions, UpdateTitleRequest, UpdateVisibilityRequest};
use crate::domain::{DomainResult, ListSummary, MyListPayload, StyleOptions, DEFAULT_LIST_TITLE};

impl Actions {
    /// Return the user's list, creating it on first access
    pub async fn ensure_list(&self) -> ActionResult<ListSummary> {
        report(
            "ensure_list",
            self.try_ensure_list().await,
            |_| "List ready.".to_string(),
            "Could not find or create a list.",
        )
    }

    async fn try_ensure_list(&self) -> DomainResult<ListSummary> {
        let user = self.require_user().await?;
        let list = self.lists.ensure_for_user(&user.id, DEFAULT_LIST_TITLE).await?;
        Ok(list.summary())
    }

    /// List header, ordered items, resolved style options and username
    pub async fn load_my_list(&self) -> ActionResult<MyListPayload> {
        report(
            "load_my_list",
            self.try_load_my_list().await,
            |_| "List loaded.".to_string(),
            "Failed to load your list.",
        )
    }

    async fn try_load_my_list(&self) -> DomainResult<MyListPayload> {
        let user = self.require_user().await?;
        let list = self.lists.ensure_for_user(&user.id, DEFAULT_LIST_TITLE).await?;
        let items = self.items.list_by_list(list.id).await?;
        let style_options = StyleOptions::resolve(self.styles.find(list.id).await?);
        let username = self.profiles.find(&user.id).await?.and_then(|p| p.username);
        Ok(MyListPayload {
            list: list.summary(),
            items,
            style_options,
            username,
        })
    }

    pub async fn update_title(&self, req: UpdateTitleRequest) -> ActionResult<ListSummary> {
        report(
            "update_title",
            self.try_update_title(req).await,
            |_| "List title updated!".to_string(),
            "Failed to update list title.",
        )
    }

    async fn try_update_title(&self, req: UpdateTitleRequest) -> DomainResult<ListSummary> {
        let user = self.require_user().await?;
        let title = req.validate()?;
        let list = self.owned_list(req.list_id, &user).await?;
        self.lists.update_title(list.id, &user.id, &title).await?;
        Ok(ListSummary { title, ..list.summary() })
    }

    pub async fn update_visibility(&self, req: UpdateVisibilityRequest) -> ActionResult<ListSummary> {
        report(
            "update_visibility",
            self.try_update_visibility(req).await,
            |_| "Settings updated successfully!".to_string(),
            "Failed to update settings.",
        )
    }

    async fn try_update_visibility(&self, req: UpdateVisibilityRequest) -> DomainResult<ListSummary> {
        let user = self.require_user().await?;
        let list = self.lists.ensure_for_user(&user.id, DEFAULT_LIST_TITLE).await?;
        self.lists.set_public(&user.id, req.is_public).await?;
        Ok(ListSummary { is_public: req.is_public, ..list.summary() })
    }
}
