//! Goal item actions: add, toggle, delete, edit text and reorder.

use super::{
    report, ActionResult, Actions, AddItemRequest, DeleteItemRequest, EditItemTextRequest,
    ReorderRequest, ToggleItemRequest,
};
use crate::domain::{DomainError, DomainResult, GoalItem};
use crate::repository::{ItemPositioningOperations, Repository};

impl Actions {
    /// Append a goal to the user's list; the stored record is returned for merging
    pub async fn add_item(&self, req: AddItemRequest) -> ActionResult<GoalItem> {
        report(
            "add_item",
            self.try_add_item(req).await,
            |_| "Item added successfully!".to_string(),
            "Failed to add item.",
        )
    }

    async fn try_add_item(&self, req: AddItemRequest) -> DomainResult<GoalItem> {
        let user = self.require_user().await?;
        let text = req.validate()?;
        let list = self.owned_list(req.list_id, &user).await?;
        let item = GoalItem::new(list.id, user.id.as_str(), text)
            .with_category(req.category.unwrap_or_default());
        let created = self.items.append(&item).await?;
        log::info!("Added item {} at position {}", created.id, created.position);
        Ok(created)
    }

    pub async fn toggle_item(&self, req: ToggleItemRequest) -> ActionResult<GoalItem> {
        report(
            "toggle_item",
            self.try_toggle_item(req).await,
            |_| "Item completion status updated!".to_string(),
            "Failed to update item completion status.",
        )
    }

    async fn try_toggle_item(&self, req: ToggleItemRequest) -> DomainResult<GoalItem> {
        let user = self.require_user().await?;
        let mut item = self.items.find_owned(req.item_id, &user.id).await?;
        item.completed = req.completed;
        self.items.update(&item).await
    }

    /// Remove a goal; remaining positions are left as they are
    pub async fn delete_item(&self, req: DeleteItemRequest) -> ActionResult<()> {
        report(
            "delete_item",
            self.try_delete_item(req).await,
            |_| "Item deleted successfully!".to_string(),
            "Failed to delete item.",
        )
    }

    async fn try_delete_item(&self, req: DeleteItemRequest) -> DomainResult<()> {
        let user = self.require_user().await?;
        let item = self.items.find_owned(req.item_id, &user.id).await?;
        self.items.delete(item.id).await
    }

    pub async fn edit_item_text(&self, req: EditItemTextRequest) -> ActionResult<GoalItem> {
        report(
            "edit_item_text",
            self.try_edit_item_text(req).await,
            |_| "Item text updated successfully!".to_string(),
            "Failed to update item text.",
        )
    }

    async fn try_edit_item_text(&self, req: EditItemTextRequest) -> DomainResult<GoalItem> {
        let user = self.require_user().await?;
        let text = req.validate()?;
        let mut item = self.items.find_owned(req.item_id, &user.id).await?;
        item.text = text;
        self.items.update(&item).await
    }

    /// Persist a full position batch.
    ///
    /// Every update is an independent write; all of them are attempted and the first
    /// failure is reported. Writes that already succeeded stay applied.
    pub async fn reorder_items(&self, req: ReorderRequest) -> ActionResult<()> {
        report(
            "reorder_items",
            self.try_reorder_items(req).await,
            |_| "Item positions updated successfully!".to_string(),
            "Failed to update item positions.",
        )
    }

    async fn try_reorder_items(&self, req: ReorderRequest) -> DomainResult<()> {
        let user = self.require_user().await?;
        req.validate()?;

        let mut first_failure: Option<DomainError> = None;
        for update in &req.updates {
            if let Err(e) = self.items.set_position(update.id, &user.id, update.position).await {
                log::warn!("Position write for item {} failed: {}", update.id, e);
                first_failure.get_or_insert(e);
            }
        }
        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
