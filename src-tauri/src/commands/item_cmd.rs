//! Tauri Commands for goal items
//!
//! Exposes item mutations to the frontend via Tauri IPC.

use tauri::State;
use before30_core::actions::{
    AddItemRequest, DeleteItemRequest, EditItemTextRequest, ReorderRequest, ToggleItemRequest,
};
use before30_core::domain::GoalItem;
use before30_core::ActionResult;
use crate::AppState;

/// Append a goal; the stored record comes back for merging
#[tauri::command]
pub async fn add_item(
    state: State<'_, AppState>,
    req: AddItemRequest,
) -> Result<ActionResult<GoalItem>, String> {
    Ok(state.actions.add_item(req).await)
}

#[tauri::command]
pub async fn toggle_item(
    state: State<'_, AppState>,
    req: ToggleItemRequest,
) -> Result<ActionResult<GoalItem>, String> {
    Ok(state.actions.toggle_item(req).await)
}

#[tauri::command]
pub async fn delete_item(
    state: State<'_, AppState>,
    req: DeleteItemRequest,
) -> Result<ActionResult<()>, String> {
    Ok(state.actions.delete_item(req).await)
}

#[tauri::command]
pub async fn edit_item_text(
    state: State<'_, AppState>,
    req: EditItemTextRequest,
) -> Result<ActionResult<GoalItem>, String> {
    Ok(state.actions.edit_item_text(req).await)
}

/// Persist a full position batch after a drag-and-drop
#[tauri::command]
pub async fn reorder_items(
    state: State<'_, AppState>,
    req: ReorderRequest,
) -> Result<ActionResult<()>, String> {
    Ok(state.actions.reorder_items(req).await)
}
