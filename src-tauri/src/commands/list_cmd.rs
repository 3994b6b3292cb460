//! Tauri Commands for the user's list

use tauri::State;
use before30_core::actions::{UpdateTitleRequest, UpdateVisibilityRequest};
use before30_core::domain::{ListSummary, MyListPayload};
use before30_core::ActionResult;
use crate::AppState;

/// Get or create the current user's list
#[tauri::command]
pub async fn ensure_list(state: State<'_, AppState>) -> Result<ActionResult<ListSummary>, String> {
    Ok(state.actions.ensure_list().await)
}

/// Page-load payload: list, ordered items, style options
#[tauri::command]
pub async fn load_my_list(state: State<'_, AppState>) -> Result<ActionResult<MyListPayload>, String> {
    Ok(state.actions.load_my_list().await)
}

#[tauri::command]
pub async fn update_title(
    state: State<'_, AppState>,
    req: UpdateTitleRequest,
) -> Result<ActionResult<ListSummary>, String> {
    Ok(state.actions.update_title(req).await)
}

#[tauri::command]
pub async fn update_visibility(
    state: State<'_, AppState>,
    req: UpdateVisibilityRequest,
) -> Result<ActionResult<ListSummary>, String> {
    Ok(state.actions.update_visibility(req).await)
}
