//! Tauri Commands for image style options

use tauri::State;
use before30_core::actions::SaveStyleOptionsRequest;
use before30_core::domain::StyleOptions;
use before30_core::ActionResult;
use crate::AppState;

#[tauri::command]
pub async fn load_style_options(
    state: State<'_, AppState>,
    list_id: u32,
) -> Result<ActionResult<StyleOptions>, String> {
    Ok(state.actions.load_style_options(list_id).await)
}

#[tauri::command]
pub async fn save_style_options(
    state: State<'_, AppState>,
    req: SaveStyleOptionsRequest,
) -> Result<ActionResult<StyleOptions>, String> {
    Ok(state.actions.save_style_options(req).await)
}
