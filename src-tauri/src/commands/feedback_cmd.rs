//! Tauri Commands for feature suggestions

use tauri::State;
use before30_core::actions::SubmitSuggestionRequest;
use before30_core::domain::Suggestion;
use before30_core::ActionResult;
use crate::AppState;

#[tauri::command]
pub async fn submit_suggestion(
    state: State<'_, AppState>,
    req: SubmitSuggestionRequest,
) -> Result<ActionResult<Suggestion>, String> {
    Ok(state.actions.submit_suggestion(req).await)
}
