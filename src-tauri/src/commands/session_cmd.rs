//! Tauri Commands for session and diagnostics

use tauri::State;
use before30_core::{AuthProvider, User};
use crate::AppState;

/// The configured user, if signed in
#[tauri::command]
pub async fn current_user(state: State<'_, AppState>) -> Result<Option<User>, String> {
    state.session.current_user().await.map_err(|e| e.to_string())
}

/// Whether background database initialization has finished
#[tauri::command]
pub async fn db_ready(state: State<'_, AppState>) -> Result<bool, String> {
    Ok(state.db_state.is_ready().await)
}

/// Most recent backend log lines
#[tauri::command]
pub fn recent_logs() -> Vec<String> {
    rolling_logger::recent_lines()
}
