//! Tauri Commands for profile and community browsing

use tauri::State;
use before30_core::actions::{AddFromCommunityRequest, UpdateProfileRequest};
use before30_core::domain::{CommunityList, GoalItem, Profile};
use before30_core::ActionResult;
use crate::AppState;

#[tauri::command]
pub async fn update_profile(
    state: State<'_, AppState>,
    req: UpdateProfileRequest,
) -> Result<ActionResult<Profile>, String> {
    Ok(state.actions.update_profile(req).await)
}

#[tauri::command]
pub async fn browse_public_lists(
    state: State<'_, AppState>,
    limit: Option<usize>,
) -> Result<ActionResult<Vec<CommunityList>>, String> {
    Ok(state.actions.browse_public_lists(limit).await)
}

#[tauri::command]
pub async fn get_public_list(
    state: State<'_, AppState>,
    username: String,
) -> Result<ActionResult<CommunityList>, String> {
    Ok(state.actions.get_public_list(&username).await)
}

/// Copy a goal from someone else's list into the current user's list
#[tauri::command]
pub async fn add_item_from_community(
    state: State<'_, AppState>,
    req: AddFromCommunityRequest,
) -> Result<ActionResult<GoalItem>, String> {
    Ok(state.actions.add_item_from_community(req).await)
}
