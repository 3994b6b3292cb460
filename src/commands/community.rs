//! Community Commands
//!
//! Profile, public list browsing and copying goals between lists.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use list_store::{AddFromCommunityRequest, UpdateProfileRequest};
use crate::models::{ActionResult, CommunityList, GoalItem, Profile};
use super::{invoke, rejection};

#[derive(Serialize)]
struct ReqArgs<'a, T: Serialize> {
    req: &'a T,
}

#[derive(Serialize)]
struct LimitArgs {
    limit: Option<usize>,
}

#[derive(Serialize)]
struct UsernameArgs<'a> {
    username: &'a str,
}

pub async fn update_profile(username: &str) -> Result<ActionResult<Profile>, String> {
    let req = UpdateProfileRequest { username: username.to_string() };
    let js_args = serde_wasm_bindgen::to_value(&ReqArgs { req: &req }).map_err(|e| e.to_string())?;
    let result = invoke("update_profile", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn browse_public_lists(limit: Option<usize>) -> Result<ActionResult<Vec<CommunityList>>, String> {
    let js_args = serde_wasm_bindgen::to_value(&LimitArgs { limit }).map_err(|e| e.to_string())?;
    let result = invoke("browse_public_lists", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn get_public_list(username: &str) -> Result<ActionResult<CommunityList>, String> {
    let js_args = serde_wasm_bindgen::to_value(&UsernameArgs { username }).map_err(|e| e.to_string())?;
    let result = invoke("get_public_list", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn add_item_from_community(text: &str) -> Result<ActionResult<GoalItem>, String> {
    let req = AddFromCommunityRequest { text: text.to_string() };
    let js_args = serde_wasm_bindgen::to_value(&ReqArgs { req: &req }).map_err(|e| e.to_string())?;
    let result = invoke("add_item_from_community", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
