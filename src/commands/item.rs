//! Item Commands
//!
//! Frontend bindings for goal item mutations.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use list_store::{
    AddItemRequest, DeleteItemRequest, EditItemTextRequest, ReorderRequest, ToggleItemRequest,
};
use crate::models::{ActionResult, GoalItem};
use super::{invoke, rejection};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ReqArgs<'a, T: Serialize> {
    req: &'a T,
}

// ========================
// Commands
// ========================

pub async fn add_item(req: &AddItemRequest) -> Result<ActionResult<GoalItem>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReqArgs { req }).map_err(|e| e.to_string())?;
    let result = invoke("add_item", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn toggle_item(req: &ToggleItemRequest) -> Result<ActionResult<GoalItem>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReqArgs { req }).map_err(|e| e.to_string())?;
    let result = invoke("toggle_item", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_item(req: &DeleteItemRequest) -> Result<ActionResult<()>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReqArgs { req }).map_err(|e| e.to_string())?;
    let result = invoke("delete_item", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn edit_item_text(req: &EditItemTextRequest) -> Result<ActionResult<GoalItem>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReqArgs { req }).map_err(|e| e.to_string())?;
    let result = invoke("edit_item_text", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn reorder_items(req: &ReorderRequest) -> Result<ActionResult<()>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReqArgs { req }).map_err(|e| e.to_string())?;
    let result = invoke("reorder_items", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
