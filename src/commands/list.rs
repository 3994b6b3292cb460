//! List Commands
//!
//! Frontend bindings for the user's list.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use list_store::{UpdateTitleRequest, UpdateVisibilityRequest};
use crate::models::{ActionResult, ListSummary, MyListPayload};
use super::{invoke, rejection};

#[derive(Serialize)]
struct ReqArgs<'a, T: Serialize> {
    req: &'a T,
}

pub async fn ensure_list() -> Result<ActionResult<ListSummary>, String> {
    let result = invoke("ensure_list", JsValue::NULL).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn load_my_list() -> Result<ActionResult<MyListPayload>, String> {
    let result = invoke("load_my_list", JsValue::NULL).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_title(req: &UpdateTitleRequest) -> Result<ActionResult<ListSummary>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReqArgs { req }).map_err(|e| e.to_string())?;
    let result = invoke("update_title", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_visibility(is_public: bool) -> Result<ActionResult<ListSummary>, String> {
    let req = UpdateVisibilityRequest { is_public };
    let js_args = serde_wasm_bindgen::to_value(&ReqArgs { req: &req }).map_err(|e| e.to_string())?;
    let result = invoke("update_visibility", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
