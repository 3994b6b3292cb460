//! Style Option Commands

use wasm_bindgen::prelude::*;
use serde::Serialize;
use list_store::SaveStyleOptionsRequest;
use crate::models::{ActionResult, StyleOptions};
use super::{invoke, rejection};

#[derive(Serialize)]
struct ListIdArgs {
    #[serde(rename = "listId")]
    list_id: u32,
}

#[derive(Serialize)]
struct ReqArgs<'a> {
    req: &'a SaveStyleOptionsRequest,
}

pub async fn load_style_options(list_id: u32) -> Result<ActionResult<StyleOptions>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ListIdArgs { list_id }).map_err(|e| e.to_string())?;
    let result = invoke("load_style_options", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_style_options(
    req: &SaveStyleOptionsRequest,
) -> Result<ActionResult<StyleOptions>, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReqArgs { req }).map_err(|e| e.to_string())?;
    let result = invoke("save_style_options", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
