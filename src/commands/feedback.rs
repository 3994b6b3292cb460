//! Feedback Commands

use wasm_bindgen::prelude::*;
use serde::Serialize;
use list_store::SubmitSuggestionRequest;
use crate::models::{ActionResult, Suggestion};
use super::{invoke, rejection};

#[derive(Serialize)]
struct ReqArgs<'a> {
    req: &'a SubmitSuggestionRequest,
}

pub async fn submit_suggestion(title: &str, description: &str) -> Result<ActionResult<Suggestion>, String> {
    let description = description.trim();
    let req = SubmitSuggestionRequest {
        title: title.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
    };
    let js_args = serde_wasm_bindgen::to_value(&ReqArgs { req: &req }).map_err(|e| e.to_string())?;
    let result = invoke("submit_suggestion", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
