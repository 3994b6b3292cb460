//! Session Commands

use wasm_bindgen::prelude::*;
use serde::Deserialize;
use super::{invoke, rejection};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
}

pub async fn current_user() -> Result<Option<User>, String> {
    let result = invoke("current_user", JsValue::NULL).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Whether the backend finished opening the database
pub async fn db_ready() -> Result<bool, String> {
    let result = invoke("db_ready", JsValue::NULL).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Most recent backend log lines, oldest first
pub async fn recent_logs() -> Result<Vec<String>, String> {
    let result = invoke("recent_logs", JsValue::NULL).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
