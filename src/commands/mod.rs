//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.
//! Every mutating command answers with an `ActionResult`; only transport and
//! (de)serialization problems surface as `Err`.

mod session;
mod list;
mod item;
mod style;
mod community;
mod feedback;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Rejected invokes carry a plain string or an Error object
fn rejection(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use session::*;
pub use list::*;
pub use item::*;
pub use style::*;
pub use community::*;
pub use feedback::*;
