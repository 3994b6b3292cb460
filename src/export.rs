//! Image Export
//!
//! Rasterizes the styled preview with the page-provided `html2canvas` and
//! downloads it as a PNG.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use list_store::{ExportPlan, EXPORT_ELEMENT_ID};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = html2canvas)]
    fn html2canvas(element: &web_sys::HtmlElement, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CanvasOptions<'a> {
    scale: f64,
    background_color: &'a str,
    use_cors: bool,
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Render the preview and trigger the download.
///
/// Resolves to `Ok(false)` when the preview is not mounted; nothing is rendered then.
pub async fn export_image(plan: &ExportPlan) -> Result<bool, String> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| "No document available".to_string())?;

    let Some(element) = document.get_element_by_id(EXPORT_ELEMENT_ID) else {
        web_sys::console::warn_1(&format!("[EXPORT] #{} not mounted, skipping", EXPORT_ELEMENT_ID).into());
        return Ok(false);
    };
    let element: web_sys::HtmlElement = element
        .dyn_into()
        .map_err(|_| "Preview is not an HTML element".to_string())?;

    let options = serde_wasm_bindgen::to_value(&CanvasOptions {
        scale: plan.scale,
        background_color: &plan.background_color,
        use_cors: true,
    })
    .map_err(|e| e.to_string())?;

    let promise = html2canvas(&element, &options).map_err(js_error)?;
    let canvas: web_sys::HtmlCanvasElement = JsFuture::from(promise)
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "Renderer did not return a canvas".to_string())?;
    let data_url = canvas.to_data_url_with_type("image/png").map_err(js_error)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "Could not create download link".to_string())?;
    anchor.set_href(&data_url);
    anchor.set_download(&plan.file_name);

    let body = document.body().ok_or_else(|| "No document body".to_string())?;
    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    anchor.remove();

    web_sys::console::log_1(&format!("[EXPORT] Downloaded {}", plan.file_name).into());
    Ok(true)
}
