use leptos::logging::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement};

#[wasm_bindgen]
extern "C" {
    // Loaded from a <script> tag in the shell.
    #[wasm_bindgen(js_name = html2canvas, catch)]
    fn html2canvas(element: &HtmlElement) -> Result<js_sys::Promise, JsValue>;
}

/// Renders the element matched by `selector` into a PNG data URL.
///
/// A missing element is not an error; the caller just gets `None`.
pub async fn capture_element(selector: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()?;

    let promise = match html2canvas(&element) {
        Ok(promise) => promise,
        Err(err) => {
            warn!("html2canvas unavailable: {:?}", err);
            return None;
        }
    };

    let canvas = match JsFuture::from(promise).await {
        Ok(canvas) => canvas.dyn_into::<HtmlCanvasElement>().ok()?,
        Err(err) => {
            warn!("Failed to capture {}: {:?}", selector, err);
            return None;
        }
    };

    canvas.to_data_url_with_type("image/png").ok()
}
