//! Bootstrap Collapse Binding

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Collapse;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap)]
    fn new(el: &Element, options: &JsValue) -> Result<Collapse, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &Collapse);
}

#[derive(serde::Serialize)]
struct CollapseOptions {
    toggle: bool,
}

/// Open a collapsible body. Never toggles: an open body stays open.
pub fn expand(body: &Element) -> Result<(), String> {
    let options = serde_wasm_bindgen::to_value(&CollapseOptions { toggle: false }).map_err(|e| e.to_string())?;
    let collapse = Collapse::new(body, &options).map_err(|e| format!("{:?}", e))?;
    collapse.show();
    Ok(())
}
