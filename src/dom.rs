//! DOM Helpers
//!
//! Small wrappers around web-sys used by the handlers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement, NodeList};

use crate::error::DomError;

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Every matching element under the document, in document order
pub fn select_all(doc: &Document, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    doc.query_selector_all(selector)
        .map(html_elements)
        .map_err(|_| DomError::Selector(selector.to_string()))
}

/// Every matching element under `root`, in document order
pub fn select_all_in(root: &HtmlElement, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    root.query_selector_all(selector)
        .map(html_elements)
        .map_err(|_| DomError::Selector(selector.to_string()))
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Full text of an element and its descendants
pub fn text_of(el: &HtmlElement) -> String {
    el.text_content().unwrap_or_default()
}

/// Hide with `display: none`, or restore the stylesheet's display
pub fn set_shown(el: &HtmlElement, shown: bool) {
    let style = el.style();
    let result = if shown {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
    if let Err(e) = result {
        log::warn!("[SEARCH] Could not update display: {:?}", e);
    }
}

/// Call `handler` for each of the named events on `target`.
/// The listener lives for the rest of the page.
pub fn listen<F>(target: &EventTarget, events: &[&str], handler: F) -> Result<(), DomError>
where
    F: Fn() + 'static,
{
    let cb = Closure::<dyn FnMut()>::new(move || handler());
    for name in events {
        target
            .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
            .map_err(|e| DomError::Listener(format!("{}: {:?}", name, e)))?;
    }
    cb.forget();
    Ok(())
}
