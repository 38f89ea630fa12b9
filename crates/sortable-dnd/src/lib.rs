//! SortableJS Bindings
//!
//! Typed bindings to the SortableJS drag-and-drop library (with its MultiDrag
//! plugin). The library owns reordering, ghost rendering and multi-select;
//! this crate only configures it and hands back a typed drop-completion event.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    /// A Sortable instance bound to one container
    #[derive(Debug, Clone)]
    pub type Sortable;

    #[wasm_bindgen(catch, constructor)]
    fn new(el: &HtmlElement, options: &JsValue) -> Result<Sortable, JsValue>;

    /// Raw event object handed to `onEnd`
    #[derive(Debug, Clone)]
    pub type SortableEvent;

    #[wasm_bindgen(method, getter)]
    fn item(this: &SortableEvent) -> HtmlElement;

    // Only present when MultiDrag is mounted
    #[wasm_bindgen(method, getter)]
    fn items(this: &SortableEvent) -> JsValue;

    #[wasm_bindgen(method, getter)]
    fn to(this: &SortableEvent) -> HtmlElement;
}

/// Options passed to the Sortable constructor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortableOptions {
    /// Containers sharing a group name exchange items
    pub group: String,
    /// Reorder animation in milliseconds
    pub animation: u32,
    pub multi_drag: bool,
    /// Class applied to multi-selected elements
    pub selected_class: String,
    /// Drag handle selector (None = whole element)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
}

/// Drop-completion snapshot
#[derive(Debug, Clone)]
pub struct SortEnd {
    /// Every dragged element in order. Never empty.
    pub items: Vec<HtmlElement>,
    /// The element the pointer grabbed
    pub item: HtmlElement,
    /// Destination container
    pub to: HtmlElement,
}

impl From<&SortableEvent> for SortEnd {
    fn from(ev: &SortableEvent) -> Self {
        let item = ev.item();
        let selected = ev
            .items()
            .dyn_into::<js_sys::Array>()
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.dyn_into::<HtmlElement>().ok())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        SortEnd {
            items: dragged_sequence(selected, item.clone()),
            item,
            to: ev.to(),
        }
    }
}

/// MultiDrag reports an empty selection when a single unselected element is
/// dragged. Fall back to the grabbed element so callers always see the full
/// dragged sequence.
pub fn dragged_sequence<T>(selected: Vec<T>, grabbed: T) -> Vec<T> {
    if selected.is_empty() {
        vec![grabbed]
    } else {
        selected
    }
}

/// Make `container` sortable and call `on_end` after every completed drop.
///
/// Fails when the options cannot be converted or when the Sortable global is
/// missing from the page.
pub fn bind_sortable<F>(
    container: &HtmlElement,
    options: &SortableOptions,
    on_end: F,
) -> Result<Sortable, String>
where
    F: Fn(SortEnd) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let js_options = serde_wasm_bindgen::to_value(options).map_err(|e| e.to_string())?;

    let on_end = Closure::<dyn FnMut(SortableEvent)>::new(move |ev: SortableEvent| {
        on_end(SortEnd::from(&ev));
    });
    js_sys::Reflect::set(&js_options, &JsValue::from_str("onEnd"), on_end.as_ref())
        .map_err(|e| format!("{:?}", e))?;

    let sortable = Sortable::new(container, &js_options).map_err(|e| format!("{:?}", e))?;
    // Lives as long as the container does
    on_end.forget();
    Ok(sortable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_use_library_field_names() {
        let options = SortableOptions {
            group: "shared-items".to_string(),
            animation: 150,
            multi_drag: true,
            selected_class: "sortable-selected".to_string(),
            handle: Some(".draggable-item, .folder-header".to_string()),
        };

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["group"], "shared-items");
        assert_eq!(json["animation"], 150);
        assert_eq!(json["multiDrag"], true);
        assert_eq!(json["selectedClass"], "sortable-selected");
        assert_eq!(json["handle"], ".draggable-item, .folder-header");
    }

    #[test]
    fn test_options_omit_missing_handle() {
        let options = SortableOptions {
            group: "g".to_string(),
            animation: 0,
            multi_drag: false,
            selected_class: "sel".to_string(),
            handle: None,
        };

        let json = serde_json::to_value(&options).unwrap();
        assert!(json.get("handle").is_none());
    }

    #[test]
    fn test_empty_selection_falls_back_to_grabbed() {
        assert_eq!(dragged_sequence(Vec::new(), "p1"), vec!["p1"]);
    }

    #[test]
    fn test_selection_keeps_order_and_ignores_grabbed() {
        let seq = dragged_sequence(vec!["p3", "p1", "p2"], "p1");
        assert_eq!(seq, vec!["p3", "p1", "p2"]);
    }
}
