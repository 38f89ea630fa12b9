//! Catalog Organizer Frontend Entry Point
//!
//! Wires drag-and-drop moves and product search into the server-rendered
//! dashboard pages.

mod collapse;
mod commands;
mod config;
mod dispatch;
mod dom;
mod error;
mod filter;
mod handlers;
mod models;
mod notify;
mod reconcile;
mod snapshot;

use std::rc::Rc;

use any_spawner::Executor;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use config::{OrganizerConfig, CONFIG_ELEMENT_ID};
use dispatch::MoveDispatcher;

fn main() {
    console_error_panic_hook::set_once();
    let _ = Executor::init_wasm_bindgen();

    let doc = match dom::document() {
        Ok(doc) => doc,
        Err(e) => {
            web_sys::console::error_1(&format!("[BOOT] {}", e).into());
            return;
        }
    };

    // Config and handlers both read the body
    if waits_for_dom(&doc.ready_state()) {
        let ready_doc = doc.clone();
        let on_ready = Closure::once(move || boot(&ready_doc));
        if let Err(e) = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
            web_sys::console::error_1(&format!("[BOOT] Could not wait for DOMContentLoaded: {:?}", e).into());
            return;
        }
        on_ready.forget();
    } else {
        boot(&doc);
    }
}

fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Read the config, start logging, install handlers
fn boot(doc: &Document) {
    let config = Rc::new(load_config(doc));
    if let Err(e) = console_logger::init(console_logger::parse_level(&config.log_level)) {
        web_sys::console::warn_1(&format!("[BOOT] Logger already set: {}", e).into());
    }
    install(doc, config);
}

/// Page override if present, defaults otherwise
fn load_config(doc: &Document) -> OrganizerConfig {
    let Some(json) = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return OrganizerConfig::default();
    };

    OrganizerConfig::from_json(&json).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[BOOT] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e).into());
        OrganizerConfig::default()
    })
}

/// Install every handler whose anchor is on the page. One failing handler
/// does not keep the others from being installed.
fn install(doc: &Document, config: Rc<OrganizerConfig>) {
    let dispatcher = MoveDispatcher::new(config.clone());

    match handlers::organization::install(doc, config.clone(), dispatcher) {
        Ok(0) => {}
        Ok(zones) => log::info!("[BOOT] Drag-and-drop active on {} zones", zones),
        Err(e) => log::error!("[BOOT] Organization view: {}", e),
    }

    match handlers::admin_search::install(doc, config.clone()) {
        Ok(installed) => log::debug!("[BOOT] Admin search installed: {}", installed),
        Err(e) => log::error!("[BOOT] Admin search: {}", e),
    }

    match handlers::user_search::install(doc, config) {
        Ok(installed) => log::debug!("[BOOT] User search installed: {}", installed),
        Err(e) => log::error!("[BOOT] User search: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_only_while_loading() {
        assert!(waits_for_dom("loading"));
        assert!(!waits_for_dom("interactive"));
        assert!(!waits_for_dom("complete"));
    }
}
