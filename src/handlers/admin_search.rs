//! Admin Product Search

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use super::KEYSTROKE_EVENTS;
use crate::config::OrganizerConfig;
use crate::dom::{listen, select_all, set_shown, text_of};
use crate::error::DomError;
use crate::filter::{visibility, SearchTerm};

/// Returns false when the search field is not on this page
pub fn install(doc: &Document, config: Rc<OrganizerConfig>) -> Result<bool, DomError> {
    let Some(field) = doc.get_element_by_id(&config.markers.admin_search_id) else {
        return Ok(false);
    };
    let field: HtmlInputElement = field.dyn_into().map_err(|_| DomError::Cast("HtmlInputElement"))?;

    let input = field.clone();
    let doc = doc.clone();
    listen(&field, KEYSTROKE_EVENTS, move || {
        if let Err(e) = apply(&doc, &config, &input.value()) {
            log::warn!("[SEARCH] Admin filter failed: {}", e);
        }
    })?;
    Ok(true)
}

/// Show entries containing the term, hide the rest. Returns the visible count.
pub fn apply(doc: &Document, config: &OrganizerConfig, raw: &str) -> Result<usize, DomError> {
    let term = SearchTerm::new(raw);
    let entries = select_all(doc, &config.markers.admin_entry_selector())?;
    let texts: Vec<String> = entries.iter().map(text_of).collect();
    let visible = visibility(&term, &texts);

    for (entry, shown) in entries.iter().zip(&visible) {
        set_shown(entry, *shown);
    }

    let count = visible.iter().filter(|v| **v).count();
    log::debug!("[SEARCH] Admin '{}': {}/{} visible", raw, count, entries.len());
    Ok(count)
}
