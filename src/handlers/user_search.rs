//! User Product Search
//!
//! Filters product rows and opens every collapsed group that still shows a
//! row for the current term.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Node};

use super::KEYSTROKE_EVENTS;
use crate::collapse;
use crate::config::{Markers, OrganizerConfig};
use crate::dom::{listen, select_all, set_shown, text_of};
use crate::error::DomError;
use crate::filter::{groups_to_expand, visibility, GroupSnapshot, SearchTerm};

/// Returns false when the search field is not on this page
pub fn install(doc: &Document, config: Rc<OrganizerConfig>) -> Result<bool, DomError> {
    let Some(field) = doc.get_element_by_id(&config.markers.user_search_id) else {
        return Ok(false);
    };
    let field: HtmlInputElement = field.dyn_into().map_err(|_| DomError::Cast("HtmlInputElement"))?;

    let input = field.clone();
    let doc = doc.clone();
    listen(&field, KEYSTROKE_EVENTS, move || {
        if let Err(e) = apply(&doc, &config, &input.value()) {
            log::warn!("[SEARCH] User filter failed: {}", e);
        }
    })?;
    Ok(true)
}

pub fn apply(doc: &Document, config: &OrganizerConfig, raw: &str) -> Result<(), DomError> {
    let markers = &config.markers;
    let term = SearchTerm::new(raw);

    let rows = select_all(doc, &markers.product_row_selector)?;
    let texts: Vec<String> = rows.iter().map(text_of).collect();
    let visible = visibility(&term, &texts);
    for (row, shown) in rows.iter().zip(&visible) {
        set_shown(row, *shown);
    }

    // Expansion reads the visibility just applied, not the pre-keystroke state
    let groups = select_all(doc, &markers.group_selector)?;
    let (snapshots, bodies): (Vec<GroupSnapshot>, Vec<Option<Element>>) =
        groups.iter().map(|g| read_group(g, &rows, markers)).unzip();

    for i in groups_to_expand(&term, &visible, &snapshots) {
        if let Some(body) = &bodies[i] {
            if let Err(e) = collapse::expand(body) {
                log::warn!("[SEARCH] Could not expand group {}: {}", i, e);
            }
        }
    }
    Ok(())
}

fn read_group(group: &HtmlElement, rows: &[HtmlElement], markers: &Markers) -> (GroupSnapshot, Option<Element>) {
    let body = group.query_selector(&markers.group_body_selector).ok().flatten();
    let expanded = body
        .as_ref()
        .map(|b| {
            let classes = b.class_list();
            markers.body_open(|class| classes.contains(class))
        })
        .unwrap_or(false);
    let rows = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| contains(group, row))
        .map(|(i, _)| i)
        .collect();

    (GroupSnapshot { rows, has_body: body.is_some(), expanded }, body)
}

fn contains(group: &HtmlElement, row: &HtmlElement) -> bool {
    let row: &Node = row;
    group.contains(Some(row))
}
