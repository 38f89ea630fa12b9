//! Admin Organization View
//!
//! Makes every drop zone sortable and turns each completed drop into a move
//! request. The drag library has already reordered the DOM by the time the
//! request is sent; nothing is rolled back on failure.

use std::rc::Rc;

use sortable_dnd::{bind_sortable, SortEnd, SortableOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::OrganizerConfig;
use crate::dispatch::MoveDispatcher;
use crate::dom::select_all_in;
use crate::error::DomError;
use crate::reconcile::reconcile;
use crate::snapshot::read_gesture;

/// Returns the number of zones made sortable (0 = view not on this page)
pub fn install(doc: &Document, config: Rc<OrganizerConfig>, dispatcher: MoveDispatcher) -> Result<usize, DomError> {
    let Some(view) = doc.get_element_by_id(&config.markers.organization_id) else {
        log::debug!("[DND] No #{} on page, skipping", config.markers.organization_id);
        return Ok(0);
    };
    let view: HtmlElement = view.dyn_into().map_err(|_| DomError::Cast("HtmlElement"))?;

    let zones = select_all_in(&view, &config.markers.drop_zone_selector)?;
    let options = SortableOptions::from(&config.sortable);

    for zone in &zones {
        let config = config.clone();
        let dispatcher = dispatcher.clone();
        bind_sortable(zone, &options, move |end| on_drop(&config, &dispatcher, &end)).map_err(DomError::Bind)?;
    }

    Ok(zones.len())
}

fn on_drop(config: &OrganizerConfig, dispatcher: &MoveDispatcher, end: &SortEnd) {
    let gesture = read_gesture(end, &config.markers);
    log::debug!(
        "[DND] Drop: {} element(s) onto {:?}",
        gesture.dragged.len(),
        gesture.destination.category_id
    );

    if let Some(request) = reconcile(&gesture) {
        log::info!("[DND] {:?} move to {:?}", request.kind(), request.target());
        dispatcher.submit(request);
    }
}
