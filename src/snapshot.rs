//! DOM Snapshot
//!
//! The only place that reads organization markup. Elements are classified into
//! typed models here so the decision logic never sees a DOM node.

use sortable_dnd::SortEnd;
use web_sys::Element;

use crate::config::Markers;
use crate::models::{DragGesture, DraggedItem, DropZone};
use crate::reconcile::normalize_id;

/// Classify one dragged element by its marker classes.
pub fn classify(el: &Element, markers: &Markers) -> DraggedItem {
    let classes = el.class_list();
    classify_with(markers, |class| classes.contains(class), |attr| el.get_attribute(attr))
}

/// Product wins when both markers are present.
fn classify_with<C, A>(markers: &Markers, has_class: C, attribute: A) -> DraggedItem
where
    C: Fn(&str) -> bool,
    A: Fn(&str) -> Option<String>,
{
    if has_class(&markers.product_item_class) {
        DraggedItem::Product {
            product_id: normalize_id(attribute(&markers.product_id_attr)),
        }
    } else if has_class(&markers.category_folder_class) {
        DraggedItem::Folder {
            category_id: normalize_id(attribute(&markers.category_id_attr)),
        }
    } else {
        DraggedItem::Unrecognized
    }
}

/// Resolve the owning category of a drop container from its nearest
/// (inclusive) ancestor carrying a category id. None means root.
pub fn read_drop_zone(zone: &Element, markers: &Markers) -> DropZone {
    let chain = std::iter::successors(Some(zone.clone()), |el| el.parent_element())
        .map(|el| el.get_attribute(&markers.category_id_attr));
    nearest_category(chain)
}

/// `chain` yields the category attribute of the zone, then of each ancestor
/// outward. The first element carrying the attribute decides, even when its
/// value is empty.
fn nearest_category<I>(chain: I) -> DropZone
where
    I: IntoIterator<Item = Option<String>>,
{
    let owner = chain.into_iter().flatten().next();
    DropZone {
        category_id: normalize_id(owner),
    }
}

/// Snapshot a completed drop.
///
/// The destination is always the reported target container, never the
/// dragged element's new position: a moved folder would otherwise find
/// itself as its nearest category.
pub fn read_gesture(end: &SortEnd, markers: &Markers) -> DragGesture {
    let dragged: Vec<DraggedItem> = end.items.iter().map(|el| classify(el, markers)).collect();
    let destination = read_drop_zone(&end.to, markers);
    gesture_from(dragged, || classify(&end.item, markers), destination)
}

/// The primary element is the first of the dragged sequence; the grabbed
/// element only stands in when the sequence is empty.
fn gesture_from<G>(dragged: Vec<DraggedItem>, grabbed: G, destination: DropZone) -> DragGesture
where
    G: FnOnce() -> DraggedItem,
{
    let primary = dragged.first().cloned().unwrap_or_else(grabbed);
    DragGesture {
        dragged,
        primary,
        destination,
    }
}
