//! Move Reconciliation
//!
//! Turns a completed drag gesture into at most one move request.

use crate::models::{CategoryMove, DragGesture, DraggedItem, MoveRequest, ProductsMove};

/// Empty identifier attributes mean "no identifier"
pub fn normalize_id(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Classify a gesture and build the request it implies.
///
/// A product batch wins over the primary element; a folder only moves alone.
/// Returns None when the gesture is neither kind or nothing valid remains.
pub fn reconcile(gesture: &DragGesture) -> Option<MoveRequest> {
    match gesture.dragged.first() {
        Some(DraggedItem::Product { .. }) => products_move(gesture),
        _ => match &gesture.primary {
            DraggedItem::Folder { category_id } => category_move(category_id.as_deref(), gesture),
            _ => {
                log::debug!("[DND] Ignoring drop of unrecognized element");
                None
            }
        },
    }
}

fn products_move(gesture: &DragGesture) -> Option<MoveRequest> {
    let mut product_ids = Vec::with_capacity(gesture.dragged.len());
    for (i, item) in gesture.dragged.iter().enumerate() {
        match item {
            DraggedItem::Product { product_id: Some(id) } => product_ids.push(id.clone()),
            other => log::warn!("[DND] Skipping dragged element {} without product id: {:?}", i, other),
        }
    }

    if product_ids.is_empty() {
        log::warn!("[DND] Product drop carried no product ids, not sending");
        return None;
    }

    Some(MoveRequest::Products(ProductsMove {
        product_ids,
        new_category_id: gesture.destination.category_id.clone(),
    }))
}

fn category_move(category_id: Option<&str>, gesture: &DragGesture) -> Option<MoveRequest> {
    let Some(category_id) = category_id else {
        log::warn!("[DND] Folder drop without category id, not sending");
        return None;
    };

    let new_parent_id = gesture.destination.category_id.clone();
    if new_parent_id.as_deref() == Some(category_id) {
        log::warn!("[DND] Folder {} resolved as its own parent, not sending", category_id);
        return None;
    }

    Some(MoveRequest::Category(CategoryMove {
        category_id: category_id.to_string(),
        new_parent_id,
    }))
}
