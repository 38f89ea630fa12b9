//! Frontend Models
//!
//! Typed snapshots of the organization DOM and the move payloads sent to the
//! backend. Nothing here touches the DOM.

use serde::{Deserialize, Serialize};

/// A dragged element, classified once at the DOM boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraggedItem {
    Product { product_id: Option<String> },
    Folder { category_id: Option<String> },
    /// Carries neither marker
    Unrecognized,
}

/// Destination container of a drop
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropZone {
    /// Nearest enclosing category (None = root)
    pub category_id: Option<String>,
}

impl DropZone {
    pub fn root() -> Self {
        Self { category_id: None }
    }

    pub fn in_category(id: &str) -> Self {
        Self { category_id: Some(id.to_string()) }
    }
}

/// Everything the reconciler needs from one completed drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture {
    /// Every dragged element in order
    pub dragged: Vec<DraggedItem>,
    /// The element the pointer grabbed
    pub primary: DraggedItem,
    pub destination: DropZone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsMove {
    pub product_ids: Vec<String>,
    pub new_category_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMove {
    pub category_id: String,
    pub new_parent_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Products,
    Category,
}

/// Normalized payload for one completed relocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRequest {
    Products(ProductsMove),
    Category(CategoryMove),
}

impl MoveRequest {
    pub fn kind(&self) -> MoveKind {
        match self {
            MoveRequest::Products(_) => MoveKind::Products,
            MoveRequest::Category(_) => MoveKind::Category,
        }
    }

    /// Category the moved entities land in (None = root)
    pub fn target(&self) -> Option<&str> {
        match self {
            MoveRequest::Products(m) => m.new_category_id.as_deref(),
            MoveRequest::Category(m) => m.new_parent_id.as_deref(),
        }
    }

    /// JSON request body
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            MoveRequest::Products(m) => serde_json::to_string(m),
            MoveRequest::Category(m) => serde_json::to_string(m),
        }
    }
}

/// Optional JSON body returned by the move endpoints
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MoveResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_products_move_json_shape() {
        let req = MoveRequest::Products(ProductsMove {
            product_ids: vec!["p1".to_string(), "p2".to_string()],
            new_category_id: Some("cat-5".to_string()),
        });
        assert_eq!(
            req.to_json().unwrap(),
            r#"{"productIds":["p1","p2"],"newCategoryId":"cat-5"}"#
        );
    }

    #[test]
    fn test_category_move_root_serializes_null() {
        let req = MoveRequest::Category(CategoryMove {
            category_id: "cat-9".to_string(),
            new_parent_id: None,
        });
        assert_eq!(req.to_json().unwrap(), r#"{"categoryId":"cat-9","newParentId":null}"#);
        assert_eq!(req.kind(), MoveKind::Category);
        assert_eq!(req.target(), None);
    }

    #[test]
    fn test_move_response_tolerates_partial_body() {
        let full: MoveResponse =
            serde_json::from_str(r#"{"success":false,"message":"Keine Produkte ausgewählt."}"#).unwrap();
        assert_eq!(full.message.as_deref(), Some("Keine Produkte ausgewählt."));

        let bare: MoveResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(bare, MoveResponse { message: None });
    }
}
