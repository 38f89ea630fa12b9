//! Organizer Configuration
//!
//! Endpoints, DOM markers, drag options and user-facing texts. Every field has
//! a default matching the server-rendered markup; a page may override any of
//! them with a JSON `<script id="organizer-config">` element.

use serde::Deserialize;
use sortable_dnd::SortableOptions;

use crate::models::MoveKind;

/// Id of the optional JSON config element
pub const CONFIG_ELEMENT_ID: &str = "organizer-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizerConfig {
    pub endpoints: Endpoints,
    pub markers: Markers,
    pub sortable: SortableSettings,
    pub messages: Messages,
    pub move_ordering: MoveOrdering,
    pub log_level: String,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            markers: Markers::default(),
            sortable: SortableSettings::default(),
            messages: Messages::default(),
            move_ordering: MoveOrdering::Concurrent,
            log_level: "info".to_string(),
        }
    }
}

impl OrganizerConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn endpoint(&self, kind: MoveKind) -> &str {
        match kind {
            MoveKind::Products => &self.endpoints.products_move,
            MoveKind::Category => &self.endpoints.category_move,
        }
    }

    pub fn failure_message(&self, kind: MoveKind) -> &str {
        match kind {
            MoveKind::Products => &self.messages.products_move_failed,
            MoveKind::Category => &self.messages.category_move_failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoints {
    pub products_move: String,
    pub category_move: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            products_move: "/admin/api/products/move".to_string(),
            category_move: "/admin/api/category/move".to_string(),
        }
    }
}

/// Ids, classes and attributes the server markup uses
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Markers {
    /// Element id of the admin organization view
    pub organization_id: String,
    pub drop_zone_selector: String,
    pub product_item_class: String,
    pub category_folder_class: String,
    pub product_id_attr: String,
    pub category_id_attr: String,
    pub admin_search_id: String,
    pub user_search_id: String,
    pub product_row_selector: String,
    pub group_selector: String,
    pub group_body_selector: String,
    /// Class present on an expanded group body
    pub expanded_class: String,
    /// Class present while a body is animating open
    pub opening_class: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            organization_id: "organization".to_string(),
            drop_zone_selector: ".drop-zone".to_string(),
            product_item_class: "product-item".to_string(),
            category_folder_class: "category-folder".to_string(),
            product_id_attr: "data-product-id".to_string(),
            category_id_attr: "data-category-id".to_string(),
            admin_search_id: "adminProductSearch".to_string(),
            user_search_id: "userProductSearch".to_string(),
            product_row_selector: ".product-row".to_string(),
            group_selector: ".accordion-item".to_string(),
            group_body_selector: ".accordion-collapse".to_string(),
            expanded_class: "show".to_string(),
            opening_class: "collapsing".to_string(),
        }
    }
}

impl Markers {
    /// Product entries filtered by the admin search
    pub fn admin_entry_selector(&self) -> String {
        format!("#{} .{}", self.organization_id, self.product_item_class)
    }

    /// A body that is open or already opening must not be shown again:
    /// a second show restarts the transition from zero height.
    pub fn body_open<F>(&self, has_class: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        has_class(&self.expanded_class) || has_class(&self.opening_class)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortableSettings {
    pub group: String,
    pub animation_ms: u32,
    pub multi_drag: bool,
    pub selected_class: String,
    pub handle: Option<String>,
}

impl Default for SortableSettings {
    fn default() -> Self {
        Self {
            group: "shared-items".to_string(),
            animation_ms: 150,
            multi_drag: true,
            selected_class: "sortable-selected".to_string(),
            handle: Some(".draggable-item, .folder-header".to_string()),
        }
    }
}

impl From<&SortableSettings> for SortableOptions {
    fn from(s: &SortableSettings) -> Self {
        SortableOptions {
            group: s.group.clone(),
            animation: s.animation_ms,
            multi_drag: s.multi_drag,
            selected_class: s.selected_class.clone(),
            handle: s.handle.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Messages {
    pub products_move_failed: String,
    pub category_move_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            products_move_failed: "Fehler beim Verschieben der Produkte.".to_string(),
            category_move_failed: "Fehler beim Verschieben des Ordners.".to_string(),
        }
    }
}

/// How overlapping move requests are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveOrdering {
    /// Fire immediately; completions may arrive in any order
    #[default]
    Concurrent,
    /// One request in flight per target category
    Serialized,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_markup() {
        let cfg = OrganizerConfig::default();
        assert_eq!(cfg.endpoint(MoveKind::Products), "/admin/api/products/move");
        assert_eq!(cfg.endpoint(MoveKind::Category), "/admin/api/category/move");
        assert_eq!(cfg.markers.admin_entry_selector(), "#organization .product-item");
        assert_eq!(cfg.move_ordering, MoveOrdering::Concurrent);
    }

    #[test]
    fn test_body_open_counts_opening_transition() {
        let markers = Markers::default();
        assert!(markers.body_open(|c| c == "show"));
        assert!(markers.body_open(|c| c == "collapsing"));
        assert!(!markers.body_open(|c| c == "collapse"));
        assert!(!markers.body_open(|_| false));
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(OrganizerConfig::from_json("{}").unwrap(), OrganizerConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let cfg = OrganizerConfig::from_json(
            r#"{
                "endpoints": { "categoryMove": "/api/v2/category/move" },
                "moveOrdering": "serialized",
                "messages": { "productsMoveFailed": "Move failed." },
                "logLevel": "debug"
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.endpoints.products_move, "/admin/api/products/move");
        assert_eq!(cfg.endpoints.category_move, "/api/v2/category/move");
        assert_eq!(cfg.move_ordering, MoveOrdering::Serialized);
        assert_eq!(cfg.failure_message(MoveKind::Products), "Move failed.");
        assert_eq!(cfg.failure_message(MoveKind::Category), "Fehler beim Verschieben des Ordners.");
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(OrganizerConfig::from_json(r#"{"moveOrdering": "sometimes"}"#).is_err());
        assert!(OrganizerConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_sortable_options_from_settings() {
        let opts = SortableOptions::from(&SortableSettings::default());
        assert_eq!(opts.group, "shared-items");
        assert_eq!(opts.animation, 150);
        assert!(opts.multi_drag);
        assert_eq!(opts.handle.as_deref(), Some(".draggable-item, .folder-header"));
    }
}
