//! Page Handlers
//!
//! Each handler attaches to its own subtree and is skipped when that subtree
//! is not on the page.

pub mod admin_search;
pub mod organization;
pub mod user_search;

/// Events that recompute a search filter
pub const KEYSTROKE_EVENTS: &[&str] = &["keyup", "input"];
