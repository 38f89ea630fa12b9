//! Search Filtering
//!
//! Case-insensitive substring matching and the group expansion plan used by
//! the product search fields.

/// Lowercased search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Empty term matches everything
    pub fn matches(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.0)
    }
}

/// Visibility of each entry, in input order
pub fn visibility<S: AsRef<str>>(term: &SearchTerm, texts: &[S]) -> Vec<bool> {
    texts.iter().map(|t| term.matches(t.as_ref())).collect()
}

/// Collapsible group as seen right after the visibility pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupSnapshot {
    /// Indexes into the row list of rows inside this group
    pub rows: Vec<usize>,
    pub has_body: bool,
    /// Open or already opening
    pub expanded: bool,
}

/// Indexes of the groups whose body must be forced open.
///
/// Empty terms never expand anything. Already expanded groups are left alone
/// so expansion is never a toggle.
pub fn groups_to_expand(term: &SearchTerm, visible: &[bool], groups: &[GroupSnapshot]) -> Vec<usize> {
    if term.is_empty() {
        return Vec::new();
    }
    groups
        .iter()
        .enumerate()
        .filter(|(_, g)| g.has_body && !g.expanded)
        .filter(|(_, g)| g.rows.iter().any(|&r| visible.get(r).copied().unwrap_or(false)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn group(rows: &[usize], expanded: bool) -> GroupSnapshot {
        GroupSnapshot { rows: rows.to_vec(), has_body: true, expanded }
    }

    #[test]
    fn test_matches_case_insensitive() {
        let term = SearchTerm::new("ShOe");
        assert!(term.matches("Red Shoe"));
        assert!(term.matches("SHOELACE"));
        assert!(!term.matches("Blue Hat"));
    }

    #[test]
    fn test_empty_term_matches_all() {
        let term = SearchTerm::new("");
        assert!(term.matches(""));
        assert!(term.matches("anything"));
    }

    #[test]
    fn test_admin_search_shoe() {
        let term = SearchTerm::new("shoe");
        assert_eq!(visibility(&term, &["Red Shoe", "Blue Hat"]), vec![true, false]);
    }

    #[test]
    fn test_clearing_shows_everything() {
        let entries = ["abc one", "two", "xABCx"];
        assert_eq!(visibility(&SearchTerm::new("abc"), &entries), vec![true, false, true]);
        assert_eq!(visibility(&SearchTerm::new(""), &entries), vec![true, true, true]);
    }

    #[test]
    fn test_collapsed_group_with_match_expands() {
        let term = SearchTerm::new("wid");
        let visible = visibility(&term, &["Widget A", "Gadget B"]);
        assert_eq!(visible, vec![true, false]);

        let groups = vec![group(&[0, 1], false)];
        assert_eq!(groups_to_expand(&term, &visible, &groups), vec![0]);
    }

    #[test]
    fn test_no_match_does_not_expand() {
        let term = SearchTerm::new("zzz");
        let visible = visibility(&term, &["Widget A", "Gadget B"]);
        let groups = vec![group(&[0], false), group(&[1], true)];
        assert!(groups_to_expand(&term, &visible, &groups).is_empty());
    }

    #[test]
    fn test_expanded_group_is_not_toggled() {
        let term = SearchTerm::new("wid");
        let visible = vec![true];
        assert!(groups_to_expand(&term, &visible, &[group(&[0], true)]).is_empty());
    }

    #[test]
    fn test_repeated_pass_does_not_reopen() {
        // keyup and input both fire for one keystroke
        let term = SearchTerm::new("wid");
        let visible = visibility(&term, &["Widget A", "Gadget B"]);
        let mut groups = vec![group(&[0, 1], false)];

        assert_eq!(groups_to_expand(&term, &visible, &groups), vec![0]);
        groups[0].expanded = true;
        assert!(groups_to_expand(&term, &visible, &groups).is_empty());
    }

    #[test]
    fn test_empty_term_never_expands() {
        let term = SearchTerm::new("");
        let visible = vec![true, true];
        assert!(groups_to_expand(&term, &visible, &[group(&[0, 1], false)]).is_empty());
    }

    #[test]
    fn test_group_without_body_is_skipped() {
        let term = SearchTerm::new("a");
        let groups = vec![GroupSnapshot { rows: vec![0], has_body: false, expanded: false }];
        assert!(groups_to_expand(&term, &[true], &groups).is_empty());
    }

    #[test]
    fn test_only_groups_with_visible_rows_expand() {
        let term = SearchTerm::new("hat");
        let visible = visibility(&term, &["Red Shoe", "Blue Hat", "Sun Hat", "Sock"]);
        let groups = vec![group(&[0, 3], false), group(&[1], false), group(&[2, 3], false), group(&[], false)];
        assert_eq!(groups_to_expand(&term, &visible, &groups), vec![1, 2]);
    }
}
