//! Smooth scrolling for same-page `#fragment` links.

use crate::dom::Dom;

/// What a click on a link with this `href` should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Not a same-page link; let the browser navigate.
    NotAnchor,
    /// Suppress navigation and scroll to the element with this id.
    ScrollTo(String),
    /// Suppress navigation and do nothing else (`href="#"`).
    Suppress,
}

impl AnchorAction {
    /// Whether the browser's default navigation must be prevented.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::NotAnchor)
    }
}

/// Classify an `href` attribute value.
#[must_use]
pub fn classify(href: &str) -> AnchorAction {
    match href.strip_prefix('#') {
        None => AnchorAction::NotAnchor,
        Some("") => AnchorAction::Suppress,
        Some(id) => AnchorAction::ScrollTo(id.to_string()),
    }
}

/// Handle a click on a link with `href`: scroll to the target if it
/// exists. Returns the action so the host can prevent default navigation.
pub fn follow<D: Dom>(dom: &mut D, href: &str) -> AnchorAction {
    let action = classify(href);
    if let AnchorAction::ScrollTo(id) = &action {
        if let Some(target) = dom.element_by_id(id) {
            dom.scroll_into_view(&target);
        }
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::fragment::Fragment;

    #[test]
    fn classification() {
        assert_eq!(classify("#about"), AnchorAction::ScrollTo("about".into()));
        assert_eq!(classify("#"), AnchorAction::Suppress);
        assert_eq!(classify("apps.html"), AnchorAction::NotAnchor);
        assert_eq!(classify("apps.html#top"), AnchorAction::NotAnchor);
        assert_eq!(classify(""), AnchorAction::NotAnchor);
    }

    #[test]
    fn prevents_default_for_fragments_only() {
        assert!(classify("#x").prevents_default());
        assert!(classify("#").prevents_default());
        assert!(!classify("index.html").prevents_default());
    }

    #[test]
    fn follow_scrolls_to_existing_target() {
        let mut dom = MemoryDom::new();
        let about = dom.push_content(&Fragment::new("section").id("about"));
        follow(&mut dom, "#about");
        assert_eq!(dom.scroll_log(), [about]);
    }

    #[test]
    fn follow_missing_target_is_a_no_op() {
        let mut dom = MemoryDom::new();
        let action = follow(&mut dom, "#nowhere");
        assert!(action.prevents_default());
        assert!(dom.scroll_log().is_empty());
    }
}
