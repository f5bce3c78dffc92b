//! One-way reveal of `.reveal` elements as they scroll into view.

use tracing::trace;

use crate::config::SiteConfig;
use crate::dom::{Dom, Selector};

pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";

/// Observer settings handed to the host's intersection observer.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl RevealOptions {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            root_margin: config.reveal_root_margin.clone(),
        }
    }
}

/// Reacts to intersection reports. Elements only ever gain `visible`.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: usize,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements the host should observe.
    pub fn targets<D: Dom>(dom: &D) -> Vec<D::Node> {
        dom.query_all(&Selector::class(REVEAL_CLASS))
    }

    /// Apply a batch of `(element, is_intersecting)` reports. Returns how
    /// many elements became visible in this batch.
    pub fn on_entries<D, I>(&mut self, dom: &mut D, entries: I) -> usize
    where
        D: Dom,
        I: IntoIterator<Item = (D::Node, bool)>,
    {
        let mut newly = 0;
        for (node, intersecting) in entries {
            if !intersecting || dom.has_class(&node, VISIBLE_CLASS) {
                continue;
            }
            dom.set_class(&node, VISIBLE_CLASS, true);
            newly += 1;
        }
        if newly > 0 {
            self.revealed += newly;
            trace!(newly, total = self.revealed, "revealed");
        }
        newly
    }

    /// Total elements revealed so far.
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::fragment::Fragment;

    #[test]
    fn options_from_defaults() {
        let opts = RevealOptions::from_config(&SiteConfig::default());
        assert_eq!(opts.threshold, 0.1);
        assert_eq!(opts.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn reveal_is_one_way() {
        let mut dom = MemoryDom::new();
        let a = dom.push_content(&Fragment::new("div").class(REVEAL_CLASS));
        let b = dom.push_content(&Fragment::new("div").class(REVEAL_CLASS));
        assert_eq!(RevealTracker::targets(&dom), vec![a, b]);

        let mut tracker = RevealTracker::new();
        assert_eq!(tracker.on_entries(&mut dom, [(a, true), (b, false)]), 1);
        assert!(dom.has_class(&a, VISIBLE_CLASS));
        assert!(!dom.has_class(&b, VISIBLE_CLASS));

        assert_eq!(tracker.on_entries(&mut dom, [(a, false)]), 0);
        assert!(dom.has_class(&a, VISIBLE_CLASS));

        assert_eq!(tracker.on_entries(&mut dom, [(a, true), (b, true)]), 1);
        assert_eq!(tracker.revealed(), 2);
    }
}
