//! Nav shadow once the page has scrolled.

use crate::dom::Dom;
use crate::nav::NAV_ID;

pub const SCROLLED_CLASS: &str = "scrolled";

/// Whether a vertical offset counts as scrolled. Strictly greater than.
#[must_use]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Set or clear the nav's `scrolled` class for `scroll_y`. No-op without a nav.
pub fn apply<D: Dom>(dom: &mut D, scroll_y: f64, threshold: f64) {
    if let Some(nav) = dom.element_by_id(NAV_ID) {
        dom.set_class(&nav, SCROLLED_CLASS, is_scrolled(scroll_y, threshold));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
        assert!(is_scrolled(51.0, 50.0));
    }

    proptest! {
        #[test]
        fn monotone_in_offset(a in 0.0f64..10_000.0, b in 0.0f64..10_000.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            if is_scrolled(lo, 50.0) {
                prop_assert!(is_scrolled(hi, 50.0));
            }
        }
    }
}
