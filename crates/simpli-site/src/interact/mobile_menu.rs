//! Mobile menu open/close.
//!
//! The menu button's `open` class and the link list's `mobile-open` class
//! always move together.

use crate::dom::Dom;
use crate::nav::{LINKS_ID, MENU_BUTTON_ID};

pub const OPEN_CLASS: &str = "open";
pub const MOBILE_OPEN_CLASS: &str = "mobile-open";

fn set_open<D: Dom>(dom: &mut D, open: bool) {
    if let Some(button) = dom.element_by_id(MENU_BUTTON_ID) {
        dom.set_class(&button, OPEN_CLASS, open);
    }
    if let Some(links) = dom.element_by_id(LINKS_ID) {
        dom.set_class(&links, MOBILE_OPEN_CLASS, open);
    }
}

/// Whether the menu is open, judged by the button (or the list if the
/// button is missing).
pub fn is_open<D: Dom>(dom: &D) -> bool {
    if let Some(button) = dom.element_by_id(MENU_BUTTON_ID) {
        return dom.has_class(&button, OPEN_CLASS);
    }
    dom.element_by_id(LINKS_ID)
        .is_some_and(|links| dom.has_class(&links, MOBILE_OPEN_CLASS))
}

/// Flip the menu. Returns the new state.
pub fn toggle<D: Dom>(dom: &mut D) -> bool {
    let open = !is_open(dom);
    set_open(dom, open);
    open
}

/// Force the menu closed.
pub fn close<D: Dom>(dom: &mut D) {
    set_open(dom, false);
}

/// A click closes the menu when it lands inside a nav link but not inside
/// the locale toggle.
#[must_use]
pub fn should_close(in_nav_link: bool, in_lang_toggle: bool) -> bool {
    in_nav_link && !in_lang_toggle
}
