//! The document seam.
//!
//! [`Dom`] is the narrow slice of the browser document the site needs.
//! The wasm crate implements it over `web_sys`; [`MemoryDom`] implements it
//! over an arena so the whole runtime can be exercised natively.

mod memory;

pub use memory::{MemoryDom, NodeId};

use crate::error::SiteError;
use crate::fragment::Fragment;

/// Element queries used by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Elements carrying the attribute (`[name]`).
    Attribute(String),
    /// Elements carrying any of the attributes (`[a],[b]`).
    AnyAttribute(Vec<String>),
    /// Elements with the class (`.name`).
    Class(String),
}

impl Selector {
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::Attribute(name.into())
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// CSS selector text for `querySelectorAll`.
    #[must_use]
    pub fn css(&self) -> String {
        match self {
            Self::Attribute(name) => format!("[{name}]"),
            Self::AnyAttribute(names) => names
                .iter()
                .map(|name| format!("[{name}]"))
                .collect::<Vec<_>>()
                .join(","),
            Self::Class(name) => format!(".{name}"),
        }
    }
}

/// Document operations the site runtime performs.
///
/// Lookups that find nothing return `None` or an empty list; callers treat
/// that as "nothing to do". Only inserting rendered fragments can fail.
pub trait Dom {
    /// Handle to an element. Cheap to clone.
    type Node: Clone;

    /// Path component of the current location (`/apps.html`).
    fn location_path(&self) -> String;

    /// Set the `lang` attribute of the document element.
    fn set_document_lang(&mut self, lang: &str);

    /// Read an attribute from `<body>`.
    fn body_attribute(&self, name: &str) -> Option<String>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Add (`on`) or remove a class.
    fn set_class(&mut self, node: &Self::Node, class: &str, on: bool);

    /// Replace the element's children with a single text node.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Replace the element's children by parsing `html` as markup.
    fn set_inner_html(&mut self, node: &Self::Node, html: &str);

    /// Smoothly scroll so the element's top aligns with the viewport top.
    fn scroll_into_view(&mut self, node: &Self::Node);

    /// Insert `fragment` as the first child of `<body>`.
    fn prepend_to_body(&mut self, fragment: &Fragment) -> Result<Self::Node, SiteError>;

    /// Insert `fragment` as the last child of `<body>`.
    fn append_to_body(&mut self, fragment: &Fragment) -> Result<Self::Node, SiteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_text() {
        assert_eq!(Selector::attribute("data-i18n").css(), "[data-i18n]");
        assert_eq!(Selector::class("lang-btn").css(), ".lang-btn");
        assert_eq!(
            Selector::AnyAttribute(vec!["data-es".into(), "data-en".into()]).css(),
            "[data-es],[data-en]"
        );
    }
}
