#![forbid(unsafe_code)]

//! [`Dom`] over the live browser document.

use simpli_site::{Child, Dom, Fragment, Selector, SiteError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// Handle to the page's window and document. Cheap to clone.
#[derive(Debug, Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// The current window's document, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn materialize(&self, fragment: &Fragment) -> Result<Element, SiteError> {
        let el = self
            .document
            .create_element(fragment.tag())
            .map_err(js_error)?;
        for (name, value) in fragment.attributes() {
            el.set_attribute(name, value).map_err(js_error)?;
        }
        if !fragment.classes().is_empty() {
            el.set_class_name(&fragment.classes().join(" "));
        }
        for child in fragment.child_nodes() {
            match child {
                Child::Element(inner) => {
                    el.append_child(&self.materialize(inner)?)
                        .map_err(js_error)?;
                }
                Child::Text(text) => {
                    el.append_child(&self.document.create_text_node(text))
                        .map_err(js_error)?;
                }
            }
        }
        Ok(el)
    }

    fn body(&self) -> Result<Element, SiteError> {
        self.document
            .body()
            .map(Element::from)
            .ok_or_else(|| SiteError::Dom("document has no body".into()))
    }
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn js_error(value: JsValue) -> SiteError {
    SiteError::Dom(js_message(&value))
}

impl Dom for WebDom {
    type Node = Element;

    fn location_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn set_document_lang(&mut self, lang: &str) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("lang", lang);
        }
    }

    fn body_attribute(&self, name: &str) -> Option<String> {
        self.document.body()?.get_attribute(name)
    }

    fn query_all(&self, selector: &Selector) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&selector.css()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&mut self, node: &Element, class: &str, on: bool) {
        let _ = node.class_list().toggle_with_force(class, on);
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_inner_html(&mut self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn scroll_into_view(&mut self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn prepend_to_body(&mut self, fragment: &Fragment) -> Result<Element, SiteError> {
        let body = self.body()?;
        let el = self.materialize(fragment)?;
        body.prepend_with_node_1(&el).map_err(js_error)?;
        Ok(el)
    }

    fn append_to_body(&mut self, fragment: &Fragment) -> Result<Element, SiteError> {
        let body = self.body()?;
        let el = self.materialize(fragment)?;
        body.append_child(&el).map_err(js_error)?;
        Ok(el)
    }
}
