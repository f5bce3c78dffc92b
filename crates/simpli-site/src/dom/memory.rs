//! In-memory [`Dom`] for native tests and headless runs.
//!
//! Elements live in an arena indexed by [`NodeId`]; `<body>` is always
//! node 0. Nodes detached by `set_text`/`set_inner_html` stay in the arena
//! but are no longer reachable from the body, so queries skip them.
//!
//! Markup passed to `set_inner_html` is stored verbatim rather than
//! parsed. `inner_html` returns it unchanged and `text_content` strips
//! tags from it without decoding entities.

use super::{Dom, Selector};
use crate::error::SiteError;
use crate::fragment::{Child, Fragment, escape_into};

/// Index of an element in a [`MemoryDom`].
pub type NodeId = usize;

const BODY: NodeId = 0;

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<Content>,
}

#[derive(Debug, Clone)]
enum Content {
    Element(NodeId),
    Text(String),
    Markup(String),
}

/// Arena-backed document.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<Element>,
    path: String,
    lang: Option<String>,
    scroll_log: Vec<NodeId>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Empty body at location `/`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Element {
                tag: "body".into(),
                attributes: Vec::new(),
                classes: Vec::new(),
                children: Vec::new(),
            }],
            path: "/".into(),
            lang: None,
            scroll_log: Vec::new(),
        }
    }

    /// Set the location path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set an attribute on `<body>` (e.g. `data-nav-dark`).
    #[must_use]
    pub fn with_body_attribute(mut self, name: &str, value: &str) -> Self {
        set_attr(&mut self.nodes[BODY].attributes, name, value);
        self
    }

    /// Append page-supplied content to `<body>`.
    pub fn push_content(&mut self, fragment: &Fragment) -> NodeId {
        let id = self.build(fragment);
        self.nodes[BODY].children.push(Content::Element(id));
        id
    }

    /// The body element.
    #[must_use]
    pub fn body(&self) -> NodeId {
        BODY
    }

    /// Current `lang` of the document element.
    #[must_use]
    pub fn document_lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Element children of `<body>`, in order.
    #[must_use]
    pub fn body_children(&self) -> Vec<NodeId> {
        self.element_children(BODY)
    }

    /// Element children of `node`, in order.
    #[must_use]
    pub fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes[node]
            .children
            .iter()
            .filter_map(|c| match c {
                Content::Element(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node].tag
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.nodes[node].classes
    }

    /// First element matching `selector`, in document order.
    #[must_use]
    pub fn first(&self, selector: &Selector) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    /// Concatenated text of the element and its descendants.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    /// Serialized children of the element.
    #[must_use]
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for child in &self.nodes[node].children {
            self.write_content(child, &mut out);
        }
        out
    }

    /// Serialized element including its own tag.
    #[must_use]
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_content(&Content::Element(node), &mut out);
        out
    }

    /// Elements passed to `scroll_into_view`, oldest first.
    #[must_use]
    pub fn scroll_log(&self) -> &[NodeId] {
        &self.scroll_log
    }

    fn build(&mut self, fragment: &Fragment) -> NodeId {
        let children = fragment
            .child_nodes()
            .iter()
            .map(|child| match child {
                Child::Element(el) => Content::Element(self.build(el)),
                Child::Text(text) => Content::Text(text.clone()),
            })
            .collect();
        self.nodes.push(Element {
            tag: fragment.tag().to_string(),
            attributes: fragment.attributes().to_vec(),
            classes: fragment.classes().to_vec(),
            children,
        });
        self.nodes.len() - 1
    }

    /// Reachable elements in document order, starting with `<body>`.
    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![BODY];
        while let Some(id) = stack.pop() {
            order.push(id);
            let children = self.element_children(id);
            stack.extend(children.into_iter().rev());
        }
        order
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        let el = &self.nodes[node];
        let has_attr = |name: &str| {
            (name == "class" && !el.classes.is_empty())
                || el.attributes.iter().any(|(n, _)| n == name)
        };
        match selector {
            Selector::Attribute(name) => has_attr(name.as_str()),
            Selector::AnyAttribute(names) => names.iter().any(|name| has_attr(name.as_str())),
            Selector::Class(class) => el.classes.iter().any(|c| c == class),
        }
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        for child in &self.nodes[node].children {
            match child {
                Content::Element(id) => self.collect_text(*id, out),
                Content::Text(text) => out.push_str(text),
                Content::Markup(html) => strip_tags(html, out),
            }
        }
    }

    fn write_content(&self, content: &Content, out: &mut String) {
        match content {
            Content::Text(text) => escape_into(out, text, false),
            Content::Markup(html) => out.push_str(html),
            Content::Element(id) => {
                let el = &self.nodes[*id];
                out.push('<');
                out.push_str(&el.tag);
                for (name, value) in &el.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(out, value, true);
                    out.push('"');
                }
                if !el.classes.is_empty() {
                    out.push_str(" class=\"");
                    escape_into(out, &el.classes.join(" "), true);
                    out.push('"');
                }
                out.push('>');
                for child in &el.children {
                    self.write_content(child, out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn location_path(&self) -> String {
        self.path.clone()
    }

    fn set_document_lang(&mut self, lang: &str) {
        self.lang = Some(lang.to_string());
    }

    fn body_attribute(&self, name: &str) -> Option<String> {
        self.attribute(&BODY, name)
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&id| self.matches(id, selector))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|&node| self.attribute(&node, "id").as_deref() == Some(id))
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let el = self.nodes.get(*node)?;
        if name == "class" {
            return (!el.classes.is_empty()).then(|| el.classes.join(" "));
        }
        el.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes
            .get(*node)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    fn set_class(&mut self, node: &NodeId, class: &str, on: bool) {
        let Some(el) = self.nodes.get_mut(*node) else {
            return;
        };
        let present = el.classes.iter().any(|c| c == class);
        if on && !present {
            el.classes.push(class.to_string());
        } else if !on && present {
            el.classes.retain(|c| c != class);
        }
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        if let Some(el) = self.nodes.get_mut(*node) {
            el.children = vec![Content::Text(text.to_string())];
        }
    }

    fn set_inner_html(&mut self, node: &NodeId, html: &str) {
        if let Some(el) = self.nodes.get_mut(*node) {
            el.children = vec![Content::Markup(html.to_string())];
        }
    }

    fn scroll_into_view(&mut self, node: &NodeId) {
        self.scroll_log.push(*node);
    }

    fn prepend_to_body(&mut self, fragment: &Fragment) -> Result<NodeId, SiteError> {
        let id = self.build(fragment);
        self.nodes[BODY].children.insert(0, Content::Element(id));
        Ok(id)
    }

    fn append_to_body(&mut self, fragment: &Fragment) -> Result<NodeId, SiteError> {
        Ok(self.push_content(fragment))
    }
}

fn set_attr(attributes: &mut Vec<(String, String)>, name: &str, value: &str) {
    match attributes.iter_mut().find(|(n, _)| n == name) {
        Some(slot) => slot.1 = value.to_string(),
        None => attributes.push((name.to_string(), value.to_string())),
    }
}

fn strip_tags(html: &str, out: &mut String) {
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> MemoryDom {
        let mut dom = MemoryDom::new().with_path("/apps.html");
        dom.push_content(
            &Fragment::new("section")
                .id("hero")
                .class("reveal")
                .child(Fragment::new("h1").attr("data-es", "Hola").text("Hola"))
                .child(Fragment::new("p").class("reveal").text("a < b")),
        );
        dom
    }

    #[test]
    fn query_in_document_order() {
        let dom = sample();
        let reveals = dom.query_all(&Selector::class("reveal"));
        assert_eq!(reveals.len(), 2);
        assert_eq!(dom.tag(reveals[0]), "section");
        assert_eq!(dom.tag(reveals[1]), "p");
    }

    #[test]
    fn prepend_goes_first() {
        let mut dom = sample();
        let nav = dom.prepend_to_body(&Fragment::new("nav")).unwrap();
        let footer = dom.append_to_body(&Fragment::new("footer")).unwrap();
        let children = dom.body_children();
        assert_eq!(children.first(), Some(&nav));
        assert_eq!(children.last(), Some(&footer));
    }

    #[test]
    fn element_by_id_and_attributes() {
        let dom = sample();
        let hero = dom.element_by_id("hero").unwrap();
        assert_eq!(dom.attribute(&hero, "class").as_deref(), Some("reveal"));
        assert_eq!(dom.attribute(&hero, "title"), None);
        assert!(dom.element_by_id("missing").is_none());
        assert_eq!(dom.location_path(), "/apps.html");
    }

    #[test]
    fn text_and_markup() {
        let mut dom = sample();
        let h1 = dom.first(&Selector::attribute("data-es")).unwrap();
        dom.set_inner_html(&h1, "Hola <em>mundo</em>");
        assert_eq!(dom.inner_html(h1), "Hola <em>mundo</em>");
        assert_eq!(dom.text_content(h1), "Hola mundo");

        dom.set_text(&h1, "<b>plain</b>");
        assert_eq!(dom.inner_html(h1), "&lt;b&gt;plain&lt;/b&gt;");
        assert_eq!(dom.text_content(h1), "<b>plain</b>");
    }

    #[test]
    fn set_class_is_idempotent() {
        let mut dom = sample();
        let hero = dom.element_by_id("hero").unwrap();
        dom.set_class(&hero, "visible", true);
        dom.set_class(&hero, "visible", true);
        assert_eq!(dom.classes(hero), ["reveal", "visible"]);
        dom.set_class(&hero, "visible", false);
        dom.set_class(&hero, "visible", false);
        assert_eq!(dom.classes(hero), ["reveal"]);
    }

    #[test]
    fn detached_nodes_are_not_queried() {
        let mut dom = sample();
        let hero = dom.element_by_id("hero").unwrap();
        dom.set_text(&hero, "gone");
        assert!(dom.first(&Selector::attribute("data-es")).is_none());
        assert_eq!(dom.query_all(&Selector::class("reveal")), vec![hero]);
    }

    #[test]
    fn body_attribute_and_lang() {
        let mut dom = MemoryDom::new().with_body_attribute("data-nav-dark", "true");
        assert_eq!(dom.body_attribute("data-nav-dark").as_deref(), Some("true"));
        assert_eq!(dom.document_lang(), None);
        dom.set_document_lang("en");
        assert_eq!(dom.document_lang(), Some("en"));
    }
}
