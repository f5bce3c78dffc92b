//! Host-independent element trees.
//!
//! Renderers describe markup as a [`Fragment`]; a [`Dom`](crate::Dom)
//! backend turns it into real nodes. Building trees instead of HTML
//! strings keeps text out of the markup parser.

/// An element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<Child>,
}

/// Child of a [`Fragment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Element(Fragment),
    Text(String),
}

impl Fragment {
    /// New element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a class only when `on` is true.
    #[must_use]
    pub fn class_if(self, on: bool, class: impl Into<String>) -> Self {
        if on { self.class(class) } else { self }
    }

    /// Set an attribute, replacing an earlier value with the same name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn child(mut self, child: Fragment) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Append several child elements.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Fragment>) -> Self {
        self.children
            .extend(children.into_iter().map(Child::Element));
        self
    }

    /// Append a text node.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes other than `class`, in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn child_nodes(&self) -> &[Child] {
        &self.children
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize to HTML. Text and attribute values are escaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            push_attr(out, name, value);
        }
        if !self.classes.is_empty() {
            push_attr(out, "class", &self.classes.join(" "));
        }
        out.push('>');
        for child in &self.children {
            match child {
                Child::Element(el) => el.write_html(out),
                Child::Text(text) => escape_into(out, text, false),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value, true);
    out.push('"');
}

pub(crate) fn escape_into(out: &mut String, text: &str, in_attr: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_attributes_then_class() {
        let el = Fragment::new("a")
            .class("nav-logo")
            .attr("href", "index.html")
            .text("Simpli")
            .child(Fragment::new("span").class("dot"));
        assert_eq!(
            el.to_html(),
            r#"<a href="index.html" class="nav-logo">Simpli<span class="dot"></span></a>"#
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let el = Fragment::new("p")
            .attr("title", r#"a "b" & c"#)
            .text("<script>");
        assert_eq!(
            el.to_html(),
            r#"<p title="a &quot;b&quot; &amp; c">&lt;script&gt;</p>"#
        );
    }

    #[test]
    fn attr_replaces_existing() {
        let el = Fragment::new("a").attr("href", "#").attr("href", "apps.html");
        assert_eq!(el.attributes().len(), 1);
        assert_eq!(el.get_attr("href"), Some("apps.html"));
    }

    #[test]
    fn class_if_skips_false() {
        let el = Fragment::new("a").class_if(false, "active");
        assert!(el.classes().is_empty());
        let el = el.class_if(true, "active");
        assert_eq!(el.classes(), ["active"]);
    }
}
