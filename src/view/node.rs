//! Minimal DOM-like element tree
//!
//! Views describe their visible state as a [`Node`]: a tag, an ordered
//! class list, raw inner HTML and child nodes. CSS classes are the contract
//! with whatever finally paints the tree.

use crate::util::escape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: &'static str,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    inner_html: String,
    children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            inner_html: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add or remove `class`; returns whether the class list changed
    pub fn toggle_class(&mut self, class: &str, on: bool) -> bool {
        let present = self.has_class(class);
        match (present, on) {
            (false, true) => self.add_class(class),
            (true, false) => self.remove_class(class),
            _ => return false,
        }
        true
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replace the content; children are serialized after it
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Serialize the tree
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_html(&self.classes.join(" ")));
            out.push('"');
        }
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        out.push_str(&self.inner_html);
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_class() {
        let mut node = Node::new("div");
        assert!(node.toggle_class("a", true));
        assert!(!node.toggle_class("a", true));
        assert!(node.has_class("a"));
        assert!(node.toggle_class("a", false));
        assert!(!node.has_class("a"));
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let node = Node::new("div").with_class("x").with_class("x");
        assert_eq!(node.classes().count(), 1);
    }

    #[test]
    fn test_to_html() {
        let mut root = Node::new("div")
            .with_class("cell")
            .with_attribute("data-kind", "code");
        let mut child = Node::new("pre");
        child.set_inner_html("a &amp; b");
        root.push_child(child);

        assert_eq!(
            root.to_html(),
            r#"<div class="cell" data-kind="code"><pre>a &amp; b</pre></div>"#
        );
    }
}
