//! Rendered sub-view for markdown cells, plus the typesetting hook

use super::node::Node;
use super::RENDERER_CLASS;

/// Post-processes a freshly rendered container (e.g. math typesetting)
///
/// Called once per render, after the HTML has been placed. Fire and forget.
pub trait Typesetter {
    fn typeset(&self, node: &mut Node);
}

impl<F> Typesetter for F
where
    F: Fn(&mut Node),
{
    fn typeset(&self, node: &mut Node) {
        self(node)
    }
}

/// Leaves rendered content as it is
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTypesetter;

impl Typesetter for NoopTypesetter {
    fn typeset(&self, _node: &mut Node) {}
}

/// Holds the HTML produced by the last render
#[derive(Debug, Clone)]
pub struct RenderedView {
    node: Node,
    revision: u64,
}

impl RenderedView {
    pub fn new() -> Self {
        Self {
            node: Node::new("div").with_class(RENDERER_CLASS),
            revision: 0,
        }
    }

    pub fn html(&self) -> &str {
        self.node.inner_html()
    }

    /// Number of times the content has been replaced
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub(crate) fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    pub(crate) fn replace_content(&mut self, html: String) {
        self.node.set_inner_html(html);
        self.revision += 1;
    }
}

impl Default for RenderedView {
    fn default() -> Self {
        Self::new()
    }
}
