//! Output sub-view for code cells

use super::node::Node;
use super::OUTPUT_CLASS;
use crate::model::OutputModel;
use crate::util::escape_html;

#[derive(Debug, Clone)]
pub struct OutputView {
    model: OutputModel,
}

impl OutputView {
    pub fn new(model: OutputModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &OutputModel {
        &self.model
    }

    /// One `<pre>` per output item, in order
    pub fn node(&self) -> Node {
        let mut node = Node::new("div").with_class(OUTPUT_CLASS);
        for item in self.model.items() {
            let mut child = Node::new("pre")
                .with_class("jp-OutputArea-output")
                .with_attribute("data-output-type", &item.output_type);
            child.set_inner_html(escape_html(&item.text));
            node.push_child(child);
        }
        node
    }
}
