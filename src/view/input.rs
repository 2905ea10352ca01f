//! Input sub-view: wraps the text editor widget for a cell's input model

use std::fmt;

use super::node::Node;
use super::INPUT_CLASS;
use crate::model::InputModel;
use crate::util::escape_html;

/// The text editing widget hosted by an input sub-view
///
/// Editing itself happens elsewhere; the view only needs to hand out
/// keyboard focus and choose the text mode.
pub trait EditorWidget {
    fn focus(&mut self);
    fn has_focus(&self) -> bool;
    fn set_mode(&mut self, mode: &str);
    fn mode(&self) -> &str;
}

/// Creates one editor per input sub-view
pub trait EditorFactory {
    fn create(&self, input: &InputModel) -> Box<dyn EditorWidget>;
}

impl<F> EditorFactory for F
where
    F: Fn(&InputModel) -> Box<dyn EditorWidget>,
{
    fn create(&self, input: &InputModel) -> Box<dyn EditorWidget> {
        self(input)
    }
}

/// Editor stand-in with no display, for tests and the CLI
#[derive(Debug, Clone, Default)]
pub struct HeadlessEditor {
    focused: bool,
    focus_calls: usize,
    mode: String,
}

impl HeadlessEditor {
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            ..Self::default()
        }
    }

    pub fn focus_calls(&self) -> usize {
        self.focus_calls
    }
}

impl EditorWidget for HeadlessEditor {
    fn focus(&mut self) {
        self.focused = true;
        self.focus_calls += 1;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_mode(&mut self, mode: &str) {
        self.mode = mode.to_string();
    }

    fn mode(&self) -> &str {
        &self.mode
    }
}

/// Factory producing [`HeadlessEditor`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessEditorFactory;

impl EditorFactory for HeadlessEditorFactory {
    fn create(&self, input: &InputModel) -> Box<dyn EditorWidget> {
        Box::new(HeadlessEditor::new(input.mode()))
    }
}

pub struct InputView {
    model: InputModel,
    editor: Box<dyn EditorWidget>,
}

impl InputView {
    pub fn new(model: InputModel, editor: Box<dyn EditorWidget>) -> Self {
        Self { model, editor }
    }

    pub fn model(&self) -> &InputModel {
        &self.model
    }

    pub fn editor(&self) -> &dyn EditorWidget {
        self.editor.as_ref()
    }

    pub fn focus(&mut self) {
        self.editor.focus();
    }

    pub fn mode(&self) -> &str {
        self.editor.mode()
    }

    pub fn set_mode(&mut self, mode: &str) {
        self.editor.set_mode(mode);
    }

    /// Current state as a node: the source text in a mode-tagged `<pre>`
    pub fn node(&self) -> Node {
        let mut editor = Node::new("pre")
            .with_class("jp-InputArea-editor")
            .with_attribute("data-mode", self.editor.mode());
        editor.set_inner_html(escape_html(&self.model.text()));

        let mut node = Node::new("div").with_class(INPUT_CLASS);
        node.push_child(editor);
        node
    }
}

impl fmt::Debug for InputView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputView")
            .field("model", &self.model)
            .field("mode", &self.editor.mode())
            .field("has_focus", &self.editor.has_focus())
            .finish()
    }
}
