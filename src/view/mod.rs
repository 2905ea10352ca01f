//! Cell views
//!
//! A [`CellView`] is bound to one [`CellModel`](crate::model::CellModel) and
//! keeps a [`Node`] tree in step with it. CSS classes on that tree are the
//! contract with whatever paints it.

mod cell;
mod context;
pub mod input;
pub mod node;
pub mod output;
pub mod rendered;
pub(crate) mod state;

pub use cell::CellView;
pub use context::ViewContext;
pub use input::{EditorFactory, EditorWidget, HeadlessEditor, HeadlessEditorFactory, InputView};
pub use node::Node;
pub use output::OutputView;
pub use rendered::{NoopTypesetter, RenderedView, Typesetter};

use crate::model::{CellType, Facets};

pub const CELL_CLASS: &str = "jp-Cell";
pub const CODE_CELL_CLASS: &str = "jp-CodeCell";
pub const MARKDOWN_CELL_CLASS: &str = "jp-MarkdownCell";
pub const RAW_CELL_CLASS: &str = "jp-RawCell";

pub const SELECTED_CLASS: &str = "jp-mod-selected";
pub const MARKED_CLASS: &str = "jp-mod-marked";
pub const FOCUSED_CLASS: &str = "jp-mod-focused";
pub const RENDERED_CLASS: &str = "jp-mod-rendered";

pub const INPUT_CLASS: &str = "jp-InputArea";
pub const OUTPUT_CLASS: &str = "jp-OutputArea";
pub const RENDERER_CLASS: &str = "jp-MarkdownCell-renderer";

/// CSS class identifying the cell kind
pub fn kind_class(cell_type: CellType) -> &'static str {
    match cell_type {
        CellType::Code => CODE_CELL_CLASS,
        CellType::Markdown => MARKDOWN_CELL_CLASS,
        CellType::Raw => RAW_CELL_CLASS,
    }
}

/// The four visual flags, each driven by exactly one facet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisualFlags {
    pub selected: bool,
    pub marked: bool,
    pub focused: bool,
    /// Never set on cells without a rendered form
    pub rendered: bool,
}

impl VisualFlags {
    pub fn from_facets(facets: &Facets) -> Self {
        Self {
            selected: facets.selected,
            marked: facets.marked,
            focused: facets.focused,
            rendered: facets.rendered.unwrap_or(false),
        }
    }

    /// (class, active) pairs in a fixed order
    pub fn classes(&self) -> [(&'static str, bool); 4] {
        [
            (SELECTED_CLASS, self.selected),
            (MARKED_CLASS, self.marked),
            (FOCUSED_CLASS, self.focused),
            (RENDERED_CLASS, self.rendered),
        ]
    }
}

/// A sub-view position in a cell's layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Input,
    Output,
    Rendered,
}

/// Which half of a markdown cell is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Editing,
    Rendered,
}
