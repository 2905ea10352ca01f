//! Cell model - the observable state a cell view is bound to

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::input::InputModel;
use super::output::OutputModel;
use super::signal::{Signal, Subscription};
use crate::messages::{Facet, FacetChange};

/// Kind of notebook cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Code,
    Markdown,
    Raw,
}

impl CellType {
    pub fn name(&self) -> &'static str {
        match self {
            CellType::Code => "code",
            CellType::Markdown => "markdown",
            CellType::Raw => "raw",
        }
    }
}

/// Snapshot of the boolean facets
///
/// `rendered` is `None` for cells that have no rendered form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Facets {
    pub selected: bool,
    pub marked: bool,
    pub focused: bool,
    pub rendered: Option<bool>,
}

impl Facets {
    pub fn get(&self, facet: Facet) -> bool {
        match facet {
            Facet::Selected => self.selected,
            Facet::Marked => self.marked,
            Facet::Focused => self.focused,
            Facet::Rendered => self.rendered.unwrap_or(false),
        }
    }

    fn slot_mut(&mut self, facet: Facet) -> Option<&mut bool> {
        match facet {
            Facet::Selected => Some(&mut self.selected),
            Facet::Marked => Some(&mut self.marked),
            Facet::Focused => Some(&mut self.focused),
            Facet::Rendered => self.rendered.as_mut(),
        }
    }
}

struct CellInner {
    cell_type: CellType,
    facets: RefCell<Facets>,
    input: InputModel,
    output: Option<OutputModel>,
    changed: Signal<FacetChange>,
}

/// Shared handle to one cell's model
///
/// Cloning is cheap and yields another handle to the same cell.
#[derive(Clone)]
pub struct CellModel {
    inner: Rc<CellInner>,
}

impl CellModel {
    fn with_parts(cell_type: CellType, input: InputModel, output: Option<OutputModel>) -> Self {
        let facets = Facets {
            rendered: (cell_type == CellType::Markdown).then_some(false),
            ..Facets::default()
        };
        Self {
            inner: Rc::new(CellInner {
                cell_type,
                facets: RefCell::new(facets),
                input,
                output,
                changed: Signal::new(),
            }),
        }
    }

    /// Code cell with source text in the given language mode
    pub fn code(source: impl Into<String>, language: impl Into<String>) -> Self {
        Self::with_parts(
            CellType::Code,
            InputModel::new(source, language),
            Some(OutputModel::new()),
        )
    }

    /// Code cell with pre-existing outputs
    pub fn code_with_output(
        source: impl Into<String>,
        language: impl Into<String>,
        output: OutputModel,
    ) -> Self {
        Self::with_parts(
            CellType::Code,
            InputModel::new(source, language),
            Some(output),
        )
    }

    /// Markdown cell, initially not rendered
    pub fn markdown(source: impl Into<String>) -> Self {
        Self::with_parts(
            CellType::Markdown,
            InputModel::new(source, "markdown"),
            None,
        )
    }

    pub fn raw(source: impl Into<String>) -> Self {
        Self::with_parts(CellType::Raw, InputModel::new(source, "text/plain"), None)
    }

    pub fn cell_type(&self) -> CellType {
        self.inner.cell_type
    }

    pub fn facets(&self) -> Facets {
        *self.inner.facets.borrow()
    }

    pub fn selected(&self) -> bool {
        self.inner.facets.borrow().selected
    }

    pub fn marked(&self) -> bool {
        self.inner.facets.borrow().marked
    }

    pub fn focused(&self) -> bool {
        self.inner.facets.borrow().focused
    }

    /// `None` for cells without a rendered form
    pub fn rendered(&self) -> Option<bool> {
        self.inner.facets.borrow().rendered
    }

    pub fn input(&self) -> &InputModel {
        &self.inner.input
    }

    /// Present for code cells only
    pub fn output(&self) -> Option<&OutputModel> {
        self.inner.output.as_ref()
    }

    pub fn set_selected(&self, value: bool) -> bool {
        self.set_facet(Facet::Selected, value)
    }

    pub fn set_marked(&self, value: bool) -> bool {
        self.set_facet(Facet::Marked, value)
    }

    pub fn set_focused(&self, value: bool) -> bool {
        self.set_facet(Facet::Focused, value)
    }

    pub fn set_rendered(&self, value: bool) -> bool {
        self.set_facet(Facet::Rendered, value)
    }

    /// Set a facet, notifying subscribers if the value changed
    ///
    /// Returns whether a notification was sent. `Rendered` is ignored on
    /// cells that have no rendered form.
    pub fn set_facet(&self, facet: Facet, value: bool) -> bool {
        {
            let mut facets = self.inner.facets.borrow_mut();
            let Some(slot) = facets.slot_mut(facet) else {
                tracing::debug!(
                    "Ignoring {} on {} cell",
                    facet,
                    self.inner.cell_type.name()
                );
                return false;
            };
            if *slot == value {
                return false;
            }
            *slot = value;
        }

        tracing::trace!(target: "facet", %facet, value, "cell facet changed");
        self.inner.changed.emit(&FacetChange::new(facet, value));
        true
    }

    /// Observe facet changes for as long as the returned handle lives
    pub fn subscribe(&self, callback: impl Fn(&FacetChange) + 'static) -> Subscription {
        self.inner.changed.connect(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.changed.subscriber_count()
    }

    /// Whether both handles refer to the same cell
    pub fn ptr_eq(&self, other: &CellModel) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for CellModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellModel")
            .field("cell_type", &self.inner.cell_type)
            .field("facets", &*self.inner.facets.borrow())
            .field("input", &self.inner.input)
            .finish()
    }
}
