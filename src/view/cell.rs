//! The cell view handle

use std::cell::Ref;
use std::fmt;
use std::rc::Rc;

use super::context::ViewContext;
use super::input::InputView;
use super::node::Node;
use super::output::OutputView;
use super::rendered::RenderedView;
use super::state::{CellKindState, ViewCell};
use super::{DisplayState, Slot, VisualFlags};
use crate::model::{CellModel, CellType, Subscription};

/// A view bound to one cell model for its whole life
///
/// Code cells show input above output. Markdown cells show either their
/// input or their rendered HTML, following the model's `rendered` facet.
/// Raw cells show input only.
///
/// Model notifications are handled synchronously but visual changes wait
/// for the next [`UpdateScheduler::drain`](crate::scheduler::UpdateScheduler::drain).
/// Notifications that arrive while the view is busy (from its editor or
/// typesetter) are deferred and replayed, never dropped.
/// Dropping the view disconnects it from the model.
pub struct CellView {
    cell: Rc<ViewCell>,
    model: CellModel,
    _subscriptions: Vec<Subscription>,
}

impl CellView {
    pub fn new(model: CellModel, ctx: &ViewContext) -> Self {
        let cell = ViewCell::new(model.clone(), ctx);

        let weak = Rc::downgrade(&cell);
        let facets = model.subscribe(move |change| {
            if let Some(cell) = weak.upgrade() {
                cell.dispatch((*change).into());
            }
        });
        let weak = Rc::downgrade(&cell);
        let input = model.input().subscribe(move |change| {
            if let Some(cell) = weak.upgrade() {
                cell.dispatch((*change).into());
            }
        });

        cell.request_update();
        tracing::debug!(
            target: "view",
            cell = model.cell_type().name(),
            "cell view created"
        );

        Self {
            cell,
            model,
            _subscriptions: vec![facets, input],
        }
    }

    pub fn model(&self) -> &CellModel {
        &self.model
    }

    pub fn cell_type(&self) -> CellType {
        self.model.cell_type()
    }

    pub fn input(&self) -> Ref<'_, InputView> {
        Ref::map(self.cell.state(), |s| &s.input)
    }

    /// Present for code cells
    pub fn output(&self) -> Option<Ref<'_, OutputView>> {
        Ref::filter_map(self.cell.state(), |s| match &s.kind {
            CellKindState::Code { output } => Some(output),
            _ => None,
        })
        .ok()
    }

    /// Present for markdown cells, attached or not
    pub fn rendered(&self) -> Option<Ref<'_, RenderedView>> {
        Ref::filter_map(self.cell.state(), |s| match &s.kind {
            CellKindState::Markdown(md) => Some(&md.rendered),
            _ => None,
        })
        .ok()
    }

    /// Flags as of the last applied update
    pub fn flags(&self) -> VisualFlags {
        self.cell.state().flags
    }

    /// Attached sub-views, top to bottom
    pub fn layout(&self) -> Vec<Slot> {
        self.cell.state().layout.clone()
    }

    /// `None` for cells that never render
    pub fn display_state(&self) -> Option<DisplayState> {
        self.cell.state().kind.markdown().map(|md| md.display)
    }

    /// Whether the next rendered display recomputes its content
    pub fn is_dirty(&self) -> bool {
        self.cell
            .state()
            .kind
            .markdown()
            .is_some_and(|md| md.dirty)
    }

    /// How many times markdown content has been computed
    pub fn render_count(&self) -> u64 {
        self.cell
            .state()
            .kind
            .markdown()
            .map_or(0, |md| md.render_count)
    }

    pub fn updates_applied(&self) -> u64 {
        self.cell.state().updates_applied
    }

    pub fn is_update_pending(&self) -> bool {
        self.cell.is_update_pending()
    }

    /// Snapshot of the cell's node tree with the attached sub-views
    pub fn node(&self) -> Node {
        let state = self.cell.state();
        let mut root = state.node.clone();
        for slot in &state.layout {
            let child = match (slot, &state.kind) {
                (Slot::Input, _) => state.input.node(),
                (Slot::Output, CellKindState::Code { output }) => output.node(),
                (Slot::Rendered, CellKindState::Markdown(md)) => md.rendered.node().clone(),
                _ => continue,
            };
            root.push_child(child);
        }
        root
    }

    pub fn to_html(&self) -> String {
        self.node().to_html()
    }
}

impl fmt::Debug for CellView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.cell.state();
        f.debug_struct("CellView")
            .field("cell_type", &self.model.cell_type())
            .field("flags", &state.flags)
            .field("layout", &state.layout)
            .field("update_pending", &self.cell.is_update_pending())
            .finish()
    }
}
