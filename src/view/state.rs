//! Mutable state behind a [`CellView`](super::CellView)

use std::cell::{Cell, Ref, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use super::context::ViewContext;
use super::input::InputView;
use super::node::Node;
use super::output::OutputView;
use super::rendered::RenderedView;
use super::{kind_class, DisplayState, Slot, VisualFlags, CELL_CLASS};
use crate::messages::CellMsg;
use crate::model::{CellModel, CellType};
use crate::scheduler::{UpdateScheduler, UpdateTarget};
use crate::update;

/// Markdown-only render state
#[derive(Debug)]
pub(crate) struct MarkdownState {
    pub rendered: RenderedView,
    /// Content must be recomputed before it is shown again
    pub dirty: bool,
    pub display: DisplayState,
    pub render_count: u64,
}

impl MarkdownState {
    fn new() -> Self {
        Self {
            rendered: RenderedView::new(),
            dirty: true,
            display: DisplayState::Editing,
            render_count: 0,
        }
    }
}

#[derive(Debug)]
pub(crate) enum CellKindState {
    Code { output: OutputView },
    Markdown(MarkdownState),
    Raw,
}

impl CellKindState {
    fn for_model(model: &CellModel) -> Self {
        match model.cell_type() {
            CellType::Code => CellKindState::Code {
                output: OutputView::new(model.output().cloned().unwrap_or_default()),
            },
            CellType::Markdown => CellKindState::Markdown(MarkdownState::new()),
            CellType::Raw => CellKindState::Raw,
        }
    }

    /// Attached sub-views, top to bottom
    pub fn layout(&self) -> Vec<Slot> {
        match self {
            CellKindState::Code { .. } => vec![Slot::Input, Slot::Output],
            CellKindState::Markdown(md) => match md.display {
                DisplayState::Editing => vec![Slot::Input],
                DisplayState::Rendered => vec![Slot::Rendered],
            },
            CellKindState::Raw => vec![Slot::Input],
        }
    }

    pub fn markdown(&self) -> Option<&MarkdownState> {
        match self {
            CellKindState::Markdown(md) => Some(md),
            _ => None,
        }
    }
}

pub(crate) struct ViewState {
    pub model: CellModel,
    pub input: InputView,
    pub kind: CellKindState,
    pub node: Node,
    pub flags: VisualFlags,
    pub layout: Vec<Slot>,
    pub updates_applied: u64,
    pub ctx: ViewContext,
}

impl ViewState {
    fn new(model: CellModel, ctx: &ViewContext) -> Self {
        let mut editor = ctx.editors.create(model.input());
        let mode = match model.cell_type() {
            CellType::Code => model.input().mode(),
            CellType::Markdown => ctx.config.markdown.mode.clone(),
            CellType::Raw => ctx.config.raw.mode.clone(),
        };
        editor.set_mode(&mode);

        let kind = CellKindState::for_model(&model);
        let layout = kind.layout();
        let node = Node::new("div")
            .with_class(CELL_CLASS)
            .with_class(kind_class(model.cell_type()));
        let input = InputView::new(model.input().clone(), editor);

        Self {
            model,
            input,
            kind,
            node,
            flags: VisualFlags::default(),
            layout,
            updates_applied: 0,
            ctx: ctx.clone(),
        }
    }
}

/// Shared core of a cell view
///
/// The pending flag and the deferred message queue live outside the
/// `RefCell`, so a notification that arrives while the state is borrowed
/// (from the editor or the typesetter) is still recorded and scheduled.
pub(crate) struct ViewCell {
    state: RefCell<ViewState>,
    update_pending: Cell<bool>,
    /// Messages received while `state` was borrowed, oldest first
    deferred: RefCell<VecDeque<CellMsg>>,
    scheduler: UpdateScheduler,
    this: Weak<ViewCell>,
}

impl ViewCell {
    pub fn new(model: CellModel, ctx: &ViewContext) -> Rc<Self> {
        let state = ViewState::new(model, ctx);
        Rc::new_cyclic(|this| Self {
            state: RefCell::new(state),
            update_pending: Cell::new(false),
            deferred: RefCell::new(VecDeque::new()),
            scheduler: ctx.scheduler.clone(),
            this: this.clone(),
        })
    }

    pub fn state(&self) -> Ref<'_, ViewState> {
        self.state.borrow()
    }

    pub fn is_update_pending(&self) -> bool {
        self.update_pending.get()
    }

    /// Raise the pending flag, enqueueing at most once per drain
    pub fn request_update(&self) {
        if self.update_pending.replace(true) {
            return;
        }
        let target: Weak<dyn UpdateTarget> = self.this.clone();
        self.scheduler.schedule(target);
    }

    /// Handle a model notification now, or defer it if the state is busy
    pub fn dispatch(&self, msg: CellMsg) {
        {
            let Ok(mut state) = self.state.try_borrow_mut() else {
                tracing::debug!(target: "view", ?msg, "view busy, notification deferred");
                self.deferred.borrow_mut().push_back(msg);
                self.request_update();
                return;
            };
            self.handle(&mut state, msg);
        }
        self.flush_deferred();
    }

    fn handle(&self, state: &mut ViewState, msg: CellMsg) {
        if let Some(cmd) = update::update(state, msg) {
            update::run(self, state, cmd);
        }
    }

    /// Replay deferred messages once the state is free again
    fn flush_deferred(&self) {
        loop {
            let next = self.deferred.borrow_mut().pop_front();
            let Some(msg) = next else {
                return;
            };
            let Ok(mut state) = self.state.try_borrow_mut() else {
                self.deferred.borrow_mut().push_front(msg);
                return;
            };
            self.handle(&mut state, msg);
        }
    }
}

impl UpdateTarget for ViewCell {
    fn apply_update(&self) {
        self.update_pending.set(false);
        {
            let Ok(mut state) = self.state.try_borrow_mut() else {
                tracing::debug!(target: "view", "view busy during drain, update moved to next drain");
                self.request_update();
                return;
            };
            update::apply_update(&mut state);
        }
        self.flush_deferred();
    }
}
