//! Update functions for the Elm-style architecture
//!
//! Notifications become [`CellMsg`]s, [`update`] turns them into state
//! changes plus a [`Cmd`], and [`run`] executes the command right away.
//! Visual state is only touched later, by [`apply_update`] during a drain.

mod markdown;

use tracing::{debug, trace};

use crate::commands::Cmd;
use crate::messages::{CellMsg, Facet, FacetChange, InputChange};
use crate::model::CellType;
use crate::view::state::{CellKindState, ViewCell, ViewState};
use crate::view::VisualFlags;

/// React to one model notification
pub(crate) fn update(state: &mut ViewState, msg: CellMsg) -> Option<Cmd> {
    match msg {
        CellMsg::Facet(change) => update_facet(state, change),
        CellMsg::Input(change) => update_input(state, change),
    }
}

fn update_facet(state: &mut ViewState, change: FacetChange) -> Option<Cmd> {
    debug!(
        target: "notify",
        cell = state.model.cell_type().name(),
        facet = %change.facet,
        value = change.value,
        "facet notification"
    );

    let mut cmds = Vec::with_capacity(2);
    match change.facet {
        Facet::Focused if change.value => cmds.push(Cmd::FocusEditor),
        Facet::Rendered => markdown::mark_dirty(state),
        _ => {}
    }
    cmds.push(Cmd::RequestUpdate);
    Some(Cmd::batch(cmds))
}

fn update_input(state: &mut ViewState, change: InputChange) -> Option<Cmd> {
    let cell_type = state.model.cell_type();
    match (change, cell_type) {
        (InputChange::Text, CellType::Markdown) if state.ctx.config.markdown.rerender_on_edit => {
            markdown::mark_dirty(state);
            Some(Cmd::RequestUpdate)
        }
        (InputChange::Mode, CellType::Code) => {
            let mode = state.model.input().mode();
            state.input.set_mode(&mode);
            None
        }
        _ => None,
    }
}

/// Execute a command immediately
///
/// Focus runs before the update request, so any notification the editor
/// emits while focusing lands in the same pending update.
pub(crate) fn run(view: &ViewCell, state: &mut ViewState, cmd: Cmd) {
    for cmd in cmd.into_vec() {
        match cmd {
            Cmd::FocusEditor => state.input.focus(),
            Cmd::RequestUpdate => view.request_update(),
            Cmd::None | Cmd::Batch(_) => {}
        }
    }
}

/// Bring visuals in line with the model as it is right now
///
/// Facets are read after rendering, since the typesetter may change them.
pub(crate) fn apply_update(state: &mut ViewState) {
    if let CellKindState::Markdown(md) = &mut state.kind {
        let rendered = state.model.rendered().unwrap_or(false);
        markdown::apply(md, &state.model, &state.ctx, rendered);
    }
    state.layout = state.kind.layout();

    let facets = state.model.facets();
    let flags = VisualFlags::from_facets(&facets);
    for (class, on) in flags.classes() {
        state.node.toggle_class(class, on);
    }
    state.flags = flags;
    state.updates_applied += 1;

    trace!(
        target: "update",
        cell = state.model.cell_type().name(),
        ?flags,
        layout = ?state.layout,
        "update applied"
    );
}
