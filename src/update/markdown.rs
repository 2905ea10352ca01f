//! Markdown cell render pipeline

use tracing::debug;

use crate::markdown::render_markdown;
use crate::model::CellModel;
use crate::view::state::{CellKindState, MarkdownState, ViewState};
use crate::view::{DisplayState, ViewContext};

/// Force the next rendered display to recompute its content
pub(super) fn mark_dirty(state: &mut ViewState) {
    if let CellKindState::Markdown(md) = &mut state.kind {
        md.dirty = true;
    }
}

/// Pick the display state and render if the content is stale
pub(super) fn apply(md: &mut MarkdownState, model: &CellModel, ctx: &ViewContext, rendered: bool) {
    if !rendered {
        md.display = DisplayState::Editing;
        return;
    }

    if md.dirty {
        let text = model.input().text();
        let source = if text.is_empty() {
            ctx.config.markdown.placeholder.as_str()
        } else {
            text.as_str()
        };

        let html = render_markdown(source, ctx.converter.as_ref());
        md.rendered.replace_content(html);
        ctx.typesetter.typeset(md.rendered.node_mut());
        md.dirty = false;
        md.render_count += 1;

        debug!(
            target: "render",
            render_count = md.render_count,
            placeholder = text.is_empty(),
            "markdown cell rendered"
        );
    }

    md.display = DisplayState::Rendered;
}
