//! Behaviour shared by every cell view: flags, focus, coalescing, lifetime

mod common;

use cellview::model::{CellModel, InputModel};
use cellview::view::{CellView, EditorWidget, VisualFlags};
use common::{classes, harness};

fn all_models() -> Vec<CellModel> {
    vec![
        CellModel::code("x = 1", "python"),
        CellModel::markdown("# Title"),
        CellModel::raw("raw text"),
    ]
}

// ========================================================================
// Initial state
// ========================================================================

#[test]
fn test_construction_requests_initial_update() {
    let h = harness();
    let view = CellView::new(CellModel::code("", "python"), &h.ctx);

    assert!(view.is_update_pending());
    assert_eq!(view.updates_applied(), 0);
    assert_eq!(h.ctx.scheduler().pending(), 1);

    assert_eq!(h.drain(), 1);
    assert!(!view.is_update_pending());
    assert_eq!(view.updates_applied(), 1);
    assert_eq!(view.flags(), VisualFlags::default());
}

#[test]
fn test_one_editor_per_view() {
    let h = harness();
    let _views: Vec<CellView> = all_models()
        .into_iter()
        .map(|m| CellView::new(m, &h.ctx))
        .collect();
    assert_eq!(h.editors.created.get(), 3);
}

#[test]
fn test_base_classes() {
    let h = harness();
    let code = CellView::new(CellModel::code("", "python"), &h.ctx);
    let md = CellView::new(CellModel::markdown(""), &h.ctx);
    let raw = CellView::new(CellModel::raw(""), &h.ctx);
    h.drain();

    assert_eq!(classes(&code.node()), vec!["jp-Cell", "jp-CodeCell"]);
    assert_eq!(classes(&md.node()), vec!["jp-Cell", "jp-MarkdownCell"]);
    assert_eq!(classes(&raw.node()), vec!["jp-Cell", "jp-RawCell"]);
}

// ========================================================================
// Visual flags
// ========================================================================

#[test]
fn test_every_flag_combination() {
    for model in all_models() {
        let h = harness();
        let view = CellView::new(model.clone(), &h.ctx);

        for bits in 0..8u8 {
            let selected = bits & 1 != 0;
            let marked = bits & 2 != 0;
            let focused = bits & 4 != 0;
            model.set_selected(selected);
            model.set_marked(marked);
            model.set_focused(focused);
            h.drain();

            let flags = view.flags();
            assert_eq!(flags.selected, selected, "{model:?}");
            assert_eq!(flags.marked, marked, "{model:?}");
            assert_eq!(flags.focused, focused, "{model:?}");
            assert!(!flags.rendered);

            let node = view.node();
            assert_eq!(node.has_class("jp-mod-selected"), selected);
            assert_eq!(node.has_class("jp-mod-marked"), marked);
            assert_eq!(node.has_class("jp-mod-focused"), focused);
            assert!(!node.has_class("jp-mod-rendered"));
        }
    }
}

#[test]
fn test_flags_only_change_on_drain() {
    let h = harness();
    let model = CellModel::raw("");
    let view = CellView::new(model.clone(), &h.ctx);
    h.drain();

    model.set_marked(true);
    assert!(!view.flags().marked);
    assert!(!view.node().has_class("jp-mod-marked"));

    h.drain();
    assert!(view.flags().marked);
    assert!(view.node().has_class("jp-mod-marked"));
}

#[test]
fn test_flags_use_state_at_drain_time() {
    let h = harness();
    let model = CellModel::code("", "python");
    let view = CellView::new(model.clone(), &h.ctx);
    h.drain();

    model.set_selected(true);
    model.set_selected(false);
    h.drain();

    assert!(!view.flags().selected);
    assert!(!view.node().has_class("jp-mod-selected"));
}

// ========================================================================
// Focus side effect
// ========================================================================

#[test]
fn test_focus_runs_before_update() {
    let h = harness();
    let model = CellModel::code("", "python");
    let view = CellView::new(model.clone(), &h.ctx);
    h.drain();

    model.set_focused(true);

    assert_eq!(h.editors.focus_calls.get(), 1);
    assert!(view.input().editor().has_focus());
    assert!(view.is_update_pending());
    assert!(!view.flags().focused);

    h.drain();
    assert!(view.flags().focused);
    assert_eq!(h.editors.focus_calls.get(), 1);
}

#[test]
fn test_focus_precedes_markdown_render() {
    let h = harness();
    let model = CellModel::markdown("*hi*");
    let _view = CellView::new(model.clone(), &h.ctx);

    model.set_rendered(true);
    model.set_focused(true);
    h.drain();

    assert_eq!(h.events(), vec!["focus", "render"]);
}

#[test]
fn test_unfocus_does_not_call_focus() {
    let h = harness();
    let model = CellModel::raw("");
    let _view = CellView::new(model.clone(), &h.ctx);

    model.set_focused(true);
    model.set_focused(false);
    h.drain();

    assert_eq!(h.editors.focus_calls.get(), 1);
}

#[test]
fn test_refocus_calls_focus_again() {
    let h = harness();
    let model = CellModel::raw("");
    let _view = CellView::new(model.clone(), &h.ctx);

    model.set_focused(true);
    model.set_focused(false);
    model.set_focused(true);

    assert_eq!(h.editors.focus_calls.get(), 2);
}

// ========================================================================
// Coalescing
// ========================================================================

#[test]
fn test_many_notifications_one_update() {
    let h = harness();
    let model = CellModel::markdown("text");
    let view = CellView::new(model.clone(), &h.ctx);
    h.drain();
    let before = view.updates_applied();

    model.set_selected(true);
    model.set_marked(true);
    model.set_focused(true);
    model.set_rendered(true);
    model.set_selected(false);
    assert_eq!(h.ctx.scheduler().pending(), 1);

    assert_eq!(h.drain(), 1);
    assert_eq!(view.updates_applied(), before + 1);
    assert_eq!(h.drain(), 0);
}

#[test]
fn test_unchanged_facet_requests_nothing() {
    let h = harness();
    let model = CellModel::code("", "python");
    let view = CellView::new(model.clone(), &h.ctx);
    h.drain();

    model.set_selected(false);
    assert!(!view.is_update_pending());
    assert!(h.ctx.scheduler().is_idle());
}

#[test]
fn test_views_share_one_drain() {
    let h = harness();
    let a = CellModel::code("", "python");
    let b = CellModel::raw("");
    let _va = CellView::new(a.clone(), &h.ctx);
    let _vb = CellView::new(b.clone(), &h.ctx);
    h.drain();

    a.set_selected(true);
    b.set_selected(true);
    a.set_marked(true);
    assert_eq!(h.drain(), 2);
}

// ========================================================================
// Notifications raised while the view is busy
// ========================================================================

/// Editor that selects its cell when it takes focus
struct SelectingEditor {
    model: CellModel,
    focused: bool,
    mode: String,
}

impl EditorWidget for SelectingEditor {
    fn focus(&mut self) {
        self.focused = true;
        self.model.set_selected(true);
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

#[test]
fn test_editor_notification_during_focus_is_applied() {
    let h = harness();
    let model = CellModel::code("", "python");
    let editor_model = model.clone();
    let ctx = h
        .ctx
        .clone()
        .with_editors(move |input: &InputModel| -> Box<dyn EditorWidget> {
            Box::new(SelectingEditor {
                model: editor_model.clone(),
                focused: false,
                mode: input.mode(),
            })
        });
    let view = CellView::new(model.clone(), &ctx);
    h.drain();

    model.set_focused(true);
    assert!(view.input().editor().has_focus());
    assert!(model.selected());
    assert!(view.is_update_pending());

    assert_eq!(h.drain(), 1);
    let flags = view.flags();
    assert!(flags.focused);
    assert!(flags.selected);
    assert!(view.node().has_class("jp-mod-selected"));
    assert!(!view.is_update_pending());
    assert_eq!(h.drain(), 0);
}

#[test]
fn test_editor_notification_then_unselect() {
    let h = harness();
    let model = CellModel::raw("");
    let editor_model = model.clone();
    let ctx = h
        .ctx
        .clone()
        .with_editors(move |input: &InputModel| -> Box<dyn EditorWidget> {
            Box::new(SelectingEditor {
                model: editor_model.clone(),
                focused: false,
                mode: input.mode(),
            })
        });
    let view = CellView::new(model.clone(), &ctx);

    model.set_focused(true);
    model.set_selected(false);
    h.drain();

    assert!(view.flags().focused);
    assert!(!view.flags().selected);
    assert!(!view.node().has_class("jp-mod-selected"));
}

// ========================================================================
// Lifetime
// ========================================================================

#[test]
fn test_drop_deregisters() {
    let h = harness();
    let model = CellModel::code("", "python");
    let view = CellView::new(model.clone(), &h.ctx);
    assert_eq!(model.subscriber_count(), 1);

    drop(view);
    assert_eq!(model.subscriber_count(), 0);

    model.set_focused(true);
    assert_eq!(h.editors.focus_calls.get(), 0);
}

#[test]
fn test_view_dropped_while_queued_is_skipped() {
    let h = harness();
    let view = CellView::new(CellModel::raw(""), &h.ctx);
    assert_eq!(h.ctx.scheduler().pending(), 1);

    drop(view);
    assert_eq!(h.drain(), 0);
}

#[test]
fn test_model_outlives_view() {
    let h = harness();
    let model = CellModel::markdown("x");
    {
        let _view = CellView::new(model.clone(), &h.ctx);
        h.drain();
    }
    model.set_rendered(true);
    model.set_selected(true);
    assert!(h.ctx.scheduler().is_idle());
    assert_eq!(model.rendered(), Some(true));
}
