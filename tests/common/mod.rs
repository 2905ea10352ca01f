//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cellview::config::ViewConfig;
use cellview::markdown::{CmarkConverter, MarkdownConverter};
use cellview::model::InputModel;
use cellview::view::{EditorWidget, Node, ViewContext};

/// Observes every editor a recording context creates
#[derive(Clone, Default)]
pub struct EditorLog {
    pub focus_calls: Rc<Cell<usize>>,
    pub created: Rc<Cell<usize>>,
    /// Shared event log, also written to by [`RenderLog`]
    pub events: Rc<RefCell<Vec<String>>>,
}

pub struct RecordingEditor {
    log: EditorLog,
    focused: bool,
    mode: String,
}

impl EditorWidget for RecordingEditor {
    fn focus(&mut self) {
        self.focused = true;
        self.log.focus_calls.set(self.log.focus_calls.get() + 1);
        self.log.events.borrow_mut().push("focus".to_string());
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

/// Counts conversions and typesetting passes
#[derive(Clone, Default)]
pub struct RenderLog {
    pub conversions: Rc<Cell<usize>>,
    pub typeset_calls: Rc<Cell<usize>>,
    /// HTML the typesetter was handed on its last call
    pub last_typeset: Rc<RefCell<String>>,
}

pub struct CountingConverter {
    inner: CmarkConverter,
    log: RenderLog,
    events: Rc<RefCell<Vec<String>>>,
}

impl MarkdownConverter for CountingConverter {
    fn convert(&self, markdown: &str) -> String {
        self.log.conversions.set(self.log.conversions.get() + 1);
        self.events.borrow_mut().push("render".to_string());
        self.inner.convert(markdown)
    }
}

pub struct Harness {
    pub ctx: ViewContext,
    pub editors: EditorLog,
    pub renders: RenderLog,
}

impl Harness {
    pub fn drain(&self) -> usize {
        self.ctx.scheduler().drain()
    }

    pub fn events(&self) -> Vec<String> {
        self.editors.events.borrow().clone()
    }
}

/// Context with recording collaborators and default config
pub fn harness() -> Harness {
    harness_with(ViewConfig::default())
}

pub fn harness_with(config: ViewConfig) -> Harness {
    let editors = EditorLog::default();
    let renders = RenderLog::default();

    let log = editors.clone();
    let factory = move |input: &InputModel| -> Box<dyn EditorWidget> {
        log.created.set(log.created.get() + 1);
        Box::new(RecordingEditor {
            log: log.clone(),
            focused: false,
            mode: input.mode(),
        })
    };

    let converter = CountingConverter {
        inner: CmarkConverter::new(&config.markdown),
        log: renders.clone(),
        events: Rc::clone(&editors.events),
    };

    let typeset_log = renders.clone();
    let typesetter = move |node: &mut Node| {
        typeset_log
            .typeset_calls
            .set(typeset_log.typeset_calls.get() + 1);
        *typeset_log.last_typeset.borrow_mut() = node.inner_html().to_string();
    };

    let ctx = ViewContext::new(config)
        .with_editors(factory)
        .with_converter(converter)
        .with_typesetter(typesetter);

    Harness {
        ctx,
        editors,
        renders,
    }
}

/// Class names of a node, in order
pub fn classes(node: &Node) -> Vec<String> {
    node.classes().map(str::to_string).collect()
}
