//! Collaborators and settings shared by every cell view

use std::fmt;
use std::rc::Rc;

use super::input::{EditorFactory, HeadlessEditorFactory};
use super::rendered::{NoopTypesetter, Typesetter};
use crate::config::ViewConfig;
use crate::markdown::{CmarkConverter, MarkdownConverter};
use crate::scheduler::UpdateScheduler;

/// Everything a view needs besides its model
///
/// Cheap to clone; clones share the scheduler and the collaborators.
#[derive(Clone)]
pub struct ViewContext {
    pub(crate) scheduler: UpdateScheduler,
    pub(crate) editors: Rc<dyn EditorFactory>,
    pub(crate) converter: Rc<dyn MarkdownConverter>,
    pub(crate) typesetter: Rc<dyn Typesetter>,
    pub(crate) config: Rc<ViewConfig>,
}

impl ViewContext {
    /// Headless editors, pulldown-cmark conversion, no typesetting
    pub fn new(config: ViewConfig) -> Self {
        Self {
            scheduler: UpdateScheduler::new(),
            editors: Rc::new(HeadlessEditorFactory),
            converter: Rc::new(CmarkConverter::new(&config.markdown)),
            typesetter: Rc::new(NoopTypesetter),
            config: Rc::new(config),
        }
    }

    pub fn with_scheduler(mut self, scheduler: UpdateScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn with_editors(mut self, editors: impl EditorFactory + 'static) -> Self {
        self.editors = Rc::new(editors);
        self
    }

    pub fn with_converter(mut self, converter: impl MarkdownConverter + 'static) -> Self {
        self.converter = Rc::new(converter);
        self
    }

    pub fn with_typesetter(mut self, typesetter: impl Typesetter + 'static) -> Self {
        self.typesetter = Rc::new(typesetter);
        self
    }

    pub fn scheduler(&self) -> &UpdateScheduler {
        &self.scheduler
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl fmt::Debug for ViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewContext")
            .field("scheduler", &self.scheduler)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
