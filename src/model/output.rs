//! Output sub-model for code cells
//!
//! Execution results are produced elsewhere; the view core only carries
//! them through to the output sub-view.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A single execution result, reduced to its text form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputItem {
    /// nbformat output type (`stream`, `execute_result`, `display_data`, `error`)
    pub output_type: String,
    pub text: String,
}

impl OutputItem {
    pub fn new(output_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            output_type: output_type.into(),
            text: text.into(),
        }
    }
}

/// Shared handle to a code cell's outputs
#[derive(Debug, Clone, Default)]
pub struct OutputModel {
    items: Rc<RefCell<Vec<OutputItem>>>,
}

impl OutputModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<OutputItem>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }

    pub fn items(&self) -> Vec<OutputItem> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn push(&self, item: OutputItem) {
        self.items.borrow_mut().push(item);
    }

    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}
