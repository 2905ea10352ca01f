//! Input sub-model: the cell's source text and its language mode

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::signal::{Signal, Subscription};
use crate::messages::InputChange;

struct InputInner {
    text: RefCell<String>,
    mode: RefCell<String>,
    changed: Signal<InputChange>,
}

/// Shared handle to a cell's input text
#[derive(Clone)]
pub struct InputModel {
    inner: Rc<InputInner>,
}

impl InputModel {
    pub fn new(text: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(InputInner {
                text: RefCell::new(text.into()),
                mode: RefCell::new(mode.into()),
                changed: Signal::new(),
            }),
        }
    }

    pub fn text(&self) -> String {
        self.inner.text.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.text.borrow().is_empty()
    }

    pub fn mode(&self) -> String {
        self.inner.mode.borrow().clone()
    }

    /// Replace the text; notifies only when it differs
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        {
            let mut current = self.inner.text.borrow_mut();
            if *current == text {
                return;
            }
            *current = text;
        }
        self.inner.changed.emit(&InputChange::Text);
    }

    pub fn set_mode(&self, mode: impl Into<String>) {
        let mode = mode.into();
        {
            let mut current = self.inner.mode.borrow_mut();
            if *current == mode {
                return;
            }
            *current = mode;
        }
        self.inner.changed.emit(&InputChange::Mode);
    }

    pub fn subscribe(&self, callback: impl Fn(&InputChange) + 'static) -> Subscription {
        self.inner.changed.connect(callback)
    }
}

impl fmt::Debug for InputModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputModel")
            .field("text", &*self.inner.text.borrow())
            .field("mode", &*self.inner.mode.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_set_text_notifies_on_change_only() {
        let input = InputModel::new("a", "python");
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let _sub = input.subscribe(move |change| {
            assert_eq!(*change, InputChange::Text);
            h.set(h.get() + 1);
        });

        input.set_text("a");
        input.set_text("b");
        assert_eq!(hits.get(), 1);
        assert_eq!(input.text(), "b");
    }

    #[test]
    fn test_set_mode() {
        let input = InputModel::new("", "python");
        input.set_mode("julia");
        assert_eq!(input.mode(), "julia");
    }
}
