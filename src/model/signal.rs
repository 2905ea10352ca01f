//! Single-threaded change notification
//!
//! A [`Signal`] keeps a list of callbacks; [`Signal::connect`] returns a
//! [`Subscription`] that removes its callback when dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Slot<T> = Rc<dyn Fn(&T)>;

struct Slots<T> {
    next_id: u64,
    entries: Vec<(u64, Slot<T>)>,
}

/// Observer list delivering `&T` to every connected callback
pub struct Signal<T> {
    slots: Rc<RefCell<Slots<T>>>,
}

impl<T: 'static> Signal<T> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register `callback`; it stays connected while the handle lives
    pub fn connect(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.entries.push((id, Rc::new(callback)));
            id
        };

        let weak: Weak<RefCell<Slots<T>>> = Rc::downgrade(&self.slots);
        Subscription {
            disconnect: Some(Box::new(move || {
                if let Some(slots) = weak.upgrade() {
                    slots.borrow_mut().entries.retain(|(slot_id, _)| *slot_id != id);
                }
            })),
        }
    }

    /// Deliver `value` to every callback connected at the time of the call
    ///
    /// The callback list is snapshotted first, so callbacks may connect,
    /// disconnect or emit again without tripping the borrow.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<Slot<T>> = self
            .slots
            .borrow()
            .entries
            .iter()
            .map(|(_, slot)| Rc::clone(slot))
            .collect();
        for slot in snapshot {
            (*slot)(value);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slots.borrow().entries.len()
    }
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.slots.borrow().entries.len())
            .finish()
    }
}

/// Connection handle; dropping it disconnects the callback
#[must_use = "dropping a Subscription disconnects it immediately"]
pub struct Subscription {
    disconnect: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Disconnect now rather than at drop
    pub fn disconnect(mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("connected", &self.disconnect.is_some())
            .finish()
    }
}
