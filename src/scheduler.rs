//! Deferred, coalesced view updates
//!
//! Views never repaint inside a notification handler. They enqueue
//! themselves here and the host calls [`UpdateScheduler::drain`] once per UI
//! cycle.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// Something that can apply a batched visual update
///
/// Targets own their interior mutability and handle being busy themselves.
pub trait UpdateTarget {
    fn apply_update(&self);
}

type Queued = Weak<dyn UpdateTarget>;

/// Shared queue of targets waiting for their update
///
/// Clones share one queue. Targets are held weakly, so a view dropped while
/// queued is simply skipped.
#[derive(Clone, Default)]
pub struct UpdateScheduler {
    queue: Rc<RefCell<VecDeque<Queued>>>,
}

impl UpdateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `target` for the next drain
    ///
    /// Callers are responsible for enqueueing at most once per drain.
    pub fn schedule(&self, target: Queued) {
        self.queue.borrow_mut().push_back(target);
    }

    /// Number of targets waiting
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Apply every queued update once, in request order
    ///
    /// Only targets queued before the call are applied; anything scheduled
    /// while draining waits for the next drain. Returns the number applied.
    pub fn drain(&self) -> usize {
        let batch: Vec<Queued> = self.queue.borrow_mut().drain(..).collect();
        let mut applied = 0;

        for weak in batch {
            let Some(target) = weak.upgrade() else {
                tracing::trace!(target: "scheduler", "skipping dropped target");
                continue;
            };
            target.apply_update();
            applied += 1;
        }

        if applied > 0 {
            tracing::trace!(target: "scheduler", applied, "drain complete");
        }
        applied
    }
}

impl fmt::Debug for UpdateScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateScheduler")
            .field("pending", &self.pending())
            .finish()
    }
}
