use std::cell::Cell;

use crate::signal::{Signal, SubId, signal};

/// Turns a one-axis drag into a pending delta.
///
/// The delta is `start - current`, so on a y-down screen moving the pointer
/// up gives a positive delta. Nothing here clamps: a delta that pushes the
/// bar out of range is exactly what drives the overscroll visuals.
pub struct GestureTracker {
    start: Cell<Option<f32>>,
    pending: Signal<f32>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            start: Cell::new(None),
            pending: signal(0.0),
        }
    }

    /// One movement sample. Returns the new pending delta.
    pub fn on_drag_changed(&self, start: f32, current: f32) -> f32 {
        if self.start.get().is_none() {
            log::trace!("drag started at {start}");
        }
        self.start.set(Some(start));
        let delta = start - current;
        log::trace!("drag sample {current}, pending {delta}");
        self.pending.set_distinct(delta);
        delta
    }

    /// Close the gesture and hand back the delta that must be committed.
    /// The pending delta stays visible until `reset`.
    pub fn end(&self) -> f32 {
        self.start.set(None);
        self.pending.get()
    }

    pub fn reset(&self) {
        self.pending.set_distinct(0.0);
    }

    pub fn pending(&self) -> f32 {
        self.pending.get()
    }

    pub fn start(&self) -> Option<f32> {
        self.start.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.start.get().is_some()
    }

    pub fn subscribe(&self, f: impl Fn(&f32) + 'static) -> SubId {
        self.pending.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.pending.unsubscribe(id);
    }
}
