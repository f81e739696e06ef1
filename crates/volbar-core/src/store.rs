use crate::config::Bound;
use crate::signal::{Signal, SubId, signal};

/// Holds the committed bar value. `commit` is the only way to change it.
pub struct VolumeStore {
    bound: Bound,
    value: Signal<f32>,
}

impl VolumeStore {
    /// `initial` is clamped into the bound; callers validate it beforehand.
    pub fn new(bound: Bound, initial: f32) -> Self {
        Self {
            bound,
            value: signal(bound.clamp(initial)),
        }
    }

    pub fn read(&self) -> f32 {
        self.value.get()
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// `value = clamp(value + pending_delta, 0, max)`. A non-finite delta
    /// commits as zero.
    pub fn commit(&self, pending_delta: f32) -> f32 {
        let old = self.value.get();
        let pending_delta = if pending_delta.is_finite() {
            pending_delta
        } else {
            log::warn!("dropping non-finite drag delta {pending_delta}");
            0.0
        };
        let new = self.bound.clamp(old + pending_delta);
        log::debug!("commit: {old} + {pending_delta} -> {new}");
        self.value.set_distinct(new);
        new
    }

    /// Observe committed values. Only fires when the value actually changes.
    pub fn subscribe(&self, f: impl Fn(&f32) + 'static) -> SubId {
        self.value.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.value.unsubscribe(id);
    }
}
