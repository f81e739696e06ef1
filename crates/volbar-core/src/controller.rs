use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::{Bound, VolumeBarConfig};
use crate::error::ConfigError;
use crate::gesture::GestureTracker;
use crate::overscroll::{Overscroll, OverscrollCalculator, Regime, VisualScale};
use crate::signal::{Signal, SubId, signal};
use crate::store::VolumeStore;

/// Everything a renderer needs for one frame of the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarFrame {
    pub value: f32,
    pub pending: f32,
    pub requested: f32,
    pub scale: VisualScale,
    pub offset_y: f32,
    pub regime: Regime,
}

impl BarFrame {
    fn new(value: f32, pending: f32, o: Overscroll) -> Self {
        Self {
            value,
            pending,
            requested: o.requested,
            scale: o.scale,
            offset_y: o.offset_y,
            regime: o.regime,
        }
    }
}

/// Wires store, tracker and calculator together.
///
/// The store and tracker each publish through a `Signal`; their subscriptions
/// call the calculator's setters and then publish a fresh `BarFrame`.
pub struct VolumeBarController {
    config: VolumeBarConfig,
    store: VolumeStore,
    tracker: GestureTracker,
    calculator: Rc<RefCell<OverscrollCalculator>>,
    frames: Signal<BarFrame>,
    // Set while a release is being applied so the half-applied state
    // (new value, old pending) never reaches subscribers.
    committing: Rc<Cell<bool>>,
}

fn current_frame(calculator: &RefCell<OverscrollCalculator>) -> BarFrame {
    let calc = calculator.borrow();
    let (value, pending) = calc.inputs();
    BarFrame::new(value, pending, calc.overscroll())
}

fn publish(calculator: &RefCell<OverscrollCalculator>, frames: &Signal<BarFrame>) {
    let frame = current_frame(calculator);
    let previous = frames.get().regime;
    if previous != frame.regime {
        log::debug!(
            "regime {previous:?} -> {:?} (requested {})",
            frame.regime,
            frame.requested
        );
    }
    frames.set_distinct(frame);
}

impl VolumeBarController {
    pub fn new(config: VolumeBarConfig) -> Result<Self, ConfigError> {
        let bound = config.validate()?;
        let store = VolumeStore::new(bound, config.initial);
        let tracker = GestureTracker::new();
        let calculator = Rc::new(RefCell::new(OverscrollCalculator::new(bound, store.read())));
        let frames = signal(current_frame(&calculator));
        let committing = Rc::new(Cell::new(false));

        store.subscribe({
            let calculator = calculator.clone();
            let frames = frames.clone();
            let committing = committing.clone();
            move |v| {
                calculator.borrow_mut().configure_value(*v);
                if !committing.get() {
                    publish(&calculator, &frames);
                }
            }
        });
        tracker.subscribe({
            let calculator = calculator.clone();
            let frames = frames.clone();
            let committing = committing.clone();
            move |d| {
                calculator.borrow_mut().configure_pending(*d);
                if !committing.get() {
                    publish(&calculator, &frames);
                }
            }
        });

        log::debug!("volume bar ready: max {}, value {}", bound.max(), store.read());

        Ok(Self {
            config,
            store,
            tracker,
            calculator,
            frames,
            committing,
        })
    }

    pub fn config(&self) -> &VolumeBarConfig {
        &self.config
    }

    pub fn bound(&self) -> Bound {
        self.store.bound()
    }

    /// Feed one movement sample of the active drag.
    pub fn drag_changed(&self, start: f32, current: f32) -> f32 {
        self.tracker.on_drag_changed(start, current)
    }

    /// Commit the outstanding delta and zero it. Returns the new value.
    pub fn drag_ended(&self) -> f32 {
        let delta = self.tracker.end();
        self.committing.set(true);
        let value = self.store.commit(delta);
        self.tracker.reset();
        self.committing.set(false);
        publish(&self.calculator, &self.frames);
        value
    }

    /// An interrupted drag is settled exactly like a released one.
    pub fn drag_cancelled(&self) -> f32 {
        log::debug!("drag cancelled with pending {}", self.tracker.pending());
        self.drag_ended()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn value(&self) -> f32 {
        self.store.read()
    }

    pub fn pending_delta(&self) -> f32 {
        self.tracker.pending()
    }

    pub fn requested(&self) -> f32 {
        self.value() + self.pending_delta()
    }

    pub fn frame(&self) -> BarFrame {
        current_frame(&self.calculator)
    }

    /// Called with every frame that differs from the previous one.
    pub fn subscribe_frames(&self, f: impl Fn(&BarFrame) + 'static) -> SubId {
        self.frames.subscribe(f)
    }

    pub fn unsubscribe_frames(&self, id: SubId) {
        self.frames.unsubscribe(id);
    }
}
