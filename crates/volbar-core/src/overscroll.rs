//! Rubber-band math.
//!
//! Everything here is a function of `(value, pending)` and the bound. The
//! calculator caches its two inputs so it can be fed by setters, but it never
//! holds anything else.

use crate::config::Bound;

/// Upper limit on vertical stretch.
pub const STRETCH_CAP: f32 = 1.05;
/// Lower limit on horizontal squeeze. In practice always reached.
pub const SQUEEZE_FLOOR: f32 = 0.90;
pub const SQUEEZE_FACTOR: f32 = 0.005;
pub const OFFSET_GAIN: f32 = 10.0;
/// Offset reported while settled.
pub const RESTING_OFFSET: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualScale {
    pub x: f32,
    pub y: f32,
}

impl VisualScale {
    pub const IDENTITY: VisualScale = VisualScale { x: 1.0, y: 1.0 };
}

impl Default for VisualScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
    Settled,
    Overshooting,
}

/// Which edge of the bar the requested value went past.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Above,
    Below,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overscroll {
    pub requested: f32,
    pub overshoot: f32,
    pub scale: VisualScale,
    pub offset_y: f32,
    pub regime: Regime,
}

impl Overscroll {
    pub fn direction(&self) -> Option<Direction> {
        match self.regime {
            Regime::Settled => None,
            Regime::Overshooting if self.requested > 0.0 => Some(Direction::Above),
            Regime::Overshooting => Some(Direction::Below),
        }
    }
}

/// `requested / max` past the top, `1 - requested / max` everywhere else.
/// Greater than one exactly when `requested` is outside `[0, max]`.
pub fn overshoot(bound: Bound, requested: f32) -> f32 {
    let max = bound.max();
    if requested > max {
        requested / max
    } else {
        1.0 - requested / max
    }
}

pub fn overscroll(bound: Bound, value: f32, pending: f32) -> Overscroll {
    let requested = value + pending;
    let overshoot = overshoot(bound, requested);

    if overshoot <= 1.0 {
        return Overscroll {
            requested,
            overshoot,
            scale: VisualScale::IDENTITY,
            offset_y: RESTING_OFFSET,
            regime: Regime::Settled,
        };
    }

    // The squeeze term is tiny for any overshoot, so x lands on the floor.
    let scale = VisualScale {
        x: (1.0 / overshoot * SQUEEZE_FACTOR).max(SQUEEZE_FLOOR),
        y: overshoot.min(STRETCH_CAP),
    };
    let scaled = overshoot * OFFSET_GAIN;
    let offset_y = if requested > 0.0 { -scaled } else { scaled };

    Overscroll {
        requested,
        overshoot,
        scale,
        offset_y,
        regime: Regime::Overshooting,
    }
}

/// Caches the latest `(value, pending)` pair pushed by the controller.
pub struct OverscrollCalculator {
    bound: Bound,
    value: f32,
    pending: f32,
}

impl OverscrollCalculator {
    pub fn new(bound: Bound, value: f32) -> Self {
        Self {
            bound,
            value,
            pending: 0.0,
        }
    }

    pub fn configure_value(&mut self, value: f32) {
        self.value = value;
    }

    pub fn configure_pending(&mut self, pending: f32) {
        self.pending = pending;
    }

    pub fn inputs(&self) -> (f32, f32) {
        (self.value, self.pending)
    }

    pub fn overscroll(&self) -> Overscroll {
        overscroll(self.bound, self.value, self.pending)
    }

    pub fn scale_effect(&self) -> VisualScale {
        self.overscroll().scale
    }

    pub fn offset_y(&self) -> f32 {
        self.overscroll().offset_y
    }
}
