//! # Volume bar core
//!
//! Volbar models a vertical, draggable fill bar. While a drag is in flight the
//! bar does not touch its committed value; instead it tracks a *pending delta*
//! and derives a rubber-band distortion from how far `value + pending` lands
//! outside `[0, max]`. Releasing the drag commits the clamped result.
//!
//! There are four pieces:
//!
//! - `VolumeStore`: owns the committed value and is its only mutator.
//! - `GestureTracker`: turns drag samples into a pending delta.
//! - `OverscrollCalculator`: pure math from `(value, pending)` to a scale
//!   pair and a vertical offset.
//! - `VolumeBarController`: wires the three together through `Signal`
//!   subscriptions.
//!
//! ## Example
//!
//! ```rust
//! use volbar_core::*;
//!
//! let bar = VolumeBarController::new(VolumeBarConfig::default().with_initial(280.0))?;
//!
//! // Pointer moved 50 units upwards from where it went down.
//! bar.drag_changed(400.0, 350.0);
//! let frame = bar.frame();
//! assert_eq!(frame.regime, Regime::Overshooting);
//! assert!(frame.offset_y < 0.0);
//!
//! // Release commits the clamped value and settles the visuals.
//! assert_eq!(bar.drag_ended(), 300.0);
//! assert_eq!(bar.frame().scale, VisualScale::IDENTITY);
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Regimes
//!
//! `overshoot` is `requested / max` above the top and `1 - requested / max`
//! otherwise. Anything `<= 1` is *settled*: identity scale, a resting offset of
//! `1.0`. Anything `> 1` is *overshooting*: vertical stretch capped at 5%, a
//! horizontal squeeze that saturates at 0.90, and an offset of
//! `overshoot * 10` pointing out of whichever edge was crossed.

pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod overscroll;
pub mod signal;
pub mod store;
pub mod tests;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use geometry::*;
pub use gesture::*;
pub use overscroll::*;
pub use signal::*;
pub use store::*;
