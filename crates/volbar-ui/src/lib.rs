//! Pointer input and render geometry for the volume bar.
//!
//! `VerticalDragDetector` turns raw pointer events into controller drag
//! calls; `BarLayout` turns each `BarFrame` into rects and a transform that a
//! `BarRenderer` can draw.

pub mod gestures;
pub mod input;
pub mod render;

pub use gestures::*;
pub use input::*;
pub use render::*;
