use std::cell::RefCell;
use std::rc::Rc;

use volbar_core::{BarFrame, Rect, SubId, Transform, Vec2, VolumeBarConfig, VolumeBarController};

/// Drawable shapes for one frame of the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    /// Bar outline before the rubber-band transform.
    pub track: Rect,
    /// Filled part, rising from the track's bottom edge, clipped to the track.
    pub fill: Rect,
    pub corner_radius: f32,
    pub transform: Transform,
}

impl BarGeometry {
    pub fn visual_track(&self) -> Rect {
        self.transform.apply_to_rect(self.track)
    }

    pub fn visual_fill(&self) -> Rect {
        self.transform.apply_to_rect(self.fill)
    }
}

/// Places a bar on screen and turns frames into geometry.
#[derive(Clone, Copy, Debug)]
pub struct BarLayout {
    pub origin: Vec2,
    pub bar_width: f32,
    pub bar_height: f32,
    pub corner_radius: f32,
}

impl BarLayout {
    pub fn new(origin: Vec2, config: &VolumeBarConfig) -> Self {
        Self {
            origin,
            bar_width: config.bar_width,
            bar_height: config.max,
            corner_radius: config.corner_radius,
        }
    }

    pub fn track(&self) -> Rect {
        Rect {
            x: self.origin.x,
            y: self.origin.y,
            w: self.bar_width,
            h: self.bar_height,
        }
    }

    pub fn compute(&self, frame: &BarFrame) -> BarGeometry {
        let track = self.track();
        // The fill follows the live requested level, not the committed one.
        let fill_h = frame.requested.clamp(0.0, track.h);
        let fill = Rect {
            x: track.x,
            y: track.bottom() - fill_h,
            w: track.w,
            h: fill_h,
        };
        BarGeometry {
            track,
            fill,
            corner_radius: self.corner_radius,
            transform: Transform {
                anchor: track.center(),
                scale_x: frame.scale.x,
                scale_y: frame.scale.y,
                translate_y: frame.offset_y,
            },
        }
    }
}

/// Consumer of bar geometry, e.g. a GPU or terminal backend.
pub trait BarRenderer {
    fn draw(&mut self, geometry: &BarGeometry);
}

/// Draw the current frame now and again on every change. Returns the
/// subscription so the caller can detach later.
pub fn attach_renderer<R: BarRenderer + 'static>(
    controller: &VolumeBarController,
    layout: BarLayout,
    renderer: Rc<RefCell<R>>,
) -> SubId {
    renderer.borrow_mut().draw(&layout.compute(&controller.frame()));
    controller.subscribe_frames(move |frame| {
        renderer.borrow_mut().draw(&layout.compute(frame));
    })
}
