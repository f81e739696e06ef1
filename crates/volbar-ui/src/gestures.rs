use std::rc::Rc;

use volbar_core::{Rect, Vec2, VolumeBarController};

use crate::input::*;

/// What a pointer event did to the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    Ignored,
    Started,
    /// New pending delta.
    Changed(f32),
    /// New committed value.
    Committed(f32),
}

/// Feeds a single pointer's vertical drag into a `VolumeBarController`.
///
/// A drag starts on a primary press inside `hit_rect`. While it runs, every
/// other pointer is ignored.
pub struct VerticalDragDetector {
    controller: Rc<VolumeBarController>,
    hit_rect: Rect,
    drag_start: Option<(PointerId, Vec2)>,
}

impl VerticalDragDetector {
    pub fn new(controller: Rc<VolumeBarController>, hit_rect: Rect) -> Self {
        Self {
            controller,
            hit_rect,
            drag_start: None,
        }
    }

    pub fn set_hit_rect(&mut self, rect: Rect) {
        self.hit_rect = rect;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> DragOutcome {
        match (event.event, self.drag_start) {
            (PointerEventKind::Down(PointerButton::Primary), None) => {
                if !self.hit_rect.contains(event.position) {
                    return DragOutcome::Ignored;
                }
                self.drag_start = Some((event.id, event.position));
                DragOutcome::Started
            }
            (PointerEventKind::Down(_), Some((id, _))) if id == event.id => {
                log::warn!("pointer {:?} pressed again mid-drag", event.id);
                DragOutcome::Ignored
            }
            (PointerEventKind::Move, Some((id, start))) if id == event.id => {
                DragOutcome::Changed(self.controller.drag_changed(start.y, event.position.y))
            }
            (PointerEventKind::Up(_), Some((id, _))) if id == event.id => {
                self.drag_start = None;
                DragOutcome::Committed(self.controller.drag_ended())
            }
            (PointerEventKind::Cancel, Some((id, _))) if id == event.id => {
                self.drag_start = None;
                DragOutcome::Committed(self.controller.drag_cancelled())
            }
            _ => DragOutcome::Ignored,
        }
    }
}
