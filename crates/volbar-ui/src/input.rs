use volbar_core::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn down(id: u64, position: Vec2) -> Self {
        Self {
            id: PointerId(id),
            event: PointerEventKind::Down(PointerButton::Primary),
            position,
        }
    }
    pub fn moved(id: u64, position: Vec2) -> Self {
        Self {
            id: PointerId(id),
            event: PointerEventKind::Move,
            position,
        }
    }
    pub fn up(id: u64, position: Vec2) -> Self {
        Self {
            id: PointerId(id),
            event: PointerEventKind::Up(PointerButton::Primary),
            position,
        }
    }
    pub fn cancel(id: u64, position: Vec2) -> Self {
        Self {
            id: PointerId(id),
            event: PointerEventKind::Cancel,
            position,
        }
    }
}
