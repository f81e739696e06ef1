#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2 {
            x: self.x + self.w * 0.5,
            y: self.y + self.h * 0.5,
        }
    }
}

/// Scale about an anchor point, then translate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub anchor: Vec2,
    pub scale_x: f32,
    pub scale_y: f32,
    pub translate_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            anchor: Vec2::default(),
            scale_x: 1.0,
            scale_y: 1.0,
            translate_y: 0.0,
        }
    }

    pub fn apply_to_point(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: self.anchor.x + (p.x - self.anchor.x) * self.scale_x,
            y: self.anchor.y + (p.y - self.anchor.y) * self.scale_y + self.translate_y,
        }
    }

    pub fn apply_to_rect(&self, r: Rect) -> Rect {
        let p = self.apply_to_point(Vec2 { x: r.x, y: r.y });
        Rect {
            x: p.x,
            y: p.y,
            w: r.w * self.scale_x,
            h: r.h * self.scale_y,
        }
    }
}
