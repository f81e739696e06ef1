use crate::error::ConfigError;

pub const DEFAULT_MAX: f32 = 300.0;
pub const DEFAULT_INITIAL: f32 = 50.0;
pub const DEFAULT_BAR_WIDTH: f32 = 100.0;
pub const DEFAULT_CORNER_RADIUS: f32 = 32.0;

/// The valid range `[0, max]` of the bar. `max` is also the bar's height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bound {
    max: f32,
}

impl Bound {
    pub fn new(max: f32) -> Result<Self, ConfigError> {
        if !max.is_finite() || max <= 0.0 {
            return Err(ConfigError::InvalidMax(max));
        }
        Ok(Self { max })
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn clamp(&self, v: f32) -> f32 {
        v.clamp(0.0, self.max)
    }

    pub fn contains(&self, v: f32) -> bool {
        (0.0..=self.max).contains(&v)
    }
}

/// Static setup of a volume bar.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeBarConfig {
    pub max: f32,
    pub initial: f32,
    pub bar_width: f32,
    pub corner_radius: f32,
}

impl Default for VolumeBarConfig {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX,
            initial: DEFAULT_INITIAL,
            bar_width: DEFAULT_BAR_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl VolumeBarConfig {
    pub fn with_max(mut self, max: f32) -> Self {
        self.max = max;
        self
    }
    pub fn with_initial(mut self, initial: f32) -> Self {
        self.initial = initial;
        self
    }
    pub fn with_bar_width(mut self, w: f32) -> Self {
        self.bar_width = w;
        self
    }
    pub fn with_corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    /// Check every field and hand back the value range.
    pub fn validate(&self) -> Result<Bound, ConfigError> {
        let bound = Bound::new(self.max)?;
        if !self.initial.is_finite() || !bound.contains(self.initial) {
            return Err(ConfigError::InitialOutOfRange {
                initial: self.initial,
                max: self.max,
            });
        }
        if !self.bar_width.is_finite() || self.bar_width <= 0.0 {
            return Err(ConfigError::InvalidWidth(self.bar_width));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ConfigError::InvalidCornerRadius(self.corner_radius));
        }
        Ok(bound)
    }
}
