use thiserror::Error;

/// Rejected bar configuration. Raised once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("bar maximum must be finite and greater than zero, got {0}")]
    InvalidMax(f32),
    #[error("initial value {initial} lies outside [0, {max}]")]
    InitialOutOfRange { initial: f32, max: f32 },
    #[error("bar width must be finite and greater than zero, got {0}")]
    InvalidWidth(f32),
    #[error("corner radius must be finite and non-negative, got {0}")]
    InvalidCornerRadius(f32),
}
