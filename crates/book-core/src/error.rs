use thiserror::Error;

/// Rejected tuning parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must lie in [{min}, {max}), got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("bounce jitter range is empty: min {min} > max {max}")]
    EmptyJitterRange { min: f32, max: f32 },
    #[error("bounce does not decay: restitution * jitter max * friction = {product} (must be < 1)")]
    NonConvergentBounce { product: f32 },
    #[error("orbit polar limits are inverted: min {min} > max {max}")]
    InvertedPolarLimits { min: f32, max: f32 },
    #[error("orbit radius limits are inverted: min {min} > max {max}")]
    InvertedRadiusLimits { min: f32, max: f32 },
}
