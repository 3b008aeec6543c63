use thiserror::Error;

/// Errors reported by the fluid core
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FluidError {
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParams {
        field: &'static str,
        reason: String,
    },

    #[error("world bounds must be finite and positive, got {width} x {height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("particle {index} has a non-finite state after step {step}")]
    NonFinite { index: usize, step: u64 },
}

impl FluidError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            field,
            reason: reason.into(),
        }
    }
}
