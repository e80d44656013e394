//! Errors reported when configuring an animator or building a ring.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A closed spline needs enough points for every span to have
    /// distinct neighbors.
    #[error("a closed spline needs at least {min} points, got {count}")]
    TooFewPoints { count: usize, min: usize },
    #[error("segments per span must be at least 1")]
    NoSubdivisions,
    #[error("{what} must be finite and non-negative, got {value}")]
    InvalidWidth { what: &'static str, value: f64 },
    #[error("scale divisor must be finite and positive, got {0}")]
    InvalidScaleDivisor(f64),
    #[error("spline alpha must lie in 0..=1, got {0}")]
    InvalidAlpha(f64),
    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },
    /// The deformation can push points through the center of the ring.
    #[error("deformation radius can drop to {0}; it must stay non-negative")]
    NegativeRadius(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
