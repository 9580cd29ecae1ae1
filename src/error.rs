//! Error type shared by every envelope and transition generator.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnvelopeError>;

/// Reasons an envelope or transition cannot be synthesized.
///
/// Every variant is raised before any sample buffer is allocated, so a
/// failed call never leaves a partially built envelope behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvelopeError {
    /// The sample rate was zero.
    #[error("sample rate must be a positive number of Hz")]
    InvalidSampleRate,

    /// A duration was negative, NaN or infinite.
    #[error("{name} must be a finite, non-negative duration (got {value})")]
    InvalidDuration { name: &'static str, value: f64 },

    /// Attack, decay and release together are longer than the envelope.
    #[error(
        "attack ({attack}) + decay ({decay}) + release ({release}) samples exceed the envelope length of {total} samples"
    )]
    SegmentsExceedLength {
        attack: usize,
        decay: usize,
        release: usize,
        total: usize,
    },

    /// A per-segment parameter list had the wrong number of values.
    #[error("{name} expects 1 or {expected} values (got {found})")]
    ArityMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    /// The curve shape exponent was not a finite positive number.
    #[error("shape exponent must be finite and greater than zero (got {0})")]
    InvalidShapeExponent(f64),

    /// A decibel level was unusable.
    #[error("{name} is not a usable decibel level (got {value})")]
    InvalidLevel { name: &'static str, value: f64 },

    /// The zero-approach fraction was NaN.
    #[error("zero-approach fraction must be a number (got {0})")]
    InvalidFraction(f64),

    /// Stereo channels of different lengths cannot be stacked.
    #[error("stereo channels differ in length ({left} vs {right} samples)")]
    ChannelLengthMismatch { left: usize, right: usize },

    /// A note generator frequency was negative or non-finite.
    #[error("{name} must be a finite, non-negative frequency (got {value})")]
    InvalidFrequency { name: &'static str, value: f64 },
}

impl EnvelopeError {
    /// Checks that `value` is a finite, non-negative duration.
    pub(crate) fn check_duration(name: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(EnvelopeError::InvalidDuration { name, value })
        }
    }

    /// Checks that `alpha` can bend a curve without breaking monotonicity.
    pub(crate) fn check_alpha(alpha: f64) -> Result<f64> {
        if alpha.is_finite() && alpha > 0.0 {
            Ok(alpha)
        } else {
            Err(EnvelopeError::InvalidShapeExponent(alpha))
        }
    }
}
