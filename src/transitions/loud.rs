//! Loudness transitions between full scale and a nonzero decibel level.

use super::curve::{Transition, bend};
use crate::core::units::{db_to_amp, linspace};
use crate::error::{EnvelopeError, Result};

/// A monotonic move from amplitude 1.0 to `10^(deviation/20)`.
///
/// Unlike [`Fade`](super::Fade), the target is never exact silence, so no
/// zero-approach tail is needed. Decay segments use this to land on the
/// sustain level.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::LoudnessTransition;
///
/// let decay = LoudnessTransition::new(-20.0).render(5).unwrap();
/// assert_eq!(decay[0], 1.0);
/// assert!((decay[4] - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoudnessTransition {
    deviation: f64,
    transition: Transition,
    alpha: f64,
}

impl LoudnessTransition {
    /// Creates an exponential transition covering `deviation` decibels.
    ///
    /// # Arguments
    ///
    /// * `deviation` - Total loudness change in dB, usually negative
    pub fn new(deviation: f64) -> Self {
        Self {
            deviation,
            transition: Transition::Exponential,
            alpha: 1.0,
        }
    }

    /// Sets the transition family.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the shape exponent. Ignored by linear transitions.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Amplitude reached by the final sample.
    pub fn target(&self) -> f64 {
        db_to_amp(self.deviation)
    }

    /// Renders the transition over `samples` samples.
    ///
    /// The first sample is exactly 1.0; the last is the target amplitude.
    pub fn render(&self, samples: usize) -> Result<Vec<f64>> {
        if !self.deviation.is_finite() {
            return Err(EnvelopeError::InvalidLevel {
                name: "deviation",
                value: self.deviation,
            });
        }

        match self.transition {
            Transition::Linear => Ok(linspace(1.0, self.target(), samples)),
            Transition::Exponential => {
                let alpha = EnvelopeError::check_alpha(self.alpha)?;
                let last = samples.saturating_sub(1).max(1) as f64;
                Ok((0..samples)
                    .map(|i| db_to_amp(bend(i as f64 / last, alpha) * self.deviation))
                    .collect())
            }
        }
    }
}
