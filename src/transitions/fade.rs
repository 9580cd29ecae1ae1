//! Fades between exact silence and full scale.

use super::curve::Transition;
use super::loud::LoudnessTransition;
use crate::core::units::linspace;
use crate::error::{EnvelopeError, Result};

/// Which end of the fade is silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    /// Rises from silence to full scale.
    In,
    /// Falls from full scale to silence.
    Out,
}

/// A monotonic transition between exact zero and amplitude 1.0.
///
/// In the exponential family the loudness falls steadily until the
/// amplitude reaches the floor level (`floor_db` below full scale). A true
/// exponential never reaches zero, so the last `zero_approach` fraction of
/// the fade is a straight line from the floor to exact silence. Fade-ins
/// are the mirror image of the matching fade-out.
///
/// The zero-approach fraction is clamped to `[0, 1]`: `0` keeps the whole
/// fade exponential (ending on the floor, not on zero) and `1` makes it
/// entirely linear. It can be given as a ratio of two durations, in which
/// case the tail length is `samples * to_zero / duration` truncated.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::Fade;
///
/// let attack = Fade::fade_in().with_zero_approach(0.1).render(100).unwrap();
/// assert_eq!(attack[0], 0.0);
/// assert_eq!(attack[99], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    direction: FadeDirection,
    transition: Transition,
    alpha: f64,
    floor_db: f64,
    // Tail fraction kept as a ratio: `to_zero / span`
    to_zero: f64,
    span: f64,
}

impl Fade {
    /// Creates an exponential fade with a -80 dB floor and a 1% linear tail.
    pub fn new(direction: FadeDirection) -> Self {
        Self {
            direction,
            transition: Transition::Exponential,
            alpha: 1.0,
            floor_db: -80.0,
            to_zero: 0.01,
            span: 1.0,
        }
    }

    /// Shorthand for `Fade::new(FadeDirection::In)`.
    pub fn fade_in() -> Self {
        Self::new(FadeDirection::In)
    }

    /// Shorthand for `Fade::new(FadeDirection::Out)`.
    pub fn fade_out() -> Self {
        Self::new(FadeDirection::Out)
    }

    /// Sets the transition family.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the shape exponent of the exponential portion.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the level, in dB below full scale, where the linear tail takes over.
    pub fn with_floor_db(mut self, floor_db: f64) -> Self {
        self.floor_db = floor_db;
        self
    }

    /// Sets the fraction of the fade spent on the linear approach to zero.
    pub fn with_zero_approach(mut self, fraction: f64) -> Self {
        self.to_zero = fraction;
        self.span = 1.0;
        self
    }

    /// Sets the linear tail as `to_zero` out of a fade lasting `duration`.
    ///
    /// Both values share a unit, typically milliseconds. A zero `duration`
    /// makes any nonzero tail cover the whole fade.
    pub fn with_zero_approach_duration(mut self, to_zero: f64, duration: f64) -> Self {
        self.to_zero = to_zero;
        self.span = duration;
        self
    }

    /// Direction of this fade.
    ///
    /// # Examples
    ///
    /// ```
    /// use earworm_envelopes::{Fade, FadeDirection};
    ///
    /// assert_eq!(Fade::fade_in().direction(), FadeDirection::In);
    /// assert_eq!(Fade::new(FadeDirection::Out), Fade::fade_out());
    /// ```
    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    /// Renders the fade over `samples` samples.
    pub fn render(&self, samples: usize) -> Result<Vec<f64>> {
        let mut values = match self.transition {
            Transition::Linear => linspace(1.0, 0.0, samples),
            Transition::Exponential => self.exponential_out(samples)?,
        };
        if self.direction == FadeDirection::In {
            values.reverse();
        }
        Ok(values)
    }

    fn exponential_out(&self, samples: usize) -> Result<Vec<f64>> {
        if !(self.floor_db.is_finite() && self.floor_db < 0.0) {
            return Err(EnvelopeError::InvalidLevel {
                name: "db_dev",
                value: self.floor_db,
            });
        }
        EnvelopeError::check_alpha(self.alpha)?;
        if samples == 0 {
            return Ok(Vec::new());
        }

        let scaled = samples as f64 * self.to_zero / self.span;
        if scaled.is_nan() {
            return Err(EnvelopeError::InvalidFraction(self.to_zero / self.span));
        }

        let tail = scaled.clamp(0.0, samples as f64) as usize;
        let main = samples - tail;
        tracing::trace!(samples, main, tail, "split exponential fade");

        let mut values = LoudnessTransition::new(self.floor_db)
            .with_alpha(self.alpha)
            .render(main)?;
        match values.last().copied() {
            Some(floor) => values.extend(linspace(floor, 0.0, tail + 1).into_iter().skip(1)),
            None => values = linspace(1.0, 0.0, tail),
        }
        Ok(values)
    }
}
