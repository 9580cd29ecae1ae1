//! ADSR envelope configuration.

use super::params::{Broadcast, SegmentShapes};
use crate::core::units::{ms_to_samples, secs_to_samples};
use crate::error::{EnvelopeError, Result};
use crate::transitions::Transition;

/// Settings for one ADSR envelope.
///
/// Segment durations are in milliseconds, the overall envelope duration in
/// seconds and levels in decibels relative to full scale. The defaults
/// describe a two second note with a 20 ms attack, 20 ms decay to -5 dB and
/// a 50 ms release.
///
/// Per-segment parameters take either one value or one value per segment:
/// `alpha` covers attack, decay and release; `db_dev` and `to_zero` cover
/// the two fades (attack and release).
///
/// # Examples
///
/// ```
/// use earworm_envelopes::{AdsrConfig, Transition};
///
/// let config = AdsrConfig::new(10.0, 50.0, -12.0, 200.0)
///     .with_duration(1.5)
///     .with_transition(Transition::Exponential)
///     .with_alpha([1.0, 2.0, 0.5])
///     .with_sample_rate(48000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdsrConfig {
    duration: f64,
    number_of_samples: Option<usize>,
    attack: f64,
    decay: f64,
    sustain_level: f64,
    release: f64,
    transition: Transition,
    alpha: Broadcast<3>,
    db_dev: Broadcast<2>,
    to_zero: Broadcast<2>,
    sample_rate: u32,
}

impl Default for AdsrConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            number_of_samples: None,
            attack: 20.0,
            decay: 20.0,
            sustain_level: -5.0,
            release: 50.0,
            transition: Transition::Exponential,
            alpha: Broadcast::Scalar(1.0),
            db_dev: Broadcast::Scalar(-80.0),
            to_zero: Broadcast::Scalar(1.0),
            sample_rate: 44100,
        }
    }
}

impl AdsrConfig {
    /// Creates a configuration with the given segment settings and defaults
    /// for everything else.
    ///
    /// # Arguments
    ///
    /// * `attack` - Attack duration in milliseconds
    /// * `decay` - Decay duration in milliseconds
    /// * `sustain_level` - Sustain level in dB, usually negative
    /// * `release` - Release duration in milliseconds
    pub fn new(attack: f64, decay: f64, sustain_level: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain_level,
            release,
            ..Self::default()
        }
    }

    /// Sets the envelope duration in seconds.
    ///
    /// Ignored when a nonzero sample count is set or a signal is shaped.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    /// Sets an explicit envelope length in samples.
    ///
    /// Zero means "derive the length from the duration".
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.number_of_samples = Some(samples);
        self
    }

    /// Sets the attack duration in milliseconds.
    pub fn with_attack(mut self, ms: f64) -> Self {
        self.attack = ms;
        self
    }

    /// Sets the decay duration in milliseconds.
    pub fn with_decay(mut self, ms: f64) -> Self {
        self.decay = ms;
        self
    }

    /// Sets the sustain level in decibels.
    pub fn with_sustain_level(mut self, db: f64) -> Self {
        self.sustain_level = db;
        self
    }

    /// Sets the release duration in milliseconds.
    pub fn with_release(mut self, ms: f64) -> Self {
        self.release = ms;
        self
    }

    /// Sets the transition family used by every segment.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the shape exponent for attack, decay and release.
    pub fn with_alpha(mut self, alpha: impl Into<Broadcast<3>>) -> Self {
        self.alpha = alpha.into();
        self
    }

    /// Sets the fade floor in dB for attack and release.
    pub fn with_db_dev(mut self, db_dev: impl Into<Broadcast<2>>) -> Self {
        self.db_dev = db_dev.into();
        self
    }

    /// Sets the zero-approach duration in milliseconds for attack and release.
    pub fn with_to_zero(mut self, to_zero: impl Into<Broadcast<2>>) -> Self {
        self.to_zero = to_zero.into();
        self
    }

    /// Sets the sample rate in Hz.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Sustain level in decibels.
    pub fn sustain_level(&self) -> f64 {
        self.sustain_level
    }

    /// Transition family used by every segment.
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Attack, decay and release durations in milliseconds.
    pub fn segment_durations(&self) -> [f64; 3] {
        [self.attack, self.decay, self.release]
    }

    /// Envelope length when no signal supplies one.
    pub fn total_samples(&self) -> usize {
        match self.number_of_samples {
            Some(samples) if samples > 0 => samples,
            _ => secs_to_samples(self.duration, self.sample_rate),
        }
    }

    /// Attack, decay and release lengths in samples.
    pub fn segment_samples(&self) -> [usize; 3] {
        self.segment_durations()
            .map(|ms| ms_to_samples(ms, self.sample_rate))
    }

    /// Checks every setting, without rendering anything.
    ///
    /// Segment lengths are only checked against the total once the total is
    /// known, since a shaped signal supplies its own length.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(EnvelopeError::InvalidSampleRate);
        }
        EnvelopeError::check_duration("envelope_duration", self.duration)?;
        EnvelopeError::check_duration("attack_duration", self.attack)?;
        EnvelopeError::check_duration("decay_duration", self.decay)?;
        EnvelopeError::check_duration("release_duration", self.release)?;

        if !self.sustain_level.is_finite() {
            return Err(EnvelopeError::InvalidLevel {
                name: "sustain_level",
                value: self.sustain_level,
            });
        }
        for alpha in self.alpha.resolve() {
            EnvelopeError::check_alpha(alpha)?;
        }
        for floor in self.db_dev.resolve() {
            if !(floor.is_finite() && floor < 0.0) {
                return Err(EnvelopeError::InvalidLevel {
                    name: "db_dev",
                    value: floor,
                });
            }
        }
        for to_zero in self.to_zero.resolve() {
            EnvelopeError::check_duration("to_zero", to_zero)?;
        }
        Ok(())
    }

    pub(crate) fn shapes(&self) -> SegmentShapes {
        SegmentShapes::resolve(&self.alpha, &self.db_dev, &self.to_zero)
    }
}
