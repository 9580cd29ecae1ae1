//! ADSR (Attack, Decay, Sustain, Release) envelope assembly.

use super::config::AdsrConfig;
use super::params::{FadeShape, SegmentShapes};
use crate::core::units::db_to_amp;
use crate::error::{EnvelopeError, Result};
use crate::transitions::{Fade, FadeDirection, LoudnessTransition};

/// What an envelope is rendered for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Source<'a> {
    /// Render the envelope on its own, at the configured length.
    Envelope,
    /// Shape this signal; its length becomes the envelope length.
    Signal(&'a [f64]),
}

/// Sample lengths of the four envelope segments.
///
/// The four lengths always add up to the envelope length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments {
    pub attack: usize,
    pub decay: usize,
    pub sustain: usize,
    pub release: usize,
}

impl Segments {
    /// Total envelope length in samples.
    pub fn total(&self) -> usize {
        self.attack + self.decay + self.sustain + self.release
    }
}

/// A validated ADSR envelope generator.
///
/// The envelope is rendered in one pass into a fresh buffer:
/// - **Attack**: fade-in from silence to full scale
/// - **Decay**: loudness transition from full scale to the sustain level
/// - **Sustain**: constant sustain amplitude for the remaining samples
/// - **Release**: fade-out from the sustain level to silence
///
/// # Examples
///
/// ```
/// use earworm_envelopes::{Adsr, AdsrConfig};
///
/// let adsr = Adsr::new(AdsrConfig::default().with_duration(0.5)).unwrap();
/// let envelope = adsr.envelope().unwrap();
/// assert_eq!(envelope.len(), 22050);
/// assert_eq!(envelope[0], 0.0);
/// assert_eq!(*envelope.last().unwrap(), 0.0);
///
/// let tone = vec![0.5; 1000];
/// let shaped = adsr.apply(&tone).unwrap();
/// assert_eq!(shaped.len(), 1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Adsr {
    config: AdsrConfig,
    shapes: SegmentShapes,
}

impl Adsr {
    /// Validates `config` and builds a generator from it.
    pub fn new(config: AdsrConfig) -> Result<Self> {
        config.validate()?;
        let shapes = config.shapes();
        Ok(Self { config, shapes })
    }

    /// The configuration this generator renders.
    pub fn config(&self) -> &AdsrConfig {
        &self.config
    }

    /// Splits an envelope of `total` samples into its four segments.
    ///
    /// Fails if attack, decay and release do not fit into `total`.
    ///
    /// # Examples
    ///
    /// ```
    /// use earworm_envelopes::{Adsr, AdsrConfig};
    ///
    /// let adsr = Adsr::new(AdsrConfig::new(10.0, 20.0, -6.0, 30.0).with_sample_rate(1000)).unwrap();
    /// let segments = adsr.segments(100).unwrap();
    /// assert_eq!((segments.attack, segments.decay, segments.sustain, segments.release), (10, 20, 40, 30));
    /// assert!(adsr.segments(50).is_err());
    /// ```
    pub fn segments(&self, total: usize) -> Result<Segments> {
        let [attack, decay, release] = self.config.segment_samples();
        let exceeded = EnvelopeError::SegmentsExceedLength {
            attack,
            decay,
            release,
            total,
        };
        // Huge durations saturate to usize::MAX, so the sum itself can overflow
        let sustain = attack
            .checked_add(decay)
            .and_then(|sum| sum.checked_add(release))
            .and_then(|sum| total.checked_sub(sum))
            .ok_or(exceeded)?;

        tracing::debug!(attack, decay, sustain, release, total, "derived ADSR segments");
        Ok(Segments {
            attack,
            decay,
            sustain,
            release,
        })
    }

    /// Renders the envelope at its configured length.
    pub fn envelope(&self) -> Result<Vec<f64>> {
        self.envelope_with_len(self.config.total_samples())
    }

    /// Renders the envelope over exactly `total` samples.
    pub fn envelope_with_len(&self, total: usize) -> Result<Vec<f64>> {
        let segments = self.segments(total)?;
        let [attack_ms, _, release_ms] = self.config.segment_durations();
        let sustain_amp = db_to_amp(self.config.sustain_level());

        let attack = self
            .fade(FadeDirection::In, self.shapes.attack, attack_ms)
            .render(segments.attack)?;
        let decay = LoudnessTransition::new(self.config.sustain_level())
            .with_transition(self.config.transition())
            .with_alpha(self.shapes.decay_alpha)
            .render(segments.decay)?;
        let release = self
            .fade(FadeDirection::Out, self.shapes.release, release_ms)
            .render(segments.release)?;

        let mut envelope = Vec::with_capacity(total);
        envelope.extend(attack);
        envelope.extend(decay);
        envelope.resize(envelope.len() + segments.sustain, sustain_amp);
        envelope.extend(release.into_iter().map(|level| level * sustain_amp));

        debug_assert_eq!(envelope.len(), segments.total());
        Ok(envelope)
    }

    /// Shapes `signal` with an envelope of the same length.
    pub fn apply(&self, signal: &[f64]) -> Result<Vec<f64>> {
        let envelope = self.envelope_with_len(signal.len())?;
        debug_assert_eq!(envelope.len(), signal.len());
        Ok(signal
            .iter()
            .zip(&envelope)
            .map(|(sample, level)| sample * level)
            .collect())
    }

    /// Renders the envelope alone or applied to a signal.
    pub fn render(&self, source: Source<'_>) -> Result<Vec<f64>> {
        match source {
            Source::Envelope => self.envelope(),
            Source::Signal(signal) => self.apply(signal),
        }
    }

    fn fade(&self, direction: FadeDirection, shape: FadeShape, segment_ms: f64) -> Fade {
        Fade::new(direction)
            .with_transition(self.config.transition())
            .with_alpha(shape.alpha)
            .with_floor_db(shape.floor_db)
            .with_zero_approach_duration(shape.to_zero_ms, segment_ms)
    }
}

/// Renders an ADSR envelope, or applies one to a signal.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::{adsr, AdsrConfig, Source};
///
/// let config = AdsrConfig::default().with_samples(4410);
/// let envelope = adsr(&config, Source::Envelope).unwrap();
/// assert_eq!(envelope.len(), 4410);
/// ```
pub fn adsr(config: &AdsrConfig, source: Source<'_>) -> Result<Vec<f64>> {
    Adsr::new(config.clone())?.render(source)
}

/// Applies an ADSR envelope to the buffer produced by `note`.
///
/// The configuration is validated before `note` runs.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::{adsr_with, AdsrConfig, ConstantSignal, Signal};
///
/// let shaped = adsr_with(&AdsrConfig::default(), || ConstantSignal(1.0).take_samples(8820)).unwrap();
/// assert_eq!(shaped.len(), 8820);
/// ```
pub fn adsr_with<F>(config: &AdsrConfig, note: F) -> Result<Vec<f64>>
where
    F: FnOnce() -> Vec<f64>,
{
    let adsr = Adsr::new(config.clone())?;
    adsr.apply(&note())
}

/// Renders a vibrato note and applies an ADSR envelope to it.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::{adsr_vibrato, AdsrConfig, VibratoNote};
///
/// let note = VibratoNote::new(440.0, 0.25);
/// let shaped = adsr_vibrato(&note, &AdsrConfig::default()).unwrap();
/// assert_eq!(shaped.len(), 11025);
/// ```
#[cfg(feature = "notes")]
pub fn adsr_vibrato(note: &crate::notes::VibratoNote, config: &AdsrConfig) -> Result<Vec<f64>> {
    let adsr = Adsr::new(config.clone())?;
    adsr.apply(&note.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transitions::Transition;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// 1 kHz keeps segment arithmetic readable: 1 ms == 1 sample.
    fn small_config() -> AdsrConfig {
        AdsrConfig::new(10.0, 20.0, -6.0, 30.0)
            .with_sample_rate(1000)
            .with_samples(100)
    }

    #[test]
    fn test_length_matches_segments() {
        let adsr = Adsr::new(small_config()).unwrap();
        let envelope = adsr.envelope().unwrap();
        let segments = adsr.segments(100).unwrap();
        assert_eq!(envelope.len(), 100);
        assert_eq!(segments.total(), 100);
        assert_eq!(segments.sustain, 40);
    }

    #[test]
    fn test_segment_boundaries() {
        let adsr = Adsr::new(small_config()).unwrap();
        let envelope = adsr.envelope().unwrap();
        let sustain = db_to_amp(-6.0);

        // Attack rises from silence to full scale
        assert_eq!(envelope[0], 0.0);
        assert_eq!(envelope[9], 1.0);
        // Decay leaves full scale and lands on the sustain level
        assert_eq!(envelope[10], 1.0);
        assert!(approx_eq(envelope[29], sustain));
        // Sustain holds
        assert!(envelope[30..70].iter().all(|level| *level == sustain));
        // Release starts from the sustain level and ends silent
        assert!(approx_eq(envelope[70], sustain));
        assert_eq!(envelope[99], 0.0);
    }

    #[test]
    fn test_release_scaled_by_sustain() {
        let config = small_config();
        let adsr = Adsr::new(config.clone()).unwrap();
        let envelope = adsr.envelope().unwrap();

        let release = Fade::fade_out()
            .with_zero_approach_duration(1.0, 30.0)
            .render(30)
            .unwrap();
        let sustain = db_to_amp(-6.0);
        for (level, fade) in envelope[70..].iter().zip(&release) {
            assert!(approx_eq(*level, fade * sustain));
        }
    }

    #[test]
    fn test_exceeding_segments_fail() {
        let config = AdsrConfig::new(3000.0, 3000.0, -5.0, 3000.0).with_duration(1.0);
        let adsr = Adsr::new(config).unwrap();
        assert_eq!(
            adsr.envelope(),
            Err(EnvelopeError::SegmentsExceedLength {
                attack: 132300,
                decay: 132300,
                release: 132300,
                total: 44100,
            })
        );
    }

    #[test]
    fn test_huge_segment_fails_instead_of_overflowing() {
        let config = AdsrConfig::new(1e300, 20.0, -5.0, 50.0);
        assert!(config.validate().is_ok());
        assert!(matches!(
            adsr(&config, Source::Envelope),
            Err(EnvelopeError::SegmentsExceedLength {
                attack: usize::MAX,
                total: 88200,
                ..
            })
        ));

        let both_ends = AdsrConfig::new(1e300, 0.0, -5.0, 1e300).with_samples(100);
        assert!(adsr(&both_ends, Source::Envelope).is_err());
    }

    #[test]
    fn test_fade_settings_follow_their_segment() {
        let config = small_config()
            .with_db_dev([-20.0, -80.0])
            .with_to_zero([2.0, 10.0]);
        let envelope = adsr(&config, Source::Envelope).unwrap();

        let attack = Fade::fade_in()
            .with_floor_db(-20.0)
            .with_zero_approach_duration(2.0, 10.0)
            .render(10)
            .unwrap();
        assert_eq!(envelope[..10], attack[..]);

        let sustain = db_to_amp(-6.0);
        let release: Vec<f64> = Fade::fade_out()
            .with_floor_db(-80.0)
            .with_zero_approach_duration(10.0, 30.0)
            .render(30)
            .unwrap()
            .into_iter()
            .map(|level| level * sustain)
            .collect();
        assert_eq!(envelope[70..], release[..]);
    }

    #[test]
    fn test_exact_fit_has_no_sustain() {
        let config = small_config().with_samples(60);
        let envelope = adsr(&config, Source::Envelope).unwrap();
        assert_eq!(envelope.len(), 60);
        assert!(approx_eq(envelope[30], db_to_amp(-6.0)));
    }

    #[test]
    fn test_apply_multiplies_signal() {
        let adsr = Adsr::new(small_config()).unwrap();
        let signal: Vec<f64> = (0..250).map(|i| (i as f64 * 0.1).sin()).collect();
        let shaped = adsr.apply(&signal).unwrap();
        let envelope = adsr.envelope_with_len(250).unwrap();
        assert_eq!(shaped.len(), 250);
        for ((out, sample), level) in shaped.iter().zip(&signal).zip(&envelope) {
            assert_eq!(*out, sample * level);
        }
    }

    #[test]
    fn test_signal_length_overrides_config() {
        let config = small_config().with_samples(5000);
        let signal = vec![1.0; 120];
        let shaped = adsr(&config, Source::Signal(&signal)).unwrap();
        assert_eq!(shaped.len(), 120);
    }

    #[test]
    fn test_signal_too_short_fails() {
        let signal = vec![1.0; 59];
        assert!(matches!(
            adsr(&small_config(), Source::Signal(&signal)),
            Err(EnvelopeError::SegmentsExceedLength { total: 59, .. })
        ));
    }

    #[test]
    fn test_zero_length_envelope() {
        let config = AdsrConfig::new(0.0, 0.0, -5.0, 0.0).with_duration(0.0);
        assert!(adsr(&config, Source::Envelope).unwrap().is_empty());
        assert!(adsr(&config, Source::Signal(&[])).unwrap().is_empty());
    }

    #[test]
    fn test_zero_length_segments() {
        let config = AdsrConfig::new(0.0, 0.0, -20.0, 0.0)
            .with_sample_rate(1000)
            .with_samples(10);
        let envelope = adsr(&config, Source::Envelope).unwrap();
        assert!(envelope.iter().all(|level| approx_eq(*level, 0.1)));
    }

    #[test]
    fn test_linear_envelope() {
        let config = small_config().with_transition(Transition::Linear);
        let envelope = adsr(&config, Source::Envelope).unwrap();
        assert_eq!(envelope[0], 0.0);
        assert_eq!(envelope[9], 1.0);
        // Linear decay is evenly spaced in amplitude
        let step = envelope[11] - envelope[10];
        assert!(approx_eq(envelope[12] - envelope[11], step));
        assert_eq!(envelope[99], 0.0);
    }

    #[test]
    fn test_per_segment_alpha_changes_only_its_segment() {
        let plain = adsr(&small_config(), Source::Envelope).unwrap();
        let bent = adsr(
            &small_config().with_alpha([1.0, 3.0, 1.0]),
            Source::Envelope,
        )
        .unwrap();
        assert_eq!(plain[..10], bent[..10]);
        assert_ne!(plain[10..30], bent[10..30]);
        assert_eq!(plain[30..], bent[30..]);
    }

    #[test]
    fn test_invalid_config_rejected_before_note_runs() {
        let mut called = false;
        let result = adsr_with(&AdsrConfig::default().with_sample_rate(0), || {
            called = true;
            vec![0.0; 10]
        });
        assert_eq!(result, Err(EnvelopeError::InvalidSampleRate));
        assert!(!called);
    }
}
