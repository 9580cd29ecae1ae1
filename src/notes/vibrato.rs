//! Notes whose pitch oscillates around a center frequency.

use super::waveform::Waveform;
use crate::core::Signal;
use crate::core::units::secs_to_samples;
use crate::error::{EnvelopeError, Result};

/// Description of a note with vibrato.
///
/// The pitch follows `frequency * 2^(v * max_pitch_deviation / 12)`, where
/// `v` is the vibrato waveform in `[-1, 1]`, so the deviation is measured
/// in semitones.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::notes::{VibratoNote, Waveform};
///
/// let note = VibratoNote::new(440.0, 0.5)
///     .with_vibrato(6.0, 0.5)
///     .with_waveform(Waveform::Sine);
/// let samples = note.render().unwrap();
/// assert_eq!(samples.len(), 22050);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VibratoNote {
    frequency: f64,
    duration: f64,
    vibrato_frequency: f64,
    max_pitch_deviation: f64,
    waveform: Waveform,
    vibrato_waveform: Waveform,
    sample_rate: u32,
}

impl Default for VibratoNote {
    fn default() -> Self {
        Self {
            frequency: 220.0,
            duration: 2.0,
            vibrato_frequency: 4.0,
            max_pitch_deviation: 2.0,
            waveform: Waveform::Triangle,
            vibrato_waveform: Waveform::Sine,
            sample_rate: 44100,
        }
    }
}

impl VibratoNote {
    /// Creates a note at `frequency` Hz lasting `duration` seconds.
    pub fn new(frequency: f64, duration: f64) -> Self {
        Self {
            frequency,
            duration,
            ..Self::default()
        }
    }

    /// Sets the vibrato rate in Hz and its depth in semitones.
    pub fn with_vibrato(mut self, frequency: f64, max_pitch_deviation: f64) -> Self {
        self.vibrato_frequency = frequency;
        self.max_pitch_deviation = max_pitch_deviation;
        self
    }

    /// Sets the waveform of the note itself.
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Sets the waveform that drives the pitch oscillation.
    pub fn with_vibrato_waveform(mut self, waveform: Waveform) -> Self {
        self.vibrato_waveform = waveform;
        self
    }

    /// Sets the sample rate in Hz.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Length of the rendered note in samples.
    pub fn samples(&self) -> usize {
        secs_to_samples(self.duration, self.sample_rate)
    }

    /// Checks the note settings.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(EnvelopeError::InvalidSampleRate);
        }
        EnvelopeError::check_duration("note_duration", self.duration)?;
        for (name, value) in [
            ("frequency", self.frequency),
            ("vibrato_frequency", self.vibrato_frequency),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(EnvelopeError::InvalidFrequency { name, value });
            }
        }
        if !self.max_pitch_deviation.is_finite() {
            return Err(EnvelopeError::InvalidLevel {
                name: "max_pitch_deviation",
                value: self.max_pitch_deviation,
            });
        }
        Ok(())
    }

    /// Starts a sample-by-sample voice for this note.
    pub fn voice(&self) -> Result<VibratoVoice> {
        self.validate()?;
        let sample_rate = f64::from(self.sample_rate);
        Ok(VibratoVoice {
            phase: 0.0,
            lfo_phase: 0.0,
            frequency: self.frequency,
            sample_rate,
            lfo_increment: self.vibrato_frequency / sample_rate,
            max_pitch_deviation: self.max_pitch_deviation,
            waveform: self.waveform,
            vibrato_waveform: self.vibrato_waveform,
        })
    }

    /// Renders the whole note.
    pub fn render(&self) -> Result<Vec<f64>> {
        let mut voice = self.voice()?;
        Ok(voice.take_samples(self.samples()))
    }
}

/// Running state of a [`VibratoNote`].
///
/// Produces the note indefinitely; [`VibratoNote::render`] stops it at the
/// note duration.
#[derive(Debug, Clone)]
pub struct VibratoVoice {
    /// Phase of the note waveform (0.0 to 1.0)
    phase: f64,
    /// Phase of the vibrato oscillation (0.0 to 1.0)
    lfo_phase: f64,
    frequency: f64,
    sample_rate: f64,
    lfo_increment: f64,
    max_pitch_deviation: f64,
    waveform: Waveform,
    vibrato_waveform: Waveform,
}

impl VibratoVoice {
    /// Frequency the next sample is produced at.
    pub fn instantaneous_frequency(&self) -> f64 {
        let offset = self.vibrato_waveform.at(self.lfo_phase) * self.max_pitch_deviation;
        self.frequency * 2f64.powf(offset / 12.0)
    }
}

impl Signal for VibratoVoice {
    fn next_sample(&mut self) -> f64 {
        let sample = self.waveform.at(self.phase);

        // Advance both phases and wrap to [0.0, 1.0)
        self.phase = (self.phase + self.instantaneous_frequency() / self.sample_rate).fract();
        self.lfo_phase = (self.lfo_phase + self.lfo_increment).fract();

        sample
    }
}
