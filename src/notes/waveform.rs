//! Periodic waveforms evaluated at a normalized phase.

use std::f64::consts::PI;

/// Basic periodic waveform shapes.
///
/// Each shape maps a phase in `[0, 1)` to a value in `[-1, 1]`.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::notes::Waveform;
///
/// assert_eq!(Waveform::Sine.at(0.0), 0.0);
/// assert_eq!(Waveform::Triangle.at(0.5), 1.0);
/// assert_eq!(Waveform::Square.at(0.75), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    /// Sine wave, starting at zero and rising.
    #[default]
    Sine,
    /// Triangle wave: rises from -1 to 1 in the first half, falls back in the second.
    Triangle,
    /// Square wave: 1 for the first half, -1 for the second.
    Square,
    /// Sawtooth wave: ramps from -1 up to 1 once per period.
    Sawtooth,
}

impl Waveform {
    /// Value of the waveform at `phase`, wrapped into `[0, 1)`.
    pub fn at(&self, phase: f64) -> f64 {
        let phase = phase.rem_euclid(1.0);
        match self {
            Waveform::Sine => (phase * 2.0 * PI).sin(),
            Waveform::Triangle => {
                if phase < 0.5 {
                    4.0 * phase - 1.0
                } else {
                    3.0 - 4.0 * phase
                }
            }
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * phase - 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_sine_quarters() {
        assert!(approx_eq(Waveform::Sine.at(0.25), 1.0));
        assert!(approx_eq(Waveform::Sine.at(0.75), -1.0));
    }

    #[test]
    fn test_triangle_shape() {
        assert_eq!(Waveform::Triangle.at(0.0), -1.0);
        assert_eq!(Waveform::Triangle.at(0.25), 0.0);
        assert_eq!(Waveform::Triangle.at(0.5), 1.0);
        assert_eq!(Waveform::Triangle.at(0.75), 0.0);
    }

    #[test]
    fn test_sawtooth_ramp() {
        assert_eq!(Waveform::Sawtooth.at(0.0), -1.0);
        assert_eq!(Waveform::Sawtooth.at(0.5), 0.0);
    }

    #[test]
    fn test_phase_wraps() {
        for waveform in [Waveform::Sine, Waveform::Triangle, Waveform::Square, Waveform::Sawtooth] {
            assert!(approx_eq(waveform.at(1.3), waveform.at(0.3)));
            assert!(approx_eq(waveform.at(-0.2), waveform.at(0.8)));
        }
    }

    #[test]
    fn test_range() {
        for waveform in [Waveform::Sine, Waveform::Triangle, Waveform::Square, Waveform::Sawtooth] {
            for i in 0..100 {
                let value = waveform.at(i as f64 / 100.0);
                assert!((-1.0..=1.0).contains(&value));
            }
        }
    }
}
