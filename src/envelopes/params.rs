//! Parameters that apply either to every segment or to each one separately.

use crate::error::{EnvelopeError, Result};

/// A value shared by all `N` segments or given once per segment.
///
/// Envelope parameters such as the shape exponent can be set once for the
/// whole envelope or individually for attack, decay and release. The
/// variant is fixed when the parameter is built, so the assembler never
/// inspects shapes at runtime.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::Broadcast;
///
/// let shared: Broadcast<3> = 2.0.into();
/// assert_eq!(shared.resolve(), [2.0, 2.0, 2.0]);
///
/// let split: Broadcast<2> = [-60.0, -80.0].into();
/// assert_eq!(split.get(1), -80.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Broadcast<const N: usize> {
    /// One value used for every segment.
    Scalar(f64),
    /// One value per segment, in envelope order.
    PerSegment([f64; N]),
}

impl<const N: usize> Broadcast<N> {
    /// Builds a parameter from a caller-supplied list of values.
    ///
    /// A single value broadcasts to every segment; exactly `N` values are
    /// used per segment. Any other length is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use earworm_envelopes::{Broadcast, EnvelopeError};
    ///
    /// assert!(Broadcast::<3>::from_slice("alpha", &[1.0, 2.0, 3.0]).is_ok());
    /// assert_eq!(
    ///     Broadcast::<3>::from_slice("alpha", &[1.0, 2.0]),
    ///     Err(EnvelopeError::ArityMismatch { name: "alpha", expected: 3, found: 2 })
    /// );
    /// ```
    pub fn from_slice(name: &'static str, values: &[f64]) -> Result<Self> {
        if let [value] = values {
            return Ok(Broadcast::Scalar(*value));
        }
        <[f64; N]>::try_from(values)
            .map(Broadcast::PerSegment)
            .map_err(|_| EnvelopeError::ArityMismatch {
                name,
                expected: N,
                found: values.len(),
            })
    }

    /// Value for the segment at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn get(&self, index: usize) -> f64 {
        match self {
            Broadcast::Scalar(value) => *value,
            Broadcast::PerSegment(values) => values[index],
        }
    }

    /// Expands the parameter into one value per segment.
    pub fn resolve(&self) -> [f64; N] {
        std::array::from_fn(|i| self.get(i))
    }

    /// Returns true if one value is shared by every segment.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Broadcast::Scalar(_))
    }
}

impl<const N: usize> From<f64> for Broadcast<N> {
    fn from(value: f64) -> Self {
        Broadcast::Scalar(value)
    }
}

impl<const N: usize> From<[f64; N]> for Broadcast<N> {
    fn from(values: [f64; N]) -> Self {
        Broadcast::PerSegment(values)
    }
}

/// Curve settings for one fade segment after broadcasting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FadeShape {
    pub alpha: f64,
    pub floor_db: f64,
    pub to_zero_ms: f64,
}

/// Per-segment settings resolved once at the start of envelope assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SegmentShapes {
    pub attack: FadeShape,
    pub decay_alpha: f64,
    pub release: FadeShape,
}

impl SegmentShapes {
    pub fn resolve(alpha: &Broadcast<3>, db_dev: &Broadcast<2>, to_zero: &Broadcast<2>) -> Self {
        let [attack_alpha, decay_alpha, release_alpha] = alpha.resolve();
        let [attack_floor, release_floor] = db_dev.resolve();
        let [attack_to_zero, release_to_zero] = to_zero.resolve();
        Self {
            attack: FadeShape {
                alpha: attack_alpha,
                floor_db: attack_floor,
                to_zero_ms: attack_to_zero,
            },
            decay_alpha,
            release: FadeShape {
                alpha: release_alpha,
                floor_db: release_floor,
                to_zero_ms: release_to_zero,
            },
        }
    }
}
