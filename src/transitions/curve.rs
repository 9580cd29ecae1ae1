//! Transition families shared by fades and loudness transitions.

/// How a transition moves between two amplitudes.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::Transition;
///
/// assert_eq!(Transition::default(), Transition::Exponential);
/// assert!(Transition::Linear.is_linear());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Amplitude changes by the same amount every sample.
    Linear,

    /// Loudness (decibels) changes at a steady rate, so amplitude moves
    /// exponentially. Bent further by the shape exponent.
    #[default]
    Exponential,
}

impl Transition {
    /// Returns true for the linear family.
    pub fn is_linear(&self) -> bool {
        matches!(self, Transition::Linear)
    }
}

/// Bends normalized progress `t` by the shape exponent `alpha`.
///
/// `alpha > 1` lingers near the start level, `alpha < 1` leaves it quickly.
pub(crate) fn bend(t: f64, alpha: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if alpha == 1.0 { t } else { t.powf(alpha) }
}
