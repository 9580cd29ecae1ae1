//! Core signal trait and the constant signal source.
//!
//! Envelopes in this crate are rendered in one pass into owned buffers, but
//! the sources they shape (notes, test tones) are produced sample by sample.
//! The `Signal` trait is the seam between the two.

/// Common interface for anything that produces samples one at a time.
///
/// The trait provides three operations:
/// - Single sample generation via `next_sample()`
/// - Filling an existing buffer via `process()`
/// - Rendering a fresh buffer via `take_samples()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Renders the next `count` samples into a newly allocated buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use earworm_envelopes::{ConstantSignal, Signal};
    ///
    /// let mut dc = ConstantSignal(0.25);
    /// assert_eq!(dc.take_samples(3), vec![0.25, 0.25, 0.25]);
    /// ```
    fn take_samples(&mut self, count: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; count];
        self.process(&mut buffer);
        buffer
    }
}

/// A constant signal that always returns the same value.
///
/// Handy as a stand-in source: shaping `ConstantSignal(1.0)` with an
/// envelope yields the envelope itself.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::{ConstantSignal, Signal};
///
/// let mut constant = ConstantSignal(0.5);
/// assert_eq!(constant.next_sample(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal(pub f64);

impl Signal for ConstantSignal {
    fn next_sample(&mut self) -> f64 {
        self.0
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(self.0);
    }
}

impl From<f64> for ConstantSignal {
    fn from(value: f64) -> Self {
        ConstantSignal(value)
    }
}
