//! Unit conversions between decibels, amplitudes, durations and sample counts.
//!
//! Every duration-to-length conversion truncates toward zero, so a segment
//! never claims a sample it did not fully cover.

/// Converts a decibel difference into an amplitude ratio (`10^(db/20)`).
///
/// # Examples
///
/// ```
/// use earworm_envelopes::core::units::db_to_amp;
///
/// assert_eq!(db_to_amp(0.0), 1.0);
/// assert!((db_to_amp(-20.0) - 0.1).abs() < 1e-12);
/// ```
pub fn db_to_amp(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

/// Converts an amplitude ratio into a decibel difference (`20 log10(amp)`).
///
/// # Examples
///
/// ```
/// use earworm_envelopes::core::units::amp_to_db;
///
/// assert!((amp_to_db(0.5) + 6.0206).abs() < 1e-4);
/// ```
pub fn amp_to_db(amp: f64) -> f64 {
    20.0 * amp.log10()
}

/// Number of whole samples covered by `ms` milliseconds at `sample_rate` Hz.
pub fn ms_to_samples(ms: f64, sample_rate: u32) -> usize {
    (ms * f64::from(sample_rate) / 1000.0) as usize
}

/// Number of whole samples covered by `secs` seconds at `sample_rate` Hz.
pub fn secs_to_samples(secs: f64, sample_rate: u32) -> usize {
    (secs * f64::from(sample_rate)) as usize
}

/// `count` evenly spaced values from `start` to `end`, both included.
///
/// A single value is `start`; an empty request yields an empty buffer. The
/// final value is written as `end` exactly rather than accumulated.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::core::units::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(3.0, 1.0, 1), vec![3.0]);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = count - 1;
            let step = (end - start) / last as f64;
            (0..count)
                .map(|i| if i == last { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
