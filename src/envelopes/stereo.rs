//! Applying one ADSR envelope to both channels of a stereo sound.

use super::adsr::Adsr;
use super::config::AdsrConfig;
use crate::error::{EnvelopeError, Result};

/// What a stereo envelope is rendered for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StereoSource<'a> {
    /// Render the bare envelope on both rows.
    Envelope,
    /// Shape each channel with the same envelope.
    Signal { left: &'a [f64], right: &'a [f64] },
}

/// Two equally long rows of samples: row 0 is left, row 1 is right.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::StereoBuffer;
///
/// let stereo = StereoBuffer::new(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
/// assert_eq!(stereo.row(1), Some(&[3.0, 4.0][..]));
/// assert_eq!(stereo.interleaved(), vec![1.0, 3.0, 2.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StereoBuffer {
    rows: [Vec<f64>; 2],
}

impl StereoBuffer {
    /// Stacks two channels; they must have the same length.
    pub fn new(left: Vec<f64>, right: Vec<f64>) -> Result<Self> {
        if left.len() != right.len() {
            return Err(EnvelopeError::ChannelLengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(Self { rows: [left, right] })
    }

    /// First channel.
    pub fn left(&self) -> &[f64] {
        &self.rows[0]
    }

    /// Second channel.
    pub fn right(&self) -> &[f64] {
        &self.rows[1]
    }

    /// Row `index` (0 = left, 1 = right), if it exists.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Both rows, left first.
    ///
    /// # Examples
    ///
    /// ```
    /// use earworm_envelopes::StereoBuffer;
    ///
    /// let stereo = StereoBuffer::new(vec![0.1, 0.2], vec![0.3, 0.4]).unwrap();
    /// let [left, right] = stereo.rows();
    /// assert_eq!(left, &vec![0.1, 0.2]);
    /// assert_eq!(right.len(), 2);
    /// ```
    pub fn rows(&self) -> &[Vec<f64>; 2] {
        &self.rows
    }

    /// Consumes the buffer, returning both rows.
    pub fn into_rows(self) -> [Vec<f64>; 2] {
        self.rows
    }

    /// Samples per channel.
    pub fn len(&self) -> usize {
        self.rows[0].len()
    }

    /// Returns true if the channels hold no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frames in left-right order, as most audio file formats store them.
    pub fn interleaved(&self) -> Vec<f64> {
        self.rows[0]
            .iter()
            .zip(&self.rows[1])
            .flat_map(|(left, right)| [*left, *right])
            .collect()
    }
}

impl Adsr {
    /// Renders the envelope for both channels of a stereo sound.
    ///
    /// Each channel is shaped independently with this configuration.
    pub fn render_stereo(&self, source: StereoSource<'_>) -> Result<StereoBuffer> {
        match source {
            StereoSource::Envelope => {
                let envelope = self.envelope()?;
                tracing::debug!(samples = envelope.len(), "rendering stereo envelope");
                StereoBuffer::new(envelope.clone(), envelope)
            }
            StereoSource::Signal { left, right } => {
                if left.len() != right.len() {
                    return Err(EnvelopeError::ChannelLengthMismatch {
                        left: left.len(),
                        right: right.len(),
                    });
                }
                tracing::debug!(samples = left.len(), "shaping stereo channels");
                StereoBuffer::new(self.apply(left)?, self.apply(right)?)
            }
        }
    }
}

/// Renders a stereo ADSR envelope, or applies one to a stereo signal.
///
/// # Examples
///
/// ```
/// use earworm_envelopes::{adsr_stereo, AdsrConfig, StereoSource};
///
/// let left = vec![0.5; 4410];
/// let right = vec![-0.5; 4410];
/// let stereo = adsr_stereo(
///     &AdsrConfig::default(),
///     StereoSource::Signal { left: &left, right: &right },
/// )
/// .unwrap();
/// assert_eq!(stereo.len(), 4410);
/// assert_eq!(stereo.left()[2000], -stereo.right()[2000]);
/// ```
pub fn adsr_stereo(config: &AdsrConfig, source: StereoSource<'_>) -> Result<StereoBuffer> {
    Adsr::new(config.clone())?.render_stereo(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelopes::{Source, adsr};
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn debug_logs(render: impl FnOnce()) -> String {
        let logs = CapturedLogs(Arc::new(Mutex::new(Vec::new())));
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, render);
        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn config() -> AdsrConfig {
        AdsrConfig::new(5.0, 10.0, -3.0, 20.0)
            .with_sample_rate(1000)
            .with_samples(80)
    }

    #[test]
    fn test_rows_match_mono() {
        let left: Vec<f64> = (0..64).map(|i| (i as f64 * 0.3).sin()).collect();
        let right: Vec<f64> = (0..64).map(|i| (i as f64 * 0.7).cos()).collect();
        let stereo = adsr_stereo(
            &config(),
            StereoSource::Signal {
                left: &left,
                right: &right,
            },
        )
        .unwrap();

        assert_eq!(stereo.left(), adsr(&config(), Source::Signal(&left)).unwrap());
        assert_eq!(stereo.right(), adsr(&config(), Source::Signal(&right)).unwrap());
    }

    #[test]
    fn test_envelope_only() {
        let stereo = adsr_stereo(&config(), StereoSource::Envelope).unwrap();
        let mono = adsr(&config(), Source::Envelope).unwrap();
        assert_eq!(stereo.len(), 80);
        assert_eq!(stereo.row(0), Some(mono.as_slice()));
        assert_eq!(stereo.row(1), Some(mono.as_slice()));
        assert_eq!(stereo.row(2), None);
    }

    #[test]
    fn test_both_sources_log() {
        let envelope_logs = debug_logs(|| {
            adsr_stereo(&config(), StereoSource::Envelope).unwrap();
        });
        assert!(envelope_logs.contains("rendering stereo envelope"));

        let signal = vec![0.5; 80];
        let signal_logs = debug_logs(|| {
            adsr_stereo(
                &config(),
                StereoSource::Signal {
                    left: &signal,
                    right: &signal,
                },
            )
            .unwrap();
        });
        assert!(signal_logs.contains("shaping stereo channels"));
    }

    #[test]
    fn test_channel_length_mismatch() {
        let left = vec![1.0; 50];
        let right = vec![1.0; 51];
        assert_eq!(
            adsr_stereo(
                &config(),
                StereoSource::Signal {
                    left: &left,
                    right: &right
                }
            ),
            Err(EnvelopeError::ChannelLengthMismatch {
                left: 50,
                right: 51
            })
        );
        assert!(StereoBuffer::new(vec![0.0], vec![]).is_err());
    }

    #[test]
    fn test_short_channels_fail() {
        let short = vec![1.0; 20];
        assert!(matches!(
            adsr_stereo(
                &config(),
                StereoSource::Signal {
                    left: &short,
                    right: &short
                }
            ),
            Err(EnvelopeError::SegmentsExceedLength { total: 20, .. })
        ));
    }

    #[test]
    fn test_empty_stereo() {
        let stereo = adsr_stereo(
            &AdsrConfig::new(0.0, 0.0, -3.0, 0.0).with_duration(0.0),
            StereoSource::Envelope,
        )
        .unwrap();
        assert!(stereo.is_empty());
        assert!(stereo.interleaved().is_empty());
        let [left, right] = stereo.into_rows();
        assert!(left.is_empty() && right.is_empty());
    }
}
