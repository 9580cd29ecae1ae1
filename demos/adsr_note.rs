//! Offline ADSR render demo.
//!
//! Renders a vibrato note, shapes both channels with a slow exponential ADSR
//! envelope and writes the result to a 16-bit stereo WAV file.
//!
//! Usage:
//!   cargo run --example adsr_note [output.wav]
//!
//! Set `RUST_LOG=debug` to see the derived segment lengths.

use anyhow::{Context, Result};
use earworm_envelopes::{AdsrConfig, StereoSource, Transition, VibratoNote, Waveform, adsr_stereo};
use tracing_subscriber::EnvFilter;

const SAMPLE_RATE: u32 = 44100;
const NOTE_FREQ: f64 = 220.0; // A3

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "adsr_note.wav".to_string());

    // Slightly different vibrato on each side for some width
    let left = VibratoNote::new(NOTE_FREQ, 3.0)
        .with_vibrato(4.0, 0.3)
        .with_sample_rate(SAMPLE_RATE)
        .render()?;
    let right = VibratoNote::new(NOTE_FREQ, 3.0)
        .with_vibrato(4.5, 0.3)
        .with_vibrato_waveform(Waveform::Triangle)
        .with_sample_rate(SAMPLE_RATE)
        .render()?;

    let config = AdsrConfig::new(400.0, 300.0, -12.0, 1200.0)
        .with_transition(Transition::Exponential)
        .with_alpha([1.0, 0.7, 1.6])
        .with_db_dev(-70.0)
        .with_to_zero([5.0, 40.0])
        .with_sample_rate(SAMPLE_RATE);
    let stereo = adsr_stereo(
        &config,
        StereoSource::Signal {
            left: &left,
            right: &right,
        },
    )?;

    let wav_spec = hound::WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer =
        hound::WavWriter::create(&path, wav_spec).with_context(|| format!("creating {path}"))?;
    for sample in stereo.interleaved() {
        let scaled = (sample.clamp(-1.0, 1.0) * f64::from(i16::MAX)) as i16;
        writer.write_sample(scaled)?;
    }
    writer.finalize()?;

    println!(
        "Wrote {} stereo frames ({:.2} s) to {}",
        stereo.len(),
        stereo.len() as f64 / f64::from(SAMPLE_RATE),
        path
    );
    Ok(())
}
