//! Note generators that envelopes can be applied to.
//!
//! Available with the `notes` feature (on by default).

mod vibrato;
mod waveform;

pub use vibrato::{VibratoNote, VibratoVoice};
pub use waveform::Waveform;
