//! Earworm Envelopes - offline ADSR envelope synthesis for Rust
//!
//! This library renders Attack-Decay-Sustain-Release loudness envelopes into
//! sample buffers, either on their own or applied to an existing signal, and
//! exposes the fade and loudness transition curves they are built from.
//!
//! ```
//! use earworm_envelopes::{adsr, AdsrConfig, Source, Transition};
//!
//! let config = AdsrConfig::new(10.0, 40.0, -9.0, 120.0)
//!     .with_duration(0.5)
//!     .with_transition(Transition::Exponential);
//! let envelope = adsr(&config, Source::Envelope)?;
//! assert_eq!(envelope.len(), 22050);
//! # Ok::<(), earworm_envelopes::EnvelopeError>(())
//! ```

pub mod core;
pub mod envelopes;
pub mod error;
#[cfg(feature = "notes")]
pub mod notes;
pub mod transitions;

// Re-export commonly used types at the crate root
pub use crate::core::{ConstantSignal, Signal};
#[cfg(feature = "notes")]
pub use envelopes::adsr_vibrato;
pub use envelopes::{
    Adsr, AdsrConfig, Broadcast, Segments, Source, StereoBuffer, StereoSource, adsr, adsr_stereo,
    adsr_with,
};
pub use error::{EnvelopeError, Result};
#[cfg(feature = "notes")]
pub use notes::{VibratoNote, Waveform};
pub use transitions::{Fade, FadeDirection, LoudnessTransition, Transition};
