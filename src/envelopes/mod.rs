//! ADSR envelope assembly for mono and stereo buffers.
//!
//! An envelope is rendered in one pass from an [`AdsrConfig`]: attack and
//! release are [`Fade`](crate::Fade)s, decay is a
//! [`LoudnessTransition`](crate::LoudnessTransition) and sustain holds the
//! sustain amplitude for whatever length remains.

mod adsr;
mod config;
mod params;
mod stereo;

#[cfg(feature = "notes")]
pub use adsr::adsr_vibrato;
pub use adsr::{Adsr, Segments, Source, adsr, adsr_with};
pub use config::AdsrConfig;
pub use params::Broadcast;
pub use stereo::{StereoBuffer, StereoSource, adsr_stereo};
