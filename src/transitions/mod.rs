//! Transition segment generators.
//!
//! This module provides the two monotonic building blocks envelopes are
//! assembled from:
//! - [`Fade`] moves between exact silence and full scale
//! - [`LoudnessTransition`] moves between full scale and a nonzero level
//!
//! Both come in a linear and an exponential-in-loudness [`Transition`] family.

mod curve;
mod fade;
mod loud;

pub use curve::Transition;
pub use fade::{Fade, FadeDirection};
pub use loud::LoudnessTransition;
