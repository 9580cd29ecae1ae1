//! Core signal types and unit conversions.
//!
//! This module provides the fundamental pieces used throughout the library:
//! - `Signal` trait for sample-by-sample sources
//! - `ConstantSignal` for fixed values
//! - `units` for decibel, duration and sample-count conversions

mod signal;
pub mod units;

pub use signal::{ConstantSignal, Signal};
