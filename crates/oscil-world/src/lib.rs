//! Observers of a running oscillator.
//!
//! The chart consumer does not plot every tick. [`TrajectoryRecorder`] keeps a
//! short sliding window of `(time, displacement)` samples taken at a reduced rate.

pub mod trajectory;

pub use trajectory::{
    DEFAULT_MAX_SAMPLES, DEFAULT_SAMPLE_INTERVAL, DEFAULT_SAMPLE_WINDOW, Sample,
    TrajectoryRecorder, TrajectoryStats,
};
