//! Trajectory recording for the displacement chart.

use oscil_model::Oscillator;
use serde::Serialize;
use std::collections::VecDeque;

/// Sampling period of the chart (s).
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 0.1;
/// A tick is sampled when `time mod interval` falls below this window (s).
pub const DEFAULT_SAMPLE_WINDOW: f64 = 0.02;
/// Samples kept on screen; older ones scroll out.
pub const DEFAULT_MAX_SAMPLES: usize = 51;

/// One chart point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub time: f64,
    pub displacement: f64,
}

/// Records a sliding window of `(time, displacement)` at a reduced rate.
#[derive(Debug, Clone)]
pub struct TrajectoryRecorder {
    samples: VecDeque<Sample>,
    /// Sampling period.
    interval: f64,
    /// Acceptance window at the start of each period.
    window: f64,
    /// Capacity of the sliding window.
    max_samples: usize,
}

impl TrajectoryRecorder {
    /// Create a recorder with the chart defaults.
    pub fn new() -> Self {
        Self::with_rate(
            DEFAULT_SAMPLE_INTERVAL,
            DEFAULT_SAMPLE_WINDOW,
            DEFAULT_MAX_SAMPLES,
        )
    }

    /// Custom sampling rate.
    ///
    /// A non-positive or non-finite `interval` falls back to
    /// [`DEFAULT_SAMPLE_INTERVAL`], a non-finite `window` to
    /// [`DEFAULT_SAMPLE_WINDOW`], and the capacity is at least one sample.
    pub fn with_rate(interval: f64, window: f64, max_samples: usize) -> Self {
        let interval = if interval.is_finite() && interval > 0.0 {
            interval
        } else {
            DEFAULT_SAMPLE_INTERVAL
        };
        let window = if window.is_finite() {
            window
        } else {
            DEFAULT_SAMPLE_WINDOW
        };
        let max_samples = max_samples.max(1);
        Self {
            samples: VecDeque::with_capacity(max_samples + 1),
            interval,
            window,
            max_samples,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn window(&self) -> f64 {
        self.window
    }

    pub fn max_samples(&self) -> usize {
        self.max_samples
    }

    /// Offer the current state. Returns true if a sample was appended.
    pub fn record(&mut self, osc: &Oscillator) -> bool {
        self.record_point(osc.elapsed_time(), osc.displacement())
    }

    /// Offer a raw `(time, displacement)` point.
    pub fn record_point(&mut self, time: f64, displacement: f64) -> bool {
        if time % self.interval >= self.window {
            return false;
        }
        if self.samples.len() >= self.max_samples {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time, displacement });
        true
    }

    /// Samples oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn displacements(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.displacement).collect()
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop all samples (reset or new initial condition).
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Export to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.samples)
    }

    pub fn stats(&self) -> TrajectoryStats {
        match (self.samples.front(), self.samples.back()) {
            (Some(first), Some(last)) => TrajectoryStats {
                nsamples: self.samples.len(),
                duration: last.time - first.time,
                peak: self
                    .samples
                    .iter()
                    .map(|s| s.displacement.abs())
                    .fold(0.0, f64::max),
            },
            _ => TrajectoryStats::default(),
        }
    }
}

impl Default for TrajectoryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the recorded window.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrajectoryStats {
    pub nsamples: usize,
    /// Time spanned by the window (s).
    pub duration: f64,
    /// Largest |displacement| in the window.
    pub peak: f64,
}
