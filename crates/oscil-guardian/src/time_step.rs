//! Clamping of host-supplied tick intervals.

use tracing::trace;

/// Largest step the integrator ever takes (s).
pub const DEFAULT_MAX_DT: f64 = 0.1;

/// Bounds the raw delta between two host ticks.
///
/// A suspended host can deliver a huge interval after waking up. That is not an
/// error: the step is clamped to `max_dt`, trading short-term accuracy for a
/// bounded integration error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClamp {
    /// Maximum allowed timestep.
    pub max_dt: f64,
}

impl TickClamp {
    pub fn new(max_dt: f64) -> Self {
        Self { max_dt }
    }

    /// Step to integrate for a raw tick delta.
    ///
    /// Returns `None` for deltas the integrator must never see (zero, negative,
    /// NaN, infinite).
    pub fn clamp(&self, raw_dt: f64) -> Option<f64> {
        if !raw_dt.is_finite() || raw_dt <= 0.0 {
            trace!(raw_dt, "dropping non-positive tick");
            return None;
        }
        Some(raw_dt.min(self.max_dt))
    }
}

impl Default for TickClamp {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DT)
    }
}
