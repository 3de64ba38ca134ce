//! Time integration of the oscillator and zero-crossing detection.

use crate::event::CycleCompleted;
use oscil_model::Oscillator;

/// Pluggable solver trait.
///
/// Implementations define how to advance the oscillator by one timestep.
pub trait Solver {
    /// Advance the oscillator by `dt` (> 0) and report a counted zero-crossing.
    fn step(&self, osc: &mut Oscillator, dt: f64) -> Option<CycleCompleted>;
}

/// Semi-implicit Euler integrator.
///
/// Velocity is updated before position, which keeps the undamped energy error
/// bounded where explicit Euler would grow it every period.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEulerSolver;

impl Solver for SemiImplicitEulerSolver {
    fn step(&self, osc: &mut Oscillator, dt: f64) -> Option<CycleCompleted> {
        let accel = osc
            .dynamics()
            .acceleration(osc.params(), osc.state.displacement, osc.state.velocity);

        let state = &mut osc.state;
        state.velocity += accel * dt;
        state.displacement += state.velocity * dt;
        state.time += dt;

        let crossed = is_zero_crossing(state.last_displacement, state.displacement);
        state.last_displacement = state.displacement;

        if crossed {
            state.crossing_count += 1;
            Some(CycleCompleted(state.completed_cycles()))
        } else {
            None
        }
    }
}

/// Whether q passed through zero between two consecutive steps.
///
/// Landing exactly on zero counts; leaving zero does not.
pub fn is_zero_crossing(last: f64, current: f64) -> bool {
    (last > 0.0 && current <= 0.0) || (last < 0.0 && current >= 0.0)
}
