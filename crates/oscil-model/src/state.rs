//! Simulation state — mutable per-step data.

/// Mutable simulation state of the single degree of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State {
    /// Generalized coordinate q (rad for a pendulum, m for a spring).
    pub displacement: f64,
    /// Generalized velocity dq/dt.
    pub velocity: f64,
    /// Simulation time since the last reset (s).
    pub time: f64,
    /// q at the previous step, only read by the zero-crossing test.
    pub last_displacement: f64,
    /// Sign changes of q through zero in the current measurement window.
    pub crossing_count: u32,
}

impl State {
    /// State at rest at `displacement` with every counter cleared.
    pub fn at_rest(displacement: f64) -> Self {
        Self {
            displacement,
            velocity: 0.0,
            time: 0.0,
            last_displacement: displacement,
            crossing_count: 0,
        }
    }

    /// Completed oscillations, `floor(crossing_count / 2)`.
    ///
    /// Two crossings make one period only when the run starts at an extremum
    /// with zero velocity, which is the only initial condition the simulator
    /// produces.
    pub fn completed_cycles(&self) -> u32 {
        self.crossing_count / 2
    }
}
