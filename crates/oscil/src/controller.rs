//! Run/pause/reset state machine driving the solver on host ticks.
//!
//! The controller is a plain synchronous state mutator. A host timing source
//! (display refresh callback, test loop, wasm binding) calls [`tick`] with the
//! raw elapsed time; nothing here blocks or spawns. All mutation of the
//! oscillator goes through one `&mut` borrow, so steps can never interleave.
//!
//! [`tick`]: SimulationController::tick

use crate::event::{CycleCompleted, SimEvent};
use crate::solver::{SemiImplicitEulerSolver, Solver};
use oscil_guardian::TickClamp;
use oscil_model::{ModelError, Oscillator, OscillatorConfig};
use tracing::{debug, info, warn};

/// Main simulation driver.
pub struct SimulationController {
    oscillator: Oscillator,
    solver: Box<dyn Solver>,
    clamp: TickClamp,
    running: bool,
}

impl SimulationController {
    /// Create an idle controller with the semi-implicit Euler solver.
    pub fn new(config: OscillatorConfig) -> Result<Self, ModelError> {
        Ok(Self::from_oscillator(Oscillator::new(config)?))
    }

    /// Wrap an existing oscillator.
    pub fn from_oscillator(oscillator: Oscillator) -> Self {
        Self {
            oscillator,
            solver: Box::new(SemiImplicitEulerSolver),
            clamp: TickClamp::default(),
            running: false,
        }
    }

    /// Replace the solver.
    pub fn with_solver(mut self, solver: Box<dyn Solver>) -> Self {
        self.solver = solver;
        self
    }

    /// Replace the tick clamp.
    pub fn with_clamp(mut self, clamp: TickClamp) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin stepping on ticks and open a new measurement window.
    ///
    /// No-op if already running. Counters restart even after a pause, so the
    /// next measurement is counted from the current position.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.oscillator.begin_measurement();
        info!(
            kind = %self.oscillator.kind(),
            target_cycles = self.oscillator.target_cycles(),
            time = self.oscillator.elapsed_time(),
            "simulation started"
        );
    }

    /// Stop stepping. Idempotent.
    pub fn pause(&mut self) {
        if self.running {
            debug!(time = self.oscillator.elapsed_time(), "simulation paused");
        }
        self.running = false;
    }

    /// Pause and return to the initial condition with t = 0 and counters cleared.
    pub fn reset(&mut self) {
        self.pause();
        self.oscillator.restore_initial_conditions();
        debug!(
            displacement = self.oscillator.displacement(),
            "simulation reset"
        );
    }

    /// Apply a new parameter set.
    ///
    /// While running, numeric parameters and the target take effect on the next
    /// step and the kind may not change. While idle the state returns to rest
    /// at the new initial displacement. Rejected sets leave everything as it was.
    ///
    /// Lowering the target to or below the cycles already completed stops the
    /// run immediately.
    pub fn set_config(&mut self, config: OscillatorConfig) -> Result<(), ModelError> {
        self.oscillator
            .apply_parameter_change(config, self.running)
            .inspect_err(|err| warn!(%err, "parameter change rejected"))?;

        let completed = self.oscillator.completed_cycles();
        if self.running && completed >= self.oscillator.target_cycles() {
            info!(
                completed_cycles = completed,
                target_cycles = self.oscillator.target_cycles(),
                "target lowered below completed cycles"
            );
            self.pause();
        }
        Ok(())
    }

    /// Handle one host tick of `raw_dt` seconds.
    ///
    /// Ignored while paused. The step is clamped to the tick clamp's maximum;
    /// degenerate deltas are dropped. If the step completes the target cycle
    /// count, the controller pauses before returning.
    pub fn tick(&mut self, raw_dt: f64) -> Vec<SimEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }
        let Some(dt) = self.clamp.clamp(raw_dt) else {
            return events;
        };

        if let Some(CycleCompleted(count)) = self.solver.step(&mut self.oscillator, dt) {
            debug!(
                completed_cycles = count,
                time = self.oscillator.elapsed_time(),
                "zero crossing"
            );
            events.push(SimEvent::CycleCompleted(count));
            if count >= self.oscillator.target_cycles() {
                self.pause();
                let elapsed_time = self.oscillator.elapsed_time();
                info!(
                    completed_cycles = count,
                    elapsed_time, "target cycles reached"
                );
                events.push(SimEvent::Stopped {
                    completed_cycles: count,
                    elapsed_time,
                });
            }
        }
        events
    }

    /// Generalized coordinate q.
    pub fn displacement(&self) -> f64 {
        self.oscillator.displacement()
    }

    pub fn velocity(&self) -> f64 {
        self.oscillator.velocity()
    }

    pub fn elapsed_time(&self) -> f64 {
        self.oscillator.elapsed_time()
    }

    pub fn completed_cycles(&self) -> u32 {
        self.oscillator.completed_cycles()
    }

    pub fn natural_period(&self) -> Result<f64, ModelError> {
        self.oscillator.natural_period()
    }

    pub fn natural_frequency(&self) -> f64 {
        self.oscillator.natural_frequency()
    }
}

impl Default for SimulationController {
    fn default() -> Self {
        Self::from_oscillator(Oscillator::default())
    }
}
