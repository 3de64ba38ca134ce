//! oscil — educational simulator for a single damped oscillator.
//!
//! This is the umbrella crate that provides the integrator and the
//! [`SimulationController`], and re-exports core types from sub-crates.
//!
//! A host supplies elapsed-time ticks. The controller clamps each delta, asks
//! the [`Solver`] to advance the [`Oscillator`], and stops itself once the
//! target number of cycles is complete.

pub mod controller;
pub mod event;
pub mod solver;

pub use controller::SimulationController;
pub use event::{CycleCompleted, SimEvent};
pub use solver::{SemiImplicitEulerSolver, Solver, is_zero_crossing};

pub use oscil_format::{self, ExperimentRecord, ResultsTable};
pub use oscil_guardian::{self, EnergyBaseline, EnergyMonitor, TickClamp};
pub use oscil_model::{
    self, ModelError, Oscillator, OscillatorConfig, OscillatorKind, Params, ParamsBuilder, State,
};
pub use oscil_world::{self, TrajectoryRecorder};
