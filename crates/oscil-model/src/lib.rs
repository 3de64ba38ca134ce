//! Model and state types for the oscil simulator.
//!
//! `Params` is the physical description of the oscillator (kind, length, stiffness,
//! mass, gravity, damping). `State` is the mutable per-step data. `Oscillator` owns
//! both, plus the initial condition the run restarts from.

pub mod error;
pub mod kind;
pub mod oscillator;
pub mod params;
pub mod state;

pub use error::{ModelError, Result};
pub use kind::{Dynamics, OscillatorKind, PendulumDynamics, SpringDynamics};
pub use oscillator::Oscillator;
pub use params::{OscillatorConfig, Params, ParamsBuilder};
pub use state::State;

/// Standard gravity used by the simulator defaults (m/s²).
pub const GRAVITY: f64 = 9.8;

/// Smallest arm length used when scaling the drawing (m). Physics never sees it.
pub const MIN_DISPLAY_LENGTH: f64 = 0.5;
