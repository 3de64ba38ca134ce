//! Guards around the integrator.
//!
//! This crate provides:
//! - Tick clamping: irregular host frame intervals are bounded before they reach
//!   the integrator
//! - Energy monitoring: relative drift of total mechanical energy against a baseline

pub mod conservation;
pub mod time_step;

pub use conservation::{EnergyBaseline, EnergyMonitor};
pub use time_step::{DEFAULT_MAX_DT, TickClamp};
