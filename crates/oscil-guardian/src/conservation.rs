//! Energy monitoring for the oscillator.
//!
//! Tracks drift of total mechanical energy to spot numerical instability. With
//! zero damping the semi-implicit Euler step keeps the drift bounded; it does
//! not remove it.

use oscil_model::Oscillator;

/// Baseline energy to measure drift against.
#[derive(Debug, Clone, Copy)]
pub struct EnergyBaseline {
    pub baseline_energy: f64,
}

impl EnergyBaseline {
    /// Capture the current total energy of the oscillator.
    pub fn new(osc: &Oscillator) -> Self {
        Self {
            baseline_energy: osc.total_energy(),
        }
    }
}

/// Energy error at the current step.
#[derive(Debug, Clone, Copy)]
pub struct EnergyMonitor {
    /// Total energy now.
    pub energy: f64,
    /// Relative energy error: |E - E₀| / |E₀|
    pub energy_error: f64,
}

impl EnergyMonitor {
    /// Compare current energy against the baseline.
    pub fn check(baseline: &EnergyBaseline, osc: &Oscillator) -> Self {
        let energy = osc.total_energy();

        // Relative energy error (avoid division by zero)
        let energy_error = if baseline.baseline_energy.abs() > 1e-12 {
            (energy - baseline.baseline_energy).abs() / baseline.baseline_energy.abs()
        } else {
            (energy - baseline.baseline_energy).abs()
        };

        Self {
            energy,
            energy_error,
        }
    }

    /// Whether the drift exceeds `tolerance`.
    pub fn is_violated(&self, tolerance: f64) -> bool {
        self.energy_error > tolerance
    }
}
