//! Physical parameters and the full parameter-set input.

use crate::error::{ModelError, Result};
use crate::{GRAVITY, OscillatorKind};
use serde::{Deserialize, Serialize};

/// Physical description of the oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub kind: OscillatorKind,
    /// Pendulum arm length (m). For a spring it only sets the drawing scale.
    pub length: f64,
    /// Spring constant (N/m). Unused by the pendulum.
    pub stiffness: f64,
    /// Mass (kg).
    pub mass: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Linear drag coefficient.
    pub damping: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            kind: OscillatorKind::Pendulum,
            length: 1.0,
            stiffness: 40.0,
            mass: 1.0,
            gravity: GRAVITY,
            damping: 0.05,
        }
    }
}

impl Params {
    /// Check that every field is inside its physical domain.
    ///
    /// A valid set always has a computable natural period.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("length", self.length),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
            ("gravity", self.gravity),
            ("damping", self.damping),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ModelError::invalid(field, value, "value must be finite"));
            }
        }
        if self.mass <= 0.0 {
            return Err(ModelError::invalid("mass", self.mass, "mass must be positive"));
        }
        if self.gravity <= 0.0 {
            return Err(ModelError::invalid(
                "gravity",
                self.gravity,
                "gravity must be positive",
            ));
        }
        if self.damping < 0.0 {
            return Err(ModelError::invalid(
                "damping",
                self.damping,
                "damping must not be negative",
            ));
        }
        self.kind.dynamics().validate(self)
    }
}

/// Builder for constructing parameter sets.
pub struct ParamsBuilder {
    params: Params,
}

impl ParamsBuilder {
    /// Start from the defaults.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Defaults with the pendulum kind selected.
    pub fn pendulum() -> Self {
        Self::new().kind(OscillatorKind::Pendulum)
    }

    /// Defaults with the spring kind selected.
    pub fn spring() -> Self {
        Self::new().kind(OscillatorKind::Spring)
    }

    pub fn kind(mut self, kind: OscillatorKind) -> Self {
        self.params.kind = kind;
        self
    }

    pub fn length(mut self, length: f64) -> Self {
        self.params.length = length;
        self
    }

    pub fn stiffness(mut self, stiffness: f64) -> Self {
        self.params.stiffness = stiffness;
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.params.mass = mass;
        self
    }

    pub fn gravity(mut self, gravity: f64) -> Self {
        self.params.gravity = gravity;
        self
    }

    pub fn damping(mut self, damping: f64) -> Self {
        self.params.damping = damping;
        self
    }

    /// Build without validation. `Oscillator::new` validates.
    pub fn build(self) -> Params {
        self.params
    }
}

impl Default for ParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a host can set: physics, the raw initial-displacement input, and
/// the number of cycles after which the run stops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorConfig {
    pub params: Params,
    /// Initial displacement in UI units: degrees for a pendulum, slider units
    /// (±90 ↔ ±0.2 m) for a spring.
    pub raw_displacement: f64,
    pub target_cycles: u32,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            params: Params::default(),
            raw_displacement: 30.0,
            target_cycles: 10,
        }
    }
}

impl OscillatorConfig {
    pub fn new(params: Params, raw_displacement: f64, target_cycles: u32) -> Self {
        Self {
            params,
            raw_displacement,
            target_cycles,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        if !self.raw_displacement.is_finite() {
            return Err(ModelError::invalid(
                "raw_displacement",
                self.raw_displacement,
                "value must be finite",
            ));
        }
        Ok(())
    }

    /// Initial generalized coordinate implied by the raw input and the kind.
    pub fn initial_displacement(&self) -> f64 {
        self.params
            .kind
            .dynamics()
            .displacement_from_input(self.raw_displacement)
    }
}
