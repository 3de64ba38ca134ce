//! Oscillator kinds and their equations of motion.
//!
//! Every kind-dependent formula lives behind [`Dynamics`]. The rest of the
//! workspace asks [`OscillatorKind::dynamics`] for the strategy and never matches
//! on the kind itself.

use crate::error::{ModelError, Result};
use crate::Params;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Largest magnitude of the raw spring displacement input (slider units).
pub const SPRING_INPUT_RANGE: f64 = 90.0;
/// Displacement in metres reached at the end of the spring input range.
pub const SPRING_MAX_DISPLACEMENT: f64 = 0.2;

/// Physics strategy for one oscillator kind.
///
/// `q` is the generalized coordinate (angle in rad or offset in m) and `v` its
/// time derivative.
pub trait Dynamics {
    /// Generalized acceleration d²q/dt².
    fn acceleration(&self, params: &Params, q: f64, v: f64) -> f64;

    /// Undamped small-oscillation period from the closed-form formula.
    fn natural_period(&self, params: &Params) -> Result<f64>;

    /// Kind-specific parameter checks on top of the shared ones.
    fn validate(&self, params: &Params) -> Result<()>;

    /// Map the raw UI input to an initial generalized coordinate.
    fn displacement_from_input(&self, raw: f64) -> f64;

    /// Convert a generalized coordinate to display units (degrees or cm).
    fn displacement_for_display(&self, q: f64) -> f64;

    fn kinetic_energy(&self, params: &Params, v: f64) -> f64;

    fn potential_energy(&self, params: &Params, q: f64) -> f64;
}

/// Simple (mathematical) pendulum with the full `sin q` restoring term.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendulumDynamics;

/// Linear mass-on-spring.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpringDynamics;

impl Dynamics for PendulumDynamics {
    fn acceleration(&self, params: &Params, q: f64, v: f64) -> f64 {
        -(params.damping / params.mass) * v - (params.gravity / params.length) * q.sin()
    }

    fn natural_period(&self, params: &Params) -> Result<f64> {
        if params.gravity <= 0.0 || params.length <= 0.0 {
            return Err(ModelError::UndefinedPeriod);
        }
        finite_period(2.0 * PI * (params.length / params.gravity).sqrt())
    }

    fn validate(&self, params: &Params) -> Result<()> {
        if params.length <= 0.0 {
            return Err(ModelError::invalid(
                "length",
                params.length,
                "pendulum length must be positive",
            ));
        }
        Ok(())
    }

    fn displacement_from_input(&self, raw: f64) -> f64 {
        raw * (PI / 180.0)
    }

    fn displacement_for_display(&self, q: f64) -> f64 {
        q * 180.0 / PI
    }

    fn kinetic_energy(&self, params: &Params, v: f64) -> f64 {
        let speed = params.length * v;
        0.5 * params.mass * speed * speed
    }

    fn potential_energy(&self, params: &Params, q: f64) -> f64 {
        params.mass * params.gravity * params.length * (1.0 - q.cos())
    }
}

impl Dynamics for SpringDynamics {
    fn acceleration(&self, params: &Params, q: f64, v: f64) -> f64 {
        -(params.stiffness / params.mass) * q - (params.damping / params.mass) * v
    }

    fn natural_period(&self, params: &Params) -> Result<f64> {
        if params.stiffness <= 0.0 || params.mass <= 0.0 {
            return Err(ModelError::UndefinedPeriod);
        }
        finite_period(2.0 * PI * (params.mass / params.stiffness).sqrt())
    }

    fn validate(&self, params: &Params) -> Result<()> {
        if params.stiffness <= 0.0 {
            return Err(ModelError::invalid(
                "stiffness",
                params.stiffness,
                "spring stiffness must be positive",
            ));
        }
        Ok(())
    }

    // Linear slider mapping: ±90 units -> ±0.2 m.
    fn displacement_from_input(&self, raw: f64) -> f64 {
        (raw / SPRING_INPUT_RANGE) * SPRING_MAX_DISPLACEMENT
    }

    fn displacement_for_display(&self, q: f64) -> f64 {
        q * 100.0
    }

    fn kinetic_energy(&self, params: &Params, v: f64) -> f64 {
        0.5 * params.mass * v * v
    }

    fn potential_energy(&self, params: &Params, q: f64) -> f64 {
        0.5 * params.stiffness * q * q
    }
}

fn finite_period(period: f64) -> Result<f64> {
    if period.is_finite() && period > 0.0 {
        Ok(period)
    } else {
        Err(ModelError::UndefinedPeriod)
    }
}

/// Which physical system the single degree of freedom describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OscillatorKind {
    #[default]
    Pendulum,
    Spring,
}

impl OscillatorKind {
    /// The physics strategy for this kind.
    pub fn dynamics(self) -> &'static dyn Dynamics {
        match self {
            OscillatorKind::Pendulum => &PendulumDynamics,
            OscillatorKind::Spring => &SpringDynamics,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OscillatorKind::Pendulum => "pendulum",
            OscillatorKind::Spring => "spring",
        }
    }
}

impl fmt::Display for OscillatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OscillatorKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pendulum" | "math" => Ok(OscillatorKind::Pendulum),
            "spring" => Ok(OscillatorKind::Spring),
            other => Err(format!("unknown oscillator kind: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamsBuilder;
    use approx::assert_relative_eq;

    #[test]
    fn test_pendulum_period_matches_formula() {
        let params = ParamsBuilder::pendulum().length(1.0).gravity(9.8).build();
        let period = PendulumDynamics.natural_period(&params).unwrap();
        assert_relative_eq!(period, 2.007, epsilon = 1e-3);
    }

    #[test]
    fn test_spring_period_matches_formula() {
        let params = ParamsBuilder::spring().mass(1.0).stiffness(40.0).build();
        let period = SpringDynamics.natural_period(&params).unwrap();
        assert_relative_eq!(period, 0.9935, epsilon = 1e-3);
    }

    #[test]
    fn test_period_undefined_for_zero_denominator() {
        let spring = ParamsBuilder::spring().stiffness(0.0).build();
        assert_eq!(
            SpringDynamics.natural_period(&spring),
            Err(ModelError::UndefinedPeriod)
        );

        let pendulum = ParamsBuilder::pendulum().gravity(0.0).build();
        assert_eq!(
            PendulumDynamics.natural_period(&pendulum),
            Err(ModelError::UndefinedPeriod)
        );

        let negative = ParamsBuilder::pendulum().length(-1.0).build();
        assert!(PendulumDynamics.natural_period(&negative).is_err());
    }

    #[test]
    fn test_pendulum_acceleration_is_nonlinear() {
        let params = ParamsBuilder::pendulum()
            .length(1.0)
            .gravity(9.8)
            .damping(0.0)
            .build();
        let q = std::f64::consts::FRAC_PI_2;
        // sin(π/2) = 1, small-angle would give π/2
        assert_relative_eq!(
            PendulumDynamics.acceleration(&params, q, 0.0),
            -9.8,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_spring_acceleration_with_damping() {
        let params = ParamsBuilder::spring()
            .mass(2.0)
            .stiffness(40.0)
            .damping(0.5)
            .build();
        // -(40/2)*0.1 - (0.5/2)*2.0 = -2.0 - 0.5
        assert_relative_eq!(
            SpringDynamics.acceleration(&params, 0.1, 2.0),
            -2.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_pendulum_energy() {
        let params = ParamsBuilder::pendulum()
            .mass(2.0)
            .gravity(9.8)
            .length(0.5)
            .build();
        // m·g·L·(1 − cos π/2) = 2 · 9.8 · 0.5
        assert_relative_eq!(
            PendulumDynamics.potential_energy(&params, PI / 2.0),
            9.8,
            epsilon = 1e-12
        );
        assert_eq!(PendulumDynamics.potential_energy(&params, 0.0), 0.0);
        // ½·m·(L·ω)² with L·ω = 1 m/s
        assert_relative_eq!(PendulumDynamics.kinetic_energy(&params, 2.0), 1.0);
    }

    #[test]
    fn test_input_mappings() {
        assert_relative_eq!(
            PendulumDynamics.displacement_from_input(30.0),
            PI / 6.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(SpringDynamics.displacement_from_input(90.0), 0.2);
        assert_relative_eq!(SpringDynamics.displacement_from_input(-45.0), -0.1);
        assert_relative_eq!(SpringDynamics.displacement_for_display(0.2), 20.0);
        assert_relative_eq!(
            PendulumDynamics.displacement_for_display(PI / 6.0),
            30.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_kind_parse_and_display() {
        assert_eq!("spring".parse::<OscillatorKind>(), Ok(OscillatorKind::Spring));
        assert_eq!("math".parse::<OscillatorKind>(), Ok(OscillatorKind::Pendulum));
        assert!("rotor".parse::<OscillatorKind>().is_err());
        assert_eq!(OscillatorKind::Spring.to_string(), "spring");
    }
}
