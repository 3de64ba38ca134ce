//! The oscillator instance: validated configuration plus live state.

use crate::error::{ModelError, Result};
use crate::{Dynamics, MIN_DISPLAY_LENGTH, OscillatorConfig, OscillatorKind, Params, State};

/// A single damped oscillator.
///
/// The configuration is always valid: every mutation goes through
/// [`Oscillator::apply_parameter_change`], which rejects bad input and keeps the
/// previous configuration.
#[derive(Debug, Clone)]
pub struct Oscillator {
    config: OscillatorConfig,
    /// q at t = 0, restored by a reset.
    initial_displacement: f64,
    /// Live state, advanced by the solver.
    pub state: State,
}

impl Oscillator {
    /// Create an oscillator at rest at the configured initial displacement.
    pub fn new(config: OscillatorConfig) -> Result<Self> {
        config.validate()?;
        let initial_displacement = config.initial_displacement();
        Ok(Self {
            config,
            initial_displacement,
            state: State::at_rest(initial_displacement),
        })
    }

    pub fn config(&self) -> &OscillatorConfig {
        &self.config
    }

    pub fn params(&self) -> &Params {
        &self.config.params
    }

    pub fn kind(&self) -> OscillatorKind {
        self.config.params.kind
    }

    pub fn dynamics(&self) -> &'static dyn Dynamics {
        self.config.params.kind.dynamics()
    }

    pub fn target_cycles(&self) -> u32 {
        self.config.target_cycles
    }

    pub fn initial_displacement(&self) -> f64 {
        self.initial_displacement
    }

    pub fn displacement(&self) -> f64 {
        self.state.displacement
    }

    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    pub fn elapsed_time(&self) -> f64 {
        self.state.time
    }

    pub fn completed_cycles(&self) -> u32 {
        self.state.completed_cycles()
    }

    /// Closed-form natural period (s).
    pub fn natural_period(&self) -> Result<f64> {
        self.dynamics().natural_period(&self.config.params)
    }

    /// `1 / natural_period()`, or 0 when the period is not computable.
    pub fn natural_frequency(&self) -> f64 {
        match self.natural_period() {
            Ok(period) if period > 0.0 => 1.0 / period,
            _ => 0.0,
        }
    }

    /// Natural period with 0 standing in for "not computable".
    pub fn period_or_zero(&self) -> f64 {
        self.natural_period().unwrap_or(0.0)
    }

    /// Apply a new parameter set.
    ///
    /// Numeric parameters and the cycle target always take effect. When
    /// `running` is false the initial condition is recomputed from the raw
    /// input and the state returns to rest there. While running the kind is
    /// locked and the state is left alone.
    pub fn apply_parameter_change(&mut self, config: OscillatorConfig, running: bool) -> Result<()> {
        config.validate()?;
        if running && config.params.kind != self.config.params.kind {
            return Err(ModelError::KindLocked {
                from: self.config.params.kind,
                to: config.params.kind,
            });
        }

        self.config = config;
        if !running {
            self.initial_displacement = config.initial_displacement();
            self.state = State::at_rest(self.initial_displacement);
        }
        Ok(())
    }

    /// Back to q = initial displacement, at rest, t = 0, counters cleared.
    pub fn restore_initial_conditions(&mut self) {
        self.state = State::at_rest(self.initial_displacement);
    }

    /// Open a new measurement window at the current position.
    pub fn begin_measurement(&mut self) {
        self.state.crossing_count = 0;
        self.state.last_displacement = self.state.displacement;
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.dynamics()
            .kinetic_energy(&self.config.params, self.state.velocity)
    }

    pub fn potential_energy(&self) -> f64 {
        self.dynamics()
            .potential_energy(&self.config.params, self.state.displacement)
    }

    /// Total mechanical energy (J).
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    /// Arm length used for drawing, never below [`MIN_DISPLAY_LENGTH`].
    pub fn display_length(&self) -> f64 {
        self.config.params.length.max(MIN_DISPLAY_LENGTH)
    }

    /// Initial displacement in display units (degrees or cm).
    pub fn initial_displacement_display(&self) -> f64 {
        self.dynamics()
            .displacement_for_display(self.initial_displacement)
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        let config = OscillatorConfig::default();
        let initial_displacement = config.initial_displacement();
        Self {
            config,
            initial_displacement,
            state: State::at_rest(initial_displacement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamsBuilder;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn spring_config() -> OscillatorConfig {
        OscillatorConfig::new(
            ParamsBuilder::spring().mass(1.0).stiffness(40.0).damping(0.0).build(),
            90.0,
            3,
        )
    }

    #[test]
    fn test_new_starts_at_rest() {
        let osc = Oscillator::new(OscillatorConfig::default()).unwrap();
        assert_relative_eq!(osc.displacement(), PI / 6.0, epsilon = 1e-12);
        assert_eq!(osc.velocity(), 0.0);
        assert_eq!(osc.elapsed_time(), 0.0);
        assert_eq!(osc.completed_cycles(), 0);
    }

    #[test]
    fn test_new_rejects_invalid() {
        let config = OscillatorConfig::new(ParamsBuilder::new().mass(0.0).build(), 30.0, 1);
        assert!(Oscillator::new(config).is_err());
    }

    #[test]
    fn test_frequency_is_inverse_period() {
        let osc = Oscillator::new(spring_config()).unwrap();
        let period = osc.natural_period().unwrap();
        assert_relative_eq!(osc.natural_frequency(), 1.0 / period, epsilon = 1e-12);
        assert_relative_eq!(osc.period_or_zero(), period);
    }

    #[test]
    fn test_parameter_change_while_idle_resets_state() {
        let mut osc = Oscillator::new(OscillatorConfig::default()).unwrap();
        osc.state.displacement = 0.01;
        osc.state.velocity = 1.5;
        osc.state.time = 3.0;
        osc.state.crossing_count = 4;

        osc.apply_parameter_change(spring_config(), false).unwrap();

        assert_eq!(osc.kind(), OscillatorKind::Spring);
        assert_relative_eq!(osc.initial_displacement(), 0.2);
        assert_eq!(osc.state, State::at_rest(0.2));
    }

    #[test]
    fn test_parameter_change_while_running_keeps_state() {
        let mut osc = Oscillator::new(OscillatorConfig::default()).unwrap();
        osc.state.displacement = 0.01;
        osc.state.velocity = 1.5;
        osc.state.time = 3.0;
        let before = osc.state;

        let mut config = *osc.config();
        config.params.mass = 2.5;
        config.raw_displacement = 10.0;
        config.target_cycles = 4;
        osc.apply_parameter_change(config, true).unwrap();

        assert_eq!(osc.state, before);
        assert_eq!(osc.params().mass, 2.5);
        assert_eq!(osc.target_cycles(), 4);
        assert_relative_eq!(osc.initial_displacement(), PI / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kind_locked_while_running() {
        let mut osc = Oscillator::new(OscillatorConfig::default()).unwrap();
        let before = *osc.config();
        let err = osc.apply_parameter_change(spring_config(), true).unwrap_err();
        assert!(matches!(err, ModelError::KindLocked { .. }));
        assert_eq!(*osc.config(), before);
    }

    #[test]
    fn test_invalid_change_keeps_previous_config() {
        let mut osc = Oscillator::new(spring_config()).unwrap();
        let before = *osc.config();
        let mut bad = before;
        bad.params.stiffness = 0.0;

        let err = osc.apply_parameter_change(bad, false).unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { .. }));
        assert_eq!(*osc.config(), before);
        assert!(osc.natural_period().is_ok());
    }

    #[test]
    fn test_spring_energy() {
        let osc = Oscillator::new(spring_config()).unwrap();
        // ½·40·0.2² = 0.8
        assert_relative_eq!(osc.total_energy(), 0.8, epsilon = 1e-12);
        assert_eq!(osc.kinetic_energy(), 0.0);
    }

    #[test]
    fn test_display_helpers() {
        let mut config = OscillatorConfig::default();
        config.params.length = 0.2;
        let osc = Oscillator::new(config).unwrap();
        assert_eq!(osc.display_length(), 0.5);
        assert_relative_eq!(osc.initial_displacement_display(), 30.0, epsilon = 1e-10);
        assert_relative_eq!(osc.natural_period().unwrap(), 2.0 * PI * (0.2f64 / 9.8).sqrt());
    }

    #[test]
    fn test_begin_measurement_clears_counters_only() {
        let mut osc = Oscillator::new(OscillatorConfig::default()).unwrap();
        osc.state.displacement = -0.2;
        osc.state.velocity = 0.4;
        osc.state.time = 1.0;
        osc.state.crossing_count = 3;
        osc.begin_measurement();
        assert_eq!(osc.state.crossing_count, 0);
        assert_eq!(osc.state.last_displacement, -0.2);
        assert_eq!(osc.state.velocity, 0.4);
        assert_eq!(osc.state.time, 1.0);
    }
}
