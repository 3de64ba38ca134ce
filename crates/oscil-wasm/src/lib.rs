use wasm_bindgen::prelude::*;

use oscil::{
    OscillatorConfig, OscillatorKind, ParamsBuilder, ResultsTable, SimulationController,
    TrajectoryRecorder,
};

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ================================================================
// Oscillator driven by requestAnimationFrame
// ================================================================

/// One oscillator plus the chart window and result table of the page.
///
/// The page owns the timing source: each animation frame calls `tick` with
/// the elapsed seconds and stops requesting frames once it returns false.
#[wasm_bindgen]
pub struct WasmOscillator {
    ctrl: SimulationController,
    chart: TrajectoryRecorder,
    results: ResultsTable,
}

#[wasm_bindgen]
impl WasmOscillator {
    /// Default pendulum: 1 m arm, 30°, 10 cycles.
    pub fn pendulum() -> WasmOscillator {
        Self::from_config(OscillatorConfig::default())
    }

    /// Default spring: 40 N/m, 20 cm, 10 cycles.
    pub fn spring() -> WasmOscillator {
        let config = OscillatorConfig::new(ParamsBuilder::spring().build(), 90.0, 10);
        Self::from_config(config)
    }

    /// Apply the slider values. `length_cm` is in centimetres.
    #[allow(clippy::too_many_arguments)]
    pub fn set_params(
        &mut self,
        kind: &str,
        length_cm: f64,
        stiffness: f64,
        mass: f64,
        gravity: f64,
        damping: f64,
        raw_displacement: f64,
        target_cycles: u32,
    ) -> Result<(), JsValue> {
        let kind: OscillatorKind = kind.parse().map_err(to_js)?;
        let params = ParamsBuilder::new()
            .kind(kind)
            .length(length_cm / 100.0)
            .stiffness(stiffness)
            .mass(mass)
            .gravity(gravity)
            .damping(damping)
            .build();
        self.ctrl
            .set_config(OscillatorConfig::new(params, raw_displacement, target_cycles))
            .map_err(to_js)?;
        if !self.ctrl.is_running() {
            self.chart.clear();
        }
        Ok(())
    }

    pub fn start(&mut self) {
        self.ctrl.start();
    }

    pub fn pause(&mut self) {
        self.ctrl.pause();
    }

    pub fn reset(&mut self) {
        self.ctrl.reset();
        self.chart.clear();
    }

    /// Advance by one animation frame. Returns whether the simulation is still
    /// running.
    pub fn tick(&mut self, dt_seconds: f64) -> bool {
        let was_running = self.ctrl.is_running();
        self.ctrl.tick(dt_seconds);
        if was_running {
            self.chart.record(self.ctrl.oscillator());
        }
        self.ctrl.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.ctrl.is_running()
    }

    pub fn displacement(&self) -> f64 {
        self.ctrl.displacement()
    }

    pub fn velocity(&self) -> f64 {
        self.ctrl.velocity()
    }

    pub fn time(&self) -> f64 {
        self.ctrl.elapsed_time()
    }

    pub fn cycles(&self) -> u32 {
        self.ctrl.completed_cycles()
    }

    /// Natural period, 0 when not computable.
    pub fn period(&self) -> f64 {
        self.ctrl.oscillator().period_or_zero()
    }

    pub fn frequency(&self) -> f64 {
        self.ctrl.natural_frequency()
    }

    pub fn total_energy(&self) -> f64 {
        self.ctrl.oscillator().total_energy()
    }

    /// Arm length for scaling the drawing (m, at least 0.5).
    pub fn display_length(&self) -> f64 {
        self.ctrl.oscillator().display_length()
    }

    pub fn chart_times(&self) -> Vec<f64> {
        self.chart.times()
    }

    pub fn chart_values(&self) -> Vec<f64> {
        self.chart.displacements()
    }

    /// Append the current setup to the result table; returns its row number.
    pub fn save_result(&mut self) -> usize {
        self.results.save(self.ctrl.oscillator()).run_index
    }

    pub fn results_csv(&self) -> String {
        self.results.to_csv()
    }
}

impl WasmOscillator {
    fn from_config(config: OscillatorConfig) -> WasmOscillator {
        WasmOscillator {
            ctrl: SimulationController::new(config).unwrap_or_default(),
            chart: TrajectoryRecorder::new(),
            results: ResultsTable::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_drive_until_target() {
        let mut sim = WasmOscillator::spring();
        sim.set_params("spring", 100.0, 40.0, 1.0, 9.8, 0.0, 90.0, 1)
            .unwrap();
        sim.start();
        let mut frames = 0;
        while sim.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 10_000);
        }
        assert_eq!(sim.cycles(), 1);
        assert!(!sim.chart_times().is_empty());
        assert_eq!(sim.chart_times().len(), sim.chart_values().len());
    }

    #[test]
    fn test_length_is_centimetres() {
        let mut sim = WasmOscillator::pendulum();
        sim.set_params("pendulum", 25.0, 40.0, 1.0, 9.8, 0.05, 30.0, 10)
            .unwrap();
        assert_eq!(sim.display_length(), 0.5);
        let expected = 2.0 * std::f64::consts::PI * (0.25f64 / 9.8).sqrt();
        assert!((sim.period() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_results_csv() {
        let mut sim = WasmOscillator::pendulum();
        assert_eq!(sim.save_result(), 1);
        assert_eq!(sim.save_result(), 2);
        assert_eq!(sim.results_csv().lines().count(), 3);
    }

    #[test]
    fn test_reset_clears_chart() {
        let mut sim = WasmOscillator::pendulum();
        sim.start();
        for _ in 0..30 {
            sim.tick(0.016);
        }
        sim.reset();
        assert!(sim.chart_times().is_empty());
        assert_eq!(sim.time(), 0.0);
    }
}
