//! Experiment result records and their CSV export.

use crate::error::Result;
use oscil_model::{Oscillator, OscillatorKind};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Column headers of the exported table.
pub const CSV_HEADER: [&str; 9] = [
    "N",
    "Cycles",
    "Type",
    "Length [cm]",
    "Mass [kg]",
    "Damping / Stiffness",
    "Initial displacement",
    "Period [s]",
    "Frequency [Hz]",
];

/// Label shown in the table's type column.
pub fn kind_label(kind: OscillatorKind) -> &'static str {
    match kind {
        OscillatorKind::Pendulum => "Matematik",
        OscillatorKind::Spring => "Prujinali",
    }
}

/// One saved run, read from the oscillator's query surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentRecord {
    /// 1-based row number.
    pub run_index: usize,
    pub target_cycles: u32,
    pub kind: OscillatorKind,
    pub length_cm: f64,
    pub mass: f64,
    /// Stiffness for a spring, damping for a pendulum.
    pub damping_or_stiffness: f64,
    /// Degrees for a pendulum, centimetres for a spring.
    pub initial_displacement_display: f64,
    /// Natural period, 0 when not computable.
    pub period: f64,
    pub frequency: f64,
}

impl ExperimentRecord {
    pub fn from_oscillator(run_index: usize, osc: &Oscillator) -> Self {
        let params = osc.params();
        let damping_or_stiffness = match osc.kind() {
            OscillatorKind::Spring => params.stiffness,
            OscillatorKind::Pendulum => params.damping,
        };
        Self {
            run_index,
            target_cycles: osc.target_cycles(),
            kind: osc.kind(),
            length_cm: params.length * 100.0,
            mass: params.mass,
            damping_or_stiffness,
            initial_displacement_display: osc.initial_displacement_display(),
            period: osc.period_or_zero(),
            frequency: osc.natural_frequency(),
        }
    }

    /// Table cells, formatted for display.
    pub fn cells(&self) -> [String; 9] {
        let coefficient = match self.kind {
            OscillatorKind::Spring => format!("{}", self.damping_or_stiffness),
            OscillatorKind::Pendulum => format!("{:.2}", self.damping_or_stiffness),
        };
        [
            self.run_index.to_string(),
            self.target_cycles.to_string(),
            kind_label(self.kind).to_string(),
            format!("{:.0}", self.length_cm),
            format!("{:.1}", self.mass),
            coefficient,
            format!("{:.1}", self.initial_displacement_display),
            format!("{:.3}", self.period),
            format!("{:.3}", self.frequency),
        ]
    }
}

/// Saved runs of the current session.
#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    records: Vec<ExperimentRecord>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row for the oscillator's current configuration.
    pub fn save(&mut self, osc: &Oscillator) -> &ExperimentRecord {
        let record = ExperimentRecord::from_oscillator(self.records.len() + 1, osc);
        info!(
            run = record.run_index,
            kind = %record.kind,
            period = record.period,
            "saved experiment result"
        );
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[ExperimentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Header plus one comma-joined line per record.
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.records.len() + 1);
        lines.push(CSV_HEADER.join(","));
        for record in &self.records {
            lines.push(record.cells().join(","));
        }
        lines.join("\n")
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_csv())?;
        Ok(())
    }
}
