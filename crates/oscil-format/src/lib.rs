//! File formats around the oscillator simulator.
//!
//! - `.json` oscillator specs: a named, versioned `OscillatorConfig`
//! - Experiment result tables: one row per saved run, exportable as CSV

pub mod error;
pub mod record;
pub mod schema;

pub use error::{FormatError, Result};
pub use record::{ExperimentRecord, ResultsTable, kind_label};
pub use schema::{OscillatorSpec, SPEC_VERSION, export_spec, load_spec, parse_spec};
