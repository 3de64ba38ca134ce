//! JSON oscillator spec files.
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "name": "lab-2",
//!   "config": {
//!     "params": { "kind": "spring", "mass": 1.0, "stiffness": 40.0, "damping": 0.0 },
//!     "raw_displacement": 90.0,
//!     "target_cycles": 3
//!   }
//! }
//! ```

use crate::error::{FormatError, Result};
use oscil_model::OscillatorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Spec version written by [`export_spec`].
pub const SPEC_VERSION: &str = "1.0";

/// A named oscillator setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorSpec {
    pub version: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub config: OscillatorConfig,
}

impl OscillatorSpec {
    pub fn new(name: &str, config: OscillatorConfig) -> Self {
        Self {
            version: SPEC_VERSION.to_string(),
            name: name.to_string(),
            config,
        }
    }
}

/// Parse and validate a spec from a JSON string.
pub fn parse_spec(json: &str) -> Result<OscillatorSpec> {
    let spec: OscillatorSpec = serde_json::from_str(json)?;
    if spec.version.split('.').next() != Some("1") {
        return Err(FormatError::UnsupportedVersion(spec.version));
    }
    spec.config.validate()?;
    debug!(name = %spec.name, kind = %spec.config.params.kind, "loaded oscillator spec");
    Ok(spec)
}

/// Load and validate a spec file.
pub fn load_spec(path: impl AsRef<Path>) -> Result<OscillatorSpec> {
    let json = std::fs::read_to_string(path)?;
    parse_spec(&json)
}

/// Serialize a configuration as a spec document.
pub fn export_spec(config: &OscillatorConfig, name: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&OscillatorSpec::new(name, *config))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oscil_model::{OscillatorKind, ParamsBuilder};
    use std::io::Write;

    #[test]
    fn test_parse_spring_spec() {
        let json = r#"{
            "version": "1.0",
            "name": "lab-2",
            "config": {
                "params": { "kind": "spring", "mass": 1.0, "stiffness": 40.0, "damping": 0.0 },
                "raw_displacement": 90.0,
                "target_cycles": 3
            }
        }"#;
        let spec = parse_spec(json).unwrap();
        assert_eq!(spec.name, "lab-2");
        assert_eq!(spec.config.params.kind, OscillatorKind::Spring);
        assert_eq!(spec.config.target_cycles, 3);
        approx::assert_relative_eq!(spec.config.initial_displacement(), 0.2);
    }

    #[test]
    fn test_rejects_invalid_params() {
        let json = r#"{ "version": "1.0", "config": { "params": { "mass": 0.0 } } }"#;
        assert!(matches!(
            parse_spec(json),
            Err(FormatError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_version() {
        let json = r#"{ "version": "2.0" }"#;
        assert!(matches!(
            parse_spec(json),
            Err(FormatError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(parse_spec("{"), Err(FormatError::JsonError(_))));
    }

    #[test]
    fn test_export_then_load_file() {
        let config = OscillatorConfig::new(
            ParamsBuilder::pendulum().length(0.75).damping(0.1).build(),
            15.0,
            5,
        );
        let json = export_spec(&config, "short arm").unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let spec = load_spec(file.path()).unwrap();
        assert_eq!(spec.version, SPEC_VERSION);
        assert_eq!(spec.name, "short arm");
        assert_eq!(spec.config, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_spec("/nonexistent/oscillator.json"),
            Err(FormatError::IoError(_))
        ));
    }
}
