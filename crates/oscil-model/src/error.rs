//! Error types for oscil-model.

use crate::OscillatorKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Natural period is undefined for the current parameters")]
    UndefinedPeriod,

    #[error("Cannot switch oscillator kind from {from} to {to} while running")]
    KindLocked {
        from: OscillatorKind,
        to: OscillatorKind,
    },
}

impl ModelError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            field,
            value,
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
