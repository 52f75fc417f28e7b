//! Standard-state thermodynamics errors.

use thiserror::Error;
use tk_core::TkError;

/// Result type for standard-state operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors raised while configuring or evaluating standard states.
#[derive(Error, Debug)]
pub enum ThermoError {
    /// Malformed or missing model configuration. Raised at load time.
    #[error("Configuration error: {what}")]
    Config { what: String },

    /// Feature that this model family does not provide.
    #[error("Not implemented: {what}")]
    NotImplemented { what: &'static str },

    /// Caller-supplied state contradicts the model.
    #[error("Inconsistent state: {what}")]
    Inconsistent { what: String },

    /// Non-physical values (negative density, temperature, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Species index outside the phase.
    #[error("Species index out of bounds (index={index}, len={len})")]
    IndexOob { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] TkError),
}

impl ThermoError {
    pub(crate) fn config(what: impl Into<String>) -> Self {
        ThermoError::Config { what: what.into() }
    }
}

impl From<ThermoError> for TkError {
    fn from(err: ThermoError) -> Self {
        match err {
            ThermoError::Config { .. } => TkError::Model {
                what: "standard-state configuration",
            },
            ThermoError::NotImplemented { what } => TkError::Unsupported { what },
            ThermoError::Inconsistent { .. } => TkError::Model {
                what: "density does not match the molar volume",
            },
            ThermoError::NonPhysical { what } => TkError::Model { what },
            ThermoError::IndexOob { index, len } => TkError::IndexOob {
                what: "species",
                index,
                len,
            },
            ThermoError::Io(_) | ThermoError::Yaml(_) | ThermoError::Json(_) => TkError::Model {
                what: "phase definition file",
            },
            ThermoError::Core(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ThermoError::config("no standard state for species H2O(l)");
        assert!(err.to_string().contains("H2O(l)"));

        let err = ThermoError::NotImplemented {
            what: "critical temperature",
        };
        assert!(err.to_string().contains("critical"));
    }

    #[test]
    fn error_to_tk_error() {
        let err = ThermoError::IndexOob { index: 4, len: 2 };
        let core: TkError = err.into();
        assert!(matches!(core, TkError::IndexOob { index: 4, len: 2, .. }));

        let err = ThermoError::NotImplemented {
            what: "critical pressure",
        };
        assert_eq!(
            TkError::from(err),
            TkError::Unsupported {
                what: "critical pressure"
            }
        );
    }
}
