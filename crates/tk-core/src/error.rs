//! Errors raised by the numeric layer shared by the transport and thermo crates.

use thiserror::Error;

pub type TkResult<T> = Result<T, TkError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TkError {
    #[error("{what} is not finite ({value})")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be positive, got {value}")]
    NotPositive { what: &'static str, value: f64 },

    /// Samples, weights or degree that `polyfit` cannot use.
    #[error("bad fit input: {what}")]
    FitInput { what: &'static str },

    /// The least-squares system had no usable solution.
    #[error("singular least-squares system in {what}")]
    Singular { what: &'static str },

    /// A standard-state model rejected the requested state or definition.
    #[error("standard-state model error: {what}")]
    Model { what: &'static str },

    /// Property the model family does not provide.
    #[error("{what} is not provided by this model")]
    Unsupported { what: &'static str },

    #[error("{what} index {index} out of range ({len} entries)")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_quantity() {
        let err = TkError::NotPositive {
            what: "pressure",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "pressure must be positive, got -1");

        let err = TkError::IndexOob {
            what: "species",
            index: 3,
            len: 2,
        };
        assert_eq!(err.to_string(), "species index 3 out of range (2 entries)");

        let err = TkError::Unsupported {
            what: "critical temperature",
        };
        assert!(err.to_string().starts_with("critical temperature"));
    }
}
