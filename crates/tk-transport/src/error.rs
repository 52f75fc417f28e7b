//! Transport property errors.

use thiserror::Error;
use tk_core::TkError;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur while building or querying collision integral fits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// Argument a collision-integral query cannot use.
    #[error("invalid collision-integral request: {what}")]
    InvalidArg { what: &'static str },

    /// Polynomial fit failed for a quantity.
    #[error("Fit failed for {quantity}: {source}")]
    Fit {
        quantity: &'static str,
        #[source]
        source: TkError,
    },
}
