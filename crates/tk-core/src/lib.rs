//! tk-core: shared numeric foundation for thermokin.
//!
//! Contains:
//! - units (uom SI types + constructors, molar gas constant)
//! - numeric (Real + tolerances + float helpers + Horner evaluation)
//! - fit (weighted least-squares polynomial fitting)
//! - error (shared error types)

pub mod error;
pub mod fit;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TkError, TkResult};
pub use fit::{PolyFit, Weights, polyfit};
pub use numeric::*;
pub use units::*;
