//! tk-transport: collision integrals for kinetic-theory transport properties.
//!
//! Provides:
//! - The Monchick–Mason tables of Ω(2,2)*, A*, B* and C* vs. (T*, δ*)
//! - Per-row polynomial fits across the reduced dipole moment δ*
//! - Quadratic interpolation in ln T* between tabulated rows
//! - Condensed polynomial fits in ln T* over a chosen temperature window
//!
//! # Example
//!
//! ```
//! use tk_transport::CollisionIntegrals;
//!
//! let ci = CollisionIntegrals::new(0.5, 50.0, 0)?;
//! let omega = ci.omega22(1.0, 0.0);
//! assert!((omega - 1.5929).abs() < 1e-12);
//!
//! let coeffs = ci.fit_omega22(6, 0.0)?;
//! assert_eq!(coeffs.len(), 7);
//! # Ok::<(), tk_transport::TransportError>(())
//! ```

pub mod collision;
pub mod error;
pub mod interp;
pub mod tables;

pub use collision::{CollisionIntegrals, FitWindow, RatioFits, SHAPE_FIT_DEGREE};
pub use error::{TransportError, TransportResult};
pub use interp::quad_interp;
pub use tables::{CollisionQuantity, DELTA_STAR, TSTAR_GRID};
