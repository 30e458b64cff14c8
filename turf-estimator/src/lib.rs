//! Deterministic project estimation engine for artificial turf.
//!
//! Converts a rectangular project footprint (width x length in feet) into a
//! concrete bill of materials: rolls to order, linear footage, seam count and
//! tape, infill weight and bags, waste percentage and advisory notes.
//!
//! Turf is manufactured in rolls of a fixed width, so a project is first
//! decomposed into roll-width strips of cuttable lengths ([`strips`]), the
//! resulting cuts are assigned to the fewest practical physical rolls
//! ([`packing`]), and the outcome is summarized into a customer-facing
//! [`entities::ProjectEstimate`] by the [`Estimator`].
//!
//! Every call is a pure function of its inputs and the [`util::EstimatorConfig`];
//! nothing is cached or persisted between calls.

/// Entities to model a turf project and its estimate
pub mod entities;

/// The public entry point: orchestrates strip generation and roll packing into an estimate
pub mod estimator;

/// Exporting estimates out of this library
pub mod io;

/// Assignment of cuts to physical rolls
pub mod packing;

/// Decomposition of a project into roll-width strips and cuttable lengths
pub mod strips;

/// Helper functions which do not belong to any specific module
pub mod util;

mod errors;

#[doc(inline)]
pub use errors::EstimateError;

#[doc(inline)]
pub use estimator::Estimator;
