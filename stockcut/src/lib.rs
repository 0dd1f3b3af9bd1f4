//! The `stockcut` library: everything needed to model a one-dimensional cutting stock problem
//! for linear stock material (rebar, steel sections), independent of the packing heuristic.

/// Splitting runs longer than a stock bar into spliced segments
pub mod decompose;

/// Entities to model one-dimensional cutting stock problems
pub mod entities;

/// Errors raised on invalid stock specifications
pub mod error;

/// Importing problem instances into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
