//! `stage-dp`: a staged dynamic programming solver for the unbounded cargo loading problem.
//!
//! Given a capacity and a small set of item types (unit weight, unit value), the solver finds the
//! maximum total value of any loading and enumerates every loading that ties on the choice made
//! at the first stage.

/// Entities to model the cargo loading problem
pub mod entities;

/// Errors raised while validating an instance
pub mod error;

/// Importing problem instances into and exporting results out of this library
pub mod io;

/// The staged dynamic programming recurrence
pub mod solver;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::LoadError;

#[doc(inline)]
pub use solver::{solve, solve_items};
