//! Validated knapsack problem instances.
//!
//! A [`ProblemInstance`] can only be obtained through constructors that
//! enforce its invariant: a positive capacity and equal-length,
//! non-empty lists of positive item weights and values. The solvers in
//! [`crate::zero_one`] and [`crate::fractional`] rely on this and have
//! no error paths of their own.
//!
//! [`ProblemInstance::parse`] is the boundary for raw user input: it
//! accepts the three text fields as typed into a form and reports the
//! first violation as an [`InputError`] with a human-readable message.

mod error;
mod parse;
mod types;

pub use error::{Field, InputError};
pub use types::ProblemInstance;
