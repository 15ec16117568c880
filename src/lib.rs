//! Exact and greedy solvers for the classic knapsack problems.
//!
//! Provides two textbook algorithms behind a validated input boundary:
//!
//! - **0/1 Knapsack**: select a subset of indivisible items maximizing
//!   value within a weight budget, solved by dynamic programming with
//!   backtracking to recover the chosen item set.
//! - **Fractional Knapsack**: items are divisible; solved greedily by
//!   value density, taking at most one trailing partial item.
//!
//! # Architecture
//!
//! The crate has three independent modules:
//!
//! - [`instance`]: parses and sanitizes raw text fields into an
//!   immutable [`ProblemInstance`](instance::ProblemInstance). This is
//!   the only place a recoverable error can arise.
//! - [`zero_one`]: the DP solver. Consumes a validated instance and
//!   returns the optimal value plus the selected indices.
//! - [`fractional`]: the greedy solver. Consumes a validated instance
//!   and returns the optimal value plus per-item fractions.
//!
//! Both solvers are pure, stateless, and re-entrant: each call builds
//! its own local table or ordering and returns a fresh result. There is
//! no I/O, no shared state, and no dependency on any presentation
//! layer — callers collect the text, render the solutions, and surface
//! validation messages however they like.

pub mod fractional;
pub mod instance;
pub mod zero_one;
