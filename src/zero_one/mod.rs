//! 0/1 Knapsack via dynamic programming.
//!
//! Items are indivisible: each is taken whole or not at all. The solver
//! builds the textbook best-value table over (items × residual
//! capacity) and backtracks through it to recover which items were
//! taken. Exact in O(n · capacity) time and space.
//!
//! # References
//!
//! - Bellman (1957), "Dynamic Programming"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", ch. 2

mod config;
mod solver;
mod types;

pub use config::ZeroOneConfig;
pub use solver::{CapacityTooLarge, ZeroOneSolver};
pub use types::ZeroOneSolution;
