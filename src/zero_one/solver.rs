//! DP table construction and backtracking.

use thiserror::Error;

use super::config::ZeroOneConfig;
use super::types::ZeroOneSolution;
use crate::instance::ProblemInstance;

/// The DP table for an instance would exceed the configured ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dp table needs {cells} cells, exceeding the ceiling of {limit}")]
pub struct CapacityTooLarge {
    /// Cells the instance requires: `(n + 1) * (capacity + 1)`.
    pub cells: u64,
    /// The configured ceiling that was exceeded.
    pub limit: u64,
}

/// Solves the 0/1 knapsack problem exactly.
pub struct ZeroOneSolver;

impl ZeroOneSolver {
    /// Solves an instance with no table ceiling.
    ///
    /// Pure and infallible: a [`ProblemInstance`] is well-formed by
    /// construction, so there is no error path. When several optimal
    /// subsets exist, an item tied between taken and not taken is left
    /// out — the backtrack only records a take on a strict value
    /// difference.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_solve::instance::ProblemInstance;
    /// use knapsack_solve::zero_one::ZeroOneSolver;
    ///
    /// let instance = ProblemInstance::parse("50", "10 20 30", "60 100 120").unwrap();
    /// let solution = ZeroOneSolver::solve(&instance);
    /// assert_eq!(solution.max_value, 220);
    /// assert_eq!(solution.selected, vec![1, 2]);
    /// ```
    pub fn solve(instance: &ProblemInstance) -> ZeroOneSolution {
        let n = instance.item_count();
        let capacity = instance.capacity() as usize;
        let weights = instance.weights();
        let values = instance.values();

        // Flat row-major (n + 1) × (capacity + 1) table; row i holds the
        // best value achievable with the first i items.
        let width = capacity + 1;
        let mut dp = vec![0u64; (n + 1) * width];
        for i in 1..=n {
            let item_weight = weights[i - 1] as usize;
            let item_value = u64::from(values[i - 1]);
            let (prev_rows, rest) = dp.split_at_mut(i * width);
            let prev = &prev_rows[(i - 1) * width..];
            let row = &mut rest[..width];
            for w in 0..width {
                row[w] = if item_weight <= w {
                    prev[w].max(item_value + prev[w - item_weight])
                } else {
                    prev[w]
                };
            }
        }

        // Walk back from dp[n][capacity]: a value change at row i means
        // item i - 1 was taken. Equal values keep the item out.
        let mut selected = Vec::new();
        let mut w = capacity;
        for i in (1..=n).rev() {
            if dp[i * width + w] != dp[(i - 1) * width + w] {
                selected.push(i - 1);
                w -= weights[i - 1] as usize;
            }
        }
        selected.reverse();

        ZeroOneSolution {
            max_value: dp[n * width + capacity],
            selected,
        }
    }

    /// Like [`solve`](Self::solve), but refuses instances whose table
    /// would exceed `config.max_table_cells`.
    ///
    /// This is the hardened entry point for callers that pass through
    /// untrusted capacities: the rejection happens before any table
    /// memory is allocated.
    pub fn solve_with(
        instance: &ProblemInstance,
        config: &ZeroOneConfig,
    ) -> Result<ZeroOneSolution, CapacityTooLarge> {
        let cells = instance.table_cells();
        if config.max_table_cells > 0 && cells > config.max_table_cells {
            return Err(CapacityTooLarge {
                cells,
                limit: config.max_table_cells,
            });
        }
        Ok(Self::solve(instance))
    }
}
