//! Greedy fill over the value-density ordering.

use super::types::{FractionalSolution, Selection};
use crate::instance::ProblemInstance;

/// Solves the fractional knapsack problem greedily.
pub struct FractionalSolver;

impl FractionalSolver {
    /// Solves an instance by descending value density.
    ///
    /// Pure and infallible. Whole items are taken while they fit; the
    /// first item that does not fit is taken fractionally and the fill
    /// stops. When the budget is consumed exactly by whole items, no
    /// fractional entry is emitted. Items with equal density are taken
    /// in input order (the sort is stable).
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_solve::fractional::FractionalSolver;
    /// use knapsack_solve::instance::ProblemInstance;
    ///
    /// let instance = ProblemInstance::parse("50", "10 20 30", "60 100 120").unwrap();
    /// let solution = FractionalSolver::solve(&instance);
    /// assert_eq!(solution.max_value, 240.0);
    /// ```
    pub fn solve(instance: &ProblemInstance) -> FractionalSolution {
        let weights = instance.weights();
        let values = instance.values();

        let ratio = |i: usize| f64::from(values[i]) / f64::from(weights[i]);
        let mut order: Vec<usize> = (0..instance.item_count()).collect();
        order.sort_by(|&a, &b| ratio(b).total_cmp(&ratio(a)));

        let mut remaining = instance.capacity();
        let mut max_value = 0.0;
        let mut selections = Vec::new();
        for index in order {
            if remaining == 0 {
                break;
            }
            let weight = weights[index];
            if weight <= remaining {
                remaining -= weight;
                max_value += f64::from(values[index]);
                selections.push(Selection {
                    index,
                    fraction: 1.0,
                });
            } else {
                let fraction = f64::from(remaining) / f64::from(weight);
                max_value += fraction * f64::from(values[index]);
                selections.push(Selection { index, fraction });
                break;
            }
        }

        FractionalSolution {
            max_value,
            selections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zero_one::ZeroOneSolver;
    use proptest::prelude::*;

    fn instance(capacity: u32, weights: Vec<u32>, values: Vec<u32>) -> ProblemInstance {
        ProblemInstance::new(capacity, weights, values).unwrap()
    }

    fn taken_weight(instance: &ProblemInstance, solution: &FractionalSolution) -> f64 {
        solution
            .selections
            .iter()
            .map(|s| s.fraction * f64::from(instance.weights()[s.index]))
            .sum()
    }

    #[test]
    fn test_classic_example() {
        // Densities 6.0, 5.0, 4.0: items 0 and 1 go in whole (30 of
        // 50), then 20/30 of item 2 for 60 + 100 + 80 = 240.
        let instance = instance(50, vec![10, 20, 30], vec![60, 100, 120]);
        let solution = FractionalSolver::solve(&instance);
        assert_eq!(solution.max_value, 240.0);
        assert_eq!(
            solution.selections,
            vec![
                Selection {
                    index: 0,
                    fraction: 1.0
                },
                Selection {
                    index: 1,
                    fraction: 1.0
                },
                Selection {
                    index: 2,
                    fraction: 2.0 / 3.0
                },
            ]
        );
    }

    #[test]
    fn test_everything_fits() {
        let instance = instance(100, vec![10, 20, 30], vec![60, 100, 120]);
        let solution = FractionalSolver::solve(&instance);
        assert_eq!(solution.max_value, 280.0);
        assert!(solution.selections.iter().all(|s| s.fraction == 1.0));
        // Density order: 6.0, 5.0, 4.0.
        let order: Vec<usize> = solution.selections.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_exact_fit_emits_no_fractional_entry() {
        // Items 0 and 1 consume the budget exactly; item 2 is cut off
        // at zero remaining capacity and must not appear.
        let instance = instance(30, vec![10, 20, 5], vec![60, 100, 1]);
        let solution = FractionalSolver::solve(&instance);
        assert_eq!(solution.max_value, 160.0);
        assert_eq!(solution.selections.len(), 2);
    }

    #[test]
    fn test_equal_density_keeps_input_order() {
        // Both items have density 2.0; the stable sort keeps index 0
        // ahead of index 1.
        let instance = instance(100, vec![2, 3], vec![4, 6]);
        let solution = FractionalSolver::solve(&instance);
        let order: Vec<usize> = solution.selections.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_single_item_partial_take() {
        let instance = instance(10, vec![40], vec![100]);
        let solution = FractionalSolver::solve(&instance);
        assert_eq!(solution.max_value, 25.0);
        assert_eq!(
            solution.selections,
            vec![Selection {
                index: 0,
                fraction: 0.25
            }]
        );
    }

    #[test]
    fn test_solve_is_idempotent() {
        let instance = instance(50, vec![10, 20, 30], vec![60, 100, 120]);
        let first = FractionalSolver::solve(&instance);
        let second = FractionalSolver::solve(&instance);
        assert_eq!(first, second);
    }

    fn small_instance() -> impl Strategy<Value = ProblemInstance> {
        (
            1u32..=60,
            proptest::collection::vec((1u32..=25, 1u32..=50), 1..=12),
        )
            .prop_map(|(capacity, items)| {
                let (weights, values) = items.into_iter().unzip();
                ProblemInstance::new(capacity, weights, values).unwrap()
            })
    }

    proptest! {
        #[test]
        fn prop_upper_bounds_zero_one(instance in small_instance()) {
            let fractional = FractionalSolver::solve(&instance);
            let exact = ZeroOneSolver::solve(&instance);
            prop_assert!(fractional.max_value >= exact.max_value as f64 - 1e-9);
        }

        #[test]
        fn prop_fill_respects_capacity(instance in small_instance()) {
            let solution = FractionalSolver::solve(&instance);
            let capacity = f64::from(instance.capacity());
            let used = taken_weight(&instance, &solution);
            prop_assert!(used <= capacity + 1e-9);

            // With enough total weight on offer, the budget is spent fully.
            let total: u64 = instance.weights().iter().map(|&w| u64::from(w)).sum();
            if total >= u64::from(instance.capacity()) {
                prop_assert!((used - capacity).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_fractions_in_unit_range_and_indices_distinct(instance in small_instance()) {
            let solution = FractionalSolver::solve(&instance);
            prop_assert!(solution
                .selections
                .iter()
                .all(|s| s.fraction > 0.0 && s.fraction <= 1.0));

            let mut indices: Vec<usize> =
                solution.selections.iter().map(|s| s.index).collect();
            indices.sort_unstable();
            indices.dedup();
            prop_assert_eq!(indices.len(), solution.selections.len());
        }
    }
}
