//! The validated problem instance type.

use super::error::{Field, InputError};
use super::parse;

/// A well-formed knapsack problem instance.
///
/// Invariant: `weights.len() == values.len() >= 1`, every entry is
/// positive, and so is the capacity. The fields are private and every
/// constructor enforces the invariant, so holding a `ProblemInstance`
/// is proof the data is solvable. Instances are immutable; solvers
/// borrow them and never modify them.
///
/// # Examples
///
/// ```
/// use knapsack_solve::instance::ProblemInstance;
///
/// let instance = ProblemInstance::parse("50", "10, 20, 30", "60 100 120").unwrap();
/// assert_eq!(instance.capacity(), 50);
/// assert_eq!(instance.item_count(), 3);
///
/// assert!(ProblemInstance::parse("0", "10", "60").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProblemInstance {
    capacity: u32,
    weights: Vec<u32>,
    values: Vec<u32>,
}

impl ProblemInstance {
    /// Builds an instance from already-numeric data.
    ///
    /// Rejects a zero capacity, empty or zero-containing lists, and
    /// mismatched list lengths with the same errors the text path
    /// reports.
    pub fn new(capacity: u32, weights: Vec<u32>, values: Vec<u32>) -> Result<Self, InputError> {
        if capacity == 0 {
            return Err(InputError::NotPositive {
                field: Field::Capacity,
                value: 0,
            });
        }
        check_list(Field::Weights, &weights)?;
        check_list(Field::Values, &values)?;
        if weights.len() != values.len() {
            return Err(InputError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            capacity,
            weights,
            values,
        })
    }

    /// Parses the three raw text fields into an instance.
    ///
    /// Fields are checked in order — capacity, weights, values, then
    /// the length match — and the first violation is returned as an
    /// [`InputError`]. Lists split on any run of commas/whitespace.
    pub fn parse(
        capacity_text: &str,
        weights_text: &str,
        values_text: &str,
    ) -> Result<Self, InputError> {
        let capacity = parse::capacity_from_text(capacity_text)?;
        let weights = parse::list_from_text(Field::Weights, weights_text)?;
        let values = parse::list_from_text(Field::Values, values_text)?;
        Self::new(capacity, weights, values)
    }

    /// The weight budget.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Item weights, in input order.
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Item values, in input order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of items (`n`).
    pub fn item_count(&self) -> usize {
        self.weights.len()
    }

    /// DP table footprint for this instance: `(n + 1) * (capacity + 1)`
    /// cells. Used by the 0/1 solver's size ceiling.
    pub fn table_cells(&self) -> u64 {
        (self.weights.len() as u64 + 1) * (u64::from(self.capacity) + 1)
    }
}

fn check_list(field: Field, list: &[u32]) -> Result<(), InputError> {
    if list.is_empty() {
        return Err(InputError::Empty { field });
    }
    if let Some(&zero) = list.iter().find(|&&v| v == 0) {
        return Err(InputError::NotPositive {
            field,
            value: i64::from(zero),
        });
    }
    Ok(())
}
