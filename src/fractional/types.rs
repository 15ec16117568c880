//! Fractional solution types.

/// One chosen item and how much of it was taken.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Selection {
    /// Index of the item in the instance.
    pub index: usize,

    /// Fraction taken, in (0, 1]. Only the last selection can be
    /// below 1.0.
    pub fraction: f64,
}

/// Result of a fractional knapsack solve.
///
/// `selections` is ordered by descending value density (ties keep
/// ascending input order) and contains each index at most once; a
/// zero-fraction entry is never emitted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FractionalSolution {
    /// Best achievable total value for the divisible relaxation.
    pub max_value: f64,

    /// The taken items with their fractions.
    pub selections: Vec<Selection>,
}
