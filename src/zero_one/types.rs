//! 0/1 solution type.

/// Result of a 0/1 knapsack solve.
///
/// `selected` holds distinct item indices in ascending order; their
/// summed weight never exceeds the instance capacity, and their summed
/// value equals `max_value` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ZeroOneSolution {
    /// Best achievable total value.
    ///
    /// 64-bit so that sums of u32 item values cannot overflow.
    pub max_value: u64,

    /// Indices of the chosen items, ascending.
    pub selected: Vec<usize>,
}
