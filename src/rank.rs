use std::collections::HashMap;

use crate::cost::Cost;
use crate::solution::Solution;

/// A solution paired with what its boards cost together.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RankedSolution<'a> {
    /// The ranked solution.
    pub solution: &'a Solution,
    /// See [`Solution::total_cost`].
    pub total_cost: Cost,
}

/// Order `solutions` by [total cost](Solution::total_cost), cheapest first.
///
/// The sort is stable: solutions of equal cost keep their relative order from `solutions`.
pub fn rank_by_cost<'a>(solutions: &'a [Solution], board_costs: &HashMap<String, Cost>) -> Vec<RankedSolution<'a>> {
    let mut ranked: Vec<_> = solutions.iter()
        .map(|solution| RankedSolution { solution, total_cost: solution.total_cost(board_costs) })
        .collect();
    ranked.sort_by_key(|ranked| ranked.total_cost);
    ranked
}
