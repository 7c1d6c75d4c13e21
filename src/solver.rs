//! The solution enumerator: brute-force search over combinations of board modes.

use std::collections::{HashMap, HashSet};
use std::ops::Deref;
use std::sync::atomic::{AtomicBool, Ordering};

use itertools::Itertools;
use tracing::{debug, trace};

use crate::board::Catalog;
use crate::capacity::Capacity;
use crate::cost::Cost;
use crate::rank::{rank_by_cost, RankedSolution};
use crate::solution::{Selection, Solution};

/// Default cap on the number of solutions collected by one search.
pub const DEFAULT_MAX_SOLUTIONS: usize = 100;
/// Default cap on the number of selections in one combination.
pub const DEFAULT_MAX_COMBINATION_SIZE: usize = 5;

/// Bounds and options for one search; the [`Default`] allows 100 solutions of up to 5 selections, modes shared.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchLimits {
    /// Stop as soon as this many distinct solutions have been found.
    pub max_solutions: usize,
    /// Largest combination size tried, inclusive.
    pub max_combination_size: usize,
    /// Skip combinations that use more than one mode of the same board.
    ///
    /// Off by default: every `(board, mode)` pair is its own selectable unit and two modes of one board may be combined.
    pub exclusive_modes: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_solutions: DEFAULT_MAX_SOLUTIONS,
            max_combination_size: DEFAULT_MAX_COMBINATION_SIZE,
            exclusive_modes: false,
        }
    }
}

/// Why a search returned.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StopReason {
    /// Every combination up to the size limit was tried.
    Exhausted,
    /// [`SearchLimits::max_solutions`] solutions were found.
    SolutionLimit,
    /// The interrupt flag given to [`Enumerator::with_interrupt`] was raised.
    Interrupted,
}

/// Solutions found by a search, sorted by size and then lexicographically, plus why the search stopped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SolutionSet {
    solutions: Vec<Solution>,
    stop_reason: StopReason,
}

impl SolutionSet {
    fn new(mut solutions: Vec<Solution>, stop_reason: StopReason) -> Self {
        solutions.sort();
        Self { solutions, stop_reason }
    }

    /// Why the search that produced this set returned.
    pub fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }

    /// See [`rank_by_cost`].
    pub fn rank_by_cost(&self, board_costs: &HashMap<String, Cost>) -> Vec<RankedSolution<'_>> {
        rank_by_cost(&self.solutions, board_costs)
    }
}

impl Deref for SolutionSet {
    type Target = [Solution];

    fn deref(&self) -> &Self::Target {
        &self.solutions
    }
}

impl IntoIterator for SolutionSet {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

/// Brute-force search for combinations of board modes that cover a requirement.
///
/// The catalog is flattened into its `(board, mode)` selections once, on construction.
/// [`Self::enumerate`] then walks combinations of 1, 2, ... [`SearchLimits::max_combination_size`] selections
/// in index order and keeps each whose summed capacity [meets](Capacity::meets) the requirement.
///
/// Supersets of feasible combinations are not pruned; they are solutions in their own right.
pub struct Enumerator<'a> {
    selections: Vec<(Selection, &'a Capacity)>,
    limits: SearchLimits,
    stop_flag: Option<&'a AtomicBool>,
}

impl<'a> From<&'a Catalog> for Enumerator<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        Self {
            selections: catalog.selections().collect_vec(),
            limits: Default::default(),
            stop_flag: None,
        }
    }
}

impl<'a> Enumerator<'a> {
    /// Replace the [`SearchLimits`].
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Check `stop_flag` between combinations and return early once it is set.
    pub fn with_interrupt(mut self, stop_flag: &'a AtomicBool) -> Self {
        self.stop_flag = Some(stop_flag);
        self
    }

    #[inline]
    fn interrupted(&self) -> bool {
        self.stop_flag.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Find combinations covering `requirement`.
    ///
    /// Returns as soon as [`SearchLimits::max_solutions`] distinct solutions are known, possibly partway through a size.
    /// Whatever the reason for stopping, the returned set is sorted by size and then lexicographically.
    pub fn enumerate(&self, requirement: &Capacity) -> SolutionSet {
        debug!(selections = self.selections.len(), limits = ?self.limits, %requirement, "starting search");

        if self.limits.max_solutions == 0 {
            return Self::finish(Vec::new(), StopReason::SolutionLimit);
        }

        let mut solutions = Vec::new();
        let mut seen = HashSet::new();

        for size in 1..=self.limits.max_combination_size.min(self.selections.len()) {
            for combination in self.selections.iter().combinations(size) {
                if self.interrupted() {
                    return Self::finish(solutions, StopReason::Interrupted);
                }

                if self.limits.exclusive_modes && !combination.iter().map(|(selection, _)| selection.board()).all_unique() {
                    continue;
                }

                let total: Capacity = combination.iter().map(|(_, capacity)| *capacity).sum();
                if !total.meets(requirement) {
                    continue;
                }

                let solution = Solution::new(combination.iter().map(|(selection, _)| selection.clone()));
                if seen.insert(solution.clone()) {
                    trace!(%solution, %total, "found solution");
                    solutions.push(solution);

                    if solutions.len() >= self.limits.max_solutions {
                        return Self::finish(solutions, StopReason::SolutionLimit);
                    }
                }
            }
        }

        Self::finish(solutions, StopReason::Exhausted)
    }

    fn finish(solutions: Vec<Solution>, stop_reason: StopReason) -> SolutionSet {
        debug!(found = solutions.len(), ?stop_reason, "search finished");
        SolutionSet::new(solutions, stop_reason)
    }
}

/// Find up to `max_solutions` combinations of at most `max_combination_size` board modes from `catalog` covering `requirement`.
///
/// Shorthand for an [`Enumerator`] with default options otherwise.
pub fn enumerate(requirement: &Capacity, catalog: &Catalog, max_solutions: usize, max_combination_size: usize) -> SolutionSet {
    Enumerator::from(catalog)
        .with_limits(SearchLimits { max_solutions, max_combination_size, ..Default::default() })
        .enumerate(requirement)
}
