use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::num::NonZero;

use itertools::Itertools;

use crate::cost::Cost;

/// One selectable unit: a board run in one of its modes, written `"{board}m{mode}"` (e.g. `UBPe1pm2`).
///
/// Selections order by that written form, character by character.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Selection {
    board: String,
    mode: NonZero<usize>,
}

impl Selection {
    /// Select the 1-based `mode` of `board`.
    pub fn new(board: impl Into<String>, mode: NonZero<usize>) -> Self {
        Self { board: board.into(), mode }
    }

    /// Name of the selected board.
    pub fn board(&self) -> &str {
        &self.board
    }

    /// The selected mode, from 1.
    pub fn mode(&self) -> NonZero<usize> {
        self.mode
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m{}", self.board, self.mode)
    }
}

/// Decimal digits of `n`, written into the tail of `buf`.
fn decimal(mut n: usize, buf: &mut [u8; 20]) -> &[u8] {
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            return &buf[start..];
        }
    }
}

// byte order of the rendering; it is injective (the mode suffix is all digits), so this agrees with the derived Eq
impl Ord for Selection {
    fn cmp(&self, other: &Self) -> Ordering {
        let (mut lhs_buf, mut rhs_buf) = ([0; 20], [0; 20]);
        let lhs = self.board.bytes().chain([b'm']).chain(decimal(self.mode.get(), &mut lhs_buf).iter().copied());
        let rhs = other.board.bytes().chain([b'm']).chain(decimal(other.mode.get(), &mut rhs_buf).iter().copied());
        lhs.cmp(rhs)
    }
}

impl PartialOrd for Selection {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A feasible combination of [`Selection`]s, kept sorted and free of repeats.
///
/// Two combinations selecting the same pairs are the same solution whatever order they were found in.
/// Solutions order by size, then lexicographically by selection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Solution(Vec<Selection>);

impl Solution {
    /// Collect `selections` into a solution.
    pub fn new(selections: impl IntoIterator<Item=Selection>) -> Self {
        let mut selections = selections.into_iter().collect_vec();
        selections.sort();
        selections.dedup();
        Self(selections)
    }

    /// The selections, sorted.
    pub fn selections(&self) -> &[Selection] {
        &self.0
    }

    /// Number of selections.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no selections were made.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Distinct board names referenced, in selection order.
    pub fn boards(&self) -> impl Iterator<Item=&str> {
        self.0.iter().map(Selection::board).unique()
    }

    /// Sum of `board_costs` over the distinct boards referenced.
    ///
    /// A board is paid for once however many of its modes are selected.
    /// Boards missing from `board_costs` add nothing.
    pub fn total_cost(&self, board_costs: &HashMap<String, Cost>) -> Cost {
        self.boards()
            .map(|board| match board_costs.get(board) {
                Some(cost) => *cost,
                None => {
                    tracing::warn!(board, "no cost known for board, counting it as free");
                    Cost::default()
                }
            })
            .sum()
    }
}

impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len()).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" + "))
    }
}
