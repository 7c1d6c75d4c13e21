use std::collections::HashMap;
use std::num::NonZero;
use std::str::FromStr;

use thiserror::Error;

use crate::capacity::{Capacity, ParseError};
use crate::cost::{Cost, ParseCostError};
use crate::solution::Selection;

/// Reasons a board definition such as `"3L + 3N or 6L + 2D"` may fail to parse.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BoardDefinitionError {
    /// The definition was blank.
    #[error("board definition is empty")]
    Empty,
    /// One of the `or`-separated modes did not parse; `mode` counts from 1.
    #[error("invalid character entered in mode {mode}: {source}")]
    Mode {
        /// Position of the failing mode, from 1.
        mode: usize,
        /// Why the mode failed.
        #[source]
        source: ParseError,
    },
}

/// Reasons a `NAME=MODES@COST` board spec may fail to parse.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BoardSpecError {
    /// There was no `=` or nothing before it.
    #[error("board spec '{0}' has no name, expected NAME=MODES@COST")]
    MissingName(String),
    /// There was no `@` after the modes.
    #[error("board spec '{0}' has no cost, expected NAME=MODES@COST")]
    MissingCost(String),
    /// The modes did not parse.
    #[error(transparent)]
    Definition(#[from] BoardDefinitionError),
    /// The cost did not parse.
    #[error(transparent)]
    Cost(#[from] ParseCostError),
}

/// Parse the modes of a board, written as capacities separated by the word `or`.
pub fn parse_board_definition(text: &str) -> Result<Vec<Capacity>, BoardDefinitionError> {
    if text.trim().is_empty() {
        return Err(BoardDefinitionError::Empty);
    }

    text.split("or")
        .enumerate()
        .map(|(i, mode)| mode.trim().parse::<Capacity>()
            .map_err(|source| BoardDefinitionError::Mode { mode: i + 1, source }))
        .collect()
}

/// A board: mutually exclusive operating modes, each a fixed [`Capacity`], and one purchase cost.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) modes: Vec<Capacity>,
    pub(crate) cost: Cost,
}

impl Board {
    /// A board with the given modes, in order; mode `i` in this list is mode `i + 1` in a [`Selection`].
    pub fn new(modes: Vec<Capacity>, cost: Cost) -> Self {
        Self { modes, cost }
    }

    /// This board's modes, in order.
    pub fn modes(&self) -> &[Capacity] {
        &self.modes
    }

    /// Capacity of the 1-based `mode`, if this board has it.
    pub fn mode(&self, mode: NonZero<usize>) -> Option<&Capacity> {
        self.modes.get(mode.get() - 1)
    }

    /// The cost of this board.
    pub fn cost(&self) -> Cost {
        self.cost
    }
}

/// A named board in `NAME=MODES@COST` form, e.g. `Custom1=3L + 3N or 6L + 2D@10.00`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoardSpec {
    /// Catalog key.
    pub name: String,
    /// The board itself.
    pub board: Board,
}

impl FromStr for BoardSpec {
    type Err = BoardSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, rest) = s.split_once('=')
            .filter(|(name, _)| !name.trim().is_empty())
            .ok_or_else(|| BoardSpecError::MissingName(s.to_string()))?;
        let (definition, cost) = rest.rsplit_once('@').ok_or_else(|| BoardSpecError::MissingCost(s.to_string()))?;

        Ok(Self {
            name: name.trim().to_string(),
            board: Board::new(parse_board_definition(definition)?, cost.parse()?),
        })
    }
}

/// Boards keyed by unique name, kept in insertion order.
///
/// Build one with a [`CatalogBuilder`](crate::builder::CatalogBuilder).
/// Insertion order is the order in which the enumerator considers selections.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog {
    pub(crate) boards: Vec<(String, Board)>,
}

impl Catalog {
    /// Number of boards.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Whether there are no boards.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Whether a board called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The board called `name`.
    pub fn get(&self, name: &str) -> Option<&Board> {
        self.boards.iter().find(|(n, _)| n == name).map(|(_, board)| board)
    }

    /// Every board with its name, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item=(&str, &Board)> {
        self.boards.iter().map(|(name, board)| (name.as_str(), board))
    }

    /// Every `(board, mode)` pair with the capacity of that mode, boards in insertion order and modes in order.
    pub fn selections(&self) -> impl Iterator<Item=(Selection, &Capacity)> {
        self.iter().flat_map(|(name, board)| board.modes.iter()
            .enumerate()
            .map(move |(i, capacity)| (Selection::new(name, NonZero::<usize>::MIN.saturating_add(i)), capacity)))
    }

    /// Board name to board cost.
    pub fn costs(&self) -> HashMap<String, Cost> {
        self.iter().map(|(name, board)| (name.to_string(), board.cost)).collect()
    }

    pub(crate) fn insert(&mut self, name: String, board: Board) {
        self.boards.push((name, board));
    }
}

#[cfg(test)]
mod tests {
    use crate::category::Category;

    use super::*;

    #[test]
    fn definition_splits_on_or() {
        let modes = parse_board_definition("3L + 3N or 6L + 2D").unwrap();
        assert_eq!(modes, vec![
            Capacity::from_pairs([(Category::L, 3), (Category::N, 3)]),
            Capacity::from_pairs([(Category::L, 6), (Category::D, 2)]),
        ]);
    }

    #[test]
    fn definition_reports_failing_mode() {
        assert_eq!(parse_board_definition("3L or 4Q"), Err(BoardDefinitionError::Mode {
            mode: 2,
            source: ParseError::UnknownCategory('Q'),
        }));
        assert_eq!(parse_board_definition("  "), Err(BoardDefinitionError::Empty));
    }

    #[test]
    fn spec_parses_name_modes_and_cost() {
        let spec: BoardSpec = "Custom1 = 4G or 2U + 2D @ 12.50".parse().unwrap();
        assert_eq!(spec.name, "Custom1");
        assert_eq!(spec.board.modes().len(), 2);
        assert_eq!(spec.board.cost(), Cost::from_cents(1250));
    }

    #[test]
    fn spec_requires_name_and_cost() {
        assert!(matches!("=3L@5".parse::<BoardSpec>(), Err(BoardSpecError::MissingName(_))));
        assert!(matches!("A=3L".parse::<BoardSpec>(), Err(BoardSpecError::MissingCost(_))));
        assert!(matches!("A=3L@cheap".parse::<BoardSpec>(), Err(BoardSpecError::Cost(_))));
    }

    #[test]
    fn selections_flatten_in_order() {
        let mut catalog = Catalog::default();
        catalog.insert("B".to_string(), Board::new(vec![Capacity::default(); 2], Cost::from_cents(500)));
        catalog.insert("A".to_string(), Board::new(vec![Capacity::default()], Cost::from_cents(600)));

        let names = catalog.selections().map(|(selection, _)| selection.to_string()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Bm1", "Bm2", "Am1"]);
    }
}
