//! Assembling a [`Catalog`] from a hand-entered first board, custom boards, and random filler.

use std::ops::RangeInclusive;

use rand::Rng;
use thiserror::Error;

use crate::board::{Board, Catalog};
use crate::cost::{Cost, RangeError, COST_RANGE};
use crate::generate::random_board;

/// Number of boards a catalog is topped up to by default.
pub const DEFAULT_CATALOG_SIZE: usize = 5;
/// Name conventionally given to the hand-entered first board.
pub const FIRST_BOARD_NAME: &str = "UBPe1p";

/// Name of the `i`th board in the `UBPe{i}p` series used for the first board and for filler.
pub fn series_name(i: usize) -> String {
    format!("UBPe{i}p")
}

/// Reasons a builder may become invalid while building.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CatalogInvalidReason {
    /// A board was added under a name already taken.
    #[error("board '{0}' is defined more than once")]
    DuplicateBoard(String),
    /// A board was added with no modes.
    #[error("board '{0}' has no modes")]
    NoModes(String),
    /// A board's cost fell outside the builder's cost range.
    #[error("board '{name}': {source}")]
    CostOutOfRange {
        /// The board.
        name: String,
        /// The failed check.
        #[source]
        source: RangeError,
    },
}

/// Builds a [`Catalog`], checking each board as it is added.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once invalid, a builder ignores further changes; [`Self::build`] reports every reason collected.
#[derive(Clone, Debug)]
pub struct CatalogBuilder {
    target_size: usize,
    cost_range: RangeInclusive<Cost>,
    catalog: Catalog,
    invalid_reasons: Vec<CatalogInvalidReason>,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::with_target_size(DEFAULT_CATALOG_SIZE)
    }
}

impl CatalogBuilder {
    /// A builder whose [`Self::fill_random`] tops the catalog up to `target_size` boards, with costs checked against [`COST_RANGE`].
    pub fn with_target_size(target_size: usize) -> Self {
        Self {
            target_size,
            cost_range: COST_RANGE,
            catalog: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    /// Check costs of boards added from now on against `range` instead.
    pub fn cost_range(&mut self, range: RangeInclusive<Cost>) -> &mut Self {
        self.cost_range = range;
        self
    }

    /// Add `board` under `name`, after any boards already present.
    ///
    /// May cause the builder to enter an invalid state if the name is taken, the board has no modes, or its cost is out of range.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_board(&mut self, name: impl Into<String>, board: Board) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let name = name.into();
        if self.catalog.contains(&name) {
            self.invalid_reasons.push(CatalogInvalidReason::DuplicateBoard(name));
            return self;
        }

        if board.modes.is_empty() {
            self.invalid_reasons.push(CatalogInvalidReason::NoModes(name));
            return self;
        }

        if let Err(source) = board.cost.validate(&self.cost_range) {
            self.invalid_reasons.push(CatalogInvalidReason::CostOutOfRange { name, source });
            return self;
        }

        self.catalog.insert(name, board);
        self
    }

    /// Remove the most recently added board.
    ///
    /// If the builder is in an invalid state or empty, this function does nothing.
    pub fn pop_board(&mut self) -> &mut Self {
        if self.invalid_reasons.is_empty() {
            self.catalog.boards.pop();
        }

        self
    }

    /// Add random filler boards until the catalog holds the target number of boards.
    ///
    /// Filler is named `UBPe2p`, `UBPe3p`, ... skipping names already taken.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let mut i = 2;
        while self.catalog.len() < self.target_size {
            let name = series_name(i);
            if !self.catalog.contains(&name) {
                tracing::debug!(name, "adding filler board");
                self.catalog.insert(name, random_board(rng));
            }
            i += 1;
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`CatalogInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<CatalogInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<CatalogInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Catalog`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`CatalogInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Catalog, &Vec<CatalogInvalidReason>> {
        match self.is_valid() {
            None => Ok(self.catalog.clone()),
            Some(reasons) => Err(reasons),
        }
    }
}
