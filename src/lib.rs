#![warn(missing_docs)]

//! # `baseband`
//!
//! Pick baseband boards that together cover a capacity requirement, then rank the picks by price.
//!
//! Each board offers one or more operating modes, and each mode provides a fixed amount of capacity in every technology [`Category`].
//! Requirements and modes are written as text such as `"6L + 3N + 2D"` and parsed into a [`Capacity`].
//! Collect boards into a [`Catalog`] with a [`CatalogBuilder`](builder::CatalogBuilder),
//! then call [`enumerate()`] (or configure an [`Enumerator`]) to find every combination of board modes that covers the requirement,
//! and [`rank_by_cost()`] to order what was found by the total cost of the boards involved.
//!
//! # Internals
//! The search is deliberately plain.
//! The catalog is flattened into a list of `(board, mode)` selections and every combination of 1, 2, ... up to a size limit
//! (5 by default) is summed and checked against the requirement, in index order.
//! Catalogs are a handful of boards with a handful of modes each, so the `C(n, 1) + ... + C(n, 5)` combinations are cheap to walk.
//! A cap on the number of solutions (100 by default) bounds the output and the running time when `n` grows.
//!
//! Two modes of the same board may appear in one combination unless
//! [`SearchLimits::exclusive_modes`] is set; in either case a board's cost is counted once per solution.

pub use board::{parse_board_definition, Board, BoardDefinitionError, BoardSpec, BoardSpecError, Catalog};
pub use capacity::{Amount, Capacity, ParseError};
pub use category::Category;
pub use cost::{Cost, ParseCostError, RangeError, COST_RANGE};
pub use rank::{rank_by_cost, RankedSolution};
pub use solution::{Selection, Solution};
pub use solver::{enumerate, Enumerator, SearchLimits, SolutionSet, StopReason};

pub(crate) mod board;
pub(crate) mod capacity;
pub(crate) mod category;
pub(crate) mod cost;
pub(crate) mod rank;
pub(crate) mod solution;
pub mod builder;
pub mod generate;
pub mod solver;
#[cfg(feature = "wasm")]
pub mod wasm;
