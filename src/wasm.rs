//! Browser entry point, enabled with the `wasm` feature.

use itertools::Itertools;
use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::board::BoardSpec;
use crate::builder::CatalogBuilder;
use crate::capacity::Capacity;
use crate::solver::{Enumerator, SearchLimits};

fn to_js(err: impl ToString) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Solve from text: `requirement` like `"6L + 3N + 2D"` and `boards` an array of `NAME=MODES@COST` strings.
///
/// Returns the solutions cheapest first, each rendered as `"Am1 + Bm1 ($18.00)"`.
#[wasm_bindgen]
pub fn solve(requirement: &str, boards: Array, max_solutions: usize, max_combination_size: usize) -> Result<Array, JsValue> {
    let requirement: Capacity = requirement.parse().map_err(to_js)?;

    let mut builder = CatalogBuilder::with_target_size(0);
    for entry in boards.iter() {
        let text = entry.as_string().ok_or_else(|| JsValue::from_str("board entries must be strings"))?;
        let spec: BoardSpec = text.parse().map_err(to_js)?;
        builder.add_board(spec.name, spec.board);
    }
    let catalog = builder.build().map_err(|reasons| to_js(reasons.iter().join("; ")))?;

    let solutions = Enumerator::from(&catalog)
        .with_limits(SearchLimits { max_solutions, max_combination_size, ..Default::default() })
        .enumerate(&requirement);

    Ok(solutions.rank_by_cost(&catalog.costs())
        .into_iter()
        .map(|ranked| JsValue::from_str(&format!("{} ({})", ranked.solution, ranked.total_cost)))
        .collect())
}
