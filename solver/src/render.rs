use std::collections::HashMap;
use std::fmt::{Result, Write};

use baseband::{Catalog, Cost, RankedSolution, Solution};

pub const NO_SOLUTIONS: &str = "No solutions found. The available boards cannot meet the requirements.";

pub fn dashboard(out: &mut impl Write, catalog: &Catalog) -> Result {
    writeln!(out, "Dashboard of Boards:")?;
    for (name, board) in catalog.iter() {
        writeln!(out, "{} (Cost: {}):", name, board.cost())?;
        for (i, mode) in board.modes().iter().enumerate() {
            writeln!(out, "  Mode {}: {}", i + 1, mode)?;
        }
    }

    Ok(())
}

pub fn solutions(out: &mut impl Write, solutions: &[Solution], board_costs: &HashMap<String, Cost>) -> Result {
    if solutions.is_empty() {
        return writeln!(out, "{}", NO_SOLUTIONS);
    }

    writeln!(out, "Possible solutions (capped at {}):", solutions.len())?;
    for (i, solution) in solutions.iter().enumerate() {
        writeln!(out, "Solution {}: {} (Total Cost: {})", i + 1, solution, solution.total_cost(board_costs))?;
    }

    Ok(())
}

pub fn ranking(out: &mut impl Write, ranked: &[RankedSolution<'_>], top: usize) -> Result {
    if ranked.is_empty() {
        return Ok(());
    }

    writeln!(out, "Top {} most cost-effective solutions:", top)?;
    for (i, entry) in ranked.iter().take(top).enumerate() {
        writeln!(out, "Rank {}: {} (Total Cost: {})", i + 1, entry.solution, entry.total_cost)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use baseband::builder::CatalogBuilder;
    use baseband::{enumerate, parse_board_definition, rank_by_cost, Board, Capacity};

    use super::*;

    fn sample() -> Catalog {
        CatalogBuilder::with_target_size(0)
            .add_board("A", Board::new(parse_board_definition("3L + 3N").unwrap(), Cost::from_cents(1000)))
            .add_board("B", Board::new(parse_board_definition("6L + 2D or 1G").unwrap(), Cost::from_cents(850)))
            .build()
            .unwrap()
    }

    #[test]
    fn dashboard_lists_modes() {
        let mut out = String::new();
        dashboard(&mut out, &sample()).unwrap();
        assert_eq!(out, "Dashboard of Boards:
A (Cost: $10.00):
  Mode 1: 3L + 3N
B (Cost: $8.50):
  Mode 1: 6L + 2D
  Mode 2: 1G
");
    }

    #[test]
    fn solutions_and_ranking() {
        let catalog = sample();
        let requirement: Capacity = "6L + 3N + 2D".parse().unwrap();
        let found = enumerate(&requirement, &catalog, 100, 5);
        let costs = catalog.costs();

        let mut out = String::new();
        solutions(&mut out, &found, &costs).unwrap();
        ranking(&mut out, &rank_by_cost(&found, &costs), 10).unwrap();
        assert_eq!(out, "Possible solutions (capped at 2):
Solution 1: Am1 + Bm1 (Total Cost: $18.50)
Solution 2: Am1 + Bm1 + Bm2 (Total Cost: $18.50)
Top 10 most cost-effective solutions:
Rank 1: Am1 + Bm1 (Total Cost: $18.50)
Rank 2: Am1 + Bm1 + Bm2 (Total Cost: $18.50)
");
    }

    #[test]
    fn no_solutions_message() {
        let mut out = String::new();
        solutions(&mut out, &[], &HashMap::new()).unwrap();
        ranking(&mut out, &[], 10).unwrap();
        assert_eq!(out, format!("{}\n", NO_SOLUTIONS));
    }
}
