//! Random boards, costs, and requirements for filling out a catalog or trying the solver.
//!
//! Every function takes the [`Rng`] to draw from, so a seeded [`StdRng`](rand::rngs::StdRng) gives repeatable output.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;
use strum::VariantArray;

use crate::board::Board;
use crate::capacity::{Amount, Capacity};
use crate::category::Category;
use crate::cost::{Cost, COST_RANGE};

/// A capacity with between `categories` distinct categories set, each to an amount drawn from `amounts`.
pub fn random_capacity<R>(rng: &mut R, categories: RangeInclusive<usize>, amounts: RangeInclusive<Amount>) -> Capacity
where
    R: Rng + ?Sized,
{
    let count = rng.gen_range(categories).min(Category::COUNT);
    let chosen: Vec<Category> = Category::VARIANTS.choose_multiple(rng, count).copied().collect();
    Capacity::from_pairs(chosen.into_iter().map(|category| (category, rng.gen_range(amounts.clone()))))
}

/// A cost drawn uniformly, to the cent, from [`COST_RANGE`].
pub fn random_cost<R: Rng + ?Sized>(rng: &mut R) -> Cost {
    Cost::from_cents(rng.gen_range(COST_RANGE.start().cents()..=COST_RANGE.end().cents()))
}

/// Modes for a filler board: 1 to 5 modes, each with 1 to 5 categories of 3 to 6.
pub fn random_modes<R: Rng + ?Sized>(rng: &mut R) -> Vec<Capacity> {
    let count = rng.gen_range(1..=5);
    (0..count).map(|_| random_capacity(rng, 1..=5, 3..=6)).collect()
}

/// A filler board: [`random_modes`] at a [`random_cost`].
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let modes = random_modes(rng);
    Board::new(modes, random_cost(rng))
}

/// A requirement of 2 to 5 categories, each needing 1 to 6.
pub fn random_requirement<R: Rng + ?Sized>(rng: &mut R) -> Capacity {
    random_capacity(rng, 2..=5, 1..=6)
}

/// Modes for a hand-entered style board: 1 or 2 modes of 1 to 3 categories of 3 to 6.
pub fn random_board_definition<R: Rng + ?Sized>(rng: &mut R) -> Vec<Capacity> {
    let count = rng.gen_range(1..=2);
    (0..count).map(|_| random_capacity(rng, 1..=3, 3..=6)).collect()
}
