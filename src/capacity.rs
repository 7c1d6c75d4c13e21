use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Index, IndexMut};
use std::str::FromStr;

use itertools::Itertools;
use strum::VariantArray;
use thiserror::Error;

use crate::category::Category;

/// Amount of capacity in a single [`Category`].
pub type Amount = u32;

/// Reasons capacity text can fail to parse.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// A `<amount><letter>` token named a letter outside the category set.
    #[error("invalid category '{0}'")]
    UnknownCategory(char),
    /// An amount, or the running sum for one category, does not fit in an [`Amount`].
    #[error("amount too large for category {0}")]
    AmountOverflow(Category),
}

/// A capacity (or requirement) vector: one non-negative [`Amount`] per [`Category`].
///
/// Text such as `"6L + 3N + 2D"` parses with [`FromStr`] and renders back with [`Display`].
/// Zero categories are omitted when rendering, so the all-zero capacity renders as the empty string.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Capacity([Amount; Category::COUNT]);

impl Capacity {
    /// Construct a capacity from `(category, amount)` pairs; repeated categories are summed, saturating at [`Amount::MAX`].
    pub fn from_pairs(pairs: impl IntoIterator<Item=(Category, Amount)>) -> Self {
        let mut ret = Self::default();
        for (category, amount) in pairs {
            ret[category] = ret[category].saturating_add(amount);
        }

        ret
    }

    /// Whether this capacity covers `requirement` in every category.
    pub fn meets(&self, requirement: &Capacity) -> bool {
        self.0.iter().zip(requirement.0.iter()).all(|(have, need)| have >= need)
    }

    /// Whether every category is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|amount| *amount == 0)
    }

    /// Every category with its amount, in category order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item=(Category, Amount)> + '_ {
        Category::VARIANTS.iter().map(|category| (*category, self[*category]))
    }
}

impl Index<Category> for Capacity {
    type Output = Amount;

    fn index(&self, category: Category) -> &Self::Output {
        &self.0[category.index()]
    }
}

impl IndexMut<Category> for Capacity {
    fn index_mut(&mut self, category: Category) -> &mut Self::Output {
        &mut self.0[category.index()]
    }
}

impl Add for Capacity {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

// saturating: no requirement exceeds Amount::MAX, so meets() stays exact on a clamped total
impl AddAssign for Capacity {
    fn add_assign(&mut self, rhs: Self) {
        self.0.iter_mut().zip(rhs.0).for_each(|(lhs, rhs)| *lhs = lhs.saturating_add(rhs));
    }
}

impl<'a> AddAssign<&'a Capacity> for Capacity {
    fn add_assign(&mut self, rhs: &'a Capacity) {
        *self += *rhs;
    }
}

impl Sum for Capacity {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a Capacity> for Capacity {
    fn sum<I: Iterator<Item=&'a Capacity>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for Capacity {
    type Err = ParseError;

    /// Scan `s` for `<digits><letter>` tokens and sum them per category.
    ///
    /// Text between tokens (`+`, whitespace, anything else) is skipped, so blank input gives the zero capacity.
    /// A token whose letter is not a [`Category`] fails the whole parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ret = Self::default();
        let mut chars = s.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if !c.is_ascii_digit() {
                continue;
            }

            let mut end = start + c.len_utf8();
            while let Some((i, d)) = chars.next_if(|(_, d)| d.is_ascii_digit()) {
                end = i + d.len_utf8();
            }

            // digits not directly followed by a letter are not a token
            let Some((_, letter)) = chars.next_if(|(_, l)| l.is_ascii_alphabetic()) else {
                continue;
            };

            let category = Category::from_letter(letter).ok_or(ParseError::UnknownCategory(letter))?;
            let amount: Amount = s[start..end].parse().map_err(|_| ParseError::AmountOverflow(category))?;
            ret[category] = ret[category].checked_add(amount).ok_or(ParseError::AmountOverflow(category))?;
        }

        Ok(ret)
    }
}

impl Display for Capacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter()
            .filter(|(_, amount)| *amount > 0)
            .map(|(category, amount)| format!("{}{}", amount, category.letter()))
            .join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::generate::random_capacity;

    use super::*;

    #[test]
    fn parse_sums_repeats_and_ignores_case() {
        let capacity: Capacity = "2l + 3N+4L 1d".parse().unwrap();
        assert_eq!(capacity, Capacity::from_pairs([(Category::L, 6), (Category::N, 3), (Category::D, 1)]));
    }

    #[test]
    fn parse_blank_is_zero() {
        assert!("".parse::<Capacity>().unwrap().is_zero());
        assert!("   \t".parse::<Capacity>().unwrap().is_zero());
    }

    #[test]
    fn parse_rejects_unknown_letter_in_either_case() {
        assert_eq!("6L + 3x".parse::<Capacity>(), Err(ParseError::UnknownCategory('x')));
        assert_eq!("3X + 6L".parse::<Capacity>(), Err(ParseError::UnknownCategory('X')));
    }

    #[test]
    fn parse_rejects_overflow() {
        assert_eq!("99999999999L".parse::<Capacity>(), Err(ParseError::AmountOverflow(Category::L)));
        assert_eq!("4294967295G + 1G".parse::<Capacity>(), Err(ParseError::AmountOverflow(Category::G)));
    }

    #[test]
    fn format_skips_zero_in_category_order() {
        let capacity = Capacity::from_pairs([(Category::D, 2), (Category::L, 6), (Category::N, 3)]);
        assert_eq!(capacity.to_string(), "6L + 3N + 2D");
        assert_eq!(Capacity::default().to_string(), "");
    }

    #[test]
    fn format_then_parse_keeps_non_zero_entries() {
        let capacity = Capacity::from_pairs([(Category::G, 12), (Category::U, 1), (Category::D, 40)]);
        assert_eq!(capacity.to_string().parse::<Capacity>().unwrap(), capacity);
    }

    #[test]
    fn format_then_parse_keeps_random_capacities() {
        let mut rng = StdRng::seed_from_u64(0xCA9A);
        for _ in 0..500 {
            let capacity = random_capacity(&mut rng, 0..=5, 0..=Amount::MAX);
            assert_eq!(capacity.to_string().parse::<Capacity>().unwrap(), capacity);
        }
    }

    #[test]
    fn meets_is_per_category() {
        let total = Capacity::from_pairs([(Category::L, 9), (Category::N, 3), (Category::D, 2)]);
        let requirement = Capacity::from_pairs([(Category::L, 6), (Category::N, 3), (Category::D, 2)]);
        assert!(total.meets(&requirement));
        assert!(!requirement.meets(&(requirement + Capacity::from_pairs([(Category::U, 1)]))));
        assert!(Capacity::default().meets(&Capacity::default()));
    }

    #[test]
    fn add_has_zero_identity() {
        let a = Capacity::from_pairs([(Category::L, 3), (Category::N, 3)]);
        let b = Capacity::from_pairs([(Category::L, 6), (Category::D, 2)]);
        assert_eq!(a + Capacity::default(), a);
        assert_eq!(a + b, b + a);
        assert_eq!([a, b].iter().sum::<Capacity>(), Capacity::from_pairs([(Category::L, 9), (Category::N, 3), (Category::D, 2)]));
    }

    #[test]
    fn add_saturates_at_max_amount() {
        let big = Capacity::from_pairs([(Category::L, Amount::MAX)]);
        let one = Capacity::from_pairs([(Category::L, 1), (Category::N, 1)]);
        let total = big + one;
        assert_eq!(total[Category::L], Amount::MAX);
        assert_eq!(total[Category::N], 1);
        assert!(total.meets(&big));
        assert_eq!(Capacity::from_pairs([(Category::G, Amount::MAX), (Category::G, 5)])[Category::G], Amount::MAX);
    }
}
