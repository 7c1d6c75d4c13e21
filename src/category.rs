use strum::{Display, VariantArray};

/// One of the fixed technology categories a board's capacity is measured in.
///
/// Iteration order (see [`VariantArray::VARIANTS`]) is `L, N, G, U, D` and is the order in which capacities are rendered.
#[derive(Copy, Clone, Debug, Display, VariantArray, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Category {
    /// Technology `L`.
    L,
    /// Technology `N`.
    N,
    /// Technology `G`.
    G,
    /// Technology `U`.
    U,
    /// Technology `D`.
    D,
}

impl Category {
    /// Number of categories; the length of every [`Capacity`](crate::Capacity).
    pub const COUNT: usize = Self::VARIANTS.len();

    /// The upper-case letter this category is written as.
    pub fn letter(&self) -> char {
        match self {
            Self::L => 'L',
            Self::N => 'N',
            Self::G => 'G',
            Self::U => 'U',
            Self::D => 'D',
        }
    }

    /// Look up a category by its letter, in either case.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::VARIANTS.iter()
            .copied()
            .find(|category| category.letter() == letter.to_ascii_uppercase())
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}
