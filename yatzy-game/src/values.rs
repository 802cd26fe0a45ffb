//! Legal entry values per category
//!
//! Every listed value is a sum of dice faces, so the straights score their
//! face sums (15 and 20) rather than flat awards. Chance and the derived bonus
//! row accept any value. The whitelists only gate entry; they never re-derive
//! dice combinatorics.
use crate::category::Category;
use crate::constants::{LARGE_STRAIGHT_VALUE, SMALL_STRAIGHT_VALUE, YATZY_VALUE};
use crate::player::ScoreInput;
use thiserror::Error;

const ONES: &[u32] = &[1, 2, 3, 4, 5];
const TWOS: &[u32] = &[2, 4, 6, 8, 10];
const THREES: &[u32] = &[3, 6, 9, 12, 15];
const FOURS: &[u32] = &[4, 8, 12, 16, 20];
const FIVES: &[u32] = &[5, 10, 15, 20, 25];
const SIXES: &[u32] = &[6, 12, 18, 24, 30];
const ONE_PAIR: &[u32] = &[2, 4, 6, 8, 10, 12];
const TWO_PAIRS: &[u32] = &[6, 8, 10, 12, 14, 16, 18, 20, 22];
const THREE_OF_A_KIND: &[u32] = &[3, 6, 9, 12, 15, 18];
const FOUR_OF_A_KIND: &[u32] = &[4, 8, 12, 16, 20, 24];
const SMALL_STRAIGHT: &[u32] = &[SMALL_STRAIGHT_VALUE];
const LARGE_STRAIGHT: &[u32] = &[LARGE_STRAIGHT_VALUE];
const FULL_HOUSE: &[u32] = &[
    7, 8, 9, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 26, 27, 28,
];
const YATZY: &[u32] = &[YATZY_VALUE];

/// Set of values a category accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PossibleValues {
    /// Ascending whitelist
    Listed(&'static [u32]),
    /// Any non-negative value
    Unrestricted,
}

impl PossibleValues {
    #[must_use]
    pub fn allows(self, value: u32) -> bool {
        match self {
            Self::Listed(values) => values.binary_search(&value).is_ok(),
            Self::Unrestricted => true,
        }
    }

    #[must_use]
    pub const fn as_slice(self) -> Option<&'static [u32]> {
        match self {
            Self::Listed(values) => Some(values),
            Self::Unrestricted => None,
        }
    }
}

/// How the entry dialog should present a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// Pick how many dice showed the face; value = face x count
    Multiplier { face: u32 },
    /// Pick the die face of the group; value = face x group size
    DicePicker { group: u32 },
    /// Pick one of the listed sums
    ValueList,
    /// Single legal value, confirm or skip
    Fixed(u32),
    /// Free numeric entry
    NumberPad,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("{value} is not a legal score for {category}")]
    Illegal { category: Category, value: u32 },
}

/// Legal values for a category. Total over all sixteen categories.
#[must_use]
pub const fn possible_values(category: Category) -> PossibleValues {
    match category {
        Category::Ones => PossibleValues::Listed(ONES),
        Category::Twos => PossibleValues::Listed(TWOS),
        Category::Threes => PossibleValues::Listed(THREES),
        Category::Fours => PossibleValues::Listed(FOURS),
        Category::Fives => PossibleValues::Listed(FIVES),
        Category::Sixes => PossibleValues::Listed(SIXES),
        Category::OnePair => PossibleValues::Listed(ONE_PAIR),
        Category::TwoPairs => PossibleValues::Listed(TWO_PAIRS),
        Category::ThreeOfAKind => PossibleValues::Listed(THREE_OF_A_KIND),
        Category::FourOfAKind => PossibleValues::Listed(FOUR_OF_A_KIND),
        Category::SmallStraight => PossibleValues::Listed(SMALL_STRAIGHT),
        Category::LargeStraight => PossibleValues::Listed(LARGE_STRAIGHT),
        Category::FullHouse => PossibleValues::Listed(FULL_HOUSE),
        Category::Yatzy => PossibleValues::Listed(YATZY),
        Category::Chance | Category::Bonus => PossibleValues::Unrestricted,
    }
}

#[must_use]
pub const fn entry_mode(category: Category) -> EntryMode {
    match category {
        Category::Ones => EntryMode::Multiplier { face: 1 },
        Category::Twos => EntryMode::Multiplier { face: 2 },
        Category::Threes => EntryMode::Multiplier { face: 3 },
        Category::Fours => EntryMode::Multiplier { face: 4 },
        Category::Fives => EntryMode::Multiplier { face: 5 },
        Category::Sixes => EntryMode::Multiplier { face: 6 },
        Category::OnePair => EntryMode::DicePicker { group: 2 },
        Category::ThreeOfAKind => EntryMode::DicePicker { group: 3 },
        Category::FourOfAKind => EntryMode::DicePicker { group: 4 },
        Category::TwoPairs | Category::FullHouse => EntryMode::ValueList,
        Category::SmallStraight => EntryMode::Fixed(SMALL_STRAIGHT_VALUE),
        Category::LargeStraight => EntryMode::Fixed(LARGE_STRAIGHT_VALUE),
        Category::Yatzy => EntryMode::Fixed(YATZY_VALUE),
        Category::Chance | Category::Bonus => EntryMode::NumberPad,
    }
}

/// Gate a free-text entry against the category whitelist.
///
/// # Errors
///
/// Returns [`ValueError::Illegal`] when the category lists its values and
/// `value` is not among them.
pub fn validate(category: Category, value: u32) -> Result<(), ValueError> {
    if possible_values(category).allows(value) {
        Ok(())
    } else {
        Err(ValueError::Illegal { category, value })
    }
}

/// Whether an update is a scored Yatzy worth celebrating.
#[must_use]
pub const fn is_celebration(category: Category, input: ScoreInput) -> bool {
    matches!(
        (category, input),
        (Category::Yatzy, ScoreInput::Value(v)) if v > 0
    )
}
