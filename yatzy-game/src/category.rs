//! Scoring category taxonomy
use serde::{Deserialize, Serialize};

/// Which half of the score sheet a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Single-face categories whose sum gates the bonus
    Top,
    /// The derived bonus row between the two halves
    Bonus,
    /// Combination categories
    Bottom,
}

/// One of the sixteen fixed scoring slots on the sheet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Bonus,
    OnePair,
    TwoPairs,
    ThreeOfAKind,
    FourOfAKind,
    SmallStraight,
    LargeStraight,
    FullHouse,
    Chance,
    Yatzy,
}

impl Category {
    /// Every category in sheet order.
    pub const ALL: [Self; 16] = [
        Self::Ones,
        Self::Twos,
        Self::Threes,
        Self::Fours,
        Self::Fives,
        Self::Sixes,
        Self::Bonus,
        Self::OnePair,
        Self::TwoPairs,
        Self::ThreeOfAKind,
        Self::FourOfAKind,
        Self::SmallStraight,
        Self::LargeStraight,
        Self::FullHouse,
        Self::Chance,
        Self::Yatzy,
    ];

    /// The six single-face categories.
    pub const TOP: [Self; 6] = [
        Self::Ones,
        Self::Twos,
        Self::Threes,
        Self::Fours,
        Self::Fives,
        Self::Sixes,
    ];

    /// The nine combination categories.
    pub const BOTTOM: [Self; 9] = [
        Self::OnePair,
        Self::TwoPairs,
        Self::ThreeOfAKind,
        Self::FourOfAKind,
        Self::SmallStraight,
        Self::LargeStraight,
        Self::FullHouse,
        Self::Chance,
        Self::Yatzy,
    ];

    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::Ones | Self::Twos | Self::Threes | Self::Fours | Self::Fives | Self::Sixes => {
                Section::Top
            }
            Self::Bonus => Section::Bonus,
            _ => Section::Bottom,
        }
    }

    /// Stable storage key, identical to the serde name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ones => "ones",
            Self::Twos => "twos",
            Self::Threes => "threes",
            Self::Fours => "fours",
            Self::Fives => "fives",
            Self::Sixes => "sixes",
            Self::Bonus => "bonus",
            Self::OnePair => "onePair",
            Self::TwoPairs => "twoPairs",
            Self::ThreeOfAKind => "threeOfAKind",
            Self::FourOfAKind => "fourOfAKind",
            Self::SmallStraight => "smallStraight",
            Self::LargeStraight => "largeStraight",
            Self::FullHouse => "fullHouse",
            Self::Chance => "chance",
            Self::Yatzy => "yatzy",
        }
    }

    /// Translation key for the category label.
    #[must_use]
    pub fn i18n_key(self) -> String {
        format!("category.{}", self.key())
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Die face counted by a top-section category.
    #[must_use]
    pub const fn face_value(self) -> Option<u32> {
        match self {
            Self::Ones => Some(1),
            Self::Twos => Some(2),
            Self::Threes => Some(3),
            Self::Fours => Some(4),
            Self::Fives => Some(5),
            Self::Sixes => Some(6),
            _ => None,
        }
    }

    /// The bonus row is computed, never entered.
    #[must_use]
    pub const fn is_derived(self) -> bool {
        matches!(self, Self::Bonus)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_partitions_all_categories() {
        let top = Category::ALL
            .iter()
            .filter(|c| c.section() == Section::Top)
            .count();
        let bottom = Category::ALL
            .iter()
            .filter(|c| c.section() == Section::Bottom)
            .count();
        assert_eq!(top, Category::TOP.len());
        assert_eq!(bottom, Category::BOTTOM.len());
        assert_eq!(top + bottom + 1, Category::ALL.len());
    }

    #[test]
    fn keys_match_serde_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("fiveOfAKind"), None);
    }

    #[test]
    fn only_top_categories_have_faces() {
        let faces: Vec<u32> = Category::TOP.iter().filter_map(|c| c.face_value()).collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
        assert!(Category::BOTTOM.iter().all(|c| c.face_value().is_none()));
        assert!(Category::Bonus.is_derived());
        assert_eq!(Category::FullHouse.i18n_key(), "category.fullHouse");
    }
}
