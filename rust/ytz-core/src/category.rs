//! Category set and index mapping.
//!
//! 13 categories in fixed order:
//! - idx 0..=5  : upper section, Aces..Sixes (face = idx + 1)
//! - idx 6..=12 : lower section, ThreeOfAKind..Chance

use serde::{Deserialize, Serialize};

pub const NUM_CATS: usize = 13;
pub const NUM_UPPER: usize = 6;

/// Category names in index order (0..12).
pub const CAT_NAMES: [&str; NUM_CATS] = [
    "aces",
    "twos",
    "threes",
    "fours",
    "fives",
    "sixes",
    "three_of_a_kind",
    "four_of_a_kind",
    "full_house",
    "small_straight",
    "large_straight",
    "yahtzee",
    "chance",
];

/// Scorecard half a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Upper,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Aces,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl Category {
    /// All categories in index order.
    pub const ALL: [Category; NUM_CATS] = [
        Category::Aces,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Category> {
        Self::ALL.get(idx).copied()
    }

    /// Upper category scoring `face` (1..=6).
    pub fn for_face(face: u8) -> Option<Category> {
        if (1..=6).contains(&face) {
            Some(Self::ALL[(face - 1) as usize])
        } else {
            None
        }
    }

    /// Face value matched by an upper category; `None` for the lower section.
    pub fn face(self) -> Option<u8> {
        match self.section() {
            Section::Upper => Some(self.index() as u8 + 1),
            Section::Lower => None,
        }
    }

    pub fn section(self) -> Section {
        if self.index() < NUM_UPPER {
            Section::Upper
        } else {
            Section::Lower
        }
    }

    pub fn name(self) -> &'static str {
        CAT_NAMES[self.index()]
    }

    /// Parse a category from its snake_case name.
    pub fn from_name(name: &str) -> Option<Category> {
        CAT_NAMES
            .iter()
            .position(|&n| n == name)
            .and_then(Self::from_index)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Section {
    /// Categories of this section in index order.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Section::Upper => &Category::ALL[..NUM_UPPER],
            Section::Lower => &Category::ALL[NUM_UPPER..],
        }
    }
}
