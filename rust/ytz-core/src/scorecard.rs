//! Per-game score table: 13 one-shot slots plus a bonus counter.

use crate::category::{Category, Section, NUM_CATS};
use crate::mask::{bit_for_cat, CategoryMask};
use crate::scoring::{is_eligible, potential_score};

/// Upper-section sum needed for the one-time upper bonus.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;
/// Points awarded once the upper threshold is reached.
pub const UPPER_BONUS: u32 = 50;
/// Points awarded per repeat Yahtzee roll.
pub const YAHTZEE_BONUS: u32 = 100;

/// Result of a scoring attempt. Only `Scored` mutates the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// The category already holds a value.
    AlreadyScored,
    /// The roll does not qualify for the category.
    Ineligible,
    /// The category now holds `points`.
    Scored(u32),
}

impl ScoreOutcome {
    pub fn is_scored(self) -> bool {
        matches!(self, ScoreOutcome::Scored(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scorecard {
    /// `None` = not yet played; `Some(0)` is a legitimately scored zero.
    card: [Option<u32>; NUM_CATS],
    bonus: u32,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `dice` in `cat`.
    ///
    /// Already-scored wins over ineligible; neither touches the card.
    pub fn score_in_category(&mut self, cat: Category, dice: [u8; 5]) -> ScoreOutcome {
        if self.card[cat.index()].is_some() {
            return ScoreOutcome::AlreadyScored;
        }
        if !is_eligible(cat, dice) {
            return ScoreOutcome::Ineligible;
        }
        let points = potential_score(cat, dice);
        self.card[cat.index()] = Some(points);
        ScoreOutcome::Scored(points)
    }

    /// Forfeit an open category for zero points.
    pub fn scratch(&mut self, cat: Category) -> ScoreOutcome {
        if self.card[cat.index()].is_some() {
            return ScoreOutcome::AlreadyScored;
        }
        self.card[cat.index()] = Some(0);
        ScoreOutcome::Scored(0)
    }

    pub fn category_score(&self, cat: Category) -> Option<u32> {
        self.card[cat.index()]
    }

    pub fn is_scored(&self, cat: Category) -> bool {
        self.card[cat.index()].is_some()
    }

    /// Sum of scored categories in `section` (unscored count as 0).
    pub fn section_total(&self, section: Section) -> u32 {
        section
            .categories()
            .iter()
            .filter_map(|&c| self.card[c.index()])
            .sum()
    }

    pub fn upper_total(&self) -> u32 {
        self.section_total(Section::Upper)
    }

    pub fn lower_total(&self) -> u32 {
        self.section_total(Section::Lower)
    }

    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    pub fn add_bonus(&mut self, points: u32) {
        self.bonus += points;
    }

    /// Sum of all scored categories plus bonus.
    pub fn total_score(&self) -> u32 {
        self.card.iter().flatten().sum::<u32>() + self.bonus
    }

    /// Categories that have not been played yet.
    pub fn open_mask(&self) -> CategoryMask {
        Category::ALL
            .iter()
            .filter(|&&c| self.card[c.index()].is_none())
            .fold(0, |m, &c| m | bit_for_cat(c))
    }

    pub fn is_complete(&self) -> bool {
        self.card.iter().all(Option::is_some)
    }
}
