//! Scoring engine: category eligibility and point values for a 5-dice roll.
//!
//! Everything here is pure. Whether a category was already used is the
//! scorecard's business, not ours.

use crate::category::{Category, NUM_CATS};
use crate::mask::{bit_for_cat, CategoryMask};

pub const FULL_HOUSE_SCORE: u32 = 25;
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
pub const YAHTZEE_SCORE: u32 = 50;

/// Tally face counts; `counts[f - 1]` is the number of dice showing `f`.
///
/// Dice must be in 1..=6.
pub fn face_counts(dice: [u8; 5]) -> [u8; 6] {
    let mut counts = [0u8; 6];
    for &d in &dice {
        debug_assert!((1..=6).contains(&d), "die out of range: {}", d);
        counts[(d - 1) as usize] += 1;
    }
    counts
}

/// Length of the longest stretch of consecutive faces that are all present.
pub fn longest_run(counts: &[u8; 6]) -> u8 {
    let mut run = 0u8;
    let mut best = 0u8;
    for &c in counts {
        if c > 0 {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

fn dice_sum(dice: [u8; 5]) -> u32 {
    dice.iter().map(|&d| d as u32).sum()
}

fn has_count_at_least(counts: &[u8; 6], n: u8) -> bool {
    counts.iter().any(|&c| c >= n)
}

/// Exact occurrence: some face shows up exactly `n` times.
fn has_count_exactly(counts: &[u8; 6], n: u8) -> bool {
    counts.contains(&n)
}

fn eligible_from_counts(cat: Category, counts: &[u8; 6]) -> bool {
    match cat {
        Category::Aces
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes
        | Category::Chance => true,
        Category::ThreeOfAKind => has_count_at_least(counts, 3),
        Category::FourOfAKind => has_count_at_least(counts, 4),
        // Exact 3 + exact 2: five of a kind is not a full house.
        Category::FullHouse => has_count_exactly(counts, 3) && has_count_exactly(counts, 2),
        Category::SmallStraight => longest_run(counts) >= 4,
        Category::LargeStraight => longest_run(counts) >= 5,
        Category::Yahtzee => has_count_exactly(counts, 5),
    }
}

/// Whether `dice` qualifies to be scored under `cat`.
pub fn is_eligible(cat: Category, dice: [u8; 5]) -> bool {
    eligible_from_counts(cat, &face_counts(dice))
}

fn score_from_counts(cat: Category, dice: [u8; 5], counts: &[u8; 6]) -> u32 {
    if let Some(face) = cat.face() {
        return face as u32 * counts[(face - 1) as usize] as u32;
    }
    if !eligible_from_counts(cat, counts) {
        return 0;
    }
    match cat {
        Category::ThreeOfAKind | Category::FourOfAKind | Category::Chance => dice_sum(dice),
        Category::FullHouse => FULL_HOUSE_SCORE,
        Category::SmallStraight => SMALL_STRAIGHT_SCORE,
        Category::LargeStraight => LARGE_STRAIGHT_SCORE,
        Category::Yahtzee => YAHTZEE_SCORE,
        // Upper categories returned above.
        _ => 0,
    }
}

/// Score `cat` would award for `dice`.
///
/// Does not look at any scorecard, so it doubles as a preview for open
/// categories and as the committed value when scoring.
pub fn potential_score(cat: Category, dice: [u8; 5]) -> u32 {
    score_from_counts(cat, dice, &face_counts(dice))
}

/// Potential scores for every category, in index order.
pub fn scores_for_dice(dice: [u8; 5]) -> [u32; NUM_CATS] {
    let counts = face_counts(dice);
    let mut out = [0u32; NUM_CATS];
    for cat in Category::ALL {
        out[cat.index()] = score_from_counts(cat, dice, &counts);
    }
    out
}

/// Bitset of categories `dice` is eligible for.
pub fn eligibility_mask(dice: [u8; 5]) -> CategoryMask {
    let counts = face_counts(dice);
    Category::ALL
        .iter()
        .filter(|&&c| eligible_from_counts(c, &counts))
        .fold(0, |m, &c| m | bit_for_cat(c))
}
