//! Greedy bot used by `ytz sim`.
//!
//! Not a strong player; it exists to drive full games through the rules
//! engine. Keeps the most common face, stops rerolling on made hands, and
//! takes the best-scoring enabled category.

use ytz_core::{
    categories_in, face_counts, is_eligible, potential_score, Category, ChanceMode, GameSession,
    RollReport, ScoreOutcome, ScoreReport, SessionError, KEEP_ALL,
};

/// Order in which categories are given up when nothing scores.
const SACRIFICE_ORDER: [Category; 13] = [
    Category::Yahtzee,
    Category::Aces,
    Category::LargeStraight,
    Category::FourOfAKind,
    Category::Twos,
    Category::FullHouse,
    Category::SmallStraight,
    Category::Threes,
    Category::ThreeOfAKind,
    Category::Fours,
    Category::Fives,
    Category::Sixes,
    Category::Chance,
];

/// Everything that happened during one turn.
#[derive(Debug, Clone)]
pub struct TurnLog {
    pub turn: u8,
    pub dice: [u8; 5],
    pub rerolls_used: u8,
    pub rolls: Vec<RollReport>,
    pub score: ScoreReport,
    pub scratched: bool,
}

fn made_hand(session: &GameSession, dice: [u8; 5]) -> bool {
    let enabled = session.enabled_mask();
    [Category::Yahtzee, Category::LargeStraight, Category::FullHouse]
        .into_iter()
        .any(|c| ytz_core::is_set(enabled, c) && is_eligible(c, dice))
}

/// Keep every die showing the most common face (higher face on ties).
pub fn choose_keep(session: &GameSession, dice: [u8; 5]) -> u8 {
    if made_hand(session, dice) {
        return KEEP_ALL;
    }
    let counts = face_counts(dice);
    let mut best_face = 6u8;
    for face in (1u8..=6).rev() {
        if counts[(face - 1) as usize] > counts[(best_face - 1) as usize] {
            best_face = face;
        }
    }
    dice.iter()
        .enumerate()
        .filter(|&(_, &d)| d == best_face)
        .fold(0u8, |m, (i, _)| m | (1u8 << i))
}

/// Pick a category and whether it has to be scratched.
pub fn choose_category(session: &GameSession, dice: [u8; 5]) -> (Category, bool) {
    let enabled = session.enabled_mask();
    let best = categories_in(enabled)
        .filter(|&c| is_eligible(c, dice))
        .map(|c| (c, potential_score(c, dice)))
        .filter(|&(_, pts)| pts > 0)
        // Hold Chance back unless it is strictly the best option.
        .max_by_key(|&(c, pts)| (pts, c != Category::Chance));
    if let Some((cat, _)) = best {
        return (cat, false);
    }
    let cat = SACRIFICE_ORDER
        .into_iter()
        .find(|&c| ytz_core::is_set(enabled, c))
        .unwrap_or(Category::Chance);
    (cat, !is_eligible(cat, dice))
}

/// Play the session's current turn to completion.
pub fn play_turn(
    session: &mut GameSession,
    chance: &mut ChanceMode,
) -> Result<TurnLog, SessionError> {
    let turn = session.turn();
    let mut rolls = Vec::new();

    let dice = chance.initial_roll(session.turn_idx());
    rolls.push(session.begin_turn(dice)?);

    let mut dice = dice;
    while session.rerolls_left() > 0 {
        let keep = choose_keep(session, dice);
        if keep == KEEP_ALL {
            break;
        }
        dice = chance.reroll(dice, keep, session.turn_idx(), session.roll_idx() + 1);
        rolls.push(session.reroll(dice)?);
    }

    let rerolls_used = session.roll_idx();
    let (cat, scratch) = choose_category(session, dice);
    let mut scratched = scratch;
    let mut score = if scratch {
        session.scratch(cat)?
    } else {
        session.score(cat)?
    };
    if score.outcome == ScoreOutcome::Ineligible {
        score = session.scratch(cat)?;
        scratched = true;
    }

    Ok(TurnLog {
        turn,
        dice,
        rerolls_used,
        rolls,
        score,
        scratched,
    })
}
