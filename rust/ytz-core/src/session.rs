//! Game session: turn flow and bonus policy layered on top of a `Scorecard`.
//!
//! The session is owned by the caller and passed by reference; there is no
//! global game state. It never rolls dice itself (see `chance`) and never
//! touches the highscore ledger.

use crate::category::{Category, NUM_CATS};
use crate::mask::{bit_for_cat, CategoryMask};
use crate::scorecard::{
    ScoreOutcome, Scorecard, UPPER_BONUS, UPPER_BONUS_THRESHOLD, YAHTZEE_BONUS,
};
use crate::scoring::{is_eligible, potential_score};
use thiserror::Error;

/// A game is 13 turns, one category scored per turn.
pub const MAX_TURNS: u8 = NUM_CATS as u8;

/// Rerolls allowed per turn after the opening roll.
pub const DEFAULT_REROLLS: u8 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no turn in progress")]
    NoActiveTurn,
    #[error("a turn is already in progress")]
    TurnInProgress,
    #[error("no rerolls left this turn")]
    NoRerollsLeft,
    #[error("game is finished")]
    GameFinished,
    #[error("invalid dice {dice:?}: values must be in 1..=6")]
    InvalidDice { dice: [u8; 5] },
    #[error("category {category} is locked out until the joker category is scored")]
    LockedOut { category: Category },
}

/// What happened when a roll was handed to the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RollReport {
    /// A repeat Yahtzee was rolled and +100 was added to the bonus.
    pub yahtzee_bonus_awarded: bool,
    /// Joker lockout in force after this roll.
    pub locked_out: Vec<Category>,
}

/// What happened when a category was picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub category: Category,
    pub outcome: ScoreOutcome,
    /// The one-time upper bonus was granted by this score.
    pub upper_bonus_awarded: bool,
    /// Categories re-enabled because the lockout was cleared.
    pub reactivated: Vec<Category>,
    pub game_finished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    scorecard: Scorecard,
    dice: Option<[u8; 5]>,
    rerolls_allowed: u8,
    rerolls_left: u8,
    /// 1-based; `MAX_TURNS + 1` once the game is over.
    turn: u8,
    turn_active: bool,
    /// Yahtzees actually scored in the Yahtzee category.
    yahtzees: u32,
    upper_bonus_granted: bool,
    /// Categories disabled by the joker rule, in the order they were disabled.
    locked_out: Vec<Category>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_rerolls(DEFAULT_REROLLS)
    }

    pub fn with_rerolls(rerolls_allowed: u8) -> Self {
        Self {
            scorecard: Scorecard::new(),
            dice: None,
            rerolls_allowed,
            rerolls_left: rerolls_allowed,
            turn: 1,
            turn_active: false,
            yahtzees: 0,
            upper_bonus_granted: false,
            locked_out: Vec::new(),
        }
    }

    /// Throw away the current game and start a fresh one with the same rules.
    pub fn restart(&mut self) {
        *self = Self::with_rerolls(self.rerolls_allowed);
    }

    /// Hand the opening roll of a turn to the session.
    pub fn begin_turn(&mut self, dice: [u8; 5]) -> Result<RollReport, SessionError> {
        if self.is_finished() {
            return Err(SessionError::GameFinished);
        }
        if self.turn_active {
            return Err(SessionError::TurnInProgress);
        }
        validate_dice(dice)?;

        self.dice = Some(dice);
        self.rerolls_left = self.rerolls_allowed;
        self.turn_active = true;
        Ok(self.on_roll(dice))
    }

    /// Hand a reroll (kept dice included) to the session.
    pub fn reroll(&mut self, dice: [u8; 5]) -> Result<RollReport, SessionError> {
        self.require_active_turn()?;
        if self.rerolls_left == 0 {
            return Err(SessionError::NoRerollsLeft);
        }
        validate_dice(dice)?;

        self.dice = Some(dice);
        self.rerolls_left -= 1;
        Ok(self.on_roll(dice))
    }

    /// Score the current roll in `cat`.
    ///
    /// `AlreadyScored` / `Ineligible` leave everything untouched and the turn
    /// stays open, so the caller can pick again.
    pub fn score(&mut self, cat: Category) -> Result<ScoreReport, SessionError> {
        let dice = self.require_active_turn()?;
        if self.locked_out.contains(&cat) {
            return Err(SessionError::LockedOut { category: cat });
        }

        let outcome = self.scorecard.score_in_category(cat, dice);
        if outcome.is_scored() && cat == Category::Yahtzee {
            self.yahtzees += 1;
        }
        Ok(self.after_pick(cat, outcome))
    }

    /// Forfeit `cat` for zero points, ending the turn.
    pub fn scratch(&mut self, cat: Category) -> Result<ScoreReport, SessionError> {
        self.require_active_turn()?;
        if self.locked_out.contains(&cat) {
            return Err(SessionError::LockedOut { category: cat });
        }
        let outcome = self.scorecard.scratch(cat);
        Ok(self.after_pick(cat, outcome))
    }

    /// Categories the player may pick right now: open and not locked out.
    pub fn enabled_mask(&self) -> CategoryMask {
        let locked = self
            .locked_out
            .iter()
            .fold(0, |m, &c| m | bit_for_cat(c));
        self.scorecard.open_mask() & !locked
    }

    /// Potential score of each enabled category for the current roll.
    pub fn previews(&self) -> [Option<u32>; NUM_CATS] {
        let mut out = [None; NUM_CATS];
        let Some(dice) = self.dice.filter(|_| self.turn_active) else {
            return out;
        };
        let enabled = self.enabled_mask();
        for cat in Category::ALL {
            if enabled & bit_for_cat(cat) != 0 {
                out[cat.index()] = Some(potential_score(cat, dice));
            }
        }
        out
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    pub fn dice(&self) -> Option<[u8; 5]> {
        self.dice
    }

    pub fn rerolls_left(&self) -> u8 {
        self.rerolls_left
    }

    pub fn rerolls_allowed(&self) -> u8 {
        self.rerolls_allowed
    }

    /// Current turn number (1..=13), or 14 when the game is over.
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// 0-based index of the current turn, for keyed dice streams.
    pub fn turn_idx(&self) -> u8 {
        self.turn.saturating_sub(1)
    }

    /// 0-based index of the latest roll this turn (0 = opening roll).
    pub fn roll_idx(&self) -> u8 {
        self.rerolls_allowed.saturating_sub(self.rerolls_left)
    }

    pub fn is_turn_active(&self) -> bool {
        self.turn_active
    }

    pub fn yahtzee_count(&self) -> u32 {
        self.yahtzees
    }

    pub fn upper_bonus_granted(&self) -> bool {
        self.upper_bonus_granted
    }

    pub fn locked_out(&self) -> &[Category] {
        &self.locked_out
    }

    pub fn total_score(&self) -> u32 {
        self.scorecard.total_score()
    }

    pub fn is_finished(&self) -> bool {
        self.turn > MAX_TURNS
    }

    fn require_active_turn(&self) -> Result<[u8; 5], SessionError> {
        if self.is_finished() {
            return Err(SessionError::GameFinished);
        }
        match self.dice {
            Some(dice) if self.turn_active => Ok(dice),
            _ => Err(SessionError::NoActiveTurn),
        }
    }

    /// Repeat-Yahtzee policy, evaluated on every roll.
    fn on_roll(&mut self, dice: [u8; 5]) -> RollReport {
        let mut report = RollReport::default();
        if self.yahtzees == 0 || !is_eligible(Category::Yahtzee, dice) {
            return report;
        }

        self.scorecard.add_bonus(YAHTZEE_BONUS);
        report.yahtzee_bonus_awarded = true;

        // Joker: force the matching upper category while it is still open.
        // A lockout from an earlier roll this turn is replaced, not extended.
        self.locked_out.clear();
        let Some(forced) = Category::for_face(dice[0]) else {
            return report;
        };
        if self.scorecard.is_scored(forced) {
            return report;
        }
        let open = self.scorecard.open_mask();
        for cat in Category::ALL {
            if cat != forced && open & bit_for_cat(cat) != 0 {
                self.locked_out.push(cat);
            }
        }
        report.locked_out = self.locked_out.clone();
        report
    }

    fn after_pick(&mut self, cat: Category, outcome: ScoreOutcome) -> ScoreReport {
        let mut report = ScoreReport {
            category: cat,
            outcome,
            upper_bonus_awarded: false,
            reactivated: Vec::new(),
            game_finished: false,
        };
        if !outcome.is_scored() {
            return report;
        }

        report.reactivated = std::mem::take(&mut self.locked_out);

        if !self.upper_bonus_granted && self.scorecard.upper_total() >= UPPER_BONUS_THRESHOLD {
            self.upper_bonus_granted = true;
            self.scorecard.add_bonus(UPPER_BONUS);
            report.upper_bonus_awarded = true;
        }

        self.turn_active = false;
        self.turn += 1;
        report.game_finished = self.is_finished();
        report
    }
}

fn validate_dice(dice: [u8; 5]) -> Result<(), SessionError> {
    if dice.iter().all(|d| (1..=6).contains(d)) {
        Ok(())
    } else {
        Err(SessionError::InvalidDice { dice })
    }
}
