use crate::{Category, ScoreOutcome, Scorecard, Section, FULL_MASK};

#[test]
fn fresh_card_totals_zero() {
    let card = Scorecard::new();
    assert_eq!(card.total_score(), 0);
    assert_eq!(card.upper_total(), 0);
    assert_eq!(card.lower_total(), 0);
    assert_eq!(card.bonus(), 0);
    assert_eq!(card.open_mask(), FULL_MASK);
    assert!(!card.is_complete());
    for cat in Category::ALL {
        assert_eq!(card.category_score(cat), None);
    }
}

#[test]
fn second_score_in_same_category_is_already_scored() {
    let mut card = Scorecard::new();
    let dice = [3, 3, 5, 1, 3];
    assert_eq!(
        card.score_in_category(Category::Threes, dice),
        ScoreOutcome::Scored(9)
    );
    assert_eq!(
        card.score_in_category(Category::Threes, [3, 3, 3, 3, 3]),
        ScoreOutcome::AlreadyScored
    );
    assert_eq!(card.category_score(Category::Threes), Some(9));
}

#[test]
fn ineligible_does_not_mutate() {
    let mut card = Scorecard::new();
    let before = card.clone();
    assert_eq!(
        card.score_in_category(Category::Yahtzee, [1, 2, 3, 4, 5]),
        ScoreOutcome::Ineligible
    );
    assert_eq!(card, before);
    assert_eq!(card.category_score(Category::Yahtzee), None);
}

#[test]
fn already_scored_takes_precedence_over_ineligible() {
    let mut card = Scorecard::new();
    card.score_in_category(Category::FullHouse, [2, 2, 3, 3, 3]);
    assert_eq!(
        card.score_in_category(Category::FullHouse, [1, 2, 3, 4, 6]),
        ScoreOutcome::AlreadyScored
    );
}

#[test]
fn zero_score_is_distinct_from_unscored() {
    let mut card = Scorecard::new();
    assert_eq!(
        card.score_in_category(Category::Sixes, [1, 2, 3, 4, 5]),
        ScoreOutcome::Scored(0)
    );
    assert_eq!(card.category_score(Category::Sixes), Some(0));
    assert!(card.is_scored(Category::Sixes));
    assert_eq!(
        card.score_in_category(Category::Sixes, [6, 6, 6, 6, 6]),
        ScoreOutcome::AlreadyScored
    );
}

#[test]
fn scratch_records_zero_once() {
    let mut card = Scorecard::new();
    assert_eq!(card.scratch(Category::Yahtzee), ScoreOutcome::Scored(0));
    assert_eq!(card.scratch(Category::Yahtzee), ScoreOutcome::AlreadyScored);
    assert_eq!(card.category_score(Category::Yahtzee), Some(0));
}

#[test]
fn totals_by_section_plus_bonus() {
    let mut card = Scorecard::new();
    card.score_in_category(Category::Sixes, [6, 6, 6, 1, 2]); // 18
    card.score_in_category(Category::Fives, [5, 5, 1, 2, 3]); // 10
    card.score_in_category(Category::LargeStraight, [2, 3, 4, 5, 6]); // 40
    card.score_in_category(Category::Chance, [6, 6, 5, 5, 4]); // 26
    card.add_bonus(100);

    assert_eq!(card.section_total(Section::Upper), 28);
    assert_eq!(card.section_total(Section::Lower), 66);
    assert_eq!(card.bonus(), 100);
    assert_eq!(card.total_score(), 28 + 66 + 100);
}

#[test]
fn card_completes_after_all_thirteen() {
    let mut card = Scorecard::new();
    let mut last_total = 0;
    for cat in Category::ALL {
        let out = card.score_in_category(cat, [5, 5, 5, 5, 5]);
        if out == ScoreOutcome::Ineligible {
            card.scratch(cat);
        }
        assert!(card.total_score() >= last_total);
        last_total = card.total_score();
    }
    assert!(card.is_complete());
    assert_eq!(card.open_mask(), 0);
}
