#[cfg(test)]
mod tests {
    use crate::chance::{apply_keepmask, roll5, ChanceMode, EventKey, KEEP_ALL};

    #[test]
    fn roll5_is_deterministic() {
        let key = EventKey {
            game_seed: 123,
            turn_idx: 7,
            roll_idx: 1,
        };
        assert_eq!(roll5(key), roll5(key));
    }

    #[test]
    fn roll5_values_in_range() {
        for seed in 0u64..200 {
            let key = EventKey {
                game_seed: seed,
                turn_idx: (seed % 13) as u8,
                roll_idx: 0,
            };
            for x in roll5(key) {
                assert!((1..=6).contains(&x), "die out of range: {}", x);
            }
        }
    }

    #[test]
    fn roll_idx_changes_stream() {
        let k0 = EventKey {
            game_seed: 42,
            turn_idx: 3,
            roll_idx: 0,
        };
        let k1 = EventKey { roll_idx: 1, ..k0 };
        assert_ne!(roll5(k0), roll5(k1));
    }

    #[test]
    fn keepmask_keeps_positions() {
        let prev = [1, 2, 3, 4, 6];
        let draws = [5, 5, 5, 5, 5];

        // Keep dice 0 and 4.
        let out = apply_keepmask(prev, 0b1_0001, draws);
        assert_eq!(out, [1, 5, 5, 5, 6]);

        assert_eq!(apply_keepmask(prev, KEEP_ALL, draws), prev);
        assert_eq!(apply_keepmask(prev, 0, draws), draws);
    }

    #[test]
    fn rerolled_die_identity_does_not_change_draw() {
        // Two identical dice (1,1): rerolling either one yields the same roll.
        let prev = [1, 1, 3, 4, 6];
        let draws = roll5(EventKey {
            game_seed: 777,
            turn_idx: 5,
            roll_idx: 1,
        });

        let out0 = apply_keepmask(prev, 0b1_1110, draws);
        let out1 = apply_keepmask(prev, 0b1_1101, draws);
        let mut a = out0;
        let mut b = out1;
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn chance_modes_are_reproducible() {
        let mut a = ChanceMode::new_deterministic(9);
        let mut b = ChanceMode::new_deterministic(9);
        assert_eq!(a.initial_roll(0), b.initial_roll(0));
        let first = a.initial_roll(2);
        assert_eq!(a.reroll(first, 0b0_0011, 2, 1), b.reroll(first, 0b0_0011, 2, 1));

        let mut r1 = ChanceMode::new_rng(5);
        let mut r2 = ChanceMode::new_rng(5);
        for turn in 0u8..13 {
            let d1 = r1.initial_roll(turn);
            let d2 = r2.initial_roll(turn);
            assert_eq!(d1, d2);
            assert!(d1.iter().all(|d| (1..=6).contains(d)));
            let k1 = r1.reroll(d1, 0b1_0101, turn, 1);
            let k2 = r2.reroll(d2, 0b1_0101, turn, 1);
            assert_eq!(k1, k2);
            assert_eq!(k1[0], d1[0]);
            assert_eq!(k1[2], d1[2]);
            assert_eq!(k1[4], d1[4]);
        }
    }

    #[test]
    fn keep_all_reroll_is_identity() {
        let mut c = ChanceMode::new_rng(1);
        let d = c.initial_roll(0);
        assert_eq!(c.reroll(d, KEEP_ALL, 0, 1), d);
    }
}
