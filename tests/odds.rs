// tests/odds.rs
use gamblers_ruin::GameParams;
use gamblers_ruin::mechanics::odds::{expected_duration, ruin_probability, win_probability};

fn game(s: u32, p: f64, w: u32) -> GameParams {
    GameParams::new(s, p, w).expect("valid params")
}

#[test]
fn fair_game_is_stake_over_target_exactly() {
    for (s, w) in [(5, 10), (1, 2), (3, 7), (99, 100), (1, 1_000)] {
        let win = win_probability(&game(s, 0.5, w)).expect("finite");
        assert_eq!(win, s as f64 / w as f64, "s={s} w={w}");
    }
}

#[test]
fn fifty_of_hundred_at_sixty_percent_matches_hand_computation() {
    let r: f64 = 0.4 / 0.6;
    let expected = (1.0 - r.powi(50)) / (1.0 - r.powi(100));
    let win = win_probability(&game(50, 0.6, 100)).expect("finite");
    assert!((win - expected).abs() < 1e-12, "win={win} expected={expected}");
    assert!(win > 1.0 - 1e-8, "win={win}");
}

#[test]
fn one_of_two_wins_with_probability_p() {
    for p in [0.01, 0.2, 0.5, 0.73, 0.99] {
        let win = win_probability(&game(1, p, 2)).expect("finite");
        assert!((win - p).abs() < 1e-12, "p={p} win={win}");
    }
}

#[test]
fn biased_probabilities_stay_in_unit_interval() {
    for p in [0.001, 0.1, 0.3, 0.49, 0.51, 0.7, 0.9, 0.999] {
        for (s, w) in [(1, 2), (5, 10), (50, 100), (1, 5_000), (4_999, 5_000), (10, 1_000_000)] {
            let win = win_probability(&game(s, p, w)).expect("finite");
            assert!((0.0..=1.0).contains(&win), "s={s} p={p} w={w} win={win}");
        }
    }
}

#[test]
fn extreme_odds_approach_the_boundaries() {
    let near_sure = win_probability(&game(9, 0.999, 10)).expect("finite");
    assert!(near_sure > 0.999, "near_sure={near_sure}");

    let hopeless = win_probability(&game(1, 0.001, 10)).expect("finite");
    assert!(hopeless < 0.002, "hopeless={hopeless}");
}

#[test]
fn unfavourable_game_with_huge_target_does_not_overflow() {
    // r = 3, r^w would overflow f64 if taken directly
    let win = win_probability(&game(10, 0.25, 2_000)).expect("finite");
    assert!(win >= 0.0 && win < 1e-300, "win={win}");
}

#[test]
fn win_and_ruin_sum_to_one() {
    for p in [0.2, 0.5, 0.55] {
        let g = game(7, p, 20);
        let total = win_probability(&g).expect("finite") + ruin_probability(&g).expect("finite");
        assert!((total - 1.0).abs() < 1e-12, "p={p} total={total}");
    }
}

#[test]
fn fair_duration_is_stake_times_distance_to_target() {
    assert_eq!(expected_duration(&game(5, 0.5, 10)).expect("finite"), 25.0);
    assert_eq!(expected_duration(&game(1, 0.5, 2)).expect("finite"), 1.0);
    assert_eq!(expected_duration(&game(30, 0.5, 100)).expect("finite"), 2_100.0);
}

#[test]
fn biased_duration_matches_known_values() {
    // one round is always enough from 1 of 2
    for p in [0.1, 0.4, 0.8] {
        let d = expected_duration(&game(1, p, 2)).expect("finite");
        assert!((d - 1.0).abs() < 1e-9, "p={p} d={d}");
    }
    // from 1 of 3: E = 1 + E[from 2]*p, E[from 2] = 1 + q*E[from 1] => E1 = (1 + p) / (1 - p q)
    let p = 0.3;
    let q = 0.7;
    let d = expected_duration(&game(1, p, 3)).expect("finite");
    assert!((d - (1.0 + p) / (1.0 - p * q)).abs() < 1e-9, "d={d}");
}

const NEAR_FAIR: [f64; 7] = [
    0.5 - 1e-6,
    0.5 - 1e-8,
    0.5 - 5e-10,
    0.5 + 5e-10,
    0.5 + 1e-8,
    0.5 + 1e-6,
    0.5 + 1e-12,
];

#[test]
fn near_fair_one_of_two_keeps_full_precision() {
    // from 1 of 2 the next round always ends the game
    for p in NEAR_FAIR {
        let d = expected_duration(&game(1, p, 2)).expect("finite");
        assert!((d - 1.0).abs() < 1e-9, "p={p} d={d}");
        let win = win_probability(&game(1, p, 2)).expect("finite");
        assert!((win - p).abs() < 1e-12, "p={p} win={win}");
        let ruin = ruin_probability(&game(1, p, 2)).expect("finite");
        assert!((ruin - (1.0 - p)).abs() < 1e-12, "p={p} ruin={ruin}");
    }
}

#[test]
fn near_fair_duration_stays_close_to_fair() {
    // E = s(w - s) + O(drift^2 * w^4)
    for p in NEAR_FAIR {
        let d = expected_duration(&game(5, p, 10)).expect("finite");
        assert!((d - 25.0).abs() < 1e-6, "p={p} d={d}");
    }
}

#[test]
fn duration_is_continuous_across_series_switch() {
    // |w ln r| crosses 1 between these two; both branches must agree closely
    let w = 100;
    for p in [0.5 + 0.0024, 0.5 + 0.0026, 0.5 - 0.0024, 0.5 - 0.0026] {
        let s = 40;
        let params = game(s, p, w);
        let d = expected_duration(&params).expect("finite");
        let q = 1.0 - p;
        let r: f64 = q / p;
        let win = (1.0 - r.powi(s as i32)) / (1.0 - r.powi(w as i32));
        let reference = (s as f64 - w as f64 * win) / (q - p);
        assert!(
            (d - reference).abs() < 1e-6 * reference,
            "p={p} d={d} reference={reference}"
        );
    }
}
