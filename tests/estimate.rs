// tests/estimate.rs
#![cfg(feature = "system-estimate")]

use gamblers_ruin::systems::estimate::{EstimateConfig, estimate};
use gamblers_ruin::{GameParams, PlayConfig, RuinError};

#[test]
fn fair_game_win_rate_lands_near_stake_over_target() {
    let params = GameParams::new(5, 0.5, 10).expect("valid params");
    let cfg = EstimateConfig { games: 4_000, seed: 17, play: PlayConfig::default() };
    let est = estimate(&params, &cfg).expect("estimate");

    assert_eq!(est.games, 4_000);
    assert_eq!(est.analytic_win, 0.5);
    assert_eq!(est.analytic_rounds, 25.0);
    assert!(est.z_score().abs() < 5.0, "z={} est={:?}", est.z_score(), est);
    assert!(
        (est.mean_rounds - 25.0).abs() < 2.5,
        "mean_rounds={} (expected ≈ 25)",
        est.mean_rounds
    );
}

#[test]
fn biased_game_win_rate_tracks_closed_form() {
    let params = GameParams::new(4, 0.45, 10).expect("valid params");
    let cfg = EstimateConfig { games: 4_000, seed: 3, ..EstimateConfig::default() };
    let est = estimate(&params, &cfg).expect("estimate");
    assert!(est.z_score().abs() < 5.0, "z={} est={:?}", est.z_score(), est);
    assert!(est.std_error > 0.0 && est.std_error < 0.02, "se={}", est.std_error);
}

#[test]
fn same_seed_same_estimate() {
    let params = GameParams::new(3, 0.6, 9).expect("valid params");
    let cfg = EstimateConfig { games: 500, seed: 99, ..EstimateConfig::default() };
    let a = estimate(&params, &cfg).expect("estimate");
    let b = estimate(&params, &cfg).expect("estimate");
    assert_eq!(a, b);
}

#[test]
fn zero_games_is_rejected() {
    let params = GameParams::new(3, 0.6, 9).expect("valid params");
    let cfg = EstimateConfig { games: 0, ..EstimateConfig::default() };
    assert!(matches!(
        estimate(&params, &cfg),
        Err(RuinError::InvalidParameter { name: "games", .. })
    ));
}
