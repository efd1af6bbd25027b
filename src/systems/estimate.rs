// src/systems/estimate.rs

//! Monte Carlo estimate of the win rate and game length.
//!
//! The closed form speaks about infinitely many games; this system plays a
//! finite batch and reports how far the empirical rate sits from it, in
//! standard errors. Game `i` draws from its own WyRand seeded with
//! `seed + i`, so a batch is reproducible and any single game can be replayed
//! with `Coin::seeded(seed.wrapping_add(i))`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuinError};
use crate::game::{GameParams, Outcome, PlayConfig};
use crate::mechanics::{odds, stoch::Coin, walk};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    pub games: usize,
    pub seed: u64,
    pub play: PlayConfig,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self { games: 10_000, seed: 0, play: PlayConfig::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Estimate {
    pub games: usize,
    pub wins: usize,
    pub win_rate: f64,
    /// Binomial standard error of `win_rate`.
    pub std_error: f64,
    pub mean_rounds: f64,
    pub analytic_win: f64,
    pub analytic_rounds: f64,
}

impl Estimate {
    /// Distance of the empirical rate from the closed form, in standard errors.
    /// Zero when the batch has no spread (all wins or all losses) and matches.
    pub fn z_score(&self) -> f64 {
        let gap = self.win_rate - self.analytic_win;
        if self.std_error > 0.0 {
            gap / self.std_error
        } else if gap == 0.0 {
            0.0
        } else {
            f64::INFINITY.copysign(gap)
        }
    }
}

pub fn estimate(params: &GameParams, cfg: &EstimateConfig) -> Result<Estimate> {
    params.validate()?;
    if cfg.games == 0 {
        return Err(RuinError::invalid("games", "must play at least one game"));
    }
    let analytic_win = odds::win_probability(params)?;
    let analytic_rounds = odds::expected_duration(params)?;

    let mut wins = 0usize;
    let mut total_rounds = 0u64;
    for i in 0..cfg.games {
        let mut coin = Coin::seeded(cfg.seed.wrapping_add(i as u64));
        let path = walk::play(params, &mut coin, &cfg.play)?;
        if path.outcome() == Outcome::Won {
            wins += 1;
        }
        total_rounds += path.rounds();
    }

    let n = cfg.games as f64;
    let win_rate = wins as f64 / n;
    let out = Estimate {
        games: cfg.games,
        wins,
        win_rate,
        std_error: (win_rate * (1.0 - win_rate) / n).sqrt(),
        mean_rounds: total_rounds as f64 / n,
        analytic_win,
        analytic_rounds,
    };
    tracing::debug!(
        games = out.games,
        win_rate = out.win_rate,
        analytic_win = out.analytic_win,
        z = out.z_score(),
        "estimate finished"
    );
    Ok(out)
}
