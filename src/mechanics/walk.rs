/// Random-walk mechanics: one capped game from stake to an absorbing boundary.
use crate::error::{Result, RuinError};
use crate::game::{GameParams, Outcome, Phase, PlayConfig, RoundCap};
use crate::mechanics::{odds, stoch::BernoulliSampler};
use crate::run_until;

/// Multiple of the expected duration allowed before a game is abandoned.
pub const ROUND_CAP_FACTOR: f64 = 1_000.0;
/// Floor for the automatic cap so short games still get plenty of headroom.
pub const MIN_ROUND_CAP: u64 = 10_000;

/// Capital after each round; `capitals()[0]` is the initial stake.
///
/// Only `play` builds one, so every trajectory starts at the stake, moves in
/// unit steps, and touches 0 or the target only at its last entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trajectory {
    capitals: Vec<u32>,
    target: u32,
}

impl Trajectory {
    pub fn capitals(&self) -> &[u32] {
        &self.capitals
    }

    /// Rounds played (bets placed).
    pub fn rounds(&self) -> u64 {
        (self.capitals.len() - 1) as u64
    }

    pub fn last(&self) -> u32 {
        self.capitals[self.capitals.len() - 1]
    }

    pub fn outcome(&self) -> Outcome {
        match Phase::of(self.last(), self.target) {
            Phase::Won => Outcome::Won,
            _ => Outcome::Ruined,
        }
    }

    /// `(round, capital)` for rounds `1..=T`.
    pub fn rounds_iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.capitals
            .iter()
            .enumerate()
            .skip(1)
            .map(|(t, &c)| (t as u64, c))
    }
}

/// Cap from the expected duration: max(MIN, ceil(FACTOR * E[T]) + w).
pub fn auto_round_cap(params: &GameParams) -> Result<u64> {
    let expected = odds::expected_duration(params)?;
    let scaled = (expected * ROUND_CAP_FACTOR).ceil() as u64;
    Ok(scaled
        .saturating_add(params.target_amount as u64)
        .max(MIN_ROUND_CAP))
}

pub fn round_cap(params: &GameParams, cfg: &PlayConfig) -> Result<u64> {
    match cfg.round_cap {
        RoundCap::Auto => auto_round_cap(params),
        RoundCap::Fixed(n) => Ok(n),
    }
}

/// Play one game until ruin or win, one Bernoulli draw per round.
pub fn play<S>(params: &GameParams, sampler: &mut S, cfg: &PlayConfig) -> Result<Trajectory>
where
    S: BernoulliSampler + ?Sized,
{
    params.validate()?;
    let limit = round_cap(params, cfg)?;
    let p = params.win_probability;
    let target = params.target_amount;
    tracing::trace!(stake = params.initial_stake, target, p, limit, "starting walk");

    let mut capitals = vec![params.initial_stake];
    let driven = run_until(
        params.initial_stake,
        |&capital: &u32| {
            let next = if sampler.sample_bernoulli(p) {
                capital + 1
            } else {
                capital - 1
            };
            capitals.push(next);
            next
        },
        |&capital: &u32| Phase::of(capital, target).is_absorbing(),
        limit,
    );

    if !driven.finished {
        tracing::warn!(limit, capital = driven.state, "round cap reached before absorption");
        return Err(RuinError::RoundLimitExceeded {
            limit,
            capital: driven.state,
        });
    }

    let trajectory = Trajectory { capitals, target };
    tracing::debug!(
        stake = params.initial_stake,
        target,
        rounds = trajectory.rounds(),
        outcome = trajectory.outcome().label(),
        "game finished"
    );
    Ok(trajectory)
}
