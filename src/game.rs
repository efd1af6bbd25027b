//! Game setup, the per-round state machine, and run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuinError};

/// One gambler's ruin game: start at `initial_stake`, bet one unit per round,
/// win each round with `win_probability`, stop at 0 or `target_amount`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameParams {
    pub initial_stake: u32,
    pub win_probability: f64,
    pub target_amount: u32,
}

impl GameParams {
    /// Build and validate in one go.
    pub fn new(initial_stake: u32, win_probability: f64, target_amount: u32) -> Result<Self> {
        let params = Self { initial_stake, win_probability, target_amount };
        params.validate()?;
        Ok(params)
    }

    /// Requires `0 < p < 1` (finite) and `0 < initial_stake < target_amount`.
    pub fn validate(&self) -> Result<()> {
        let p = self.win_probability;
        if !p.is_finite() || p <= 0.0 || p >= 1.0 {
            return Err(RuinError::invalid(
                "win_probability",
                format!("must lie strictly between 0 and 1, got {p}"),
            ));
        }
        if self.initial_stake == 0 {
            return Err(RuinError::invalid("initial_stake", "must be positive"));
        }
        if self.target_amount <= self.initial_stake {
            return Err(RuinError::invalid(
                "target_amount",
                format!(
                    "must exceed the initial stake {}, got {}",
                    self.initial_stake, self.target_amount
                ),
            ));
        }
        Ok(())
    }

    /// Unbiased game: exactly `p == 0.5`.
    #[inline]
    pub fn is_fair(&self) -> bool {
        self.win_probability == 0.5
    }
}

/// Where a single capital value sits in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Ruined,
    Won,
}

impl Phase {
    #[inline]
    pub fn of(capital: u32, target: u32) -> Self {
        if capital == 0 {
            Phase::Ruined
        } else if capital >= target {
            Phase::Won
        } else {
            Phase::Playing
        }
    }

    /// Ruined and Won admit no further transitions.
    #[inline]
    pub fn is_absorbing(self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

/// Terminal result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ruined,
    Won,
}

impl Outcome {
    /// Label used in chart titles.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Ruined => "lost",
            Outcome::Won => "won",
        }
    }
}

/// How many rounds a single game may run before it is abandoned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundCap {
    /// Derived from the closed-form expected duration (see `walk::auto_round_cap`).
    #[default]
    Auto,
    Fixed(u64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub round_cap: RoundCap,
}
