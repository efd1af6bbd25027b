/*!
`gamblers_ruin` — the gambler's ruin random walk, its closed-form odds, and a chart.

What it does
- Plays one game: start at a stake, bet one unit per round, win each round
  with probability `p`, stop at 0 (ruin) or at the target (win).
- Computes the theoretical probability of winning, independent of the path.
- Builds a chart of capital per round, titled with the odds and the outcome.

How to use (call surface only)
- Pick a Bernoulli source: `Coin::seeded(seed)` for reproducible runs, or any
  type implementing `BernoulliSampler`.
- Call `simulate_gamblers_ruin(stake, p, target, &mut coin) -> Result<Chart>`,
  or `simulate_with(params, &mut coin, &PlayConfig)` to control the round cap.
- Render with `chart.to_text(width, height, &ChartStyle::default())`, draw into
  your own ratatui buffer with `chart.render`, or export with `chart.to_json()`.

What it does NOT do
- No global RNG, no global plotting state, no terminal handling.
*/

pub mod chart;
pub mod error;
pub mod game;
pub mod mechanics;
pub mod systems;

pub use chart::{Chart, ChartPoint, ChartStyle, ColorScale};
pub use error::{Result, RuinError};
pub use game::{GameParams, Outcome, Phase, PlayConfig, RoundCap};
pub use mechanics::{BernoulliSampler, Coin, Trajectory};

/// Result of driving a state with [`run_until`].
#[derive(Clone, Debug)]
pub struct Driven<S> {
    pub state: S,
    pub steps: u64,
    pub finished: bool,
}

/// Bounded driver: s_{t+1} = step(s_t) until `done(s_{t+1})` or `max_steps`.
pub fn run_until<S, Step, Done>(mut state: S, mut step: Step, done: Done, max_steps: u64) -> Driven<S>
where
    Step: FnMut(&S) -> S,
    Done: Fn(&S) -> bool,
{
    for n in 0..max_steps {
        state = step(&state);
        if done(&state) {
            return Driven { state, steps: n + 1, finished: true };
        }
    }
    Driven { state, steps: max_steps, finished: false }
}

/// Play one game with the default round cap and chart it.
pub fn simulate_gamblers_ruin<S>(
    initial_stake: u32,
    win_probability: f64,
    target_amount: u32,
    sampler: &mut S,
) -> Result<Chart>
where
    S: BernoulliSampler + ?Sized,
{
    let params = GameParams::new(initial_stake, win_probability, target_amount)?;
    simulate_with(params, sampler, &PlayConfig::default())
}

/// Validate, compute the odds, play, then chart.
pub fn simulate_with<S>(params: GameParams, sampler: &mut S, cfg: &PlayConfig) -> Result<Chart>
where
    S: BernoulliSampler + ?Sized,
{
    params.validate()?;
    let win = mechanics::odds::win_probability(&params)?;
    let trajectory = mechanics::walk::play(&params, sampler, cfg)?;
    Ok(Chart::new(params, win, &trajectory))
}
