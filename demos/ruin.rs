// demos/ruin.rs
// Run with:
//   cargo run --example ruin -- --stake 5 --probability 0.5 --target 10 --seed 42
//   cargo run --example ruin --features system-estimate -- --stake 20 --probability 0.49 --target 40 --games 5000

use clap::Parser;
use gamblers_ruin::{ChartStyle, Coin, GameParams, PlayConfig, simulate_with};

/// Play one gambler's ruin game and chart the capital path.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Starting capital
    #[arg(short, long, default_value_t = 5)]
    stake: u32,

    /// Probability of winning each round
    #[arg(short, long, default_value_t = 0.5)]
    probability: f64,

    /// Capital at which the gambler walks away a winner
    #[arg(short, long, default_value_t = 10)]
    target: u32,

    /// Seed for reproducible runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 100)]
    width: u16,

    #[arg(long, default_value_t = 24)]
    height: u16,

    /// Print the chart as JSON instead of drawing it
    #[arg(long)]
    json: bool,

    /// Also estimate the win rate over this many seeded games
    #[cfg(feature = "system-estimate")]
    #[arg(long)]
    games: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gamblers_ruin=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let params = GameParams::new(args.stake, args.probability, args.target)?;

    let mut coin = Coin::seeded(args.seed);
    let chart = simulate_with(params, &mut coin, &PlayConfig::default())?;
    tracing::info!(
        seed = args.seed,
        rounds = chart.rounds,
        outcome = chart.outcome.label(),
        "game played"
    );

    if args.json {
        println!("{}", chart.to_json()?);
    } else {
        print!("{}", chart.to_text(args.width, args.height, &ChartStyle::default()));
    }

    #[cfg(feature = "system-estimate")]
    if let Some(games) = args.games {
        use gamblers_ruin::systems::estimate::{EstimateConfig, estimate};
        let cfg = EstimateConfig { games, seed: args.seed, ..EstimateConfig::default() };
        let est = estimate(&params, &cfg)?;
        println!("== Monte Carlo over {} games ==", est.games);
        println!("win rate   {:.4} ± {:.4} (closed form {:.4}, z = {:+.2})",
            est.win_rate, est.std_error, est.analytic_win, est.z_score());
        println!("mean rounds {:.1} (closed form {:.1})", est.mean_rounds, est.analytic_rounds);
    }

    Ok(())
}
