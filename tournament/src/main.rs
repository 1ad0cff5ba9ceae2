//! Headless tournament runner
//!
//! Plays the custom-heuristic agents against the baseline roster and prints
//! a win/loss table.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use isolation::tournament::{default_roster, default_test_agents, run_tournament};
use isolation::EngineConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fair rounds per opponent (each round is two games)
    #[arg(long)]
    matches: Option<u32>,

    /// Per-move time limit in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Time left at which a search is abandoned, in milliseconds
    #[arg(long)]
    threshold_ms: Option<u64>,

    /// Seed for the random openings
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if let Some(matches) = self.matches {
            config.tournament.matches = matches;
        }
        if let Some(limit) = self.time_limit_ms {
            config.search.time_limit_ms = limit;
        }
        if let Some(threshold) = self.threshold_ms {
            config.search.threshold_ms = threshold;
        }
        if self.seed.is_some() {
            config.tournament.seed = self.seed;
        }
        anyhow::ensure!(
            config.search.threshold_ms < config.search.time_limit_ms,
            "threshold ({}ms) must be below the time limit ({}ms)",
            config.search.threshold_ms,
            config.search.time_limit_ms
        );
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let config = args.resolve_config()?;
    log::info!(
        "{} rounds per matchup on {}x{}, {}ms per move (threshold {}ms)",
        config.tournament.matches,
        config.board.width,
        config.board.height,
        config.search.time_limit_ms,
        config.search.threshold_ms
    );

    let mut test_agents = default_test_agents(&config);
    let mut roster = default_roster(&config);
    let report = run_tournament(&config, &mut test_agents, &mut roster)?;

    println!();
    print!("{report}");
    Ok(())
}
