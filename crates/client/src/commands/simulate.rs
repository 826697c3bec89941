use anyhow::{Context, Result};
use arena_core::BattleEngine;
use clap::Parser;
use tracing::info;

use super::resolve;
use crate::config::{ClientConfig, Overrides};
use crate::report::{self, SimulationSummary};

/// Run many quiet fights and print win statistics
#[derive(Parser, Debug)]
pub struct Simulate {
    /// First fighter (key or display name)
    pub first: String,

    /// Second fighter (key or display name)
    pub second: String,

    /// Number of fights [default: 10000]
    #[arg(short = 'n', long)]
    pub battles: Option<u64>,

    /// Seed of the random stream [default: 2024]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Round limit per fight [default: 150]
    #[arg(long)]
    pub max_rounds: Option<u32>,

    /// Print the tally as JSON
    #[arg(long)]
    pub json: bool,
}

impl Simulate {
    pub fn execute(self, config: ClientConfig) -> Result<()> {
        let config = config.with_overrides(&Overrides {
            max_rounds: self.max_rounds,
            seed: self.seed,
            battles: self.battles,
        });
        let first = resolve(&self.first)?;
        let second = resolve(&self.second)?;

        let mut engine =
            BattleEngine::new(config.battle.clone()).context("invalid battle configuration")?;
        info!(
            first = first.name,
            second = second.name,
            battles = config.battles,
            seed = ?engine.config().seed,
            "Starting simulation"
        );
        let tally = engine.simulate(first.factory, second.factory, config.battles);

        let mut out = std::io::stdout().lock();
        if self.json {
            let summary = SimulationSummary {
                battles: config.battles,
                seed: engine.config().seed,
                max_rounds: engine.config().max_rounds,
                results: &tally,
            };
            report::write_json(&mut out, &summary)?;
        } else {
            report::write_tally(&mut out, config.battles, first.name, second.name, &tally)?;
        }
        Ok(())
    }
}
