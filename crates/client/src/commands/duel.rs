use anyhow::{Context, Result};
use arena_core::BattleEngine;
use clap::Parser;
use tracing::info;

use super::resolve;
use crate::config::{ClientConfig, Overrides};
use crate::report;

/// Run one fight and print its full turn log
#[derive(Parser, Debug)]
pub struct Duel {
    /// First fighter (key or display name)
    pub first: String,

    /// Second fighter (key or display name)
    pub second: String,

    /// Seed of the random stream [default: 2024]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Round limit [default: 150]
    #[arg(long)]
    pub max_rounds: Option<u32>,
}

impl Duel {
    pub fn execute(self, config: ClientConfig) -> Result<()> {
        let config = config.with_overrides(&Overrides {
            max_rounds: self.max_rounds,
            seed: self.seed,
            battles: None,
        });
        let first = resolve(&self.first)?;
        let second = resolve(&self.second)?;

        let mut engine =
            BattleEngine::new(config.battle.clone()).context("invalid battle configuration")?;
        let report = engine.fight(first.factory, second.factory, true);
        info!(outcome = %report.outcome, rounds = report.rounds, "Duel finished");

        let mut out = std::io::stdout().lock();
        report::write_duel(&mut out, &report)?;
        Ok(())
    }
}
