//! Arena battle simulator.
//!
//! Composition root of the command-line driver: loads configuration, installs
//! logging and dispatches to a subcommand.
//!
//! # Examples
//!
//! ```bash
//! # Classic matchup, 10 000 fights
//! cargo run -p arena-client -- simulate blazing-warrior frost-caster
//!
//! # One verbose fight
//! cargo run -p arena-client -- duel mind-weaver glass-golem --seed 7
//! ```

mod commands;
mod config;
mod logging;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arena_content::ConfigLoader;
use clap::Parser;
use commands::{Duel, Roster, Simulate};
use config::ClientConfig;

/// One-on-one turn-based battle simulator
#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Simulate fights between arena fighters", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML file with battle settings (max_rounds, seed)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run many fights and print win statistics
    Simulate(Simulate),

    /// Run one fight with the full turn log
    Duel(Duel),

    /// List available fighters
    Roster(Roster),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = apply_config_file(ClientConfig::from_env(), cli.config.as_deref())?;

    let _guard = logging::init(config.log_dir.as_deref())?;

    match cli.command {
        Command::Simulate(cmd) => cmd.execute(config),
        Command::Duel(cmd) => cmd.execute(config),
        Command::Roster(cmd) => cmd.execute(),
    }
}

/// Replaces the battle settings with those of `--config`, when given.
fn apply_config_file(config: ClientConfig, path: Option<&Path>) -> Result<ClientConfig> {
    let Some(path) = path else {
        return Ok(config);
    };
    let battle = ConfigLoader::load(path).with_context(|| format!("loading {}", path.display()))?;
    Ok(config.with_battle(battle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::BattleConfig;
    use std::io::Write;

    #[test]
    fn simulate_flags_parse() {
        let cli = Cli::try_parse_from([
            "arena",
            "simulate",
            "blazing-warrior",
            "frost-caster",
            "-n",
            "250",
            "--seed",
            "9",
            "--json",
            "--config",
            "battle.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("battle.toml")));
        let Command::Simulate(cmd) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(cmd.first, "blazing-warrior");
        assert_eq!(cmd.battles, Some(250));
        assert_eq!(cmd.seed, Some(9));
        assert_eq!(cmd.max_rounds, None);
        assert!(cmd.json);
    }

    #[test]
    fn duel_requires_two_fighters() {
        assert!(Cli::try_parse_from(["arena", "duel", "mind-weaver"]).is_err());
        assert!(Cli::try_parse_from(["arena", "roster"]).is_ok());
    }

    #[test]
    fn config_file_replaces_battle_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_rounds = 40\nseed = 9").unwrap();

        let config = apply_config_file(ClientConfig::default(), Some(file.path())).unwrap();
        assert_eq!(config.battle, BattleConfig::new().with_max_rounds(40).with_seed(9));
        assert_eq!(config.battles, ClientConfig::DEFAULT_BATTLES);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = apply_config_file(ClientConfig::default(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn no_config_file_keeps_settings() {
        let config = apply_config_file(ClientConfig::default(), None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
