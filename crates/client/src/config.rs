//! Driver configuration.
//!
//! Resolution order, later wins:
//! 1. built-in defaults
//! 2. environment (`ARENA_*`, `.env` loaded by `main`)
//! 3. `--config <file.toml>` (battle settings only)
//! 4. command-line flags

use std::env;
use std::path::PathBuf;

use arena_core::BattleConfig;

/// Settings of one driver invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub battle: BattleConfig,
    /// Fights per `simulate` run.
    pub battles: u64,
    /// Also write logs to `<log_dir>/arena.log`.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub const DEFAULT_BATTLES: u64 = 10_000;
    pub const DEFAULT_MAX_ROUNDS: u32 = 150;
    pub const DEFAULT_SEED: u64 = 2024;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(rounds) = read_var::<u32>(&lookup, "ARENA_MAX_ROUNDS") {
            config.battle.max_rounds = rounds;
        }
        if let Some(seed) = lookup("ARENA_SEED") {
            // "random" (or any non-number) leaves the stream unseeded
            config.battle.seed = seed.trim().parse().ok();
        }
        if let Some(battles) = read_var::<u64>(&lookup, "ARENA_BATTLES") {
            config.battles = battles;
        }
        if let Some(dir) = lookup("ARENA_LOG_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config
    }

    /// Replaces the battle settings with those read from a config file.
    pub fn with_battle(mut self, battle: BattleConfig) -> Self {
        self.battle = battle;
        self
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(rounds) = overrides.max_rounds {
            self.battle.max_rounds = rounds;
        }
        if let Some(seed) = overrides.seed {
            self.battle.seed = Some(seed);
        }
        if let Some(battles) = overrides.battles {
            self.battles = battles;
        }
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::new()
                .with_max_rounds(Self::DEFAULT_MAX_ROUNDS)
                .with_seed(Self::DEFAULT_SEED),
            battles: Self::DEFAULT_BATTLES,
            log_dir: None,
        }
    }
}

/// Values given on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub max_rounds: Option<u32>,
    pub seed: Option<u64>,
    pub battles: Option<u64>,
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
