/// Tunable parameters of a [`BattleEngine`](crate::BattleEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Rounds after which a fight is decided on remaining health.
    pub max_rounds: u32,
    /// Seed of the engine's random stream. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl BattleConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 200;

    pub fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            seed: None,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the values an engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        Ok(())
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid battle configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_rounds must be positive")]
    ZeroRounds,

    #[error("invalid config file {path}: {message}")]
    Parse { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BattleConfig::default();
        assert_eq!(config.max_rounds, 200);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let config = BattleConfig::new().with_max_rounds(0).with_seed(7);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRounds));
    }
}
