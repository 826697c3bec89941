//! Fight results and batch statistics.

use std::collections::BTreeMap;
use std::fmt;

use crate::fighter::Fighter;

/// Tally key under which draws are counted.
pub const DRAW_KEY: &str = "draw";

/// How a single fight ended.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    Winner(String),
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<&str> {
        match self {
            Outcome::Winner(name) => Some(name.as_str()),
            Outcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Key this outcome is counted under in a [`Tally`].
    pub fn key(&self) -> &str {
        self.winner().unwrap_or(DRAW_KEY)
    }

    pub(crate) fn win(fighter: &Fighter) -> Self {
        Outcome::Winner(fighter.name().to_owned())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(name) => write!(f, "{name} wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// Health of one fighter after a turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthSnapshot {
    pub name: String,
    pub health: f64,
    pub max_health: f64,
}

impl HealthSnapshot {
    pub(crate) fn of(fighter: &Fighter) -> Self {
        Self {
            name: fighter.name().to_owned(),
            health: fighter.health(),
            max_health: fighter.max_health(),
        }
    }
}

/// One turn of a verbose fight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    /// 1-based round the turn belongs to.
    pub round: u32,
    /// 1-based turn index within the fight.
    pub turn: u64,
    pub actor: String,
    /// Turn-log lines in the order they were written.
    pub entries: Vec<String>,
    /// Both fighters, in factory order.
    pub snapshot: [HealthSnapshot; 2],
}

/// Result of [`BattleEngine::fight`](super::BattleEngine::fight).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub outcome: Outcome,
    /// Rounds started before the fight ended.
    pub rounds: u32,
    /// Empty unless the fight ran verbose.
    pub turns: Vec<TurnRecord>,
}

/// Outcome counts over a batch of fights.
///
/// Keys are fighter names plus [`DRAW_KEY`]. Two fighters sharing a name share
/// a key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tally {
    counts: BTreeMap<String, u64>,
}

impl Tally {
    /// Tally with both names and the draw key present at zero.
    pub fn seeded(first: &str, second: &str) -> Self {
        let mut counts = BTreeMap::new();
        for key in [first, second, DRAW_KEY] {
            counts.insert(key.to_owned(), 0);
        }
        Self { counts }
    }

    pub fn record(&mut self, outcome: &Outcome) {
        *self.counts.entry(outcome.key().to_owned()).or_default() += 1;
    }

    pub fn count(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn wins(&self, name: &str) -> u64 {
        self.count(name)
    }

    pub fn draws(&self) -> u64 {
        self.count(DRAW_KEY)
    }

    /// Number of fights recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Share of fights counted under `key`, 0 for an empty tally.
    pub fn rate(&self, key: &str) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(key) as f64 / total as f64,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }
}
