//! Numeric baseline of a fighter.

/// Max health, attack, defense and speed of one fighter.
///
/// A fighter's block is fixed once the fighter is built; only
/// [`Behavior::setup`](crate::Behavior::setup) may rescale it, through
/// [`FighterSetup::stats_mut`](crate::FighterSetup::stats_mut).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsBlock {
    /// Health ceiling; must be positive.
    pub max_health: f64,
    pub attack: f64,
    pub defense: f64,
    /// Base turn-order weight before speed bonus/penalty.
    pub speed: f64,
}

impl StatsBlock {
    pub const fn new(max_health: f64, attack: f64, defense: f64, speed: f64) -> Self {
        Self {
            max_health,
            attack,
            defense,
            speed,
        }
    }
}
