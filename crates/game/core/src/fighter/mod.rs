//! Fighters - the combatants of a battle.
//!
//! A [`Fighter`] bundles its stats, current health, [`StatusStore`],
//! [`TurnHookRegistry`] and a shared [`Behavior`]. The engine only ever talks
//! to `Fighter`; concrete fighters differ solely by the behavior and stats
//! their factory supplies.

mod behavior;
mod damage;
mod effects;
mod lifecycle;

pub use behavior::{Behavior, Inert, NegativeState, SkillFlow};
pub use damage::{AttackParams, DamageKind};

use std::fmt;
use std::rc::Rc;

use crate::hooks::TurnHookRegistry;
use crate::stats::StatsBlock;
use crate::status::{Scratch, StatusSlot, StatusStore};

/// Lowest possible turn-order weight.
pub const MIN_EFFECTIVE_SPEED: f64 = 1.0;

/// One combatant.
pub struct Fighter {
    name: String,
    stats: StatsBlock,
    health: f64,
    status: StatusStore,
    hooks: TurnHookRegistry,
    behavior: Rc<dyn Behavior>,
}

impl Fighter {
    /// Builds a fighter at full health.
    ///
    /// The behavior's [`setup`](Behavior::setup) runs once here and may
    /// permanently rescale the stats; health is then set to the final max.
    pub fn new(name: impl Into<String>, stats: StatsBlock, behavior: impl Behavior + 'static) -> Self {
        let behavior: Rc<dyn Behavior> = Rc::new(behavior);
        let mut fighter = Self {
            name: name.into(),
            stats,
            health: stats.max_health,
            status: StatusStore::new(),
            hooks: TurnHookRegistry::new(),
            behavior: Rc::clone(&behavior),
        };
        behavior.setup(&mut FighterSetup {
            fighter: &mut fighter,
        });
        fighter.health = fighter.stats.max_health;
        fighter
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &StatsBlock {
        &self.stats
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn max_health(&self) -> f64 {
        self.stats.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// `max(1, speed + speed_bonus - speed_penalty)`.
    pub fn effective_speed(&self) -> f64 {
        let bonus = self.status.get(StatusSlot::SpeedBonus);
        let penalty = self.status.get(StatusSlot::SpeedPenalty);
        (self.stats.speed + bonus - penalty).max(MIN_EFFECTIVE_SPEED)
    }

    pub fn status(&self) -> &StatusStore {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusStore {
        &mut self.status
    }

    pub fn scratch(&self) -> &Scratch {
        self.status.scratch()
    }

    pub fn scratch_mut(&mut self) -> &mut Scratch {
        self.status.scratch_mut()
    }

    pub fn hooks(&self) -> &TurnHookRegistry {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut TurnHookRegistry {
        &mut self.hooks
    }

    pub(crate) fn behavior(&self) -> Rc<dyn Behavior> {
        Rc::clone(&self.behavior)
    }
}

impl fmt::Debug for Fighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fighter")
            .field("name", &self.name)
            .field("stats", &self.stats)
            .field("health", &self.health)
            .field("status", &self.status)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

/// Construction-time access to a fighter.
///
/// Only [`Behavior::setup`] receives one, which keeps stat rebalancing out of
/// the fight itself.
pub struct FighterSetup<'a> {
    fighter: &'a mut Fighter,
}

impl FighterSetup<'_> {
    pub fn name(&self) -> &str {
        &self.fighter.name
    }

    pub fn stats(&self) -> &StatsBlock {
        &self.fighter.stats
    }

    pub fn stats_mut(&mut self) -> &mut StatsBlock {
        &mut self.fighter.stats
    }

    pub fn status_mut(&mut self) -> &mut StatusStore {
        &mut self.fighter.status
    }

    pub fn scratch_mut(&mut self) -> &mut Scratch {
        self.fighter.status.scratch_mut()
    }
}

/// Receiver of an attack: the opponent, or the attacker itself.
pub enum Target<'a> {
    Opponent(&'a mut Fighter),
    Own,
}

impl Target<'_> {
    pub fn is_own(&self) -> bool {
        matches!(self, Target::Own)
    }
}
