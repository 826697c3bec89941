//! Damage calculation and application.
//!
//! # Formula
//!
//! ```text
//! raw      = base_damage                       if supplied
//!          = attack × multiplier + flat_bonus  otherwise
//! defense  = 0 if ignore_defense else target.defense
//! hit      = max(1, raw - defense)
//! applied  = hit                                  (pure damage)
//!          = max(0, absorbed(hit) - reduction)    (otherwise)
//! ```

use super::{Fighter, Target};
use crate::context::BattleContext;
use crate::status::StatusSlot;

/// Smallest hit a basic attack can land.
pub const MIN_HIT: f64 = 1.0;

/// How incoming damage interacts with the target's defenses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DamageKind {
    /// Absorption and damage reduction both apply.
    #[default]
    Normal,
    /// Absorption applies, damage reduction is skipped.
    IgnoreReduction,
    /// Subtracted from health unconditionally (damage over time, executes).
    Pure,
}

/// Knobs of [`Fighter::basic_attack`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackParams {
    /// Replaces `attack × multiplier + flat_bonus` when set.
    pub base_damage: Option<f64>,
    pub multiplier: f64,
    pub flat_bonus: f64,
    pub ignore_defense: bool,
    pub ignore_reduction: bool,
}

impl Default for AttackParams {
    fn default() -> Self {
        Self {
            base_damage: None,
            multiplier: 1.0,
            flat_bonus: 0.0,
            ignore_defense: false,
            ignore_reduction: false,
        }
    }
}

impl AttackParams {
    /// Attack with a fixed raw damage value.
    pub fn base(damage: f64) -> Self {
        Self {
            base_damage: Some(damage),
            ..Self::default()
        }
    }

    /// Attack scaled from the attacker's attack stat.
    pub fn scaled(multiplier: f64, flat_bonus: f64) -> Self {
        Self {
            multiplier,
            flat_bonus,
            ..Self::default()
        }
    }

    pub fn ignoring_defense(mut self) -> Self {
        self.ignore_defense = true;
        self
    }

    pub fn ignoring_reduction(mut self) -> Self {
        self.ignore_reduction = true;
        self
    }

    fn raw_damage(&self, attack: f64) -> f64 {
        self.base_damage
            .unwrap_or(attack * self.multiplier + self.flat_bonus)
    }

    fn kind(&self) -> DamageKind {
        if self.ignore_reduction {
            DamageKind::IgnoreReduction
        } else {
            DamageKind::Normal
        }
    }
}

impl Fighter {
    /// Attacks a target and returns the damage applied.
    pub fn basic_attack(&mut self, target: Target<'_>, params: AttackParams, ctx: &mut BattleContext) -> f64 {
        let raw = params.raw_damage(self.stats.attack);
        match target {
            Target::Opponent(defender) => land_hit(&self.name, raw, &params, defender, ctx),
            Target::Own => {
                let name = self.name.clone();
                land_hit(&name, raw, &params, self, ctx)
            }
        }
    }

    /// Shorthand for [`basic_attack`](Self::basic_attack) on the opponent.
    pub fn attack(&mut self, opponent: &mut Fighter, params: AttackParams, ctx: &mut BattleContext) -> f64 {
        self.basic_attack(Target::Opponent(opponent), params, ctx)
    }

    /// Applies incoming damage and returns the amount taken.
    ///
    /// Non-positive amounts are ignored. Health is clamped at 0; the returned
    /// value is the amount applied before that clamp.
    pub fn receive_damage(&mut self, amount: f64, kind: DamageKind) -> f64 {
        if amount.is_nan() || amount <= 0.0 {
            return 0.0;
        }
        let applied = match kind {
            DamageKind::Pure => amount,
            DamageKind::Normal | DamageKind::IgnoreReduction => {
                let behavior = self.behavior();
                let through = behavior.absorb_damage(self, amount).clamp(0.0, amount);
                let reduction = if kind == DamageKind::IgnoreReduction {
                    0.0
                } else {
                    self.status.get(StatusSlot::DamageReductionValue)
                };
                (through - reduction).max(0.0)
            }
        };
        self.health = (self.health - applied).max(0.0);
        applied
    }

    /// Restores health up to the maximum and returns the amount recovered.
    pub fn heal(&mut self, amount: f64, ctx: &mut BattleContext) -> f64 {
        if amount.is_nan() || amount <= 0.0 {
            return 0.0;
        }
        let before = self.health;
        self.health = (self.health + amount).min(self.stats.max_health);
        let recovered = (self.health - before).max(0.0);
        if recovered > 0.0 {
            ctx.log(format_args!("{} recovers {:.1} health", self.name, recovered));
        }
        recovered
    }
}

fn land_hit(
    attacker: &str,
    raw: f64,
    params: &AttackParams,
    defender: &mut Fighter,
    ctx: &mut BattleContext,
) -> f64 {
    let defense = if params.ignore_defense {
        0.0
    } else {
        defender.stats.defense
    };
    let hit = (raw - defense).max(MIN_HIT);
    let dealt = defender.receive_damage(hit, params.kind());
    ctx.log(format_args!(
        "{attacker} deals {dealt:.1} damage to {}, {} now at {:.1} HP",
        defender.name, defender.name, defender.health
    ));
    dealt
}
