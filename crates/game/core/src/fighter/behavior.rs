//! Behavior capability interface.

use strum::{Display, IntoStaticStr};

use super::{AttackParams, Fighter, FighterSetup, Target};
use crate::context::BattleContext;

/// Control flow requested by an active skill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillFlow {
    /// The normal attack still follows this turn.
    #[default]
    Continue,
    /// The active skill was this turn's whole offensive action.
    SkipNormalAttack,
}

/// Harmful state just applied to a fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NegativeState {
    Confusion,
    Stun,
    Slow,
}

/// What a fighter does on its turn.
///
/// Every method has a default, so a behavior only overrides what makes it
/// distinct. Behaviors are shared and immutable; per-fighter state belongs in
/// the fighter's [`Scratch`](crate::Scratch) map.
///
/// # Implementation Rules
/// 1. All randomness comes from `ctx` so fights stay reproducible.
/// 2. `absorb_damage` runs inside damage resolution and must not deal damage
///    itself.
pub trait Behavior {
    /// One-time adjustment while the fighter is built (stat rebalancing,
    /// initial scratch values).
    fn setup(&self, _fighter: &mut FighterSetup<'_>) {}

    /// Runs every turn the fighter can act, unless its passive is sealed.
    fn passive_skill(&self, _me: &mut Fighter, _opponent: &mut Fighter, _ctx: &mut BattleContext) {}

    /// Whether this turn's offensive action opens with the active skill.
    ///
    /// Typically advances a cycle counter via
    /// [`Scratch::tick_cycle`](crate::Scratch::tick_cycle), so it is called
    /// exactly once per acting turn.
    fn can_use_active_skill(
        &self,
        _me: &mut Fighter,
        _opponent: &Fighter,
        _ctx: &mut BattleContext,
    ) -> bool {
        false
    }

    fn active_skill(
        &self,
        _me: &mut Fighter,
        _opponent: &mut Fighter,
        _ctx: &mut BattleContext,
    ) -> SkillFlow {
        SkillFlow::Continue
    }

    /// Executes the normal attack against an already resolved target.
    fn perform_normal_attack(&self, me: &mut Fighter, target: Target<'_>, ctx: &mut BattleContext) {
        me.basic_attack(target, AttackParams::default(), ctx);
    }

    /// Reaction to a harmful state landing on this fighter.
    fn on_negative_state(&self, _me: &mut Fighter, _state: NegativeState, _ctx: &mut BattleContext) {}

    /// Absorbs part of an incoming non-pure hit before damage reduction.
    ///
    /// Returns the amount that gets through.
    fn absorb_damage(&self, _me: &mut Fighter, amount: f64) -> f64 {
        amount
    }
}

/// Behavior with every capability left at its default.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inert;

impl Behavior for Inert {}
