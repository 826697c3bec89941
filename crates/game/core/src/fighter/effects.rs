//! Status-effect helpers used by behaviors.
//!
//! Stacking policies:
//! - confusion: refresh to the longer duration
//! - damage reduction: overwrite value and duration
//! - passive seal: refresh to the longer duration
//! - stun, slow: additive
//! - stacking damage: stacks add up, duration resets

use tracing::trace;

use super::{DamageKind, Fighter, NegativeState};
use crate::context::BattleContext;
use crate::hooks::{HookId, HookOutcome, TurnHook, TurnPhase};
use crate::status::{ScratchKey, StackRecord, StatusSlot, clamp_non_negative};

impl Fighter {
    /// Confuses the fighter for at least `turns` turns.
    pub fn apply_confusion(&mut self, turns: f64, ctx: &mut BattleContext) {
        let turns = self
            .status
            .raise_to(StatusSlot::ConfusedTurns, clamp_non_negative(turns));
        ctx.log(format_args!("{} is confused for {:.1} turns", self.name, turns));
        self.react(NegativeState::Confusion, ctx);
    }

    /// Replaces any damage reduction with `value` for `turns` turns.
    pub fn apply_damage_reduction(&mut self, value: f64, turns: f64, ctx: &mut BattleContext) {
        self.status.set(StatusSlot::DamageReductionValue, value);
        self.status.set(StatusSlot::DamageReductionTurns, turns);
        ctx.log(format_args!(
            "{} gains {:.1} damage reduction for {:.1} turns",
            self.name,
            self.status.get(StatusSlot::DamageReductionValue),
            self.status.get(StatusSlot::DamageReductionTurns)
        ));
    }

    /// Seals the passive skill for at least `turns` turns.
    pub fn disable_passive(&mut self, turns: f64, ctx: &mut BattleContext) {
        if turns.is_nan() || turns <= 0.0 {
            return;
        }
        let current = self.passive_disabled_turns();
        let updated = current.max(turns);
        self.scratch_mut()
            .set_number(ScratchKey::PASSIVE_DISABLED, updated);
        ctx.log(format_args!(
            "{}'s passive is sealed for {:.1} turns",
            self.name, updated
        ));
    }

    /// Remaining sealed turns of the passive skill, 0 when free.
    pub fn passive_disabled_turns(&self) -> f64 {
        self.scratch().number(ScratchKey::PASSIVE_DISABLED)
    }

    /// Lets a behavior check the passive seal inside its own logic.
    pub fn can_trigger_passive(&self, ctx: &mut BattleContext, announce: bool) -> bool {
        let remaining = self.passive_disabled_turns();
        if remaining <= 0.0 {
            return true;
        }
        if announce {
            ctx.log(format_args!(
                "{}'s passive is sealed, {:.1} turns remaining",
                self.name, remaining
            ));
        }
        false
    }

    /// Adds `turns` of stun.
    pub fn apply_stun(&mut self, turns: f64, ctx: &mut BattleContext) {
        if turns.is_nan() || turns <= 0.0 {
            return;
        }
        let total = self.status.add(StatusSlot::StunnedTurns, turns);
        ctx.log(format_args!("{} is stunned for {:.1} turns", self.name, total));
        self.react(NegativeState::Stun, ctx);
    }

    /// Adds `amount` of speed penalty, optionally capped.
    pub fn apply_speed_penalty(&mut self, amount: f64, cap: Option<f64>, ctx: &mut BattleContext) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }
        let mut total = self.status.get(StatusSlot::SpeedPenalty) + amount;
        if let Some(cap) = cap {
            total = total.min(cap);
        }
        self.status.set(StatusSlot::SpeedPenalty, total);
        ctx.log(format_args!(
            "{} is slowed by {:.1}",
            self.name,
            self.status.get(StatusSlot::SpeedPenalty)
        ));
        self.react(NegativeState::Slow, ctx);
    }

    /// Sets the speed bonus magnitude.
    pub fn grant_speed_bonus(&mut self, value: f64) {
        self.status.set(StatusSlot::SpeedBonus, value);
    }

    /// Applies a stacking damage-over-time effect stored under `key`.
    ///
    /// Re-application adds `stacks` and resets the duration. The first
    /// application registers a start-of-turn hook that deals the current
    /// stacks as pure damage each turn and removes itself (and the record)
    /// once the duration runs out.
    pub fn apply_stacking_damage(
        &mut self,
        key: ScratchKey,
        stacks: f64,
        duration: f64,
        ctx: &mut BattleContext,
    ) {
        if stacks.is_nan() || stacks <= 0.0 || duration.is_nan() || duration <= 0.0 {
            return;
        }
        let mut record = self.scratch().stack(key).unwrap_or_default();
        record.stacks += stacks;
        record.duration = duration;

        let id = HookId::stacking_damage(key);
        record.hook_registered = self.hooks.contains(TurnPhase::Start, id)
            || self.hooks.register(TurnPhase::Start, StackingDamage { key });
        self.scratch_mut().set_stack(key, record);

        ctx.log(format_args!(
            "{} suffers {} x{:.1} for {:.1} turns",
            self.name, key, record.stacks, record.duration
        ));
    }

    fn react(&mut self, state: NegativeState, ctx: &mut BattleContext) {
        let behavior = self.behavior();
        behavior.on_negative_state(self, state, ctx);
    }
}

/// Start-of-turn tick of a stacking damage effect.
struct StackingDamage {
    key: ScratchKey,
}

impl TurnHook for StackingDamage {
    fn id(&self) -> HookId {
        HookId::stacking_damage(self.key)
    }

    fn on_turn(&mut self, owner: &mut Fighter, ctx: &mut BattleContext) -> HookOutcome {
        let record = match owner.scratch().stack(self.key) {
            Some(record) if !record.is_spent() => record,
            _ => {
                owner.scratch_mut().remove(self.key);
                return HookOutcome::Remove;
            }
        };

        let dealt = owner.receive_damage(record.stacks, DamageKind::Pure);
        ctx.log(format_args!(
            "{} takes {:.1} damage from {}, {:.1} HP left",
            owner.name(),
            dealt,
            self.key,
            owner.health()
        ));

        let remaining = clamp_non_negative(record.duration - 1.0);
        if remaining <= 0.0 {
            owner.scratch_mut().remove(self.key);
            ctx.log(format_args!("{} on {} wears off", self.key, owner.name()));
            trace!(effect = %self.key, "stacking damage expired");
            return HookOutcome::Remove;
        }
        owner.scratch_mut().set_stack(
            self.key,
            StackRecord {
                duration: remaining,
                ..record
            },
        );
        HookOutcome::Keep
    }
}
