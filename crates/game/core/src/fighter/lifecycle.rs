//! Per-turn state machine of a fighter.
//!
//! ```text
//! announce → passive seal → turn start ─┬─ stunned ──────────────────────┐
//!                                       └─ passive → active → normal ─→ turn end
//! ```
//!
//! The turn aborts as soon as either fighter is down.

use super::{Fighter, SkillFlow, Target};
use crate::context::BattleContext;
use crate::hooks::{HookOutcome, TurnPhase};
use crate::status::{ScratchKey, StatusSlot};

impl Fighter {
    /// Runs one full turn of this fighter against `opponent`.
    pub fn take_turn(&mut self, opponent: &mut Fighter, ctx: &mut BattleContext) {
        ctx.log(format_args!(
            "{} starts its turn with {:.1} HP",
            self.name, self.health
        ));
        let passive_sealed = self.consume_passive_seal(ctx);

        let can_act = self.on_turn_start(ctx);
        if self.should_abort(opponent, ctx) {
            return;
        }
        if !can_act {
            ctx.log(format_args!("{} cannot act and skips the turn", self.name));
            self.on_turn_end(ctx);
            return;
        }

        let behavior = self.behavior();

        if !passive_sealed {
            behavior.passive_skill(self, opponent, ctx);
            if self.should_abort(opponent, ctx) {
                return;
            }
        }

        let mut flow = SkillFlow::Continue;
        if behavior.can_use_active_skill(self, opponent, ctx) {
            ctx.log(format_args!("{} unleashes its active skill", self.name));
            flow = behavior.active_skill(self, opponent, ctx);
            if self.should_abort(opponent, ctx) {
                return;
            }
        }

        if flow == SkillFlow::Continue {
            let target = self.normal_attack_target(opponent, ctx);
            behavior.perform_normal_attack(self, target, ctx);
            if self.should_abort(opponent, ctx) {
                return;
            }
        }

        self.on_turn_end(ctx);
    }

    /// Resolves who the normal attack hits: the fighter itself while confused.
    fn normal_attack_target<'a>(&self, opponent: &'a mut Fighter, ctx: &mut BattleContext) -> Target<'a> {
        if self.status.is_active(StatusSlot::ConfusedTurns) {
            ctx.log(format_args!(
                "{} is confused and attacks itself",
                self.name
            ));
            return Target::Own;
        }
        Target::Opponent(opponent)
    }

    /// Consumes one turn of a passive seal. Returns whether the passive is
    /// suppressed this turn.
    fn consume_passive_seal(&mut self, ctx: &mut BattleContext) -> bool {
        let remaining = self.passive_disabled_turns();
        if remaining <= 0.0 {
            return false;
        }
        let remaining = self
            .scratch_mut()
            .add_number(ScratchKey::PASSIVE_DISABLED, -1.0);
        ctx.log(format_args!(
            "{}'s passive is sealed, {:.1} turns remaining",
            self.name, remaining
        ));
        true
    }

    /// Runs start hooks and decays start-of-turn statuses.
    ///
    /// Returns `false` when a stun consumed this turn.
    fn on_turn_start(&mut self, ctx: &mut BattleContext) -> bool {
        self.run_hooks(TurnPhase::Start, ctx);

        if self.status.is_active(StatusSlot::SpeedPenalty) {
            let remaining = self.status.decay(StatusSlot::SpeedPenalty);
            if remaining > 0.0 {
                ctx.log(format_args!(
                    "{}'s slow lasts {:.1} more turns",
                    self.name, remaining
                ));
            }
        }

        let mut can_act = true;
        if self.status.is_active(StatusSlot::StunnedTurns) {
            let remaining = self.status.decay(StatusSlot::StunnedTurns);
            ctx.log(format_args!(
                "{} is stunned, {:.1} turns remaining",
                self.name, remaining
            ));
            can_act = false;
        }

        if self.status.is_active(StatusSlot::DamageReductionTurns) {
            let remaining = self.status.decay(StatusSlot::DamageReductionTurns);
            if remaining <= 0.0 {
                self.status.clear(StatusSlot::DamageReductionValue);
                ctx.log(format_args!("{}'s damage reduction ends", self.name));
            }
        }

        can_act
    }

    /// Decays confusion and runs end hooks.
    fn on_turn_end(&mut self, ctx: &mut BattleContext) {
        if self.status.is_active(StatusSlot::ConfusedTurns) {
            let remaining = self.status.decay(StatusSlot::ConfusedTurns);
            if remaining > 0.0 {
                ctx.log(format_args!(
                    "{} stays confused for {:.1} more turns",
                    self.name, remaining
                ));
            } else {
                ctx.log(format_args!("{} snaps out of confusion", self.name));
            }
        }
        self.run_hooks(TurnPhase::End, ctx);
    }

    fn run_hooks(&mut self, phase: TurnPhase, ctx: &mut BattleContext) {
        let running = self.hooks.begin(phase);
        let mut survivors = Vec::with_capacity(running.len());
        for mut hook in running {
            if self.hooks.is_cancelled(hook.id()) {
                continue;
            }
            match hook.on_turn(self, ctx) {
                HookOutcome::Keep => survivors.push(hook),
                HookOutcome::Remove => self.hooks.retire(hook.id()),
            }
        }
        self.hooks.finish(phase, survivors);
    }

    fn should_abort(&self, opponent: &Fighter, ctx: &mut BattleContext) -> bool {
        if !self.is_alive() {
            ctx.log(format_args!("{} cannot continue, already down", self.name));
            return true;
        }
        !opponent.is_alive()
    }
}
