use arena_core::{
    AttackParams, BattleContext, Behavior, Fighter, ScratchKey, SkillFlow, StatsBlock,
};

const RAGE: ScratchKey = ScratchKey::new("rage");
const SKILL_CYCLE: ScratchKey = ScratchKey::new("blazing_cycle");

/// Melee bruiser that builds rage and cashes it in with a burst every third
/// turn.
///
/// - Passive: +1 rage per turn, up to 5.
/// - Active (every 3rd acting turn): hits for `attack + 3 × rage`, ×1.5 on a
///   20% critical, instead of the normal attack.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlazingWarrior;

impl BlazingWarrior {
    pub const NAME: &'static str = "Blazing Warrior";
    pub const STATS: StatsBlock = StatsBlock::new(150.0, 28.0, 9.0, 14.0);

    pub const MAX_RAGE: f64 = 5.0;
    pub const RAGE_BONUS: f64 = 3.0;
    pub const SKILL_PERIOD: u32 = 3;
    pub const CRIT_CHANCE: f64 = 0.2;
    pub const CRIT_MULTIPLIER: f64 = 1.5;

    pub fn fighter() -> Fighter {
        Fighter::new(Self::NAME, Self::STATS, Self)
    }

    /// Current rage of a fighter built by [`fighter`](Self::fighter).
    pub fn rage(fighter: &Fighter) -> f64 {
        fighter.scratch().number(RAGE)
    }
}

impl Behavior for BlazingWarrior {
    fn passive_skill(&self, me: &mut Fighter, _opponent: &mut Fighter, ctx: &mut BattleContext) {
        let rage = (me.scratch().number(RAGE) + 1.0).min(Self::MAX_RAGE);
        me.scratch_mut().set_number(RAGE, rage);
        ctx.log(format_args!("{}'s rage builds to {:.0}", me.name(), rage));
    }

    fn can_use_active_skill(&self, me: &mut Fighter, _opponent: &Fighter, _ctx: &mut BattleContext) -> bool {
        me.scratch_mut().tick_cycle(SKILL_CYCLE, Self::SKILL_PERIOD)
    }

    fn active_skill(&self, me: &mut Fighter, opponent: &mut Fighter, ctx: &mut BattleContext) -> SkillFlow {
        let rage = me.scratch().number(RAGE);
        let mut raw = me.stats().attack + Self::RAGE_BONUS * rage;
        if ctx.chance(Self::CRIT_CHANCE) {
            raw *= Self::CRIT_MULTIPLIER;
            ctx.log(format_args!("{} lands a critical blow", me.name()));
        }
        me.attack(opponent, AttackParams::base(raw), ctx);
        SkillFlow::SkipNormalAttack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{BattleRng, Inert};

    fn target() -> Fighter {
        Fighter::new("Target", StatsBlock::new(1000.0, 0.0, 10.0, 1.0), Inert)
    }

    #[test]
    fn rage_caps_at_five() {
        let mut ctx = BattleContext::quiet(BattleRng::new(1));
        let mut warrior = BlazingWarrior::fighter();
        let mut foe = target();
        for _ in 0..8 {
            BlazingWarrior.passive_skill(&mut warrior, &mut foe, &mut ctx);
        }
        assert_eq!(BlazingWarrior::rage(&warrior), 5.0);
    }

    #[test]
    fn active_skill_fires_every_third_turn() {
        let mut ctx = BattleContext::quiet(BattleRng::new(1));
        let mut warrior = BlazingWarrior::fighter();
        let foe = target();
        let fired: Vec<bool> = (0..6)
            .map(|_| BlazingWarrior.can_use_active_skill(&mut warrior, &foe, &mut ctx))
            .collect();
        assert_eq!(fired, [false, false, true, false, false, true]);
    }

    #[test]
    fn burst_scales_with_rage() {
        let mut ctx = BattleContext::quiet(BattleRng::new(1));
        let mut warrior = BlazingWarrior::fighter();
        let mut foe = target();
        warrior.scratch_mut().set_number(RAGE, 2.0);

        let flow = BlazingWarrior.active_skill(&mut warrior, &mut foe, &mut ctx);
        assert_eq!(flow, SkillFlow::SkipNormalAttack);

        // 28 + 6 = 34 raw, 51 on a crit, minus 10 defense
        let taken = 1000.0 - foe.health();
        assert!(taken == 24.0 || taken == 41.0, "took {taken}");
    }
}
