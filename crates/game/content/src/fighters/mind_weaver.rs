use arena_core::{BattleContext, Behavior, Fighter, ScratchKey, SkillFlow, StatsBlock};

const SKILL_CYCLE: ScratchKey = ScratchKey::new("weaver_cycle");

/// Control mage.
///
/// - Passive: mends 4 health per turn.
/// - Active (every 4th acting turn): confuses the opponent for 2 turns and
///   seals its passive for 2 turns. Replaces the normal attack.
#[derive(Clone, Copy, Debug, Default)]
pub struct MindWeaver;

impl MindWeaver {
    pub const NAME: &'static str = "Mind Weaver";
    pub const STATS: StatsBlock = StatsBlock::new(105.0, 19.0, 7.0, 15.0);

    pub const MEND: f64 = 4.0;
    pub const SKILL_PERIOD: u32 = 4;
    pub const CONFUSION_TURNS: f64 = 2.0;
    pub const SEAL_TURNS: f64 = 2.0;

    pub fn fighter() -> Fighter {
        Fighter::new(Self::NAME, Self::STATS, Self)
    }
}

impl Behavior for MindWeaver {
    fn passive_skill(&self, me: &mut Fighter, _opponent: &mut Fighter, ctx: &mut BattleContext) {
        me.heal(Self::MEND, ctx);
    }

    fn can_use_active_skill(&self, me: &mut Fighter, _opponent: &Fighter, _ctx: &mut BattleContext) -> bool {
        me.scratch_mut().tick_cycle(SKILL_CYCLE, Self::SKILL_PERIOD)
    }

    fn active_skill(&self, _me: &mut Fighter, opponent: &mut Fighter, ctx: &mut BattleContext) -> SkillFlow {
        opponent.apply_confusion(Self::CONFUSION_TURNS, ctx);
        opponent.disable_passive(Self::SEAL_TURNS, ctx);
        SkillFlow::SkipNormalAttack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{BattleRng, DamageKind, Inert, StatusSlot};

    #[test]
    fn mending_stops_at_full_health() {
        let mut ctx = BattleContext::quiet(BattleRng::new(1));
        let mut weaver = MindWeaver::fighter();
        let mut foe = Fighter::new("Foe", StatsBlock::new(50.0, 0.0, 0.0, 1.0), Inert);
        weaver.receive_damage(6.0, DamageKind::Pure);

        MindWeaver.passive_skill(&mut weaver, &mut foe, &mut ctx);
        assert_eq!(weaver.health(), 103.0);
        MindWeaver.passive_skill(&mut weaver, &mut foe, &mut ctx);
        assert_eq!(weaver.health(), 105.0);
    }

    #[test]
    fn weave_confuses_and_seals() {
        let mut ctx = BattleContext::quiet(BattleRng::new(1));
        let mut weaver = MindWeaver::fighter();
        let mut foe = Fighter::new("Foe", StatsBlock::new(50.0, 0.0, 0.0, 1.0), Inert);

        let fired: Vec<bool> = (0..4)
            .map(|_| MindWeaver.can_use_active_skill(&mut weaver, &foe, &mut ctx))
            .collect();
        assert_eq!(fired, [false, false, false, true]);

        let flow = MindWeaver.active_skill(&mut weaver, &mut foe, &mut ctx);
        assert_eq!(flow, SkillFlow::SkipNormalAttack);
        assert_eq!(foe.status().get(StatusSlot::ConfusedTurns), 2.0);
        assert_eq!(foe.passive_disabled_turns(), 2.0);
        assert_eq!(foe.health(), 50.0);
    }
}
