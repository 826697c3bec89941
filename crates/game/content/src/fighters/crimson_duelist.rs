use arena_core::{
    AttackParams, BattleContext, Behavior, Fighter, ScratchKey, StatsBlock, Target,
};

const BLEED: ScratchKey = ScratchKey::new("bleed");

/// Fencer whose every landed normal attack opens a bleeding wound.
///
/// Bleed stacks add up on re-application and the wound's duration resets,
/// so a fast duelist keeps the opponent bleeding for the whole fight.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrimsonDuelist;

impl CrimsonDuelist {
    pub const NAME: &'static str = "Crimson Duelist";
    pub const STATS: StatsBlock = StatsBlock::new(130.0, 20.0, 8.0, 16.0);

    pub const BLEED_STACKS: f64 = 2.0;
    pub const BLEED_TURNS: f64 = 3.0;

    pub fn fighter() -> Fighter {
        Fighter::new(Self::NAME, Self::STATS, Self)
    }

    /// Bleed stacks currently on `fighter`.
    pub fn bleed_on(fighter: &Fighter) -> f64 {
        fighter
            .scratch()
            .stack(BLEED)
            .map_or(0.0, |record| record.stacks)
    }
}

impl Behavior for CrimsonDuelist {
    fn perform_normal_attack(&self, me: &mut Fighter, target: Target<'_>, ctx: &mut BattleContext) {
        match target {
            Target::Opponent(opponent) => {
                me.attack(opponent, AttackParams::default(), ctx);
                if opponent.is_alive() {
                    opponent.apply_stacking_damage(BLEED, Self::BLEED_STACKS, Self::BLEED_TURNS, ctx);
                }
            }
            // a confused duelist does not bleed itself
            Target::Own => {
                me.basic_attack(Target::Own, AttackParams::default(), ctx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{BattleRng, Inert, TurnPhase};

    #[test]
    fn normal_attacks_stack_bleed() {
        let mut ctx = BattleContext::quiet(BattleRng::new(1));
        let mut duelist = CrimsonDuelist::fighter();
        let mut foe = Fighter::new("Foe", StatsBlock::new(500.0, 0.0, 0.0, 1.0), Inert);

        CrimsonDuelist.perform_normal_attack(&mut duelist, Target::Opponent(&mut foe), &mut ctx);
        CrimsonDuelist.perform_normal_attack(&mut duelist, Target::Opponent(&mut foe), &mut ctx);

        assert_eq!(foe.health(), 460.0);
        assert_eq!(CrimsonDuelist::bleed_on(&foe), 4.0);
        assert_eq!(foe.hooks().len(TurnPhase::Start), 1);
    }

    #[test]
    fn confused_duelist_does_not_bleed_itself() {
        let mut ctx = BattleContext::quiet(BattleRng::new(1));
        let mut duelist = CrimsonDuelist::fighter();

        CrimsonDuelist.perform_normal_attack(&mut duelist, Target::Own, &mut ctx);

        assert_eq!(duelist.health(), 118.0);
        assert_eq!(CrimsonDuelist::bleed_on(&duelist), 0.0);
        assert!(duelist.hooks().is_empty());
    }
}
