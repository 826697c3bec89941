use arena_core::{BattleContext, Behavior, Fighter, FighterSetup, NegativeState, StatsBlock};

/// Brittle construct: trades half its armor for a much larger body and
/// hardens whenever something tries to control it.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlassGolem;

impl GlassGolem {
    pub const NAME: &'static str = "Glass Golem";
    pub const STATS: StatsBlock = StatsBlock::new(120.0, 18.0, 14.0, 9.0);

    pub const DEFENSE_FACTOR: f64 = 0.5;
    pub const HEALTH_FACTOR: f64 = 1.4;
    pub const HARDEN_VALUE: f64 = 6.0;
    pub const HARDEN_TURNS: f64 = 2.0;

    pub fn fighter() -> Fighter {
        Fighter::new(Self::NAME, Self::STATS, Self)
    }
}

impl Behavior for GlassGolem {
    fn setup(&self, fighter: &mut FighterSetup<'_>) {
        let stats = fighter.stats_mut();
        stats.defense *= Self::DEFENSE_FACTOR;
        stats.max_health *= Self::HEALTH_FACTOR;
    }

    fn on_negative_state(&self, me: &mut Fighter, state: NegativeState, ctx: &mut BattleContext) {
        ctx.log(format_args!("{} hardens against {}", me.name(), state));
        me.apply_damage_reduction(Self::HARDEN_VALUE, Self::HARDEN_TURNS, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{BattleRng, StatusSlot};

    #[test]
    fn frailty_rescales_stats() {
        let golem = GlassGolem::fighter();
        assert_eq!(golem.stats().defense, 7.0);
        assert_eq!(golem.max_health(), 168.0);
        assert_eq!(golem.health(), 168.0);
    }

    #[test]
    fn control_triggers_damage_reduction() {
        let mut ctx = BattleContext::verbose(BattleRng::new(1));
        let mut golem = GlassGolem::fighter();
        golem.apply_stun(1.0, &mut ctx);

        assert_eq!(golem.status().get(StatusSlot::DamageReductionValue), 6.0);
        assert_eq!(golem.status().get(StatusSlot::DamageReductionTurns), 2.0);
        assert!(
            ctx.drain_log()
                .iter()
                .any(|line| line == "Glass Golem hardens against stun")
        );
    }
}
