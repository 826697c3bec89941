use arena_core::{
    AttackParams, BattleContext, Behavior, Fighter, FighterSetup, ScratchKey, SkillFlow,
    StatsBlock,
};

const ICE_SHIELD: ScratchKey = ScratchKey::new("ice_shield");
const SKILL_CYCLE: ScratchKey = ScratchKey::new("frost_cycle");

/// Fragile caster behind a regenerating ice shield.
///
/// - Ice shield: starts at 15 and soaks incoming non-pure damage before
///   damage reduction.
/// - Passive: the shield regrows by 5 whenever it is below 10.
/// - Active (every 2nd acting turn): a frost bolt that pierces half the
///   target's defense, slows it by 1 (up to 5) and has a 15% chance to stun
///   for a turn. The normal attack still follows.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrostCaster;

impl FrostCaster {
    pub const NAME: &'static str = "Frost Caster";
    pub const STATS: StatsBlock = StatsBlock::new(110.0, 22.0, 10.0, 18.0);

    pub const SHIELD_START: f64 = 15.0;
    pub const SHIELD_REGEN: f64 = 5.0;
    pub const SHIELD_REGEN_BELOW: f64 = 10.0;
    pub const SKILL_PERIOD: u32 = 2;
    pub const BOLT_BONUS: f64 = 5.0;
    pub const SLOW: f64 = 1.0;
    pub const SLOW_CAP: f64 = 5.0;
    pub const STUN_CHANCE: f64 = 0.15;

    pub fn fighter() -> Fighter {
        Fighter::new(Self::NAME, Self::STATS, Self)
    }

    pub fn shield(fighter: &Fighter) -> f64 {
        fighter.scratch().number(ICE_SHIELD)
    }
}

impl Behavior for FrostCaster {
    fn setup(&self, fighter: &mut FighterSetup<'_>) {
        fighter
            .scratch_mut()
            .set_number(ICE_SHIELD, Self::SHIELD_START);
    }

    fn passive_skill(&self, me: &mut Fighter, _opponent: &mut Fighter, ctx: &mut BattleContext) {
        let shield = me.scratch().number(ICE_SHIELD);
        if shield < Self::SHIELD_REGEN_BELOW {
            let shield = me.scratch_mut().add_number(ICE_SHIELD, Self::SHIELD_REGEN);
            ctx.log(format_args!("{}'s ice shield regrows to {:.1}", me.name(), shield));
        }
    }

    fn can_use_active_skill(&self, me: &mut Fighter, _opponent: &Fighter, _ctx: &mut BattleContext) -> bool {
        me.scratch_mut().tick_cycle(SKILL_CYCLE, Self::SKILL_PERIOD)
    }

    fn active_skill(&self, me: &mut Fighter, opponent: &mut Fighter, ctx: &mut BattleContext) -> SkillFlow {
        let raw = me.stats().attack + Self::BOLT_BONUS - opponent.stats().defense * 0.5;
        me.attack(opponent, AttackParams::base(raw).ignoring_defense(), ctx);
        if !opponent.is_alive() {
            return SkillFlow::Continue;
        }
        opponent.apply_speed_penalty(Self::SLOW, Some(Self::SLOW_CAP), ctx);
        if ctx.chance(Self::STUN_CHANCE) {
            opponent.apply_stun(1.0, ctx);
        }
        SkillFlow::Continue
    }

    fn absorb_damage(&self, me: &mut Fighter, amount: f64) -> f64 {
        let shield = me.scratch().number(ICE_SHIELD);
        if shield <= 0.0 {
            return amount;
        }
        let absorbed = shield.min(amount);
        me.scratch_mut().set_number(ICE_SHIELD, shield - absorbed);
        amount - absorbed
    }
}
