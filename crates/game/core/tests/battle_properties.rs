use arena_core::hooks::FnHook;
use arena_core::{
    AttackParams, BattleConfig, BattleEngine, BattleReport, Behavior, BattleContext, Fighter,
    FighterSetup, HookId, HookOutcome, Inert, Outcome, ScratchKey, SkillFlow, StatsBlock,
    StatusSlot, Target, TurnPhase,
};

// ============================================================================
// Test fighters
// ============================================================================

const USED: ScratchKey = ScratchKey::new("opening_used");
const BLEED: ScratchKey = ScratchKey::new("bleed");

/// Normal attacks crit for double damage half of the time.
struct Gambler;

impl Behavior for Gambler {
    fn perform_normal_attack(&self, me: &mut Fighter, target: Target<'_>, ctx: &mut BattleContext) {
        let multiplier = if ctx.chance(0.5) { 2.0 } else { 1.0 };
        me.basic_attack(target, AttackParams::scaled(multiplier, 0.0), ctx);
    }
}

/// Opening move applied once; afterwards the fighter only passes.
#[derive(Clone, Copy)]
enum Opening {
    Confuse,
    Bleed,
    Stun,
}

impl Behavior for Opening {
    fn can_use_active_skill(&self, _me: &mut Fighter, _opponent: &Fighter, _ctx: &mut BattleContext) -> bool {
        true
    }

    fn active_skill(&self, me: &mut Fighter, opponent: &mut Fighter, ctx: &mut BattleContext) -> SkillFlow {
        if me.scratch().flag(USED) {
            return SkillFlow::SkipNormalAttack;
        }
        me.scratch_mut().set_flag(USED, true);
        match self {
            Opening::Confuse => opponent.apply_confusion(1.0, ctx),
            Opening::Bleed => opponent.apply_stacking_damage(BLEED, 4.0, 2.0, ctx),
            Opening::Stun => {
                opponent.apply_stun(1.0, ctx);
                opponent.hooks_mut().register(
                    TurnPhase::End,
                    FnHook::new(HookId::new("witness"), |owner: &mut Fighter, ctx: &mut BattleContext| {
                        ctx.log(format_args!("{} closes its turn", owner.name()));
                        HookOutcome::Keep
                    }),
                );
            }
        }
        SkillFlow::SkipNormalAttack
    }
}

/// Starts every fight behind a long-lasting damage reduction.
struct Warded;

impl Behavior for Warded {
    fn setup(&self, fighter: &mut FighterSetup<'_>) {
        let status = fighter.status_mut();
        status.set(StatusSlot::DamageReductionValue, 10.0);
        status.set(StatusSlot::DamageReductionTurns, 10.0);
    }
}

fn engine(seed: u64, max_rounds: u32) -> BattleEngine {
    BattleEngine::new(BattleConfig::new().with_seed(seed).with_max_rounds(max_rounds))
        .expect("valid config")
}

fn gambler_a() -> Fighter {
    Fighter::new("Left", StatsBlock::new(120.0, 18.0, 4.0, 10.0), Gambler)
}

fn gambler_b() -> Fighter {
    Fighter::new("Right", StatsBlock::new(120.0, 18.0, 4.0, 10.0), Gambler)
}

fn victim_health(report: &BattleReport, name: &str) -> Vec<f64> {
    report
        .turns
        .iter()
        .filter(|turn| turn.actor == name)
        .map(|turn| {
            turn.snapshot
                .iter()
                .find(|snapshot| snapshot.name == name)
                .map(|snapshot| snapshot.health)
                .expect("actor is in the snapshot")
        })
        .collect()
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_seed_reproduces_fight_and_log() {
    let first = engine(77, 200).fight(gambler_a, gambler_b, true);
    let second = engine(77, 200).fight(gambler_a, gambler_b, true);
    assert_eq!(first, second);
    assert!(!first.turns.is_empty());
}

#[test]
fn test_simulate_counts_sum_and_reproduce() {
    let first = engine(2024, 150).simulate(gambler_a, gambler_b, 1000);
    let second = engine(2024, 150).simulate(gambler_a, gambler_b, 1000);
    assert_eq!(first.total(), 1000);
    assert_eq!(first.wins("Left") + first.wins("Right") + first.draws(), 1000);
    assert_eq!(first, second);
}

#[test]
fn test_batch_consumes_one_stream() {
    // Consecutive fights of one engine continue the stream instead of
    // restarting it.
    let mut engine = engine(5, 200);
    let reports: Vec<_> = (0..8)
        .map(|_| engine.fight(gambler_a, gambler_b, true))
        .collect();
    assert!(reports.windows(2).any(|pair| pair[0] != pair[1]));
}

// ============================================================================
// Turn order
// ============================================================================

#[test]
fn test_speed_tie_is_a_fair_coin() {
    // Whoever acts first kills in one hit, so wins measure the tie-break.
    let left = || Fighter::new("Left", StatsBlock::new(10.0, 50.0, 0.0, 7.0), Inert);
    let right = || Fighter::new("Right", StatsBlock::new(10.0, 50.0, 0.0, 7.0), Inert);
    let tally = engine(31, 200).simulate(left, right, 2000);

    assert_eq!(tally.draws(), 0);
    let rate = tally.rate("Left");
    assert!((0.45..=0.55).contains(&rate), "left led {rate}");
}

// ============================================================================
// Status effects through the engine
// ============================================================================

#[test]
fn test_confused_fighter_hits_itself() {
    let hexer = || Fighter::new("Hexer", StatsBlock::new(100.0, 0.0, 0.0, 20.0), Opening::Confuse);
    let victim = || Fighter::new("Victim", StatsBlock::new(100.0, 15.0, 5.0, 10.0), Inert);
    let report = engine(1, 1).fight(hexer, victim, true);

    let victim_turn = &report.turns[1];
    assert_eq!(victim_turn.actor, "Victim");
    assert!(
        victim_turn
            .entries
            .iter()
            .any(|line| line.contains("attacks itself"))
    );
    assert_eq!(victim_turn.snapshot[0].health, 100.0);
    assert_eq!(victim_turn.snapshot[1].health, 90.0);
    assert_eq!(report.outcome, Outcome::Winner("Hexer".into()));
}

#[test]
fn test_bleed_ticks_twice_through_damage_reduction() {
    let bleeder = || Fighter::new("Bleeder", StatsBlock::new(100.0, 0.0, 0.0, 20.0), Opening::Bleed);
    let victim = || Fighter::new("Victim", StatsBlock::new(100.0, 0.0, 0.0, 10.0), Warded);
    let report = engine(1, 4).fight(bleeder, victim, true);

    assert_eq!(victim_health(&report, "Victim"), [96.0, 92.0, 92.0, 92.0]);
}

#[test]
fn test_stunned_fighter_skips_but_end_hooks_run() {
    let stunner = || Fighter::new("Stunner", StatsBlock::new(100.0, 0.0, 0.0, 20.0), Opening::Stun);
    let victim = || Fighter::new("Victim", StatsBlock::new(100.0, 30.0, 0.0, 10.0), Inert);
    let report = engine(1, 2).fight(stunner, victim, true);

    let stunned_turn = &report.turns[1];
    assert!(stunned_turn.entries.iter().any(|line| line.contains("skips the turn")));
    assert!(stunned_turn.entries.iter().any(|line| line.contains("closes its turn")));
    assert_eq!(stunned_turn.snapshot[0].health, 100.0);

    // The stun lasted one turn; the next one lands a hit.
    let next_turn = &report.turns[3];
    assert_eq!(next_turn.actor, "Victim");
    assert_eq!(next_turn.snapshot[0].health, 70.0);
}

// ============================================================================
// Termination
// ============================================================================

#[test]
fn test_one_round_between_equals_is_a_draw() {
    let a = || Fighter::new("A", StatsBlock::new(100.0, 10.0, 0.0, 10.0), Inert);
    let b = || Fighter::new("B", StatsBlock::new(100.0, 10.0, 0.0, 10.0), Inert);
    let report = engine(8, 1).fight(a, b, true);

    assert_eq!(report.rounds, 1);
    assert_eq!(report.turns.len(), 2);
    assert_eq!(report.outcome, Outcome::Draw);
}

#[test]
fn test_health_stays_within_bounds() {
    let mut engine = engine(11, 200);
    for _ in 0..50 {
        let report = engine.fight(gambler_a, gambler_b, true);
        for turn in &report.turns {
            for snapshot in &turn.snapshot {
                assert!(snapshot.health >= 0.0);
                assert!(snapshot.health <= snapshot.max_health);
            }
        }
        if let Some(winner) = report.outcome.winner() {
            let last = report.turns.last().expect("a decided fight has turns");
            let loser = last
                .snapshot
                .iter()
                .find(|snapshot| snapshot.name != winner)
                .expect("two distinct names");
            assert!(loser.health == 0.0 || report.rounds == 200);
        }
    }
}
