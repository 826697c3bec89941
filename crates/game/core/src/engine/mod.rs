//! Battle resolution.
//!
//! The [`BattleEngine`] builds two fresh fighters per fight, alternates their
//! turns by speed and decides the outcome. A single random stream runs through
//! every fight the engine resolves, so a batch seeded once is reproducible
//! bit-for-bit.

mod order;
mod outcome;

pub use outcome::{BattleReport, DRAW_KEY, HealthSnapshot, Outcome, Tally, TurnRecord};

use tracing::{debug, info};

use self::order::{Side, pair_mut, turn_order};
use crate::config::{BattleConfig, ConfigError};
use crate::context::BattleContext;
use crate::fighter::Fighter;
use crate::rng::BattleRng;

/// Runs fights between factory-built fighters.
#[derive(Clone, Debug)]
pub struct BattleEngine {
    config: BattleConfig,
    rng: BattleRng,
}

impl BattleEngine {
    /// Creates an engine, seeding its stream from the config or from entropy.
    pub fn new(config: BattleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config
            .seed
            .map(BattleRng::new)
            .unwrap_or_else(BattleRng::from_entropy);
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Runs one fight.
    ///
    /// In verbose mode the report carries a [`TurnRecord`] per turn.
    pub fn fight<A, B>(&mut self, factory_a: A, factory_b: B, verbose: bool) -> BattleReport
    where
        A: Fn() -> Fighter,
        B: Fn() -> Fighter,
    {
        let mut fighters = [factory_a(), factory_b()];
        let rng = self.rng.clone();
        let mut ctx = if verbose {
            BattleContext::verbose(rng)
        } else {
            BattleContext::quiet(rng)
        };
        debug!(
            first = fighters[0].name(),
            second = fighters[1].name(),
            verbose,
            "fight started"
        );

        let mut turns = Vec::new();
        let (outcome, rounds) = self.run(&mut fighters, &mut ctx, &mut turns);
        self.rng = ctx.into_rng();

        debug!(%outcome, rounds, "fight finished");
        BattleReport {
            outcome,
            rounds,
            turns,
        }
    }

    /// Runs `battles` quiet fights and counts their outcomes.
    pub fn simulate<A, B>(&mut self, factory_a: A, factory_b: B, battles: u64) -> Tally
    where
        A: Fn() -> Fighter,
        B: Fn() -> Fighter,
    {
        let (first, second) = (factory_a(), factory_b());
        let mut tally = Tally::seeded(first.name(), second.name());
        for _ in 0..battles {
            let report = self.fight(&factory_a, &factory_b, false);
            tally.record(&report.outcome);
        }
        info!(
            battles,
            first = first.name(),
            first_wins = tally.wins(first.name()),
            second = second.name(),
            second_wins = tally.wins(second.name()),
            draws = tally.draws(),
            "simulation finished"
        );
        tally
    }

    fn run(
        &self,
        fighters: &mut [Fighter; 2],
        ctx: &mut BattleContext,
        turns: &mut Vec<TurnRecord>,
    ) -> (Outcome, u32) {
        let mut round = 0;
        while fighters.iter().all(Fighter::is_alive) && round < self.config.max_rounds {
            round += 1;
            for actor in turn_order(&fighters[0], &fighters[1], ctx) {
                let (me, opponent) = pair_mut(fighters, actor);
                if !me.is_alive() {
                    continue;
                }
                let turn = ctx.advance_turn();
                me.take_turn(opponent, ctx);

                if ctx.is_logging() {
                    turns.push(TurnRecord {
                        round,
                        turn,
                        actor: me.name().to_owned(),
                        entries: ctx.drain_log(),
                        snapshot: [
                            HealthSnapshot::of(&fighters[0]),
                            HealthSnapshot::of(&fighters[1]),
                        ],
                    });
                }

                if let Some(outcome) = decide_after_turn(fighters, actor) {
                    return (outcome, round);
                }
            }
        }
        (decide_on_health(fighters), round)
    }
}

fn decide_after_turn(fighters: &[Fighter; 2], actor: Side) -> Option<Outcome> {
    let me = &fighters[actor.index()];
    let opponent = &fighters[1 - actor.index()];
    match (me.is_alive(), opponent.is_alive()) {
        (false, false) => Some(Outcome::Draw),
        (true, false) => Some(Outcome::win(me)),
        (false, true) => Some(Outcome::win(opponent)),
        (true, true) => None,
    }
}

fn decide_on_health(fighters: &[Fighter; 2]) -> Outcome {
    let [first, second] = fighters;
    if first.health() == second.health() {
        Outcome::Draw
    } else if first.health() > second.health() {
        Outcome::win(first)
    } else {
        Outcome::win(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::Inert;
    use crate::stats::StatsBlock;

    fn engine(seed: u64) -> BattleEngine {
        BattleEngine::new(BattleConfig::new().with_seed(seed)).unwrap()
    }

    fn brute() -> Fighter {
        Fighter::new("Brute", StatsBlock::new(100.0, 30.0, 0.0, 12.0), Inert)
    }

    fn dummy() -> Fighter {
        Fighter::new("Dummy", StatsBlock::new(50.0, 0.0, 0.0, 5.0), Inert)
    }

    #[test]
    fn zero_rounds_is_a_config_error() {
        let result = BattleEngine::new(BattleConfig::new().with_max_rounds(0));
        assert_eq!(result.unwrap_err(), ConfigError::ZeroRounds);
    }

    #[test]
    fn engine_keeps_its_config() {
        let config = BattleConfig::new().with_max_rounds(12).with_seed(4);
        assert_eq!(BattleEngine::new(config.clone()).unwrap().config(), &config);
    }

    #[test]
    fn stronger_fighter_wins() {
        let report = engine(1).fight(brute, dummy, false);
        assert_eq!(report.outcome, Outcome::Winner("Brute".into()));
        // 50 health at 30 per hit
        assert_eq!(report.rounds, 2);
        assert!(report.turns.is_empty());
    }

    #[test]
    fn verbose_fight_records_every_turn() {
        let report = engine(1).fight(brute, dummy, true);
        // Brute always acts first; Dummy acts once in round 1.
        let actors: Vec<_> = report.turns.iter().map(|turn| turn.actor.as_str()).collect();
        assert_eq!(actors, ["Brute", "Dummy", "Brute"]);
        assert_eq!(
            report.turns.iter().map(|turn| turn.turn).collect::<Vec<_>>(),
            [1, 2, 3]
        );
        let last = report.turns.last().unwrap();
        assert_eq!(last.round, 2);
        assert_eq!(last.snapshot[1].health, 0.0);
        assert!(report.turns.iter().all(|turn| !turn.entries.is_empty()));
    }

    #[test]
    fn round_limit_decides_on_health() {
        let mut engine = BattleEngine::new(BattleConfig::new().with_max_rounds(1).with_seed(3)).unwrap();
        let tank = || Fighter::new("Tank", StatsBlock::new(500.0, 10.0, 0.0, 10.0), Inert);
        let report = engine.fight(brute, tank, false);
        assert_eq!(report.rounds, 1);
        // Brute took 10, Tank took 30 but has far more health.
        assert_eq!(report.outcome, Outcome::Winner("Tank".into()));
    }

    #[test]
    fn simulate_seeds_names_and_draws() {
        let tally = engine(9).simulate(brute, dummy, 25);
        assert_eq!(tally.wins("Brute"), 25);
        assert_eq!(tally.wins("Dummy"), 0);
        assert_eq!(tally.draws(), 0);
        assert_eq!(tally.total(), 25);
    }
}
