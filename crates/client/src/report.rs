//! Human-readable and JSON rendering of battle results.

use std::io::{self, Write};

use arena_content::RosterEntry;
use arena_core::{BattleReport, Tally, TurnRecord};
use serde::Serialize;

/// JSON document printed by `simulate --json`.
#[derive(Debug, Serialize)]
pub struct SimulationSummary<'a> {
    pub battles: u64,
    pub seed: Option<u64>,
    pub max_rounds: u32,
    pub results: &'a Tally,
}

pub fn write_tally(
    out: &mut impl Write,
    battles: u64,
    first: &str,
    second: &str,
    tally: &Tally,
) -> io::Result<()> {
    writeln!(out, "Total battles: {battles}")?;
    for name in [first, second] {
        writeln!(
            out,
            "{name} wins: {}, win rate: {:.2}%",
            tally.wins(name),
            tally.rate(name) * 100.0
        )?;
    }
    writeln!(
        out,
        "Draws: {}, share: {:.2}%",
        tally.draws(),
        tally.rate(arena_core::DRAW_KEY) * 100.0
    )
}

pub fn write_json(out: &mut impl Write, summary: &SimulationSummary<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)
}

/// Prints a verbose fight turn by turn.
pub fn write_duel(out: &mut impl Write, report: &BattleReport) -> io::Result<()> {
    let mut round = 0;
    for turn in &report.turns {
        if turn.round != round {
            round = turn.round;
            writeln!(out, "=== Round {round} ===")?;
        }
        write_turn(out, turn)?;
    }
    writeln!(
        out,
        "Result: {} after {} rounds",
        report.outcome, report.rounds
    )
}

fn write_turn(out: &mut impl Write, turn: &TurnRecord) -> io::Result<()> {
    writeln!(out, "-- Turn {}: {} --", turn.turn, turn.actor)?;
    for entry in &turn.entries {
        writeln!(out, "  {entry}")?;
    }
    let [first, second] = &turn.snapshot;
    writeln!(
        out,
        "  [{} {:.1}/{:.1} | {} {:.1}/{:.1}]",
        first.name, first.health, first.max_health, second.name, second.health, second.max_health
    )
}

pub fn write_roster(out: &mut impl Write, entries: &[RosterEntry]) -> io::Result<()> {
    for entry in entries {
        let fighter = (entry.factory)();
        let stats = fighter.stats();
        writeln!(
            out,
            "{:<16} {:<16} hp {:>5.1}  atk {:>4.1}  def {:>4.1}  spd {:>4.1}",
            entry.key, entry.name, stats.max_health, stats.attack, stats.defense, stats.speed
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{HealthSnapshot, Outcome};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn tally() -> Tally {
        let mut tally = Tally::seeded("Alpha", "Beta");
        tally.record(&Outcome::Winner("Alpha".into()));
        tally.record(&Outcome::Winner("Alpha".into()));
        tally.record(&Outcome::Winner("Beta".into()));
        tally.record(&Outcome::Draw);
        tally
    }

    #[test]
    fn tally_lines() {
        let text = render(|out| write_tally(out, 4, "Alpha", "Beta", &tally()));
        assert_eq!(
            text,
            "Total battles: 4\n\
             Alpha wins: 2, win rate: 50.00%\n\
             Beta wins: 1, win rate: 25.00%\n\
             Draws: 1, share: 25.00%\n"
        );
    }

    #[test]
    fn json_summary_is_flat() {
        let tally = tally();
        let summary = SimulationSummary {
            battles: 4,
            seed: Some(2024),
            max_rounds: 150,
            results: &tally,
        };
        let text = render(|out| write_json(out, &summary));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["results"]["Alpha"], 2);
        assert_eq!(value["results"]["draw"], 1);
        assert_eq!(value["seed"], 2024);
    }

    #[test]
    fn duel_prints_round_headers_once() {
        let snapshot = [
            HealthSnapshot {
                name: "Alpha".into(),
                health: 90.0,
                max_health: 100.0,
            },
            HealthSnapshot {
                name: "Beta".into(),
                health: 0.0,
                max_health: 80.0,
            },
        ];
        let turn = |turn: u64, actor: &str| TurnRecord {
            round: 1,
            turn,
            actor: actor.into(),
            entries: vec![format!("{actor} acts")],
            snapshot: snapshot.clone(),
        };
        let report = BattleReport {
            outcome: Outcome::Winner("Alpha".into()),
            rounds: 1,
            turns: vec![turn(1, "Beta"), turn(2, "Alpha")],
        };

        let text = render(|out| write_duel(out, &report));
        assert_eq!(text.matches("=== Round 1 ===").count(), 1);
        assert!(text.contains("-- Turn 2: Alpha --\n  Alpha acts\n"));
        assert!(text.contains("[Alpha 90.0/100.0 | Beta 0.0/80.0]"));
        assert!(text.ends_with("Result: Alpha wins after 1 rounds\n"));
    }

    #[test]
    fn roster_lists_every_entry() {
        let entries = arena_content::roster::entries();
        let text = render(|out| write_roster(out, entries));
        assert_eq!(text.lines().count(), entries.len());
        assert!(text.contains("frost-caster"));
    }
}
