//! Name lookup over the playable fighters.

use arena_core::Fighter;

use crate::fighters::{BlazingWarrior, CrimsonDuelist, FrostCaster, GlassGolem, MindWeaver};

/// Builds a fresh fighter for one fight.
pub type Factory = fn() -> Fighter;

/// A playable fighter.
#[derive(Clone, Copy, Debug)]
pub struct RosterEntry {
    /// Command-line key, kebab-case.
    pub key: &'static str,
    /// Display name, also used as the tally key.
    pub name: &'static str,
    pub factory: Factory,
}

const ROSTER: [RosterEntry; 5] = [
    RosterEntry {
        key: "blazing-warrior",
        name: BlazingWarrior::NAME,
        factory: BlazingWarrior::fighter,
    },
    RosterEntry {
        key: "frost-caster",
        name: FrostCaster::NAME,
        factory: FrostCaster::fighter,
    },
    RosterEntry {
        key: "crimson-duelist",
        name: CrimsonDuelist::NAME,
        factory: CrimsonDuelist::fighter,
    },
    RosterEntry {
        key: "glass-golem",
        name: GlassGolem::NAME,
        factory: GlassGolem::fighter,
    },
    RosterEntry {
        key: "mind-weaver",
        name: MindWeaver::NAME,
        factory: MindWeaver::fighter,
    },
];

pub fn entries() -> &'static [RosterEntry] {
    &ROSTER
}

/// Finds a fighter by key or display name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static RosterEntry> {
    let name = name.trim();
    ROSTER
        .iter()
        .find(|entry| entry.key.eq_ignore_ascii_case(name) || entry.name.eq_ignore_ascii_case(name))
}

/// Factory for a fighter by key or display name.
pub fn by_name(name: &str) -> Option<Factory> {
    lookup(name).map(|entry| entry.factory)
}

/// Command-line keys in roster order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ROSTER.iter().map(|entry| entry.key)
}
