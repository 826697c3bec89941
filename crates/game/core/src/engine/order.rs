//! Turn-order arbitration.

use crate::context::BattleContext;
use crate::fighter::Fighter;

/// Position of a fighter in the engine's pair, in factory order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    First,
    Second,
}

impl Side {
    pub(crate) fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Acting order of one round.
///
/// The faster fighter acts first. Exactly equal speeds draw once from the
/// fight's stream for a fair coin flip.
pub(crate) fn turn_order(first: &Fighter, second: &Fighter, ctx: &mut BattleContext) -> [Side; 2] {
    let a = first.effective_speed();
    let b = second.effective_speed();
    let first_leads = if a != b { a > b } else { ctx.chance(0.5) };
    if first_leads {
        [Side::First, Side::Second]
    } else {
        [Side::Second, Side::First]
    }
}

/// Splits the pair into `(actor, opponent)`.
pub(crate) fn pair_mut(fighters: &mut [Fighter; 2], actor: Side) -> (&mut Fighter, &mut Fighter) {
    let [first, second] = fighters;
    match actor {
        Side::First => (first, second),
        Side::Second => (second, first),
    }
}
