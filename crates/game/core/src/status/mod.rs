//! Status store - timed modifiers and behavior-private state of a fighter.
//!
//! The store has two halves:
//! - **Slots**: a fixed set of numeric counters every fighter understands
//!   (slow, stun, confusion, damage reduction). The turn lifecycle decays them.
//! - **Scratch**: an open map keyed by [`ScratchKey`] where behaviors keep
//!   their own counters, flags and stacking-effect records.
//!
//! All stored values are clamped to `>= 0`; a value of 0 means inactive.

mod scratch;

pub use scratch::{Scratch, ScratchKey, ScratchValue, StackRecord};

use strum::{EnumCount, EnumIter, IntoStaticStr};

/// Fixed status slots shared by every fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum StatusSlot {
    /// Flat speed bonus. A magnitude, never decayed by the lifecycle.
    SpeedBonus,
    /// Flat speed penalty; doubles as its own remaining-turns counter.
    SpeedPenalty,
    /// Remaining turns the fighter cannot act.
    StunnedTurns,
    /// Remaining turns normal attacks are redirected at the fighter itself.
    ConfusedTurns,
    /// Flat amount subtracted from each incoming hit.
    DamageReductionValue,
    /// Remaining turns of the damage reduction.
    DamageReductionTurns,
}

impl StatusSlot {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Per-fighter status slots plus scratch space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusStore {
    slots: [f64; StatusSlot::COUNT],
    scratch: Scratch,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a slot (0 when inactive).
    pub fn get(&self, slot: StatusSlot) -> f64 {
        self.slots[slot as usize]
    }

    /// Overwrites a slot, clamping to `>= 0`.
    pub fn set(&mut self, slot: StatusSlot, value: f64) {
        self.slots[slot as usize] = clamp_non_negative(value);
    }

    /// Adds to a slot and returns the new value.
    pub fn add(&mut self, slot: StatusSlot, amount: f64) -> f64 {
        let value = self.get(slot) + amount;
        self.set(slot, value);
        self.get(slot)
    }

    /// Raises a slot to `value` if it is currently lower.
    pub fn raise_to(&mut self, slot: StatusSlot, value: f64) -> f64 {
        let value = self.get(slot).max(value);
        self.set(slot, value);
        self.get(slot)
    }

    pub fn is_active(&self, slot: StatusSlot) -> bool {
        self.get(slot) > 0.0
    }

    /// Decrements an active slot by one turn and returns the remainder.
    ///
    /// Inactive slots stay at 0.
    pub fn decay(&mut self, slot: StatusSlot) -> f64 {
        if !self.is_active(slot) {
            return 0.0;
        }
        self.add(slot, -1.0)
    }

    pub fn clear(&mut self, slot: StatusSlot) {
        self.slots[slot as usize] = 0.0;
    }

    pub fn scratch(&self) -> &Scratch {
        &self.scratch
    }

    pub fn scratch_mut(&mut self) -> &mut Scratch {
        &mut self.scratch
    }
}

/// Clamps to `>= 0`, mapping NaN to 0.
pub(crate) fn clamp_non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}
