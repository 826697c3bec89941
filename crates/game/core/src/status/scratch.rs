//! Behavior-private state keyed by stable identifiers.

use std::collections::BTreeMap;
use std::fmt;

use super::clamp_non_negative;

/// Stable key into a fighter's scratch map.
///
/// Content declares keys as constants so every read and write of the same
/// state goes through one identifier:
///
/// ```
/// use arena_core::ScratchKey;
///
/// const RAGE: ScratchKey = ScratchKey::new("rage");
/// assert_eq!(RAGE.name(), "rage");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScratchKey(&'static str);

impl ScratchKey {
    /// Remaining turns a fighter's passive skill is sealed.
    pub const PASSIVE_DISABLED: ScratchKey = ScratchKey::new("passive_disabled_turns");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ScratchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Stacking damage-over-time bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StackRecord {
    /// Damage dealt per tick.
    pub stacks: f64,
    /// Remaining ticks.
    pub duration: f64,
    pub hook_registered: bool,
}

impl StackRecord {
    pub fn is_spent(&self) -> bool {
        self.stacks <= 0.0 || self.duration <= 0.0
    }
}

/// A scratch entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScratchValue {
    Number(f64),
    Flag(bool),
    Stack(StackRecord),
}

/// Open map of behavior-private state.
///
/// Typed accessors return a neutral value (0, false, `None`) when the key is
/// absent or holds a different kind of value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scratch {
    entries: BTreeMap<ScratchKey, ScratchValue>,
}

impl Scratch {
    pub fn get(&self, key: ScratchKey) -> Option<&ScratchValue> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: ScratchKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn remove(&mut self, key: ScratchKey) -> Option<ScratchValue> {
        self.entries.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn number(&self, key: ScratchKey) -> f64 {
        match self.entries.get(&key) {
            Some(ScratchValue::Number(value)) => *value,
            _ => 0.0,
        }
    }

    /// Stores a number, clamped to `>= 0`.
    pub fn set_number(&mut self, key: ScratchKey, value: f64) {
        self.entries
            .insert(key, ScratchValue::Number(clamp_non_negative(value)));
    }

    /// Adds to a number and returns the new value.
    pub fn add_number(&mut self, key: ScratchKey, amount: f64) -> f64 {
        let value = clamp_non_negative(self.number(key) + amount);
        self.set_number(key, value);
        value
    }

    /// Advances a cycle counter by one and reports whether it completed a
    /// period.
    ///
    /// With `period = 3` this returns `false, false, true, false, false, true, ...`.
    /// A period of 0 never fires.
    pub fn tick_cycle(&mut self, key: ScratchKey, period: u32) -> bool {
        let count = self.add_number(key, 1.0);
        period > 0 && (count as u64) % u64::from(period) == 0
    }

    pub fn flag(&self, key: ScratchKey) -> bool {
        matches!(self.entries.get(&key), Some(ScratchValue::Flag(true)))
    }

    pub fn set_flag(&mut self, key: ScratchKey, value: bool) {
        self.entries.insert(key, ScratchValue::Flag(value));
    }

    pub fn stack(&self, key: ScratchKey) -> Option<StackRecord> {
        match self.entries.get(&key) {
            Some(ScratchValue::Stack(record)) => Some(*record),
            _ => None,
        }
    }

    pub fn set_stack(&mut self, key: ScratchKey, record: StackRecord) {
        let record = StackRecord {
            stacks: clamp_non_negative(record.stacks),
            duration: clamp_non_negative(record.duration),
            hook_registered: record.hook_registered,
        };
        self.entries.insert(key, ScratchValue::Stack(record));
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScratchKey, &ScratchValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }
}
