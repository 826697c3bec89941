//! Turn hooks - recurring callbacks attached to a fighter.
//!
//! A behavior can attach a hook to any fighter, including its opponent. The
//! owning fighter runs its hooks at the start or end of each of its own turns.
//!
//! # Lifecycle
//!
//! - Registration is idempotent per `(phase, id)`.
//! - Hooks run in registration order.
//! - A hook keeps its own continuation state and returns
//!   [`HookOutcome::Remove`] once its effect has expired; no external code has
//!   to unregister it.
//! - Hooks only see their owner and the [`BattleContext`]; they cannot start a
//!   turn of their own.

mod registry;

pub use registry::TurnHookRegistry;

use std::fmt;

use strum::{Display, EnumIter};

use crate::context::BattleContext;
use crate::fighter::Fighter;
use crate::status::ScratchKey;

/// Point in the owner's turn at which a hook runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    /// Before status decay, at the very beginning of the turn.
    Start,
    /// After confusion decay, at the very end of the turn.
    End,
}

/// What the registry should do with a hook after it ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookOutcome {
    Keep,
    Remove,
}

/// Stable identity of a hook, used for idempotent registration and removal.
///
/// Ids built with [`HookId::new`] never collide with the ids core gives its
/// own stacking damage hooks, even when the names match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HookId {
    scope: HookScope,
    name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum HookScope {
    Behavior,
    StackingDamage,
}

impl HookId {
    pub const fn new(name: &'static str) -> Self {
        Self {
            scope: HookScope::Behavior,
            name,
        }
    }

    /// Id of the hook ticking the stacking damage effect stored under `key`.
    pub const fn stacking_damage(key: ScratchKey) -> Self {
        Self {
            scope: HookScope::StackingDamage,
            name: key.name(),
        }
    }

    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl fmt::Display for HookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scope {
            HookScope::Behavior => f.write_str(self.name),
            HookScope::StackingDamage => write!(f, "{} (stacking)", self.name),
        }
    }
}

/// A recurring per-turn effect.
pub trait TurnHook {
    fn id(&self) -> HookId;

    /// Runs the effect against the owning fighter.
    fn on_turn(&mut self, owner: &mut Fighter, ctx: &mut BattleContext) -> HookOutcome;
}

/// Hook backed by a closure.
///
/// ```
/// use arena_core::{HookId, HookOutcome, hooks::FnHook};
///
/// let mut ticks = 3;
/// let _hook = FnHook::new(HookId::new("countdown"), move |_owner, _ctx| {
///     ticks -= 1;
///     if ticks == 0 { HookOutcome::Remove } else { HookOutcome::Keep }
/// });
/// ```
pub struct FnHook<F> {
    id: HookId,
    callback: F,
}

impl<F> FnHook<F>
where
    F: FnMut(&mut Fighter, &mut BattleContext) -> HookOutcome,
{
    pub fn new(id: HookId, callback: F) -> Self {
        Self { id, callback }
    }
}

impl<F> TurnHook for FnHook<F>
where
    F: FnMut(&mut Fighter, &mut BattleContext) -> HookOutcome,
{
    fn id(&self) -> HookId {
        self.id
    }

    fn on_turn(&mut self, owner: &mut Fighter, ctx: &mut BattleContext) -> HookOutcome {
        (self.callback)(owner, ctx)
    }
}
