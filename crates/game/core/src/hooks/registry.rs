//! Ordered per-phase hook storage.

use tracing::trace;

use super::{HookId, TurnHook, TurnPhase};

/// Phase currently being executed by the owner.
///
/// While a phase runs its hooks are moved out of the registry; this keeps
/// enough bookkeeping for `contains`/`remove` to still see them.
#[derive(Default)]
struct RunningPhase {
    phase: Option<TurnPhase>,
    in_flight: Vec<HookId>,
    cancelled: Vec<HookId>,
}

/// Per-fighter hook registry keyed by [`TurnPhase`].
#[derive(Default)]
pub struct TurnHookRegistry {
    start: Vec<Box<dyn TurnHook>>,
    end: Vec<Box<dyn TurnHook>>,
    running: RunningPhase,
}

impl TurnHookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn list(&self, phase: TurnPhase) -> &Vec<Box<dyn TurnHook>> {
        match phase {
            TurnPhase::Start => &self.start,
            TurnPhase::End => &self.end,
        }
    }

    fn list_mut(&mut self, phase: TurnPhase) -> &mut Vec<Box<dyn TurnHook>> {
        match phase {
            TurnPhase::Start => &mut self.start,
            TurnPhase::End => &mut self.end,
        }
    }

    fn is_in_flight(&self, phase: TurnPhase, id: HookId) -> bool {
        self.running.phase == Some(phase)
            && self.running.in_flight.contains(&id)
            && !self.running.cancelled.contains(&id)
    }

    /// Registers a hook for a phase.
    ///
    /// Returns `false` (and drops the hook) when a hook with the same id is
    /// already registered for that phase.
    pub fn register(&mut self, phase: TurnPhase, hook: impl TurnHook + 'static) -> bool {
        let id = hook.id();
        if self.contains(phase, id) {
            return false;
        }
        trace!(hook = %id, %phase, "turn hook registered");
        self.list_mut(phase).push(Box::new(hook));
        true
    }

    /// Removes a hook by id. Returns whether anything was removed.
    pub fn remove(&mut self, phase: TurnPhase, id: HookId) -> bool {
        let list = self.list_mut(phase);
        if let Some(index) = list.iter().position(|hook| hook.id() == id) {
            list.remove(index);
            return true;
        }
        if self.is_in_flight(phase, id) {
            self.running.cancelled.push(id);
            return true;
        }
        false
    }

    pub fn contains(&self, phase: TurnPhase, id: HookId) -> bool {
        self.list(phase).iter().any(|hook| hook.id() == id) || self.is_in_flight(phase, id)
    }

    /// Number of hooks registered for a phase.
    pub fn len(&self, phase: TurnPhase) -> usize {
        let in_flight = if self.running.phase == Some(phase) {
            self.running
                .in_flight
                .iter()
                .filter(|id| !self.running.cancelled.contains(id))
                .count()
        } else {
            0
        };
        self.list(phase).len() + in_flight
    }

    pub fn is_empty(&self) -> bool {
        self.len(TurnPhase::Start) == 0 && self.len(TurnPhase::End) == 0
    }

    /// Hook ids of a phase in execution order.
    pub fn ids(&self, phase: TurnPhase) -> Vec<HookId> {
        self.list(phase).iter().map(|hook| hook.id()).collect()
    }

    /// Moves a phase's hooks out for execution.
    pub(crate) fn begin(&mut self, phase: TurnPhase) -> Vec<Box<dyn TurnHook>> {
        let hooks = std::mem::take(self.list_mut(phase));
        self.running = RunningPhase {
            phase: Some(phase),
            in_flight: hooks.iter().map(|hook| hook.id()).collect(),
            cancelled: Vec::new(),
        };
        hooks
    }

    pub(crate) fn is_cancelled(&self, id: HookId) -> bool {
        self.running.cancelled.contains(&id)
    }

    /// Forgets an in-flight hook that asked to be removed, so the same id can
    /// be registered again before the phase finishes.
    pub(crate) fn retire(&mut self, id: HookId) {
        self.running.in_flight.retain(|running| *running != id);
    }

    /// Puts surviving hooks back ahead of any registered during the run.
    pub(crate) fn finish(&mut self, phase: TurnPhase, survivors: Vec<Box<dyn TurnHook>>) {
        let cancelled = std::mem::take(&mut self.running).cancelled;
        let mut merged: Vec<Box<dyn TurnHook>> = survivors
            .into_iter()
            .filter(|hook| !cancelled.contains(&hook.id()))
            .collect();
        for hook in std::mem::take(self.list_mut(phase)) {
            if !merged.iter().any(|kept| kept.id() == hook.id()) {
                merged.push(hook);
            }
        }
        *self.list_mut(phase) = merged;
    }
}

impl std::fmt::Debug for TurnHookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnHookRegistry")
            .field("start", &self.ids(TurnPhase::Start))
            .field("end", &self.ids(TurnPhase::End))
            .finish()
    }
}
