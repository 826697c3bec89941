//! Deterministic one-on-one battle rules.
//!
//! `arena-core` defines the canonical combat rules (turn order, the fighter
//! turn lifecycle, damage, status effects and turn hooks) and exposes them to
//! content crates and the command-line driver. Every fight is resolved by
//! [`engine::BattleEngine`]; concrete fighters plug in through the
//! [`Behavior`] trait.
pub mod config;
pub mod context;
pub mod engine;
pub mod fighter;
pub mod hooks;
pub mod rng;
pub mod stats;
pub mod status;

pub use config::{BattleConfig, ConfigError};
pub use context::BattleContext;
pub use engine::{BattleEngine, BattleReport, DRAW_KEY, HealthSnapshot, Outcome, Tally, TurnRecord};
pub use fighter::{
    AttackParams, Behavior, DamageKind, Fighter, FighterSetup, Inert, MIN_EFFECTIVE_SPEED,
    NegativeState, SkillFlow, Target,
};
pub use hooks::{HookId, HookOutcome, TurnHook, TurnHookRegistry, TurnPhase};
pub use rng::BattleRng;
pub use stats::StatsBlock;
pub use status::{Scratch, ScratchKey, ScratchValue, StackRecord, StatusSlot, StatusStore};
