//! Playable fighters.
//!
//! Each fighter is a stateless [`Behavior`](arena_core::Behavior) plus a
//! baseline [`StatsBlock`](arena_core::StatsBlock). Per-fight state (rage,
//! shields, skill cycles) lives in the fighter's scratch map, so a factory
//! can build any number of independent copies.

mod blazing_warrior;
mod crimson_duelist;
mod frost_caster;
mod glass_golem;
mod mind_weaver;

pub use blazing_warrior::BlazingWarrior;
pub use crimson_duelist::CrimsonDuelist;
pub use frost_caster::FrostCaster;
pub use glass_golem::GlassGolem;
pub use mind_weaver::MindWeaver;
