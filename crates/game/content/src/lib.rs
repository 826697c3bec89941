//! Concrete fighters and content loaders.
//!
//! This crate houses the playable roster and the loaders for battle data
//! files:
//! - Fighter behaviors and their factories ([`fighters`])
//! - Name lookup for the command-line driver ([`roster`])
//! - Battle configuration (data-driven via TOML)
//!
//! Content only reaches the engine through factories; the engine never sees
//! a concrete behavior type.

pub mod fighters;
pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use fighters::{BlazingWarrior, CrimsonDuelist, FrostCaster, GlassGolem, MindWeaver};
pub use roster::{Factory, RosterEntry};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult};
