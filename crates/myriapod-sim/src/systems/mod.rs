//! Systems that operate on the entity set and board each tick.
//!
//! Systems are free functions over `&mut` state; they own nothing. The
//! engine calls them in a fixed order so every tick is a deterministic,
//! finite sweep.

pub mod collision;
pub mod movement;
pub mod scoring;
pub mod snapshot;
pub mod spawner;
