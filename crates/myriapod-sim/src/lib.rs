//! Simulation engine for Myriapod.
//!
//! Owns the entity set and the mushroom field, runs the per-tick systems
//! in fixed order, and produces a `GameSnapshot` for the renderer after
//! every tick. Completely headless, enabling deterministic testing.

pub mod engine;
pub mod entities;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use myriapod_core as core;
