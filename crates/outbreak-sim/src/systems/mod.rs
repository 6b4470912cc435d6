//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! Run-level bookkeeping (stats, director, clock) is passed in by the engine.

pub mod cleanup;
pub mod combat;
pub mod fire_control;
pub mod hazards;
pub mod loot;
pub mod movement;
pub mod particles;
pub mod snapshot;
pub mod wave_spawner;
