//! Simulation engine for OUTBREAK.
//!
//! Owns the hecs ECS world, runs systems once per tick against an injected
//! clock, and produces GameStateSnapshots for presentation.

pub mod clock;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use clock::{Clock, FixedStepClock, MonotonicClock};
pub use engine::{SimConfig, SimulationEngine};
pub use outbreak_core as core;
