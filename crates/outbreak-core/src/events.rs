//! Lifecycle events emitted by the simulation.
//!
//! Consumers (HUD, audio, narrative text) read these from the snapshot.
//! Nothing they produce is ever fed back into the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::{DeathEffect, ZombieVariant};
use crate::state::RunStats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// World reset and a run began.
    RunStarted { seed: u64 },
    /// Kill threshold crossed; difficulty epoch advanced.
    WaveChanged { wave: u32 },
    /// Ring burst spawned around the player.
    HordeTriggered { wave: u32 },
    /// The wave's boss entered the arena.
    BossSpawned { wave: u32 },
    /// A unit died and its death effect fired.
    UnitKilled {
        variant: ZombieVariant,
        x: f64,
        y: f64,
        effect: DeathEffect,
    },
    ReloadStarted,
    ReloadCompleted { transferred: u32 },
    /// Player walked over an ammo drop.
    AmmoCollected { amount: u32 },
    /// Player died. Emitted exactly once per run.
    GameOver { stats: RunStats },
}
