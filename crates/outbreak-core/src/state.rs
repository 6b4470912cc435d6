//! Game state snapshot: the complete visible state handed to presentation each tick.

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Running totals for a single run. Read by reporting only after the run ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub score: u64,
    pub wave: u32,
    pub kills: u32,
    /// Seconds survived; frozen at game over.
    pub survival_secs: f64,
    pub shots_fired: u32,
    pub shots_hit: u32,
}

/// Complete game state broadcast to presentation after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub ammo: AmmoView,
    pub stats: RunStats,
    pub camera: Camera,
    /// Live units anywhere in the world, including off-screen ones.
    pub zombies_alive: u32,
    pub zombies: Vec<ZombieView>,
    pub projectiles: Vec<Position>,
    pub particles: Vec<ParticleView>,
    pub hazards: Vec<HazardView>,
    pub pickups: Vec<PickupView>,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub hp: f64,
    pub max_hp: f64,
    /// Radians.
    pub facing: f64,
}

/// HUD ammo readout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AmmoView {
    pub clip: u32,
    pub capacity: u32,
    pub reserve: u32,
    pub reloading: bool,
    pub reload_progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZombieView {
    pub variant: ZombieVariant,
    pub position: Position,
    pub radius: f64,
    pub hp: f64,
    pub max_hp: f64,
    pub color: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    /// Remaining life in [0, 1], for alpha fade.
    pub life: f64,
    pub color: u32,
    pub size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardView {
    pub position: Position,
    pub radius: f64,
    /// Seconds until the pool dries up.
    pub remaining_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Position,
    pub radius: f64,
    pub amount: u32,
}
