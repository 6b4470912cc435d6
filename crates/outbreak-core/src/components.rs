//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Collision extent and presentation color shared by every solid entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub radius: f64,
    /// Presentation hint only; never read by gameplay.
    pub color: u32,
}

/// Hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Damage dealt on contact (per tick for units, per hit for projectiles).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Damage {
    pub amount: f64,
}

/// Scalar movement rate (units per tick).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Speed {
    pub per_tick: f64,
}

/// Direction the player is facing (radians).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facing {
    pub angle: f64,
}

/// Clip/reserve ammunition and reload timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub clip: u32,
    pub capacity: u32,
    pub reserve: u32,
    pub state: ReloadState,
    /// Time the current reload began (meaningful only while reloading).
    pub reload_started_secs: f64,
    /// Reload progress in [0, 1].
    pub reload_progress: f64,
    /// Time of the last successful shot.
    pub last_fire_secs: Option<f64>,
}

/// Marks the single player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Hostile unit tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Zombie {
    pub variant: ZombieVariant,
}

/// Player bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub created_secs: f64,
}

/// Decorative particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// Remaining life, starts at `max_life` and decays each tick.
    pub life: f64,
    pub max_life: f64,
    pub color: u32,
    pub size: f64,
}

/// Acid pool left by a corrosive unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hazard {
    pub radius: f64,
    pub created_secs: f64,
    pub duration_secs: f64,
}

/// Ammo drop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub radius: f64,
    /// Reserve rounds granted on collection.
    pub amount: u32,
}
