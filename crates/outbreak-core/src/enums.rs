//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Hostile unit variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZombieVariant {
    /// Baseline shambler.
    #[default]
    Ordinary,
    /// Quick and fragile.
    Fast,
    /// Slow, high HP.
    Heavy,
    /// One per boss wave.
    Boss,
    /// Explodes on death, hurting everything nearby.
    Volatile,
    /// Leaves an acid pool on death.
    Corrosive,
}

/// What happens at the location of a unit's death.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathEffect {
    /// Plain particle burst.
    Burst,
    /// Area damage burst.
    Explosion,
    /// Hazard creation plus particle burst.
    AcidPool,
}

/// Weapon reload state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReloadState {
    #[default]
    Idle,
    Reloading,
}

/// Viewport edge used for ambient spawn placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Top,
        SpawnEdge::Right,
        SpawnEdge::Bottom,
        SpawnEdge::Left,
    ];
}

/// Run phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    Paused,
    Ended,
}
