//! Commands and control input sent from the host to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.
//! Control input is a normalized snapshot of the player's intent, held by the
//! engine until replaced.

use serde::{Deserialize, Serialize};

/// Run lifecycle actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Reset the world and begin a run. Only valid before a run starts.
    StartRun,
    /// Suspend ticking.
    Pause,
    /// Resume a paused run.
    Resume,
    /// Abandon a paused or ended run and go back to the not-started state.
    ReturnToMenu,
}

/// Where the player is aiming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Aim {
    /// Nearest on-screen unit (touch / gamepad play).
    #[default]
    Auto,
    /// Pointer position in screen space; converted through the camera.
    Screen { x: f64, y: f64 },
    /// Target already in world space.
    World { x: f64, y: f64 },
}

/// Normalized control signal consumed every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    /// Movement direction. Normalized internally when longer than 1.
    pub move_x: f64,
    pub move_y: f64,
    pub aim: Aim,
    pub fire_held: bool,
    pub reload_requested: bool,
}
