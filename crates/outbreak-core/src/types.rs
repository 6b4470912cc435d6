//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in world space (world units).
/// Origin is the top-left corner of the arena; y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in world units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each running tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds. This is the single "now"
    /// every timer in a tick reads.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// Angle from this position toward another (radians, atan2 convention).
    pub fn angle_to(&self, other: &Position) -> f64 {
        let d = other.as_vec() - self.as_vec();
        d.y.atan2(d.x)
    }

    /// Whether two circles centered here and at `other` overlap.
    pub fn overlaps(&self, radius: f64, other: &Position, other_radius: f64) -> bool {
        self.distance_to(other) < radius + other_radius
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` pointing along `angle`.
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        (DVec2::from_angle(angle) * speed).into()
    }

    /// Speed magnitude (units per tick).
    pub fn speed(&self) -> f64 {
        self.as_vec().length()
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl SimTime {
    /// Advance by one tick covering `delta_secs` of simulated time.
    pub fn advance(&mut self, delta_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += delta_secs;
    }
}
