//! World bounds and the camera viewport transform.
//!
//! Pure functions only. Every screen-space coordinate must pass through
//! [`Camera::screen_to_world`] before any system sees it.

use serde::{Deserialize, Serialize};

use crate::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH, WORLD_HEIGHT, WORLD_WIDTH};
use crate::types::Position;

/// Clamp a circle's center so the circle stays inside the world.
pub fn clamp_to_world(pos: Position, radius: f64) -> Position {
    Position::new(
        pos.x.clamp(radius, WORLD_WIDTH - radius),
        pos.y.clamp(radius, WORLD_HEIGHT - radius),
    )
}

/// Whether a circle lies fully inside the world.
pub fn in_world(pos: &Position, radius: f64) -> bool {
    pos.x >= radius
        && pos.x <= WORLD_WIDTH - radius
        && pos.y >= radius
        && pos.y <= WORLD_HEIGHT - radius
}

/// Fixed-size window onto the world. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::centered_on(Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0))
    }
}

impl Camera {
    /// Camera framing `focus` with the default viewport size.
    pub fn centered_on(focus: Position) -> Self {
        let mut camera = Self {
            x: 0.0,
            y: 0.0,
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        };
        camera.follow(focus);
        camera
    }

    /// Re-center on `focus`, never showing area outside the world.
    pub fn follow(&mut self, focus: Position) {
        let max_x = (WORLD_WIDTH - self.width).max(0.0);
        let max_y = (WORLD_HEIGHT - self.height).max(0.0);
        self.x = (focus.x - self.width / 2.0).clamp(0.0, max_x);
        self.y = (focus.y - self.height / 2.0).clamp(0.0, max_y);
    }

    pub fn screen_to_world(&self, screen_x: f64, screen_y: f64) -> Position {
        Position::new(screen_x + self.x, screen_y + self.y)
    }

    pub fn world_to_screen(&self, pos: &Position) -> (f64, f64) {
        (pos.x - self.x, pos.y - self.y)
    }

    /// Whether `pos` falls inside the viewport grown by `margin` on every side.
    pub fn contains(&self, pos: &Position, margin: f64) -> bool {
        pos.x >= self.x - margin
            && pos.x <= self.x + self.width + margin
            && pos.y >= self.y - margin
            && pos.y <= self.y + self.height + margin
    }
}
