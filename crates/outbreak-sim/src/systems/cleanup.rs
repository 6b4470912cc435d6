//! Cleanup system: removes expired hazards and burnt-out or escaped particles.

use hecs::{Entity, World};

use outbreak_core::camera::in_world;
use outbreak_core::components::{Hazard, Particle};
use outbreak_core::types::Position;

use super::hazards::is_active;

/// Remove hazards past their duration and particles with no life left or
/// outside the world.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, now: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, hazard) in world.query_mut::<&Hazard>() {
        if !is_active(hazard, now) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (particle, pos)) in world.query_mut::<(&Particle, &Position)>() {
        if particle.life <= 0.0 || !in_world(pos, 0.0) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
