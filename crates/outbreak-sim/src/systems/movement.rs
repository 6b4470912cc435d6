//! Kinematic integration system.
//!
//! Player motion from the control vector, straight-line pursuit for hostile
//! units, and fixed-velocity projectile flight.

use glam::DVec2;
use hecs::World;

use outbreak_core::camera::clamp_to_world;
use outbreak_core::commands::ControlInput;
use outbreak_core::components::{Body, Player, Projectile, Speed, Zombie};
use outbreak_core::profiles::get_profile;
use outbreak_core::types::{Position, Velocity};

/// Normalize a raw control vector: longer than unit length is scaled down,
/// non-finite input is treated as no movement.
pub fn normalize_move(input: &ControlInput) -> DVec2 {
    let raw = DVec2::new(input.move_x, input.move_y);
    if !raw.is_finite() {
        return DVec2::ZERO;
    }
    if raw.length_squared() > 1.0 {
        raw.normalize()
    } else {
        raw
    }
}

/// Move the player by the control vector and clamp to world bounds.
pub fn move_player(world: &mut World, input: &ControlInput) {
    let direction = normalize_move(input);
    for (_entity, (_player, pos, vel, body, speed)) in
        world.query_mut::<(&Player, &mut Position, &mut Velocity, &Body, &Speed)>()
    {
        let step = direction * speed.per_tick;
        *vel = step.into();
        *pos = clamp_to_world(Position::from(pos.as_vec() + step), body.radius);
    }
}

/// Steer every hostile unit straight at `target`, recomputed each call.
/// A unit never steps past the target's center; bosses are clamped to the world.
pub fn pursue(world: &mut World, target: Position) {
    for (_entity, (zombie, pos, vel, body, speed)) in
        world.query_mut::<(&Zombie, &mut Position, &mut Velocity, &Body, &Speed)>()
    {
        let to_target = target.as_vec() - pos.as_vec();
        let distance = to_target.length();
        let step = if distance > 0.0 {
            to_target / distance * speed.per_tick.min(distance)
        } else {
            DVec2::ZERO
        };
        *vel = step.into();

        let next = Position::from(pos.as_vec() + step);
        *pos = if get_profile(zombie.variant).clamped {
            clamp_to_world(next, body.radius)
        } else {
            next
        };
    }
}

/// Advance every projectile by its velocity.
pub fn integrate_projectiles(world: &mut World) {
    for (_entity, (_projectile, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}
