//! Decorative particles. Never read by gameplay.

use std::f64::consts::TAU;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outbreak_core::components::Particle;
use outbreak_core::constants::{MAX_PARTICLES, PARTICLE_DECAY_PER_TICK, PARTICLE_MAX_SPEED};
use outbreak_core::types::{Position, Velocity};

/// Emit up to `count` particles at `origin`, stopping at the global cap.
/// Returns how many were spawned.
pub fn emit_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    origin: Position,
    count: usize,
    color: u32,
) -> usize {
    let live = world.query::<&Particle>().iter().count();
    let room = MAX_PARTICLES.saturating_sub(live);
    let count = count.min(room);

    for _ in 0..count {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(0.5..PARTICLE_MAX_SPEED);
        let size = rng.gen_range(1.5..4.0);
        world.spawn((
            Particle {
                life: 1.0,
                max_life: 1.0,
                color,
                size,
            },
            origin,
            Velocity::from_angle(angle, speed),
        ));
    }
    count
}

/// Drift every particle along its fixed velocity and fade it. Expired or
/// escaped ones are removed by cleanup.
pub fn run(world: &mut World) {
    for (_entity, (particle, pos, vel)) in
        world.query_mut::<(&mut Particle, &mut Position, &mut Velocity)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
        particle.life -= PARTICLE_DECAY_PER_TICK;
    }
}
