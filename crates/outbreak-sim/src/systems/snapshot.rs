//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world. Renderable
//! entities are culled to the viewport; counts are not.

use hecs::World;

use outbreak_core::camera::Camera;
use outbreak_core::components::*;
use outbreak_core::constants::CULL_MARGIN;
use outbreak_core::enums::{GamePhase, ReloadState};
use outbreak_core::events::SimEvent;
use outbreak_core::state::*;
use outbreak_core::types::{Position, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    camera: &Camera,
    stats: &RunStats,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let (player, ammo) = build_player(world);

    GameStateSnapshot {
        time: *time,
        phase,
        player,
        ammo,
        stats: *stats,
        camera: *camera,
        zombies_alive: world.query::<&Zombie>().iter().count() as u32,
        zombies: build_zombies(world, camera),
        projectiles: build_projectiles(world, camera),
        particles: build_particles(world, camera),
        hazards: build_hazards(world, camera, time.elapsed_secs),
        pickups: build_pickups(world, camera),
        events,
    }
}

fn visible(camera: &Camera, pos: &Position, radius: f64) -> bool {
    camera.contains(pos, CULL_MARGIN + radius)
}

/// Player and HUD ammo readout. Defaults before the first run.
fn build_player(world: &World) -> (PlayerView, AmmoView) {
    world
        .query::<(&Player, &Position, &Health, &Facing, &Weapon)>()
        .iter()
        .next()
        .map(|(_, (_, pos, health, facing, weapon))| {
            (
                PlayerView {
                    position: *pos,
                    hp: health.current.max(0.0),
                    max_hp: health.max,
                    facing: facing.angle,
                },
                AmmoView {
                    clip: weapon.clip,
                    capacity: weapon.capacity,
                    reserve: weapon.reserve,
                    reloading: weapon.state == ReloadState::Reloading,
                    reload_progress: weapon.reload_progress,
                },
            )
        })
        .unwrap_or_default()
}

fn build_zombies(world: &World, camera: &Camera) -> Vec<ZombieView> {
    world
        .query::<(&Zombie, &Position, &Body, &Health)>()
        .iter()
        .filter(|(_, (_, pos, body, _))| visible(camera, pos, body.radius))
        .map(|(_, (zombie, pos, body, health))| ZombieView {
            variant: zombie.variant,
            position: *pos,
            radius: body.radius,
            hp: health.current,
            max_hp: health.max,
            color: body.color,
        })
        .collect()
}

fn build_projectiles(world: &World, camera: &Camera) -> Vec<Position> {
    world
        .query::<(&Projectile, &Position, &Body)>()
        .iter()
        .filter(|(_, (_, pos, body))| visible(camera, pos, body.radius))
        .map(|(_, (_, pos, _))| *pos)
        .collect()
}

fn build_particles(world: &World, camera: &Camera) -> Vec<ParticleView> {
    world
        .query::<(&Particle, &Position)>()
        .iter()
        .filter(|(_, (particle, pos))| visible(camera, pos, particle.size))
        .map(|(_, (particle, pos))| ParticleView {
            position: *pos,
            life: (particle.life / particle.max_life).clamp(0.0, 1.0),
            color: particle.color,
            size: particle.size,
        })
        .collect()
}

fn build_hazards(world: &World, camera: &Camera, now: f64) -> Vec<HazardView> {
    world
        .query::<(&Hazard, &Position)>()
        .iter()
        .filter(|(_, (hazard, pos))| visible(camera, pos, hazard.radius))
        .map(|(_, (hazard, pos))| HazardView {
            position: *pos,
            radius: hazard.radius,
            remaining_secs: (hazard.duration_secs - (now - hazard.created_secs)).max(0.0),
        })
        .collect()
}

fn build_pickups(world: &World, camera: &Camera) -> Vec<PickupView> {
    world
        .query::<(&Pickup, &Position)>()
        .iter()
        .filter(|(_, (pickup, pos))| visible(camera, pos, pickup.radius))
        .map(|(_, (pickup, pos))| PickupView {
            position: *pos,
            radius: pickup.radius,
            amount: pickup.amount,
        })
        .collect()
}
