//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, hostile units, projectiles, hazards and pickups with
//! appropriate component bundles.

use hecs::{Entity, World};

use outbreak_core::camera::clamp_to_world;
use outbreak_core::components::*;
use outbreak_core::constants::*;
use outbreak_core::enums::*;
use outbreak_core::profiles::{get_profile, wave_multiplier};
use outbreak_core::types::{Position, Velocity};

/// Reset the world for a fresh run: everything cleared, player centered.
pub fn setup_run(world: &mut World) -> Entity {
    world.clear();
    spawn_player(world)
}

/// Spawn the player at the world center with a full clip and starting reserve.
pub fn spawn_player(world: &mut World) -> Entity {
    let weapon = Weapon {
        clip: CLIP_CAPACITY,
        capacity: CLIP_CAPACITY,
        reserve: STARTING_RESERVE,
        state: ReloadState::Idle,
        reload_started_secs: 0.0,
        reload_progress: 0.0,
        last_fire_secs: None,
    };

    world.spawn((
        Player,
        Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
        Velocity::default(),
        Body {
            radius: PLAYER_RADIUS,
            color: PLAYER_COLOR,
        },
        Health {
            current: PLAYER_MAX_HP,
            max: PLAYER_MAX_HP,
        },
        Speed {
            per_tick: PLAYER_SPEED,
        },
        Facing::default(),
        weapon,
    ))
}

/// Find the player entity, if a run is in progress.
pub fn find_player(world: &World) -> Option<Entity> {
    world
        .query::<&Player>()
        .iter()
        .next()
        .map(|(entity, _)| entity)
}

/// Spawn a hostile unit of `variant`, scaled for `wave`, clamped inside the world.
pub fn spawn_zombie(
    world: &mut World,
    variant: ZombieVariant,
    position: Position,
    wave: u32,
) -> Entity {
    let profile = get_profile(variant);
    let multiplier = wave_multiplier(wave);
    let hp = profile.hp * multiplier;

    world.spawn((
        Zombie { variant },
        clamp_to_world(position, profile.radius),
        Velocity::default(),
        Body {
            radius: profile.radius,
            color: profile.color,
        },
        Health {
            current: hp,
            max: hp,
        },
        Damage {
            amount: profile.damage * multiplier,
        },
        Speed {
            per_tick: profile.speed,
        },
    ))
}

/// Spawn a bullet at `origin` travelling along `angle`.
pub fn spawn_projectile(world: &mut World, origin: Position, angle: f64, now: f64) -> Entity {
    world.spawn((
        Projectile { created_secs: now },
        origin,
        Velocity::from_angle(angle, PROJECTILE_SPEED),
        Body {
            radius: PROJECTILE_RADIUS,
            color: PROJECTILE_COLOR,
        },
        Damage {
            amount: PROJECTILE_DAMAGE,
        },
        Speed {
            per_tick: PROJECTILE_SPEED,
        },
    ))
}

/// Spawn an acid pool.
pub fn spawn_hazard(world: &mut World, position: Position, now: f64) -> Entity {
    world.spawn((
        Hazard {
            radius: HAZARD_RADIUS,
            created_secs: now,
            duration_secs: HAZARD_DURATION_SECS,
        },
        position,
    ))
}

/// Spawn an ammo drop.
pub fn spawn_pickup(world: &mut World, position: Position, amount: u32) -> Entity {
    world.spawn((
        Pickup {
            radius: PICKUP_RADIUS,
            amount,
        },
        position,
        Body {
            radius: PICKUP_RADIUS,
            color: PICKUP_COLOR,
        },
    ))
}
