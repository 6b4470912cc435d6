//! Combat resolution: pursuit, projectile flight, hits, deaths and contact damage.
//!
//! Order within a tick is fixed: units move, projectiles move and leave the
//! world, then each unit in turn takes its bullet hits, dies if out of HP,
//! and otherwise touches the player. Units a blast finishes after their own
//! turn die in a final sweep of the same tick.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use outbreak_core::camera::in_world;
use outbreak_core::components::{Body, Damage, Health, Player, Projectile, Zombie};
use outbreak_core::constants::*;
use outbreak_core::enums::DeathEffect;
use outbreak_core::events::SimEvent;
use outbreak_core::profiles::get_profile;
use outbreak_core::state::RunStats;
use outbreak_core::types::Position;

use super::{loot, movement, particles};
use crate::world_setup::{find_player, spawn_hazard};

/// Live projectile as seen by the hit test.
#[derive(Debug, Clone, Copy)]
struct Round {
    entity: Entity,
    position: Position,
    radius: f64,
    damage: f64,
    spent: bool,
}

/// Run combat for one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    stats: &mut RunStats,
    now: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    let Some(player) = find_player(world) else {
        return;
    };
    let Ok((player_pos, player_radius)) = world
        .query_one_mut::<(&Position, &Body)>(player)
        .map(|(pos, body)| (*pos, body.radius))
    else {
        return;
    };

    movement::pursue(world, player_pos);
    movement::integrate_projectiles(world);
    despawn_stray_projectiles(world, despawn_buffer);

    let mut rounds: Vec<Round> = world
        .query::<(&Projectile, &Position, &Body, &Damage)>()
        .iter()
        .map(|(entity, (_, pos, body, damage))| Round {
            entity,
            position: *pos,
            radius: body.radius,
            damage: damage.amount,
            spent: false,
        })
        .collect();

    let zombies: Vec<Entity> = world
        .query::<&Zombie>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for zombie in zombies {
        resolve_hits(world, rng, zombie, &mut rounds, stats);

        let dead = world
            .get::<&Health>(zombie)
            .map(|h| h.current <= 0.0)
            .unwrap_or(false);

        if dead {
            kill_zombie(world, rng, zombie, player, stats, now, events);
        } else {
            apply_contact_damage(world, zombie, player, player_pos, player_radius);
        }
    }

    for round in rounds.iter().filter(|r| r.spent) {
        let _ = world.despawn(round.entity);
    }

    sweep_blast_victims(world, rng, player, stats, now, events);
}

/// Kill units left at or below zero HP by an explosion. A victim may itself
/// explode, so repeat until none remain.
fn sweep_blast_victims(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: Entity,
    stats: &mut RunStats,
    now: f64,
    events: &mut Vec<SimEvent>,
) {
    loop {
        let dead: Vec<Entity> = world
            .query::<(&Zombie, &Health)>()
            .iter()
            .filter(|(_, (_, health))| health.current <= 0.0)
            .map(|(entity, _)| entity)
            .collect();
        if dead.is_empty() {
            break;
        }
        for zombie in dead {
            kill_zombie(world, rng, zombie, player, stats, now, events);
        }
    }
}

/// Whether the player has run out of HP.
pub fn player_defeated(world: &World) -> bool {
    world
        .query::<(&Player, &Health)>()
        .iter()
        .any(|(_, (_, health))| health.current <= 0.0)
}

/// Remove projectiles that have left the world.
fn despawn_stray_projectiles(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, (_projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if !in_world(pos, 0.0) {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Spend overlapping rounds on `zombie` until it runs out of HP.
/// A round hits at most one unit.
fn resolve_hits(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    zombie: Entity,
    rounds: &mut [Round],
    stats: &mut RunStats,
) {
    let Ok((pos, radius)) = world
        .query_one_mut::<(&Position, &Body)>(zombie)
        .map(|(pos, body)| (*pos, body.radius))
    else {
        return;
    };

    let mut sparks = Vec::new();
    if let Ok(health) = world.query_one_mut::<&mut Health>(zombie) {
        for round in rounds.iter_mut().filter(|r| !r.spent) {
            if health.current <= 0.0 {
                break;
            }
            if round.position.overlaps(round.radius, &pos, radius) {
                health.current -= round.damage;
                round.spent = true;
                stats.shots_hit += 1;
                sparks.push(round.position);
            }
        }
    }

    for at in sparks {
        particles::emit_burst(world, rng, at, HIT_SPARK_COUNT, HIT_SPARK_COLOR);
    }
}

/// Remove a dead unit and fire its single death effect.
fn kill_zombie(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    zombie: Entity,
    player: Entity,
    stats: &mut RunStats,
    now: f64,
    events: &mut Vec<SimEvent>,
) {
    let (variant, pos) = match world.query_one_mut::<(&Zombie, &Position)>(zombie) {
        Ok((z, pos)) => (z.variant, *pos),
        Err(_) => return,
    };
    let _ = world.despawn(zombie);

    let profile = get_profile(variant);
    stats.kills += 1;
    stats.score += profile.score;

    match profile.death_effect {
        DeathEffect::Explosion => explode(world, player, pos),
        DeathEffect::AcidPool => {
            spawn_hazard(world, pos, now);
        }
        DeathEffect::Burst => {}
    }
    particles::emit_burst(world, rng, pos, profile.burst_count, profile.burst_color);

    loot::maybe_drop(world, rng, pos);

    log::debug!("{variant:?} killed at ({:.0}, {:.0})", pos.x, pos.y);
    events.push(SimEvent::UnitKilled {
        variant,
        x: pos.x,
        y: pos.y,
        effect: profile.death_effect,
    });
}

/// Volatile blast: hurts the player inside the radius and every other unit
/// inside it by a flat amount.
fn explode(world: &mut World, player: Entity, center: Position) {
    if let Ok((pos, health)) = world.query_one_mut::<(&Position, &mut Health)>(player) {
        if center.distance_to(pos) < EXPLOSION_RADIUS {
            health.current -= EXPLOSION_PLAYER_DAMAGE;
        }
    }
    for (_entity, (_zombie, pos, health)) in
        world.query_mut::<(&Zombie, &Position, &mut Health)>()
    {
        if center.distance_to(pos) < EXPLOSION_RADIUS {
            health.current -= EXPLOSION_UNIT_DAMAGE;
        }
    }
}

/// Apply one tick of contact damage if `zombie` touches the player.
fn apply_contact_damage(
    world: &mut World,
    zombie: Entity,
    player: Entity,
    player_pos: Position,
    player_radius: f64,
) {
    let contact = match world.query_one_mut::<(&Position, &Body, &Damage)>(zombie) {
        Ok((pos, body, damage)) if pos.overlaps(body.radius, &player_pos, player_radius) => {
            damage.amount
        }
        _ => return,
    };
    if let Ok(health) = world.query_one_mut::<&mut Health>(player) {
        health.current -= contact;
    }
}
