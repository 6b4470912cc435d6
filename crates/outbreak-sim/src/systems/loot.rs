//! Ammo drops: rolled on kills, collected by walking over them.
//!
//! Pickups are the only way rounds enter the weapon after a run starts.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outbreak_core::components::{Body, Pickup, Player, Weapon};
use outbreak_core::constants::{AMMO_DROP_AMOUNT, AMMO_DROP_CHANCE};
use outbreak_core::events::SimEvent;
use outbreak_core::types::Position;

use crate::world_setup::spawn_pickup;

/// Roll for an ammo drop where a unit died.
pub fn maybe_drop(world: &mut World, rng: &mut ChaCha8Rng, position: Position) -> Option<Entity> {
    if rng.gen_bool(AMMO_DROP_CHANCE) {
        Some(spawn_pickup(world, position, AMMO_DROP_AMOUNT))
    } else {
        None
    }
}

/// Move overlapping pickups into the player's reserve.
pub fn collect(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<SimEvent>) {
    despawn_buffer.clear();

    let Some((player_pos, player_radius)) = world
        .query::<(&Player, &Position, &Body)>()
        .iter()
        .next()
        .map(|(_, (_, pos, body))| (*pos, body.radius))
    else {
        return;
    };

    let mut gained = 0u32;
    for (entity, (pickup, pos)) in world.query_mut::<(&Pickup, &Position)>() {
        if player_pos.overlaps(player_radius, pos, pickup.radius) {
            gained += pickup.amount;
            despawn_buffer.push(entity);
            events.push(SimEvent::AmmoCollected {
                amount: pickup.amount,
            });
        }
    }

    if gained > 0 {
        for (_entity, (_player, weapon)) in world.query_mut::<(&Player, &mut Weapon)>() {
            weapon.reserve += gained;
        }
        log::debug!("collected {gained} rounds");
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
