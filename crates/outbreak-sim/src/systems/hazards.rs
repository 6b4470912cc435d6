//! Acid pools damage the player on a shared cooldown.
//!
//! Standing in two overlapping pools deals no more than standing in one.

use hecs::World;

use outbreak_core::components::{Hazard, Health, Player};
use outbreak_core::constants::{HAZARD_DAMAGE, HAZARD_DAMAGE_COOLDOWN_SECS};
use outbreak_core::types::Position;

use super::fire_control::TIME_EPSILON;

/// Whether `hazard` is still active at `now`.
pub fn is_active(hazard: &Hazard, now: f64) -> bool {
    now - hazard.created_secs <= hazard.duration_secs
}

/// Apply acid damage if the player stands in any active pool and the
/// shared cooldown has elapsed. Returns whether damage was applied.
pub fn run(world: &mut World, now: f64, last_damage_secs: &mut Option<f64>) -> bool {
    if let Some(last) = *last_damage_secs {
        if now - last + TIME_EPSILON < HAZARD_DAMAGE_COOLDOWN_SECS {
            return false;
        }
    }

    let Some(player_pos) = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
    else {
        return false;
    };

    let standing_in_acid = world
        .query::<(&Hazard, &Position)>()
        .iter()
        .any(|(_, (hazard, pos))| {
            is_active(hazard, now) && player_pos.distance_to(pos) < hazard.radius
        });
    if !standing_in_acid {
        return false;
    }

    for (_entity, (_player, health)) in world.query_mut::<(&Player, &mut Health)>() {
        health.current -= HAZARD_DAMAGE;
    }
    *last_damage_secs = Some(now);
    true
}
