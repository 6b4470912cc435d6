//! Fire control: reload state machine, fire legality and target selection.
//!
//! State machine (per weapon):
//!
//! ```text
//!   Idle ──(reload request | fire with empty clip)──▶ Reloading
//!     ▲                                                  │
//!     └──────────(progress reaches 1, transfer)──────────┘
//! ```
//!
//! Reload requests are no-ops while reloading, with a full clip, or with an
//! empty reserve. Fire attempts are dropped while reloading.

use hecs::World;

use outbreak_core::camera::Camera;
use outbreak_core::commands::{Aim, ControlInput};
use outbreak_core::components::{Facing, Health, Weapon, Zombie};
use outbreak_core::constants::*;
use outbreak_core::enums::ReloadState;
use outbreak_core::events::SimEvent;
use outbreak_core::state::RunStats;
use outbreak_core::types::Position;

use crate::world_setup::{find_player, spawn_projectile};

/// Slack for comparing accumulated clock time against fixed intervals.
pub(crate) const TIME_EPSILON: f64 = 1e-9;

/// Result of one fire attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireOutcome {
    /// A round left the clip along `angle`.
    Fired { angle: f64 },
    /// Gate passed but the minimum interval has not elapsed. Facing still updated.
    RateLimited,
    /// Clip was empty; the attempt started a reload instead.
    ReloadTriggered,
    /// Reloading, or empty clip with nothing left in reserve.
    Dropped,
}

/// Start a reload if the weapon can take one. Returns whether it started.
pub fn request_reload(weapon: &mut Weapon, now: f64) -> bool {
    if weapon.state == ReloadState::Reloading
        || weapon.clip >= weapon.capacity
        || weapon.reserve == 0
    {
        return false;
    }
    weapon.state = ReloadState::Reloading;
    weapon.reload_started_secs = now;
    weapon.reload_progress = 0.0;
    true
}

/// Update reload progress. On completion, moves rounds from reserve to clip
/// and returns how many were transferred.
pub fn advance_reload(weapon: &mut Weapon, now: f64) -> Option<u32> {
    if weapon.state != ReloadState::Reloading {
        return None;
    }

    let elapsed = now - weapon.reload_started_secs;
    if elapsed + TIME_EPSILON < RELOAD_DURATION_SECS {
        weapon.reload_progress = (elapsed / RELOAD_DURATION_SECS).clamp(0.0, 1.0);
        return None;
    }

    let transferred = (weapon.capacity - weapon.clip).min(weapon.reserve);
    weapon.clip += transferred;
    weapon.reserve -= transferred;
    weapon.state = ReloadState::Idle;
    weapon.reload_progress = 0.0;
    Some(transferred)
}

/// Attempt a shot from `origin` toward `target`.
pub fn try_fire(
    weapon: &mut Weapon,
    facing: &mut Facing,
    origin: Position,
    target: Position,
    now: f64,
) -> FireOutcome {
    if weapon.state == ReloadState::Reloading {
        return FireOutcome::Dropped;
    }
    if weapon.clip == 0 {
        return if request_reload(weapon, now) {
            FireOutcome::ReloadTriggered
        } else {
            FireOutcome::Dropped
        };
    }

    let angle = origin.angle_to(&target);
    facing.angle = angle;

    if let Some(last) = weapon.last_fire_secs {
        if now - last + TIME_EPSILON < FIRE_INTERVAL_SECS {
            return FireOutcome::RateLimited;
        }
    }

    weapon.clip -= 1;
    weapon.last_fire_secs = Some(now);
    FireOutcome::Fired { angle }
}

/// Resolve the control aim into a world-space target.
/// Auto-aim picks the nearest live unit inside the viewport.
pub fn resolve_target(world: &World, camera: &Camera, origin: Position, aim: Aim) -> Option<Position> {
    match aim {
        Aim::World { x, y } => Some(Position::new(x, y)),
        Aim::Screen { x, y } => Some(camera.screen_to_world(x, y)),
        Aim::Auto => world
            .query::<(&Zombie, &Position, &Health)>()
            .iter()
            .filter(|(_, (_, pos, health))| health.current > 0.0 && camera.contains(pos, 0.0))
            .map(|(_, (_, pos, _))| *pos)
            .min_by(|a, b| origin.distance_to(a).total_cmp(&origin.distance_to(b))),
    }
}

/// Run fire control for one tick: reload progress, then reload requests,
/// then fire intent.
pub fn run(
    world: &mut World,
    input: &ControlInput,
    camera: &Camera,
    now: f64,
    stats: &mut RunStats,
    events: &mut Vec<SimEvent>,
) {
    let Some(player) = find_player(world) else {
        return;
    };

    let target = if input.fire_held {
        let origin = match world.get::<&Position>(player) {
            Ok(pos) => *pos,
            Err(_) => return,
        };
        resolve_target(world, camera, origin, input.aim)
    } else {
        None
    };

    let shot = {
        let Ok((weapon, facing, pos)) =
            world.query_one_mut::<(&mut Weapon, &mut Facing, &Position)>(player)
        else {
            return;
        };

        if let Some(transferred) = advance_reload(weapon, now) {
            log::debug!("reload complete: {transferred} rounds moved to clip");
            events.push(SimEvent::ReloadCompleted { transferred });
        }

        if input.reload_requested && request_reload(weapon, now) {
            log::debug!("reload started on request");
            events.push(SimEvent::ReloadStarted);
        }

        // No target (auto-aim with nothing on screen) means no attempt at all.
        let Some(target) = target else {
            return;
        };
        match try_fire(weapon, facing, *pos, target, now) {
            FireOutcome::Fired { angle } => Some((*pos, angle)),
            FireOutcome::ReloadTriggered => {
                log::debug!("empty clip, reload started");
                events.push(SimEvent::ReloadStarted);
                None
            }
            FireOutcome::RateLimited | FireOutcome::Dropped => None,
        }
    };

    if let Some((origin, angle)) = shot {
        spawn_projectile(world, origin, angle, now);
        stats.shots_fired += 1;
    }
}
