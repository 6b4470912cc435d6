//! Property tests over the public engine API: ammo conservation, world
//! bounds, and reload arithmetic.

use proptest::prelude::*;

use outbreak_core::camera::in_world;
use outbreak_core::commands::{Aim, ControlInput, PlayerCommand};
use outbreak_core::components::{Weapon, Zombie};
use outbreak_core::constants::*;
use outbreak_core::enums::{GamePhase, ReloadState};
use outbreak_core::types::Position;
use outbreak_sim::systems::fire_control;
use outbreak_sim::world_setup::find_player;
use outbreak_sim::{SimConfig, SimulationEngine};

fn control() -> impl Strategy<Value = ControlInput> {
    (
        -1.5f64..1.5,
        -1.5f64..1.5,
        0.0f64..std::f64::consts::TAU,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(move_x, move_y, angle, auto, fire_held, reload_requested)| {
            let aim = if auto {
                Aim::Auto
            } else {
                Aim::World {
                    x: 1500.0 + 300.0 * angle.cos(),
                    y: 1500.0 + 300.0 * angle.sin(),
                }
            };
            ControlInput {
                move_x,
                move_y,
                aim,
                fire_held,
                reload_requested,
            }
        })
}

fn weapon(engine: &SimulationEngine) -> Weapon {
    let player = find_player(engine.world()).expect("run started");
    let weapon = engine.world().get::<&Weapon>(player).expect("player has a weapon");
    (*weapon).clone()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// With nothing to kill there are no pickups, so every round is either
    /// in the clip, in reserve, or already fired.
    #[test]
    fn ammo_is_conserved(inputs in prop::collection::vec((control(), 1usize..40), 1..12)) {
        let mut engine = SimulationEngine::new(SimConfig {
            director_enabled: false,
            ..Default::default()
        });
        engine.queue_command(PlayerCommand::StartRun);
        engine.tick();

        let total = CLIP_CAPACITY + STARTING_RESERVE;
        for (input, ticks) in inputs {
            engine.apply_input(input);
            for _ in 0..ticks {
                let snap = engine.tick();
                let w = weapon(&engine);
                prop_assert_eq!(w.clip + w.reserve + snap.stats.shots_fired, total);
                prop_assert!(w.clip <= w.capacity);
                prop_assert!((0.0..=1.0).contains(&w.reload_progress));
            }
        }
    }

    /// Player and units stay inside the world whatever the player does.
    #[test]
    fn entities_stay_in_bounds(
        seed in any::<u64>(),
        starting_wave in 1u32..12,
        inputs in prop::collection::vec((control(), 10usize..60), 1..10),
    ) {
        let mut engine = SimulationEngine::new(SimConfig {
            seed,
            starting_wave,
            director_enabled: true,
        });
        engine.queue_command(PlayerCommand::StartRun);
        engine.tick();

        for (input, ticks) in inputs {
            engine.apply_input(input);
            for _ in 0..ticks {
                let snap = engine.tick();
                if snap.phase != GamePhase::Running {
                    return Ok(());
                }
                prop_assert!(in_world(&snap.player.position, PLAYER_RADIUS));
                for (_, (_, pos)) in engine.world().query::<(&Zombie, &Position)>().iter() {
                    prop_assert!(in_world(pos, 0.0), "unit escaped to {:?}", pos);
                }
            }
        }
    }

    /// A completed reload fills the clip as far as the reserve allows.
    #[test]
    fn completed_reload_fills_clip(clip in 0u32..CLIP_CAPACITY, reserve in 1u32..200) {
        let mut w = Weapon {
            clip,
            capacity: CLIP_CAPACITY,
            reserve,
            state: ReloadState::Idle,
            reload_started_secs: 0.0,
            reload_progress: 0.0,
            last_fire_secs: None,
        };
        prop_assert!(fire_control::request_reload(&mut w, 1.0));
        prop_assert!(!fire_control::request_reload(&mut w, 1.2));

        let transferred = fire_control::advance_reload(&mut w, 1.0 + RELOAD_DURATION_SECS);
        prop_assert_eq!(w.clip, CLIP_CAPACITY.min(clip + reserve));
        prop_assert_eq!(transferred, Some(w.clip - clip));
        prop_assert_eq!(w.clip + w.reserve, clip + reserve);
        prop_assert_eq!(w.state, ReloadState::Idle);
    }
}
