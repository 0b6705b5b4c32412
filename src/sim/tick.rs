//! Fixed timestep simulation tick
//!
//! Per tick: wrap every ship, compute seek steering, resolve catches, compute
//! wander steering, then integrate. Seek reads positions from before the
//! catch respawn; wander draws its randomness after any respawn draws.

use super::arena::within_catch;
use super::state::{Behavior, ChaseState, SimEvent};
use crate::steering::SteeringOutput;

/// Advance the chase by `dt` seconds
pub fn tick(state: &mut ChaseState, dt: f32) {
    let dt = dt.max(0.0);

    for ship in &mut state.ships {
        if state.arena.wrap(&mut ship.kinematic.position) {
            log::trace!("{} wrapped to {:?}", ship.id, ship.kinematic.position);
        }
    }

    let mut steering = vec![SteeringOutput::ZERO; state.ships.len()];

    for (i, ship) in state.ships.iter().enumerate() {
        if let Behavior::Seek { seek, target } = ship.behavior {
            match state.ship(target) {
                Some(target) => steering[i] = seek.get_steering(&ship.kinematic, &target.kinematic),
                None => log::warn!("{} seeks missing {}", ship.id, target),
            }
        }
    }

    resolve_catches(state);

    for (i, ship) in state.ships.iter().enumerate() {
        if let Behavior::Wander(wander) = ship.behavior {
            steering[i] = wander.get_steering(&ship.kinematic, &mut state.rng);
        }
    }

    let drag = state.drag;
    for (ship, steering) in state.ships.iter_mut().zip(&steering) {
        ship.kinematic.update(steering, ship.max_speed, drag, dt);
    }

    state.time_ticks += 1;
}

/// Respawn every seek target that its hunter has reached
fn resolve_catches(state: &mut ChaseState) {
    for hunter in 0..state.ships.len() {
        let Behavior::Seek { target, .. } = state.ships[hunter].behavior else {
            continue;
        };
        let Some(prey) = state.index_of(target) else {
            continue;
        };

        let at = state.ships[prey].position();
        if !within_catch(at, state.ships[hunter].position(), state.catch_distance) {
            continue;
        }

        let respawn = state.arena.random_point(&mut state.rng);
        state.ships[prey].kinematic.reset(respawn);
        state.catches += 1;

        let hunter = state.ships[hunter].id;
        log::info!("Caught! {hunter} caught {target} at {at:?}, respawned at {respawn:?}");
        state.events.push(SimEvent::Caught {
            hunter,
            prey: target,
            at,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::Settings;
    use crate::sim::state::{HUNTER_ID, PREY_ID};
    use glam::Vec2;

    #[test]
    fn test_first_tick_moves_both() {
        let mut state = ChaseState::new(12345, &Settings::default());
        let hunter_start = state.ship(HUNTER_ID).unwrap().position();
        let prey_start = state.ship(PREY_ID).unwrap().position();

        tick(&mut state, SIM_DT);
        assert_eq!(state.time_ticks, 1);

        let hunter = state.ship(HUNTER_ID).unwrap();
        let prey = state.ship(PREY_ID).unwrap();
        assert_ne!(hunter.position(), hunter_start);
        assert_ne!(prey.position(), prey_start);

        // Hunter heads toward where the prey was
        let to_prey = prey_start - hunter_start;
        assert!(hunter.kinematic.velocity.dot(to_prey) > 0.0);
    }

    #[test]
    fn test_prey_sets_off_along_height() {
        let mut state = ChaseState::new(1, &Settings::default());
        tick(&mut state, SIM_DT);

        let v = state.ship(PREY_ID).unwrap().kinematic.velocity;
        assert!(v.y > 0.0);
        assert!(v.y.abs() > v.x.abs());
    }

    #[test]
    fn test_catch_respawns_prey() {
        let mut state = ChaseState::new(7, &Settings::default());
        let hunter_pos = state.ship(HUNTER_ID).unwrap().position();
        let prey = state.ship_mut(PREY_ID).unwrap();
        prey.kinematic.position = hunter_pos + Vec2::new(5.0, -5.0);
        prey.kinematic.velocity = Vec2::new(100.0, 0.0);

        tick(&mut state, SIM_DT);

        assert_eq!(state.catches, 1);
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![SimEvent::Caught {
                hunter: HUNTER_ID,
                prey: PREY_ID,
                at: hunter_pos + Vec2::new(5.0, -5.0),
            }]
        );
        assert!(state.drain_events().is_empty());

        // Respawned from rest, so only one tick of wander thrust applies
        let prey = state.ship(PREY_ID).unwrap();
        assert!(prey.kinematic.speed() <= 500.0 * SIM_DT + 1e-3);
    }

    #[test]
    fn test_no_catch_when_apart() {
        let mut state = ChaseState::new(7, &Settings::default());
        for _ in 0..10 {
            tick(&mut state, SIM_DT);
        }
        assert_eq!(state.catches, 0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_ships_stay_in_arena() {
        let mut state = ChaseState::new(2024, &Settings::default());
        let arena = state.arena;
        for _ in 0..2000 {
            tick(&mut state, SIM_DT);
            for ship in &state.ships {
                // One tick of travel past an edge is allowed before the next wrap
                let slack = ship.max_speed * SIM_DT + 1.0;
                let p = ship.position();
                assert!(p.x > -slack && p.x < arena.width + slack);
                assert!(p.y > -slack && p.y < arena.height + slack);
            }
        }
    }

    #[test]
    fn test_coincident_seek_does_not_blow_up() {
        let mut state = ChaseState::new(1, &Settings::default());
        let hunter_pos = state.ship(HUNTER_ID).unwrap().position();
        state.ship_mut(PREY_ID).unwrap().kinematic.position = hunter_pos;

        tick(&mut state, SIM_DT);
        for ship in &state.ships {
            assert!(ship.position().is_finite());
            assert!(ship.kinematic.orientation.is_finite());
        }
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let settings = Settings::default();
        let mut state1 = ChaseState::new(99999, &settings);
        let mut state2 = ChaseState::new(99999, &settings);

        let dts = [SIM_DT, SIM_DT * 0.5, 0.0, SIM_DT * 2.0];
        for _ in 0..200 {
            for &dt in &dts {
                tick(&mut state1, dt);
                tick(&mut state2, dt);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.catches, state2.catches);
        for (a, b) in state1.ships.iter().zip(&state2.ships) {
            assert_eq!(a.kinematic, b.kinematic);
        }
    }

    #[test]
    fn test_hunter_catches_idle_prey() {
        let mut settings = Settings::default();
        settings.prey.max_acceleration = 0.0;
        settings.prey.max_angle = 0.0;
        let mut state = ChaseState::new(31337, &settings);

        for _ in 0..600 {
            tick(&mut state, SIM_DT);
            if state.catches > 0 {
                break;
            }
        }
        assert_eq!(state.catches, 1);
    }
}
