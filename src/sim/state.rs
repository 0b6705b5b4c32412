//! Chase state and ship types
//!
//! Everything needed to reproduce a run lives here, including the RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::settings::{Settings, ShipTuning};
use crate::steering::{Kinematic, Seek, Wander};
use crate::wrap_orientation;

/// Stable ship identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShipId(pub u32);

impl std::fmt::Display for ShipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ship#{}", self.0)
    }
}

pub const HUNTER_ID: ShipId = ShipId(1);
pub const PREY_ID: ShipId = ShipId(2);

/// Ship colours (RGBA), opaque to the simulation
pub const HUNTER_COLOR: u32 = 0xE629_37FF;
pub const PREY_COLOR: u32 = 0x0079_F1FF;

/// Starting facings in screen degrees, where 0° points along the width axis
/// and 270° along +height.
const HUNTER_START_DEGREES: f32 = 0.0;
const PREY_START_DEGREES: f32 = 270.0;

/// Convert a screen-degree facing into this crate's orientation, where 0
/// faces +y (height) and x runs along the width.
fn screen_orientation(degrees: f32) -> f32 {
    wrap_orientation(-degrees.to_radians() - std::f32::consts::FRAC_PI_2)
}

/// What drives a ship each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// Chase another ship, resolved by id every tick
    Seek { seek: Seek, target: ShipId },
    /// Drift along the current facing
    Wander(Wander),
}

/// A ship: kinematic state plus the behaviour steering it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub id: ShipId,
    pub kinematic: Kinematic,
    pub behavior: Behavior,
    /// Speed cap applied by the integrator
    pub max_speed: f32,
    /// Render tag
    pub color: u32,
}

impl Ship {
    pub fn new(id: ShipId, position: Vec2, orientation: f32, behavior: Behavior, max_speed: f32, color: u32) -> Self {
        Self {
            id,
            kinematic: Kinematic::new(position, orientation),
            behavior,
            max_speed,
            color,
        }
    }

    pub fn hunter(position: Vec2, orientation: f32, tuning: &ShipTuning, target: ShipId) -> Self {
        let behavior = Behavior::Seek {
            seek: Seek::new(tuning.max_acceleration),
            target,
        };
        Self::new(HUNTER_ID, position, orientation, behavior, tuning.max_speed, HUNTER_COLOR)
    }

    pub fn prey(position: Vec2, orientation: f32, tuning: &ShipTuning) -> Self {
        let behavior = Behavior::Wander(Wander::new(tuning.max_angle, tuning.max_acceleration));
        Self::new(PREY_ID, position, orientation, behavior, tuning.max_speed, PREY_COLOR)
    }

    pub fn position(&self) -> Vec2 {
        self.kinematic.position
    }
}

/// Something the driver may want to react to (sound, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// `hunter` caught `prey` at `at`; the prey has already respawned
    Caught { hunter: ShipId, prey: ShipId, at: Vec2 },
}

/// Complete chase state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaseState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Wander and respawn randomness
    pub rng: Pcg32,
    pub arena: Arena,
    /// Shared by every ship
    pub drag: f32,
    pub catch_distance: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Total catches so far
    pub catches: u32,
    /// Ships (sorted by id for determinism)
    pub ships: Vec<Ship>,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl ChaseState {
    /// Spawn the hunter and prey at their starting marks
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let arena = Arena::new(settings.arena_width, settings.arena_height);
        let center = arena.center();

        let hunter = Ship::hunter(
            center + Vec2::new(50.0, 0.0),
            screen_orientation(HUNTER_START_DEGREES),
            &settings.hunter,
            PREY_ID,
        );
        let prey = Ship::prey(
            center + Vec2::new(250.0, 300.0),
            screen_orientation(PREY_START_DEGREES),
            &settings.prey,
        );

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            drag: settings.drag,
            catch_distance: settings.catch_distance,
            time_ticks: 0,
            catches: 0,
            ships: vec![hunter, prey],
            events: Vec::new(),
        }
    }

    /// Index of a ship in `ships`
    pub fn index_of(&self, id: ShipId) -> Option<usize> {
        self.ships.binary_search_by_key(&id, |s| s.id).ok()
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.index_of(id).map(|i| &self.ships[i])
    }

    pub fn ship_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.index_of(id).map(move |i| &mut self.ships[i])
    }

    /// Add a ship, keeping id order. Replaces any ship with the same id.
    pub fn insert_ship(&mut self, ship: Ship) {
        match self.ships.binary_search_by_key(&ship.id, |s| s.id) {
            Ok(i) => self.ships[i] = ship,
            Err(i) => self.ships.insert(i, ship),
        }
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}
