//! Simulation configuration and the live control parameters.
//!
//! `SimulationConfig` fixes the shape of a session (pool sizes, radii,
//! orbits) and is validated once when the world is built. `ControlParams`
//! holds the three slider-driven multipliers that may change every tick.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::bodies::SpawnParams;
use crate::collision::CollisionDetector;
use crate::orbit::OrbitPreset;
use crate::particles::{ExplosionConfig, ThrusterConfig};
use crate::physics::GravityField;
use crate::types::{
    ASTEROID_SPIN_LIMIT, BOUNDS_FACTOR, CHASE_RATE, COMET_TUMBLE, PLANET_COLLISION_RADIUS,
    PLANET_POSITION, PLAYER_COLLISION_RADIUS, PLAYER_START, POINTER_REACH, SCENE_RADIUS, SpeedRange,
};

/// Reasons a configuration is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("semi-major axis must be positive, got {0}")]
    InvalidSemiMajorAxis(f64),

    #[error("eccentricity must be in [0, 1), got {0}")]
    InvalidEccentricity(f64),

    #[error("orbital period must be positive, got {0}")]
    InvalidOrbitalPeriod(f64),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("bounds factor must be at least 1, got {0}")]
    InvalidBoundsFactor(f64),

    #[error("invalid {kind} speed range [{min}, {max}]")]
    InvalidSpeedRange { kind: &'static str, min: f64, max: f64 },

    #[error("{0} pool must hold at least one slot")]
    EmptyPool(&'static str),

    #[error("orbit '{name}' is invalid: {source}")]
    InvalidOrbit {
        name: &'static str,
        #[source]
        source: Box<ConfigError>,
    },
}

/// Everything that shapes a session.
///
/// Defaults reproduce the reference scene: a 2000-unit spawn sphere,
/// 100 asteroids, 200 comets, a satellite and a moon.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub scene_radius: f64,
    pub bounds_factor: f64,
    pub planet_position: DVec3,
    pub player_start: DVec3,
    /// World distance covered by the pointer at the viewport edge.
    pub pointer_reach: f64,
    /// Fraction of the remaining distance the rocket covers per tick at speed 1.
    pub chase_rate: f64,
    pub gravity: GravityField,
    pub collision: CollisionDetector,
    pub asteroid_count: usize,
    pub comet_count: usize,
    pub asteroid_speed: SpeedRange,
    pub comet_speed: SpeedRange,
    pub asteroid_spin_limit: f64,
    pub comet_tumble: DVec3,
    pub thruster: ThrusterConfig,
    pub explosion: ExplosionConfig,
    pub orbits: Vec<OrbitPreset>,
    /// Fixed RNG seed for reproducible sessions. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scene_radius: SCENE_RADIUS,
            bounds_factor: BOUNDS_FACTOR,
            planet_position: PLANET_POSITION,
            player_start: PLAYER_START,
            pointer_reach: POINTER_REACH,
            chase_rate: CHASE_RATE,
            gravity: GravityField::default(),
            collision: CollisionDetector {
                player_radius: PLAYER_COLLISION_RADIUS,
                planet_radius: PLANET_COLLISION_RADIUS,
            },
            asteroid_count: 100,
            comet_count: 200,
            asteroid_speed: SpeedRange::new(50.0, 100.0),
            comet_speed: SpeedRange::new(100.0, 200.0),
            asteroid_spin_limit: ASTEROID_SPIN_LIMIT,
            comet_tumble: COMET_TUMBLE,
            thruster: ThrusterConfig::default(),
            explosion: ExplosionConfig::default(),
            orbits: vec![OrbitPreset::satellite(), OrbitPreset::moon()],
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Default scene with a fixed RNG seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..default()
        }
    }

    /// Check every field for values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("scene radius", self.scene_radius)?;
        if !(self.bounds_factor.is_finite() && self.bounds_factor >= 1.0) {
            return Err(ConfigError::InvalidBoundsFactor(self.bounds_factor));
        }
        if !self.planet_position.is_finite() {
            return Err(ConfigError::NonFinite("planet position"));
        }
        if !self.player_start.is_finite() {
            return Err(ConfigError::NonFinite("player start"));
        }
        positive("pointer reach", self.pointer_reach)?;
        positive("chase rate", self.chase_rate)?;

        positive("gravity strength", self.gravity.strength)?;
        positive("influence radius", self.gravity.influence_radius)?;
        if !self.gravity.tangential_magnitude.is_finite() {
            return Err(ConfigError::NonFinite("tangential magnitude"));
        }
        positive("player collision radius", self.collision.player_radius)?;
        positive("planet collision radius", self.collision.planet_radius)?;

        if self.asteroid_count + self.comet_count == 0 {
            return Err(ConfigError::EmptyPool("free body"));
        }
        speed_range("asteroid", self.asteroid_speed)?;
        speed_range("comet", self.comet_speed)?;
        speed_range("explosion", self.explosion.speed)?;
        if !(self.asteroid_spin_limit.is_finite() && self.asteroid_spin_limit >= 0.0) {
            return Err(ConfigError::NonFinite("asteroid spin limit"));
        }
        if !self.comet_tumble.is_finite() {
            return Err(ConfigError::NonFinite("comet tumble"));
        }

        if self.thruster.particle_count == 0 {
            return Err(ConfigError::EmptyPool("thruster particle"));
        }
        positive("thruster reset distance", self.thruster.reset_distance)?;
        if !(self.thruster.nozzle_offset.is_finite() && self.thruster.nozzle_offset >= 0.0) {
            return Err(ConfigError::NonFinite("nozzle offset"));
        }
        if self.explosion.particle_count == 0 {
            return Err(ConfigError::EmptyPool("explosion particle"));
        }
        positive("explosion max age", self.explosion.max_age)?;

        for preset in &self.orbits {
            preset
                .params
                .validate()
                .map_err(|source| ConfigError::InvalidOrbit {
                    name: preset.name,
                    source: Box::new(source),
                })?;
        }

        Ok(())
    }

    /// Spawn ranges and recycle boundary for the body pools.
    pub fn spawn_params(&self) -> SpawnParams {
        SpawnParams {
            scene_radius: self.scene_radius,
            bounds_factor: self.bounds_factor,
            asteroid_speed: self.asteroid_speed,
            comet_speed: self.comet_speed,
            asteroid_spin_limit: self.asteroid_spin_limit,
            comet_tumble: self.comet_tumble,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn speed_range(kind: &'static str, range: SpeedRange) -> Result<(), ConfigError> {
    if range.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpeedRange {
            kind,
            min: range.min,
            max: range.max,
        })
    }
}

/// Upper end of a control slider.
pub const SLIDER_MAX: f64 = 100.0;

/// Slider position that maps to a multiplier of 1.
pub const SLIDER_DEFAULT: f64 = 50.0;

/// Slider-driven multipliers, read once per tick.
///
/// Only `speed` changes the simulation today (rocket chase and planet
/// spin). `density` and `frequency` are carried so the controls and any
/// renderer can read them.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ControlParams {
    pub speed: f64,
    pub density: f64,
    pub frequency: f64,
}

impl Default for ControlParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            density: 1.0,
            frequency: 1.0,
        }
    }
}

impl ControlParams {
    /// Map a slider position in `[0, SLIDER_MAX]` to a multiplier in `[0, 2]`.
    pub fn from_slider(value: f64) -> f64 {
        value.clamp(0.0, SLIDER_MAX) / SLIDER_DEFAULT
    }

    /// Slider position for a multiplier; inverse of [`Self::from_slider`].
    pub fn to_slider(multiplier: f64) -> f64 {
        (multiplier * SLIDER_DEFAULT).clamp(0.0, SLIDER_MAX)
    }

    pub fn from_sliders(speed: f64, density: f64, frequency: f64) -> Self {
        Self {
            speed: Self::from_slider(speed),
            density: Self::from_slider(density),
            frequency: Self::from_slider(frequency),
        }
    }
}
