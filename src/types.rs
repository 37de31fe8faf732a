//! Core simulation types and scene constants.
//!
//! All positions are in scene units with the scene origin at the center of
//! the spawn sphere. Vectors use f64 (`DVec3`) so that long sessions do not
//! accumulate f32 rounding in the integrated bodies.

use std::f64::consts::FRAC_PI_2;

use bevy::math::{DVec2, DVec3, Vec2};
use bevy::prelude::*;
use rand::Rng;

/// Radius of the sphere new free bodies are spawned inside.
pub const SCENE_RADIUS: f64 = 2000.0;

/// Free bodies further than `SCENE_RADIUS * BOUNDS_FACTOR` from the origin are recycled.
pub const BOUNDS_FACTOR: f64 = 1.5;

/// Fixed planet position (focus of every orbit and the gravity field).
pub const PLANET_POSITION: DVec3 = DVec3::new(0.0, -500.0, -1500.0);

/// Distance from the planet center at which a free body counts as an impact.
pub const PLANET_COLLISION_RADIUS: f64 = 420.0;

/// Distance from the rocket at which a free body counts as a hit.
pub const PLAYER_COLLISION_RADIUS: f64 = 20.0;

/// Rocket starting position.
pub const PLAYER_START: DVec3 = DVec3::new(0.0, 0.0, 500.0);

/// World-space distance covered by a pointer at the edge of the viewport.
pub const POINTER_REACH: f64 = 500.0;

/// Fraction of the remaining distance to the target covered per tick at speed 1.
pub const CHASE_RATE: f64 = 0.05;

/// Planet spin per tick at speed 1, radians (x, y, z).
pub const PLANET_SPIN: DVec3 = DVec3::new(0.0005, 0.001, 0.0);

/// Per-axis rotation added to every comet each tick.
pub const COMET_TUMBLE: DVec3 = DVec3::new(0.02, 0.02, 0.0);

/// Asteroid rotation speeds are drawn from `[-ASTEROID_SPIN_LIMIT, ASTEROID_SPIN_LIMIT]` per axis.
pub const ASTEROID_SPIN_LIMIT: f64 = 0.01;

/// Closed interval of speeds a body or particle may be launched with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl SpeedRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw a speed uniformly from the range.
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        self.min + rng.random::<f64>() * (self.max - self.min)
    }

    pub fn contains(&self, speed: f64) -> bool {
        (self.min..=self.max).contains(&speed)
    }

    /// A range is usable when both bounds are finite, non-negative and ordered.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max
    }
}

/// The two flavours of free-flying body.
///
/// They share every field and differ only in how they are respawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Asteroid,
    Comet,
}

impl BodyKind {
    pub fn label(self) -> &'static str {
        match self {
            BodyKind::Asteroid => "asteroid",
            BodyKind::Comet => "comet",
        }
    }
}

/// An asteroid or comet whose position integrates from its velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct FreeBody {
    pub position: DVec3,
    pub velocity: DVec3,
    /// Euler angles (x, y, z) in radians.
    pub rotation: DVec3,
    /// Rotation added per tick.
    pub rotation_speed: DVec3,
    pub kind: BodyKind,
}

impl FreeBody {
    /// A body at rest at the origin. Pools reset it before first use.
    pub fn at_rest(kind: BodyKind) -> Self {
        Self {
            position: DVec3::ZERO,
            velocity: DVec3::ZERO,
            rotation: DVec3::ZERO,
            rotation_speed: DVec3::ZERO,
            kind,
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Whether position and velocity are free of NaN and infinities.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// The cursor-driven rocket.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerBody {
    pub position: DVec3,
    /// Rotation about z in radians. Zero points the nose along +y.
    pub heading: f64,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self {
            position: PLAYER_START,
            heading: FRAC_PI_2,
        }
    }
}

impl PlayerBody {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..default()
        }
    }

    /// Unit vector pointing out of the engine nozzle, in the x/y plane.
    pub fn exhaust_direction(&self) -> DVec3 {
        let facing = self.heading + FRAC_PI_2;
        DVec3::new(-facing.cos(), -facing.sin(), 0.0)
    }

    /// Move toward `target` (x/y only) and turn to face the approach direction.
    ///
    /// `rate` is the fraction of the remaining distance covered this tick.
    pub fn chase(&mut self, target: DVec2, rate: f64) {
        let dx = target.x - self.position.x;
        let dy = target.y - self.position.y;

        self.heading = dy.atan2(dx) - FRAC_PI_2;
        self.position.x += dx * rate;
        self.position.y += dy * rate;
    }
}

/// The single gravitating mass at the center of the orbits.
#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    pub position: DVec3,
    /// Impact radius used by collision detection.
    pub radius: f64,
    /// Euler angles (x, y, z) of the visual spin.
    pub rotation: DVec3,
    /// Simulated seconds fed to the animated surface.
    pub surface_time: f64,
}

impl Planet {
    pub fn new(position: DVec3, radius: f64) -> Self {
        Self {
            position,
            radius,
            rotation: DVec3::ZERO,
            surface_time: 0.0,
        }
    }

    /// Advance the visual spin and the surface clock.
    pub fn spin(&mut self, speed: f64, elapsed: f64) {
        self.rotation += PLANET_SPIN * speed;
        self.surface_time = elapsed;
    }
}

impl Default for Planet {
    fn default() -> Self {
        Self::new(PLANET_POSITION, PLANET_COLLISION_RADIUS)
    }
}

/// Latest pointer position in normalized device coordinates, `[-1, 1]` on both axes.
///
/// Written by input handling whenever the cursor moves and read once at the
/// start of each tick. Only the newest value matters.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTarget(pub DVec2);

impl PointerTarget {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)))
    }

    /// Convert a cursor position in window pixels (origin top-left) to
    /// normalized coordinates with +y up.
    pub fn from_screen(cursor: Vec2, window_size: Vec2) -> Self {
        if window_size.x <= 0.0 || window_size.y <= 0.0 {
            return Self::default();
        }
        let x = (cursor.x / window_size.x) as f64 * 2.0 - 1.0;
        let y = -(cursor.y / window_size.y) as f64 * 2.0 + 1.0;
        Self::new(x, y)
    }

    /// World-space chase target for the rocket.
    pub fn world_target(&self, reach: f64) -> DVec2 {
        self.0 * reach
    }
}
