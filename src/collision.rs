//! Collision detection between free bodies and the rocket or planet.
//!
//! Checks run once per body per tick, after the body has been integrated.
//! A hit spawns an explosion where the body was and recycles the body.
//! Each body can be hit at most once per tick; the rocket is checked first.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::types::{BodyKind, PLANET_COLLISION_RADIUS, PLAYER_COLLISION_RADIUS};

/// What a free body ran into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollisionTarget {
    /// The cursor-driven rocket.
    Player,
    /// The planet at the center of the scene.
    Planet,
}

/// Proximity thresholds for the two collision hazards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionDetector {
    pub player_radius: f64,
    pub planet_radius: f64,
}

impl Default for CollisionDetector {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_COLLISION_RADIUS,
            planet_radius: PLANET_COLLISION_RADIUS,
        }
    }
}

impl CollisionDetector {
    /// Check a body position against the rocket and the planet.
    ///
    /// # Returns
    /// The first hazard within range, rocket before planet, or `None`.
    pub fn check(&self, player: DVec3, planet: DVec3, body: DVec3) -> Option<CollisionTarget> {
        if player.distance(body) < self.player_radius {
            Some(CollisionTarget::Player)
        } else if planet.distance(body) < self.planet_radius {
            Some(CollisionTarget::Planet)
        } else {
            None
        }
    }
}

/// One collision resolved during a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionRecord {
    /// Pool slot of the body that was destroyed and recycled.
    pub slot: usize,
    pub kind: BodyKind,
    pub target: CollisionTarget,
    /// Where the body was when it was hit (the explosion origin).
    pub position: DVec3,
    /// Body speed at impact.
    pub impact_speed: f64,
}

/// Broadcast for every collision resolved by the simulation step.
///
/// Sent after the tick that produced it, for presentation and logging.
#[derive(Message, Clone, Debug)]
pub struct CollisionMessage(pub CollisionRecord);

/// Log collisions as they are reported.
pub fn log_collisions(mut messages: MessageReader<CollisionMessage>) {
    for CollisionMessage(record) in messages.read() {
        match record.target {
            CollisionTarget::Player => info!(
                "Rocket hit by {} (slot {}) at {:.1} units/s",
                record.kind.label(),
                record.slot,
                record.impact_speed,
            ),
            CollisionTarget::Planet => debug!(
                "{} (slot {}) impacted the planet at ({:.0}, {:.0}, {:.0})",
                record.kind.label(),
                record.slot,
                record.position.x,
                record.position.y,
                record.position.z,
            ),
        }
    }
}
