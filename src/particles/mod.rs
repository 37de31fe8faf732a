//! Particle effects driven by the simulation: the rocket's exhaust trail
//! and the debris bursts spawned by collisions.

mod explosion;
mod thruster;

pub use explosion::{Explosion, ExplosionConfig, ExplosionParticle, ExplosionSet};
pub use thruster::{ThrusterConfig, ThrusterParticle, ThrusterTrail};
