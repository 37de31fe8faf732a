//! Continuous exhaust trail behind the rocket.
//!
//! A fixed pool of particles drifts with constant per-particle velocities.
//! Any particle that strays too far from the rocket is moved back to the
//! nozzle and relaunched along the exhaust direction, so the pool reads as
//! an endless plume that follows the rocket around.

use bevy::math::DVec3;
use rand::Rng;

use crate::types::PlayerBody;

/// Sizing and geometry of the exhaust plume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThrusterConfig {
    pub particle_count: usize,
    /// Particles further than this from the rocket are relaunched.
    pub reset_distance: f64,
    /// Distance behind the rocket center where particles are relaunched.
    pub nozzle_offset: f64,
}

impl Default for ThrusterConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            reset_distance: 50.0,
            nozzle_offset: 15.0,
        }
    }
}

/// One exhaust particle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThrusterParticle {
    pub position: DVec3,
    /// Displacement per tick.
    pub velocity: DVec3,
}

/// The rocket's exhaust plume.
#[derive(Clone, Debug)]
pub struct ThrusterTrail {
    particles: Vec<ThrusterParticle>,
    config: ThrusterConfig,
}

impl ThrusterTrail {
    /// Create the pool with every particle at the origin drifting slowly backward.
    pub fn new(config: ThrusterConfig, rng: &mut impl Rng) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| ThrusterParticle {
                position: DVec3::ZERO,
                velocity: DVec3::new(
                    (rng.random::<f64>() - 0.5) * 0.2,
                    (rng.random::<f64>() - 0.5) * 0.2,
                    -rng.random::<f64>() * 0.5 - 0.1,
                ),
            })
            .collect();

        Self { particles, config }
    }

    /// Move every particle one tick and relaunch the ones that strayed.
    ///
    /// Displacement is per tick, not per second.
    ///
    /// # Returns
    /// Number of particles relaunched this tick.
    pub fn update(&mut self, player: &PlayerBody, rng: &mut impl Rng) -> usize {
        let mut relaunched = 0;

        for particle in &mut self.particles {
            particle.position += particle.velocity;

            if particle.position.distance(player.position) > self.config.reset_distance {
                relaunch(particle, player, self.config.nozzle_offset, rng);
                relaunched += 1;
            }
        }

        relaunched
    }

    pub fn particles(&self) -> &[ThrusterParticle] {
        &self.particles
    }
}

/// Place a particle at the nozzle and send it out along the exhaust direction.
fn relaunch(
    particle: &mut ThrusterParticle,
    player: &PlayerBody,
    nozzle_offset: f64,
    rng: &mut impl Rng,
) {
    let exhaust = player.exhaust_direction();

    particle.position = DVec3::new(
        player.position.x + exhaust.x * nozzle_offset,
        player.position.y + exhaust.y * nozzle_offset,
        player.position.z,
    );
    particle.velocity = DVec3::new(
        exhaust.x * (rng.random::<f64>() * 2.0 + 1.0),
        exhaust.y * (rng.random::<f64>() * 2.0 + 1.0),
        -rng.random::<f64>() * 0.5,
    );
}
