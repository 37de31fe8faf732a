//! Finite-lifetime explosion bursts.
//!
//! Each explosion owns its particle buffer. Particles fly outward until
//! their individual lifetime runs out and then stay where they are; the
//! whole burst fades linearly and is dropped once it reaches `max_age`.

use std::f64::consts::TAU;

use bevy::math::DVec3;
use rand::Rng;

use crate::types::SpeedRange;

/// Shape and duration of an explosion burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplosionConfig {
    pub particle_count: usize,
    /// Seconds until the burst is removed.
    pub max_age: f64,
    /// Launch speed of each particle, units per second.
    pub speed: SpeedRange,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            max_age: 5.0,
            speed: SpeedRange::new(50.0, 100.0),
        }
    }
}

/// One debris particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplosionParticle {
    pub position: DVec3,
    pub velocity: DVec3,
    /// Age at which this particle stops moving, seconds.
    pub lifetime: f64,
}

/// A single burst of debris.
#[derive(Clone, Debug)]
pub struct Explosion {
    /// Stable identifier, unique for the session.
    pub id: u64,
    pub origin: DVec3,
    particles: Vec<ExplosionParticle>,
    age: f64,
    max_age: f64,
}

impl Explosion {
    /// Create a burst centered on `origin`.
    pub fn new(id: u64, origin: DVec3, config: &ExplosionConfig, rng: &mut impl Rng) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| {
                let speed = config.speed.sample(rng);
                let azimuth = rng.random::<f64>() * TAU;
                let polar = rng.random::<f64>() * TAU;
                let (sin_polar, cos_polar) = polar.sin_cos();

                ExplosionParticle {
                    position: origin,
                    velocity: DVec3::new(
                        azimuth.cos() * sin_polar,
                        azimuth.sin() * sin_polar,
                        cos_polar,
                    ) * speed,
                    lifetime: rng.random::<f64>() * config.max_age,
                }
            })
            .collect();

        Self {
            id,
            origin,
            particles,
            age: 0.0,
            max_age: config.max_age,
        }
    }

    /// Age the burst by `delta` seconds and move the particles still alive.
    ///
    /// # Returns
    /// `false` once the burst has reached its maximum age and should be removed.
    pub fn update(&mut self, delta: f64) -> bool {
        debug_assert!(delta >= 0.0, "explosion age must not run backwards");
        self.age += delta;

        for particle in &mut self.particles {
            if self.age < particle.lifetime {
                particle.position += particle.velocity * delta;
            }
        }

        self.age < self.max_age
    }

    /// Linear fade from 1 at creation to 0 at `max_age`.
    pub fn opacity(&self) -> f64 {
        (1.0 - self.age / self.max_age).clamp(0.0, 1.0)
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn max_age(&self) -> f64 {
        self.max_age
    }

    pub fn is_finished(&self) -> bool {
        self.age >= self.max_age
    }

    pub fn particles(&self) -> &[ExplosionParticle] {
        &self.particles
    }
}

/// All explosions currently playing.
///
/// Grows by one per collision and prunes itself on every update, so its
/// size stays bounded by the collision rate times `max_age`.
#[derive(Clone, Debug, Default)]
pub struct ExplosionSet {
    active: Vec<Explosion>,
    next_id: u64,
    config: ExplosionConfig,
}

impl ExplosionSet {
    pub fn new(config: ExplosionConfig) -> Self {
        Self {
            active: Vec::new(),
            next_id: 0,
            config,
        }
    }

    /// Start a new burst at `origin`.
    ///
    /// # Returns
    /// The id of the new explosion.
    pub fn spawn(&mut self, origin: DVec3, rng: &mut impl Rng) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Explosion::new(id, origin, &self.config, rng));
        id
    }

    /// Age every burst and drop the finished ones.
    ///
    /// # Returns
    /// Number of explosions removed.
    pub fn update(&mut self, delta: f64) -> usize {
        let before = self.active.len();
        self.active.retain_mut(|explosion| explosion.update(delta));
        before - self.active.len()
    }

    pub fn active(&self) -> &[Explosion] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
