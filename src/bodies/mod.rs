//! Pooled asteroids and comets.
//!
//! Free bodies live in a fixed arena created once at startup. A body that
//! leaves the scene or is destroyed in a collision is not removed; its slot
//! is overwritten with a fresh random state, so the pool never reallocates
//! and peak memory is set by the pool sizes alone.

use std::f64::consts::{PI, TAU};
use std::ops::Range;

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::Rng;

use crate::types::{BodyKind, FreeBody, SpeedRange};

#[cfg(test)]
mod proptest_bodies;

/// Random spawn parameters and the recycle boundary for free bodies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnParams {
    /// Bodies spawn uniformly inside a sphere of this radius.
    pub scene_radius: f64,
    /// Bodies beyond `scene_radius * bounds_factor` are recycled.
    pub bounds_factor: f64,
    pub asteroid_speed: SpeedRange,
    pub comet_speed: SpeedRange,
    /// Per-axis asteroid spin is drawn from `[-limit, limit]`.
    pub asteroid_spin_limit: f64,
    /// Fixed per-tick comet rotation.
    pub comet_tumble: DVec3,
}

impl SpawnParams {
    pub fn speed_range(&self, kind: BodyKind) -> SpeedRange {
        match kind {
            BodyKind::Asteroid => self.asteroid_speed,
            BodyKind::Comet => self.comet_speed,
        }
    }

    /// Distance from the origin past which bodies are recycled.
    pub fn bounds_radius(&self) -> f64 {
        self.scene_radius * self.bounds_factor
    }

    /// Overwrite every field of `body` with a fresh random state.
    ///
    /// The kind is kept; everything else is redrawn.
    pub fn reset_body(&self, body: &mut FreeBody, rng: &mut impl Rng) {
        let speed = self.speed_range(body.kind).sample(rng);

        body.position = random_point_in_sphere(self.scene_radius, rng);
        body.velocity = random_unit_vector(rng) * speed;
        body.rotation = DVec3::new(
            rng.random::<f64>() * PI,
            rng.random::<f64>() * PI,
            rng.random::<f64>() * PI,
        );
        body.rotation_speed = match body.kind {
            BodyKind::Asteroid => {
                let limit = self.asteroid_spin_limit;
                DVec3::new(
                    rng.random::<f64>() * 2.0 * limit - limit,
                    rng.random::<f64>() * 2.0 * limit - limit,
                    rng.random::<f64>() * 2.0 * limit - limit,
                )
            }
            BodyKind::Comet => self.comet_tumble,
        };
    }

    /// Whether the body has drifted past the recycle boundary.
    pub fn check_bounds(&self, body: &FreeBody) -> bool {
        body.position.length() > self.bounds_radius()
    }
}

/// Uniformly distributed point inside a sphere centered on the origin.
///
/// The cube root on the radius compensates for volume growing with r³;
/// without it points would cluster at the center.
pub fn random_point_in_sphere(radius: f64, rng: &mut impl Rng) -> DVec3 {
    let direction = random_unit_vector(rng);
    let r = radius * rng.random::<f64>().cbrt();
    direction * r
}

/// Uniformly distributed direction on the unit sphere.
pub fn random_unit_vector(rng: &mut impl Rng) -> DVec3 {
    let phi = (2.0 * rng.random::<f64>() - 1.0).acos();
    let theta = TAU * rng.random::<f64>();
    let (sin_phi, cos_phi) = phi.sin_cos();
    DVec3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}

/// Arena of free bodies, indexed by slot.
#[derive(Clone, Debug)]
pub struct BodyRegistry {
    bodies: Vec<FreeBody>,
    spawn: SpawnParams,
}

impl BodyRegistry {
    pub fn new(spawn: SpawnParams) -> Self {
        Self {
            bodies: Vec::new(),
            spawn,
        }
    }

    /// Create `count` bodies of `kind`, each with a fresh random state.
    ///
    /// Only called while building the world; the pool size is fixed afterwards.
    ///
    /// # Returns
    /// The slots occupied by the new bodies.
    pub fn spawn_all(&mut self, count: usize, kind: BodyKind, rng: &mut impl Rng) -> Range<usize> {
        let start = self.bodies.len();
        self.bodies.reserve_exact(count);

        for _ in 0..count {
            let mut body = FreeBody::at_rest(kind);
            self.spawn.reset_body(&mut body, rng);
            self.bodies.push(body);
        }

        info!("Spawned {} {}s", count, kind.label());
        start..self.bodies.len()
    }

    /// Recycle the body in `slot` in place.
    pub fn reset_slot(&mut self, slot: usize, rng: &mut impl Rng) {
        self.spawn.reset_body(&mut self.bodies[slot], rng);
    }

    /// Recycle the body in `slot` if it has left the scene.
    ///
    /// # Returns
    /// Whether the body was recycled.
    pub fn recycle_if_out_of_bounds(&mut self, slot: usize, rng: &mut impl Rng) -> bool {
        if self.spawn.check_bounds(&self.bodies[slot]) {
            self.reset_slot(slot, rng);
            true
        } else {
            false
        }
    }

    pub fn bodies(&self) -> &[FreeBody] {
        &self.bodies
    }

    /// Mutable access to the pool contents. The slice length cannot change.
    pub fn bodies_mut(&mut self) -> &mut [FreeBody] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of bodies of the given kind.
    pub fn count(&self, kind: BodyKind) -> usize {
        self.bodies.iter().filter(|body| body.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_all_fills_consecutive_slots() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut registry = BodyRegistry::new(fixtures::spawn_params());

        let asteroids = registry.spawn_all(100, BodyKind::Asteroid, &mut rng);
        let comets = registry.spawn_all(200, BodyKind::Comet, &mut rng);

        assert_eq!(asteroids, 0..100);
        assert_eq!(comets, 100..300);
        assert_eq!(registry.len(), 300);
        assert_eq!(registry.count(BodyKind::Asteroid), 100);
        assert_eq!(registry.count(BodyKind::Comet), 200);
    }

    #[test]
    fn test_reset_keeps_kind_and_stays_in_scene() {
        let params = fixtures::spawn_params();
        let mut rng = StdRng::seed_from_u64(2);

        for kind in [BodyKind::Asteroid, BodyKind::Comet] {
            let mut body = FreeBody::at_rest(kind);
            for _ in 0..500 {
                params.reset_body(&mut body, &mut rng);
                assert_eq!(body.kind, kind);
                assert!(body.position.length() <= params.scene_radius);
                let range = params.speed_range(kind);
                let speed = body.speed();
                assert!(
                    speed >= range.min - 1e-9 && speed <= range.max + 1e-9,
                    "{} speed {} outside [{}, {}]",
                    kind.label(),
                    speed,
                    range.min,
                    range.max
                );
            }
        }
    }

    #[test]
    fn test_comets_tumble_at_fixed_rate() {
        let params = fixtures::spawn_params();
        let mut rng = StdRng::seed_from_u64(3);
        let mut comet = FreeBody::at_rest(BodyKind::Comet);

        params.reset_body(&mut comet, &mut rng);
        assert_eq!(comet.rotation_speed, params.comet_tumble);
    }

    #[test]
    fn test_asteroid_spin_within_limit() {
        let params = fixtures::spawn_params();
        let mut rng = StdRng::seed_from_u64(4);
        let mut asteroid = FreeBody::at_rest(BodyKind::Asteroid);

        for _ in 0..200 {
            params.reset_body(&mut asteroid, &mut rng);
            let spin = asteroid.rotation_speed.abs();
            assert!(spin.max_element() <= params.asteroid_spin_limit);
            assert!(asteroid.rotation.min_element() >= 0.0);
            assert!(asteroid.rotation.max_element() < PI);
        }
    }

    #[test]
    fn test_check_bounds_threshold() {
        let params = fixtures::spawn_params();
        let mut body = FreeBody::at_rest(BodyKind::Asteroid);

        body.position = DVec3::new(0.0, 0.0, 3000.0);
        assert!(!params.check_bounds(&body), "exactly on the boundary stays");

        body.position = DVec3::new(0.0, 0.0, 3000.001);
        assert!(params.check_bounds(&body));

        body.position = DVec3::new(-2000.0, 2000.0, 1500.0);
        assert!(params.check_bounds(&body));
    }

    #[test]
    fn test_recycle_overwrites_in_place() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut registry = BodyRegistry::new(fixtures::spawn_params());
        registry.spawn_all(3, BodyKind::Asteroid, &mut rng);

        registry.bodies_mut()[1].position = DVec3::new(0.0, 0.0, -8000.0);
        let untouched = registry.bodies()[0].clone();

        assert!(!registry.recycle_if_out_of_bounds(0, &mut rng));
        assert!(registry.recycle_if_out_of_bounds(1, &mut rng));

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.bodies()[0], untouched);
        assert!(registry.bodies()[1].position.length() <= 2000.0);
    }

    #[test]
    fn test_unit_vectors_are_unit() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..1000 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sphere_points_fill_volume() {
        // Half the volume of a sphere lies beyond r = R / cbrt(2).
        let mut rng = StdRng::seed_from_u64(7);
        let radius = 2000.0;
        let shell = radius / 2f64.cbrt();
        let samples = 20_000;

        let outer = (0..samples)
            .map(|_| random_point_in_sphere(radius, &mut rng))
            .filter(|p| p.length() > shell)
            .count();

        let fraction = outer as f64 / samples as f64;
        assert!((fraction - 0.5).abs() < 0.02, "outer fraction {}", fraction);
    }
}
