//! The simulation world: every pool and singleton the tick mutates.
//!
//! `SimulationWorld::step` runs one tick in a fixed order:
//!
//! 1. rocket chases the pointer target
//! 2. orbiting bodies advance along their orbits
//! 3. exhaust particles drift and relaunch
//! 4. each free body: gravity, integration, rotation, bounds, collisions
//! 5. explosions age and prune
//! 6. the control parameters are latched for the next tick
//!
//! Gravity must precede integration and collisions must see the integrated
//! position of the same tick. Nothing here draws; renderers read the world
//! through [`SimulationWorld::publish`].

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bodies::BodyRegistry;
use crate::collision::{CollisionDetector, CollisionRecord};
use crate::config::{ConfigError, ControlParams, SimulationConfig};
use crate::orbit::OrbitingBody;
use crate::particles::{Explosion, ExplosionSet, ThrusterParticle, ThrusterTrail};
use crate::physics::{GravityField, advance_free_body};
use crate::types::{BodyKind, FreeBody, Planet, PlayerBody, PointerTarget};

/// Per-tick inputs sampled from the collaborators.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous tick.
    pub delta: f64,
    pub pointer: PointerTarget,
    /// Control values to use from the next tick on.
    pub params: ControlParams,
}

/// What happened during the most recent tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Index of the tick, starting at 1.
    pub tick: u64,
    pub delta: f64,
    pub collisions: Vec<CollisionRecord>,
    /// Slots recycled for leaving the scene.
    pub out_of_bounds: Vec<usize>,
    /// Explosions that finished and were removed.
    pub explosions_finished: usize,
    /// Exhaust particles relaunched at the nozzle.
    pub thruster_relaunched: usize,
}

/// Identifies a renderable object across ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderId {
    Planet,
    /// Index into the orbiting bodies, in config order.
    Orbiting(usize),
    Player,
    FreeBody { kind: BodyKind, slot: usize },
    Thruster,
    /// Explosion by its session-unique id.
    Explosion(u64),
}

/// Receiver for the per-tick state handed to a renderer.
///
/// The simulation never draws; it pushes transforms, point clouds and
/// opacities through this trait and the renderer decides what to do.
pub trait Renderable {
    /// Position and Euler rotation (x, y, z) of a solid object.
    fn set_transform(&mut self, id: RenderId, position: DVec3, rotation: DVec3);

    /// Point cloud of a particle system with its overall opacity.
    fn set_points(&mut self, id: RenderId, points: impl Iterator<Item = DVec3>, opacity: f64);
}

/// Owner of all simulation state.
#[derive(Resource, Debug)]
pub struct SimulationWorld {
    config: SimulationConfig,
    planet: Planet,
    player: PlayerBody,
    orbiting: Vec<OrbitingBody>,
    bodies: BodyRegistry,
    thruster: ThrusterTrail,
    explosions: ExplosionSet,
    gravity: GravityField,
    collisions: CollisionDetector,
    params: ControlParams,
    /// Simulated seconds; excludes time spent paused.
    elapsed: f64,
    report: TickReport,
    rng: StdRng,
}

impl SimulationWorld {
    /// Validate `config` and build a world from it.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Build a world from the default scene.
    pub fn with_defaults() -> Self {
        Self::build(SimulationConfig::default())
    }

    fn build(config: SimulationConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let planet = Planet::new(config.planet_position, config.collision.planet_radius);
        let orbiting = config
            .orbits
            .iter()
            .map(|preset| OrbitingBody::from_preset(preset, planet.position))
            .collect();

        let mut bodies = BodyRegistry::new(config.spawn_params());
        bodies.spawn_all(config.asteroid_count, BodyKind::Asteroid, &mut rng);
        bodies.spawn_all(config.comet_count, BodyKind::Comet, &mut rng);

        let thruster = ThrusterTrail::new(config.thruster, &mut rng);

        info!(
            "Simulation world ready: {} free bodies, {} orbiting bodies, seed {:?}",
            bodies.len(),
            config.orbits.len(),
            config.seed,
        );

        Self {
            planet,
            player: PlayerBody::at(config.player_start),
            orbiting,
            bodies,
            thruster,
            explosions: ExplosionSet::new(config.explosion),
            gravity: config.gravity,
            collisions: config.collision,
            params: ControlParams::default(),
            elapsed: 0.0,
            report: TickReport::default(),
            rng,
            config,
        }
    }

    /// Run one tick.
    ///
    /// # Returns
    /// A summary of the tick, also available afterwards from [`Self::last_report`].
    pub fn step(&mut self, input: &FrameInput) -> &TickReport {
        let delta = input.delta.max(0.0);
        debug_assert!(input.delta.is_finite(), "frame delta must be finite");

        let mut report = TickReport {
            tick: self.report.tick + 1,
            delta,
            ..default()
        };

        self.elapsed += delta;

        // Rocket and planet use the multipliers latched at the end of the previous tick.
        let target = input.pointer.world_target(self.config.pointer_reach);
        self.player.chase(target, self.config.chase_rate * self.params.speed);
        self.planet.spin(self.params.speed, self.elapsed);

        for body in &mut self.orbiting {
            body.advance(self.planet.position, delta);
        }

        report.thruster_relaunched = self.thruster.update(&self.player, &mut self.rng);

        for slot in 0..self.bodies.len() {
            self.step_free_body(slot, delta, &mut report);
        }

        report.explosions_finished = self.explosions.update(delta);

        self.params = input.params;
        self.report = report;
        &self.report
    }

    /// Gravity, integration, bounds and collisions for one pooled body.
    fn step_free_body(&mut self, slot: usize, delta: f64, report: &mut TickReport) {
        let body = &mut self.bodies.bodies_mut()[slot];
        advance_free_body(body, &self.gravity, self.planet.position, delta);
        debug_assert!(body.is_finite(), "free body {} became non-finite", slot);

        if self.bodies.recycle_if_out_of_bounds(slot, &mut self.rng) {
            debug!(
                "Recycled {} in slot {} after it left the scene",
                self.bodies.bodies()[slot].kind.label(),
                slot
            );
            report.out_of_bounds.push(slot);
        }

        let body = &self.bodies.bodies()[slot];
        let Some(target) = self
            .collisions
            .check(self.player.position, self.planet.position, body.position)
        else {
            return;
        };

        report.collisions.push(CollisionRecord {
            slot,
            kind: body.kind,
            target,
            position: body.position,
            impact_speed: body.speed(),
        });
        self.explosions.spawn(body.position, &mut self.rng);
        self.bodies.reset_slot(slot, &mut self.rng);
    }

    /// Hand the current state to a renderer.
    pub fn publish<R: Renderable>(&self, target: &mut R) {
        target.set_transform(RenderId::Planet, self.planet.position, self.planet.rotation);

        for (index, body) in self.orbiting.iter().enumerate() {
            target.set_transform(RenderId::Orbiting(index), body.position, DVec3::ZERO);
        }

        target.set_transform(
            RenderId::Player,
            self.player.position,
            DVec3::new(0.0, 0.0, self.player.heading),
        );

        for (slot, body) in self.bodies.bodies().iter().enumerate() {
            target.set_transform(
                RenderId::FreeBody { kind: body.kind, slot },
                body.position,
                body.rotation,
            );
        }

        target.set_points(
            RenderId::Thruster,
            self.thruster.particles().iter().map(|p| p.position),
            1.0,
        );

        for explosion in self.explosions.active() {
            target.set_points(
                RenderId::Explosion(explosion.id),
                explosion.particles().iter().map(|p| p.position),
                explosion.opacity(),
            );
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    /// Direct access to the rocket, for scripted placement.
    pub fn player_mut(&mut self) -> &mut PlayerBody {
        &mut self.player
    }

    pub fn orbiting_bodies(&self) -> &[OrbitingBody] {
        &self.orbiting
    }

    pub fn free_bodies(&self) -> &[FreeBody] {
        self.bodies.bodies()
    }

    /// Direct access to the body pool contents, for scripted placement.
    pub fn free_bodies_mut(&mut self) -> &mut [FreeBody] {
        self.bodies.bodies_mut()
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.bodies
    }

    pub fn thruster_particles(&self) -> &[ThrusterParticle] {
        self.thruster.particles()
    }

    pub fn explosions(&self) -> &[Explosion] {
        self.explosions.active()
    }

    pub fn params(&self) -> &ControlParams {
        &self.params
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn last_report(&self) -> &TickReport {
        &self.report
    }
}
