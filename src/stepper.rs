//! Frame stepper: drives one simulation tick per rendered frame.
//!
//! The stepper samples its clock on every frame, running or not. While
//! paused the sampled delta is thrown away, so resuming never produces a
//! catch-up jump.

use bevy::prelude::*;

use crate::collision::{CollisionMessage, log_collisions};
use crate::config::{ControlParams, SimulationConfig};
use crate::time::{BevyClock, FrameClock};
use crate::types::PointerTarget;
use crate::world::{FrameInput, SimulationWorld};

/// Whether ticks advance the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepperState {
    #[default]
    Running,
    Paused,
}

/// Ordering of the per-frame work.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Pointer and keyboard sampling.
    Input,
    /// The world tick.
    Step,
    /// Drawing and UI that read the stepped world.
    Present,
}

/// Tick driver and pause switch.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct FrameStepper {
    state: StepperState,
    ticks: u64,
    /// Wall time discarded while paused, seconds.
    skipped: f64,
}

impl FrameStepper {
    /// Sample the clock and, unless paused, advance the world by the sampled delta.
    ///
    /// # Returns
    /// `true` if the world was stepped.
    pub fn tick(
        &mut self,
        world: &mut SimulationWorld,
        clock: &mut impl FrameClock,
        pointer: PointerTarget,
        params: ControlParams,
    ) -> bool {
        let delta = clock.delta_since_last_sample();

        if self.state == StepperState::Paused {
            self.skipped += delta;
            return false;
        }

        world.step(&FrameInput {
            delta,
            pointer,
            params,
        });
        self.ticks += 1;
        true
    }

    pub fn set_paused(&mut self, paused: bool) {
        let next = if paused {
            StepperState::Paused
        } else {
            StepperState::Running
        };
        if next != self.state {
            self.state = next;
            info!("Simulation {}", if paused { "paused" } else { "running" });
        }
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.is_paused());
    }

    pub fn is_paused(&self) -> bool {
        self.state == StepperState::Paused
    }

    pub fn state(&self) -> StepperState {
        self.state
    }

    /// Ticks that actually stepped the world.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn skipped_seconds(&self) -> f64 {
        self.skipped
    }
}

/// Plugin owning the simulation world and its per-frame tick.
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: SimulationConfig,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let world = match SimulationWorld::new(self.config.clone()) {
            Ok(world) => world,
            Err(err) => {
                warn!("Rejected simulation config ({}); using the default scene", err);
                SimulationWorld::with_defaults()
            }
        };

        app.insert_resource(world)
            .init_resource::<FrameStepper>()
            .init_resource::<PointerTarget>()
            .init_resource::<ControlParams>()
            .add_message::<CollisionMessage>()
            .configure_sets(
                Update,
                (SimulationSet::Input, SimulationSet::Step, SimulationSet::Present).chain(),
            )
            .add_systems(
                Update,
                (
                    advance_simulation.in_set(SimulationSet::Step),
                    log_collisions.after(SimulationSet::Step),
                ),
            );
    }
}

/// Run one tick and announce its collisions.
fn advance_simulation(
    time: Res<Time>,
    pointer: Res<PointerTarget>,
    params: Res<ControlParams>,
    mut stepper: ResMut<FrameStepper>,
    mut world: ResMut<SimulationWorld>,
    mut collisions: MessageWriter<CollisionMessage>,
) {
    let mut clock = BevyClock::new(&time);
    if !stepper.tick(&mut world, &mut clock, *pointer, *params) {
        return;
    }

    collisions.write_batch(
        world
            .last_report()
            .collisions
            .iter()
            .cloned()
            .map(CollisionMessage),
    );
}
