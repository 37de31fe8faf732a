//! Rocket Field - real-time orbital scene
//!
//! A library crate with the simulation core (orbits, gravity, body pools,
//! collisions, particles and the frame stepper) plus the Bevy plugins that
//! drive, draw and control it.

pub mod bodies;
pub mod camera;
pub mod collision;
pub mod config;
pub mod input;
pub mod orbit;
pub mod particles;
pub mod physics;
pub mod render;
pub mod stepper;
pub mod time;
pub mod types;
pub mod ui;
pub mod world;

#[cfg(test)]
pub mod test_utils;
