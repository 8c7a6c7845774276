//! # Attractors
//!
//! Attractors is the core of a small 2D gravity toy: particles are spawned by the user and pulled
//! (or pushed) by point attractors the user places, under an inverse-square law.
//!
//! ## Goals
//!
//! The crate only contains the simulation and the mapping of user input to simulation objects.
//! Drawing, widgets and windowing belong to the host, which feeds input events in, calls
//! [`World::tick`](world::World::tick) once per frame and draws a [`Snapshot`](world::Snapshot).
//!
//! Forces are computed by brute force: every particle interacts with every attractor. Both counts
//! are driven by a user clicking around, so no space partitioning is needed. The `parallel`
//! feature enables [`World::par_tick`](world::World::par_tick), which splits the force computation
//! across threads with [rayon](https://github.com/rayon-rs/rayon).
//!
//! ## Using Attractors
//!
//! ### Driving a world directly
//!
//! ```
//! use attractors::prelude::*;
//!
//! let mut world = World::new();
//! world.spawn_attractor(Vector2::new(100.0, 0.0), 1.0, false);
//! world.spawn_particle(Vector2::ZERO, Vector2::ZERO, Appearance::default(), 0.0);
//!
//! world.tick();
//!
//! // The attractor, 100 units away with a strength of 10000, pulls with a force of 1.
//! assert_eq!(world.particles()[0].velocity, Vector2::new(1.0, 0.0));
//! ```
//!
//! ### Driving a world from input events
//!
//! A [`Controller`](input::Controller) turns mouse and keyboard events into
//! [`Commands`](world::Command) using the current slider values.
//!
//! ```
//! use attractors::prelude::*;
//! use rand::thread_rng;
//!
//! let mut world = World::new();
//! let mut controller = Controller::new(Controls {
//!     strength: 2.0,
//!     ..Default::default()
//! })?;
//! let mut rng = thread_rng();
//!
//! for event in [
//!     InputEvent::Start,
//!     InputEvent::KeyTyped { key: 'a', cursor: Vector2::new(400.0, 300.0) },
//!     InputEvent::MousePressed { position: Vector2::new(100.0, 100.0), on_canvas: true },
//!     InputEvent::MouseReleased { position: Vector2::new(150.0, 100.0) },
//! ] {
//!     controller.handle(event, &mut world, &mut rng);
//! }
//!
//! assert_eq!(world.attractors()[0].strength, 20_000.0);
//! assert_eq!(world.particles()[0].velocity, Vector2::new(1.0, 0.0));
//!
//! for _ in 0..60 {
//!     world.tick();
//! }
//! # Ok::<(), attractors::error::ConfigError>(())
//! ```
//!
//! ### Custom interactions
//!
//! Forces are defined by implementing [`Interaction`] on a [`Between`] pair. The built-in
//! [`InverseSquare`](force::InverseSquare) law is one such implementation, and the
//! [`sequential`] brute-force algorithm, and the `parallel` one behind the feature of the same
//! name, work with any of them.
//!
//! ```
//! use attractors::prelude::*;
//!
//! #[derive(Clone, Copy)]
//! struct Spring(f64);
//!
//! impl Interaction<Between<&Particle, &Attractor>> for Spring {
//!     type Output = Vector2;
//!
//!     fn compute(&mut self, pair: Between<&Particle, &Attractor>) -> Vector2 {
//!         let Between(particle, attractor) = pair;
//!         (attractor.position - particle.position) * self.0
//!     }
//! }
//!
//! let particle = Particle::at_rest(Vector2::ZERO);
//! let attractors = [
//!     Attractor::new(Vector2::new(1.0, 0.0), 0.0),
//!     Attractor::new(Vector2::new(0.0, 2.0), 0.0),
//! ];
//!
//! let force = Between(&particle, attractors.as_slice()).brute_force(Spring(0.5));
//! assert_eq!(force, Vector2::new(0.5, 1.0));
//! ```

#![warn(missing_docs)]

/// Point attractors.
pub mod attractor;
/// Simulation constants and control surface values.
///
/// Both structs list every option with an explicit default and are checked with `validate`.
pub mod config;
/// Error types.
///
/// The simulation itself cannot fail; values are only checked where they enter the system.
pub mod error;
/// Force laws between particles and attractors.
pub mod force;
/// Mapping of user input to commands.
///
/// The [`Controller`](input::Controller) keeps the part of the control surface the simulation
/// cares about: slider values, the "reverse attraction" mode, the started gate and a pending mouse
/// press. Widgets, text and page transitions stay with the host.
pub mod input;
/// Algorithms that use multiple CPU threads.
#[cfg(feature = "parallel")]
pub mod parallel;
/// Particles and their integration.
pub mod particle;
/// Algorithms that use one CPU thread.
pub mod sequential;
/// A world shared between threads.
pub mod shared;
/// Vector type and operations.
pub mod vector;
/// The collections of particles and attractors, and the simulation tick.
pub mod world;

/// Represents a pair of objects, which can be particles, attractors or slices of them, between
/// which an interaction is computed.
///
/// The first object is the one being affected by the second object.
#[derive(Clone, Copy, Debug)]
pub struct Between<S1, S2>(pub S1, pub S2);

/// Trait to compute an interaction between objects.
///
/// Implementing [`Interaction<Between<&A, &B>>`] for a type allows it to be used with the
/// brute-force algorithms of the [`sequential`] and `parallel` modules, which then compute the
/// interaction of an `A` with a slice of `B` or of a slice of `A` with a slice of `B`.
pub trait Interaction<Storage> {
    /// The computed interaction.
    type Output;

    /// Returns the interaction between the objects.
    fn compute(&mut self, storage: Storage) -> Self::Output;
}

/// Commonly used types, re-exported.
pub mod prelude {
    pub use crate::{
        attractor::Attractor,
        config::{Controls, SimulationConfig},
        force::InverseSquare,
        input::{Controller, InputEvent},
        particle::{Appearance, Particle},
        sequential::SequentialCompute,
        shared::SharedWorld,
        vector::{Vector, Vector2},
        world::{Command, Snapshot, World},
        Between, Interaction,
    };

    #[cfg(feature = "parallel")]
    pub use crate::parallel::ParallelCompute;
}
