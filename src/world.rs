use crate::{
    attractor::Attractor,
    config::SimulationConfig,
    error::ConfigError,
    force::InverseSquare,
    particle::{Appearance, Particle},
    sequential::{BruteForce, Interactions, SequentialCompute},
    vector::Vector2,
    Between, Interaction,
};
use rand::Rng;

/// A request to change the content of a [`World`], raised by the control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Append a new particle.
    SpawnParticle {
        /// Initial position.
        position: Vector2,
        /// Initial velocity.
        velocity: Vector2,
        /// How the particle is drawn.
        appearance: Appearance,
        /// Friction coefficient, in `[0, 1)`.
        friction: f64,
    },
    /// Append a new attractor.
    SpawnAttractor {
        /// Fixed position.
        position: Vector2,
        /// Multiplier of the base strength.
        strength: f64,
        /// Whether the attractor repels instead.
        reversed: bool,
    },
    /// Remove every particle and attractor.
    Clear,
    /// Give every particle a new random velocity.
    Randomize,
}

/// A particle as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSprite {
    /// Where to draw the particle.
    pub position: Vector2,
    /// How to draw the particle.
    pub appearance: Appearance,
}

/// Read-only copy of everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Particles in creation order.
    pub particles: Vec<ParticleSprite>,
    /// Attractor positions in creation order.
    pub attractors: Vec<Vector2>,
}

/// Owner of every [`Particle`] and [`Attractor`] of the simulation.
///
/// Both collections keep creation order, which is also the draw order. Between two calls to
/// [`tick`](World::tick), the acceleration of every particle is zero.
#[derive(Debug, Clone, Default)]
pub struct World {
    particles: Vec<Particle>,
    attractors: Vec<Attractor>,
    config: SimulationConfig,
}

impl World {
    /// Creates an empty [`World`] using the default [`SimulationConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty [`World`] after validating the given configuration.
    pub fn with_config(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!("Creating world with {:?}", config);

        Ok(Self {
            particles: Vec::new(),
            attractors: Vec::new(),
            config,
        })
    }

    /// The configuration of this world.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Particles in creation order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Attractors in creation order.
    #[inline]
    pub fn attractors(&self) -> &[Attractor] {
        &self.attractors
    }

    /// Returns true if the world contains neither particles nor attractors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty() && self.attractors.is_empty()
    }

    /// Appends a particle with zero acceleration and the configured mass.
    pub fn spawn_particle(
        &mut self,
        position: Vector2,
        velocity: Vector2,
        appearance: Appearance,
        friction: f64,
    ) {
        log::trace!("Spawning particle at {} with velocity {}", position, velocity);

        self.particles.push(Particle::new(
            position,
            velocity,
            self.config.particle_mass,
            friction,
            appearance,
        ));
    }

    /// Appends an attractor of strength `base_strength * strength_multiplier`, negated if
    /// `reversed`.
    pub fn spawn_attractor(&mut self, position: Vector2, strength_multiplier: f64, reversed: bool) {
        let sign = if reversed { -1.0 } else { 1.0 };
        let strength = self.config.base_strength * strength_multiplier * sign;
        log::trace!("Spawning attractor at {} with strength {}", position, strength);

        self.attractors.push(Attractor::new(position, strength));
    }

    /// Removes every particle and attractor.
    pub fn clear(&mut self) {
        log::debug!(
            "Clearing {} particles and {} attractors",
            self.particles.len(),
            self.attractors.len()
        );

        self.particles.clear();
        self.attractors.clear();
    }

    /// Returns a velocity whose components are drawn uniformly from
    /// `[-random_speed, random_speed)`.
    #[inline]
    pub fn random_velocity<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2 {
        uniform_velocity(self.config.random_speed, rng)
    }

    /// Replaces the velocity of every particle with a random one.
    ///
    /// Nothing but velocities is touched.
    pub fn randomize_velocities<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        log::debug!("Randomizing {} particle velocities", self.particles.len());

        let speed = self.config.random_speed;
        for particle in &mut self.particles {
            particle.velocity = uniform_velocity(speed, rng);
        }
    }

    /// Applies a [`Command`].
    pub fn execute<R: Rng + ?Sized>(&mut self, command: Command, rng: &mut R) {
        match command {
            Command::SpawnParticle {
                position,
                velocity,
                appearance,
                friction,
            } => self.spawn_particle(position, velocity, appearance, friction),
            Command::SpawnAttractor {
                position,
                strength,
                reversed,
            } => self.spawn_attractor(position, strength, reversed),
            Command::Clear => self.clear(),
            Command::Randomize => self.randomize_velocities(rng),
        }
    }

    /// Advances the simulation by one frame.
    ///
    /// For each particle, the force of every attractor is applied in collection order, then the
    /// particle integrates. No particle reads another, so particle order does not matter.
    pub fn tick(&mut self) {
        let mut law = self.config.force_law();
        let attractors = self.attractors.as_slice();

        for particle in &mut self.particles {
            for attractor in attractors {
                let force = law.compute(Between(&*particle, attractor));
                particle.apply_force(force);
            }

            particle.integrate();
        }
    }

    /// Advances the simulation by one frame, computing forces on multiple threads.
    ///
    /// The net force of every particle is computed before any particle integrates. The result is
    /// the same as [`tick`](World::tick) up to floating-point rounding.
    #[cfg(feature = "parallel")]
    pub fn par_tick(&mut self) {
        use crate::parallel::ParallelCompute;
        use rayon::prelude::*;

        let law = self.config.force_law();
        let forces =
            Between(self.particles.as_slice(), self.attractors.as_slice()).par_brute_force(law);

        self.particles
            .par_iter_mut()
            .zip(forces)
            .for_each(|(particle, force)| {
                particle.apply_force(force);
                particle.integrate();
            });
    }

    /// Net force currently exerted on every particle, in particle order.
    #[inline]
    pub fn forces(
        &self,
    ) -> Interactions<'_, BruteForce<InverseSquare>, std::slice::Iter<'_, Particle>, Attractor> {
        Between(self.particles.as_slice(), self.attractors.as_slice())
            .brute_force(self.config.force_law())
    }

    /// Copies what a renderer needs to draw the current frame.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            particles: self
                .particles
                .iter()
                .map(|particle| ParticleSprite {
                    position: particle.position,
                    appearance: particle.appearance,
                })
                .collect(),
            attractors: self.attractors.iter().map(|attractor| attractor.position).collect(),
        }
    }
}

fn uniform_velocity<R: Rng + ?Sized>(speed: f64, rng: &mut R) -> Vector2 {
    Vector2::new(rng.gen_range(-speed..speed), rng.gen_range(-speed..speed))
}
