use crate::{
    attractor::Attractor,
    force::InverseSquare,
    vector::{Vector, Vector2},
    Between, Interaction,
};

/// Mass given to every particle unless configured otherwise.
pub const PARTICLE_MASS: f64 = 1.0;

/// Rendering parameters of a particle. The simulation never reads them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Colour parameter in `[0, 1]`.
    pub color: f64,
    /// Size parameter in `[0, 1]`.
    pub size: f64,
}

impl Default for Appearance {
    #[inline]
    fn default() -> Self {
        Self {
            color: 0.8,
            size: 0.8,
        }
    }
}

/// A point particle moved by the forces of [`Attractors`](Attractor).
///
/// Forces are accumulated with [`apply_force`](Particle::apply_force) and folded into the motion
/// once per tick by [`integrate`](Particle::integrate), which leaves the acceleration at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current location.
    pub position: Vector2,
    /// Displacement applied to the position every tick.
    pub velocity: Vector2,
    /// Accumulated acceleration of the current tick.
    pub acceleration: Vector2,
    /// Inertial mass, also used by the force law.
    pub mass: f64,
    /// Fraction of the velocity removed every tick, in `[0, 1)`.
    pub friction: f64,
    /// How the particle is drawn.
    pub appearance: Appearance,
}

impl Particle {
    /// Creates a new [`Particle`] with no accumulated acceleration.
    #[inline]
    pub fn new(
        position: Vector2,
        velocity: Vector2,
        mass: f64,
        friction: f64,
        appearance: Appearance,
    ) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2::ZERO,
            mass,
            friction,
            appearance,
        }
    }

    /// Creates a motionless, frictionless [`Particle`] of mass [`PARTICLE_MASS`].
    #[inline]
    pub fn at_rest(position: Vector2) -> Self {
        Self::new(
            position,
            Vector2::ZERO,
            PARTICLE_MASS,
            0.0,
            Appearance::default(),
        )
    }

    /// Accumulates `force / mass` into the acceleration.
    ///
    /// A massless particle cannot be accelerated and ignores the force.
    #[inline]
    pub fn apply_force(&mut self, force: Vector2) {
        if let Some(acceleration) = force.checked_div(self.mass) {
            self.acceleration += acceleration;
        }
    }

    /// Advances the particle by one explicit Euler step.
    ///
    /// The velocity takes the accumulated acceleration, loses its friction share, then moves the
    /// position. The acceleration is reset for the next tick.
    #[inline]
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration;
        self.velocity *= 1.0 - self.friction;
        self.position += self.velocity;
        self.acceleration = Vector2::ZERO;
    }

    /// Force the given attractor exerts on this particle under `law`.
    ///
    /// Pass [`SimulationConfig::force_law`](crate::config::SimulationConfig::force_law) to get the
    /// force a [`World`](crate::world::World) with that configuration applies.
    #[inline]
    pub fn force_from(&self, attractor: &Attractor, mut law: InverseSquare) -> Vector2 {
        law.compute(Between(self, attractor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_force_accumulates() {
        let mut particle = Particle::at_rest(Vector2::ZERO);
        particle.mass = 2.0;

        particle.apply_force(Vector2::new(2.0, 0.0));
        particle.apply_force(Vector2::new(0.0, -4.0));

        assert_eq!(particle.acceleration, Vector2::new(1.0, -2.0));
        assert_eq!(particle.velocity, Vector2::ZERO);
        assert_eq!(particle.position, Vector2::ZERO);
    }

    #[test]
    fn massless_ignores_force() {
        let mut particle = Particle::at_rest(Vector2::ZERO);
        particle.mass = 0.0;

        particle.apply_force(Vector2::ONE);

        assert_eq!(particle.acceleration, Vector2::ZERO);
    }

    #[test]
    fn integrate_order() {
        let mut particle = Particle::new(
            Vector2::new(10.0, 10.0),
            Vector2::new(2.0, 0.0),
            PARTICLE_MASS,
            0.5,
            Appearance::default(),
        );
        particle.apply_force(Vector2::new(2.0, 4.0));

        particle.integrate();

        // (2 + 2, 0 + 4) * 0.5 = (2, 2)
        assert_eq!(particle.velocity, Vector2::new(2.0, 2.0));
        assert_eq!(particle.position, Vector2::new(12.0, 12.0));
        assert_eq!(particle.acceleration, Vector2::ZERO);
    }

    #[test]
    fn friction_decay() {
        let friction = 0.25;
        let initial = Vector2::new(8.0, -3.0);
        let mut particle = Particle::new(
            Vector2::ZERO,
            initial,
            PARTICLE_MASS,
            friction,
            Appearance::default(),
        );

        for n in 1..=10 {
            particle.integrate();

            let expected = initial * (1.0 - friction).powi(n);
            assert!((particle.velocity - expected).length() < 1e-12);
        }
    }

    #[test]
    fn force_from_attractor() {
        let particle = Particle::at_rest(Vector2::ZERO);
        let attractor = Attractor::new(Vector2::new(100.0, 0.0), 10_000.0);

        assert_eq!(
            particle.force_from(&attractor, InverseSquare::default()),
            Vector2::new(1.0, 0.0)
        );
    }

    #[test]
    fn force_from_uses_given_clamp() {
        let particle = Particle::at_rest(Vector2::ZERO);
        let attractor = Attractor::new(Vector2::new(10.0, 0.0), 100.0);

        // Default clamp treats the distance as 60, a clamp starting at 10 keeps it.
        let default = particle.force_from(&attractor, InverseSquare::default());
        let wide = particle.force_from(&attractor, InverseSquare::new(10.0, 1_000.0));

        assert!((default.x - 100.0 / 3_600.0).abs() < 1e-12);
        assert_eq!(wide, Vector2::new(1.0, 0.0));
    }
}
