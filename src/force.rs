use crate::{
    attractor::Attractor,
    particle::Particle,
    vector::{Vector, Vector2},
    Between, Interaction,
};

/// Default closest distance considered by [`InverseSquare`].
pub const MIN_DISTANCE: f64 = 60.0;

/// Default farthest distance considered by [`InverseSquare`].
pub const MAX_DISTANCE: f64 = 600.0;

/// Inverse-square attraction between a [`Particle`] and an [`Attractor`], with the distance clamped
/// to `[min_distance, max_distance]`.
///
/// The lower bound removes the singularity when a particle reaches an attractor and the upper bound
/// keeps far away attractors from becoming irrelevant. The returned force is
/// `direction * particle.mass * attractor.strength / distance²`, pointing away from the attractor
/// when its strength is negative.
///
/// # Example
///
/// ```
/// # use attractors::prelude::*;
/// let particle = Particle::at_rest(Vector2::ZERO);
/// let attractor = Attractor::new(Vector2::new(100.0, 0.0), 10_000.0);
///
/// let force = InverseSquare::default().compute(Between(&particle, &attractor));
/// assert_eq!(force, Vector2::new(1.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSquare {
    /// Distances below this value are treated as this value.
    pub min_distance: f64,
    /// Distances above this value are treated as this value.
    pub max_distance: f64,
}

impl Default for InverseSquare {
    #[inline]
    fn default() -> Self {
        Self::new(MIN_DISTANCE, MAX_DISTANCE)
    }
}

impl InverseSquare {
    /// Creates a new [`InverseSquare`] law clamping distances to `[min_distance, max_distance]`.
    #[inline]
    pub const fn new(min_distance: f64, max_distance: f64) -> Self {
        Self {
            min_distance,
            max_distance,
        }
    }

    /// Returns the distance the law actually uses for a given true distance.
    #[inline]
    pub fn clamp_distance(&self, distance: f64) -> f64 {
        // Not `f64::clamp`, which panics on an inverted range.
        distance.max(self.min_distance).min(self.max_distance)
    }

    /// Signed magnitude of the force between a mass and a strength separated by `distance`.
    #[inline]
    pub fn magnitude(&self, mass: f64, strength: f64, distance: f64) -> f64 {
        let distance = self.clamp_distance(distance);
        mass * strength / (distance * distance)
    }
}

impl Interaction<Between<&Particle, &Attractor>> for InverseSquare {
    type Output = Vector2;

    #[inline]
    fn compute(&mut self, Between(particle, attractor): Between<&Particle, &Attractor>) -> Vector2 {
        let displacement = attractor.position - particle.position;
        let magnitude = self.magnitude(particle.mass, attractor.strength, displacement.magnitude());

        displacement.normalized() * magnitude
    }
}
