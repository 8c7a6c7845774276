use crate::vector::Vector2;

/// A fixed point that pulls (or, with a negative strength, pushes) every
/// [`Particle`](crate::particle::Particle).
///
/// Attractors are passive: they never move, never integrate and never receive forces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    /// Location of the attractor, fixed for its lifetime.
    pub position: Vector2,
    /// Mass-like strength used by the force law. Negative values repel.
    pub strength: f64,
}

impl Attractor {
    /// Creates a new [`Attractor`] with the given position and signed strength.
    #[inline]
    pub const fn new(position: Vector2, strength: f64) -> Self {
        Self { position, strength }
    }

    /// Returns true if particles are pushed away from this attractor.
    #[inline]
    pub fn is_repulsive(&self) -> bool {
        self.strength < 0.0
    }
}
