use crate::{Between, Interaction};
use std::ops::Add;

/// Trait to compute the interaction between objects using sequential algorithms.
pub trait SequentialCompute<T>: Sized {
    /// Returns the interaction(s) between these objects using a brute-force algorithm.
    ///
    /// Refer to [`BruteForce`] for more information.
    #[inline]
    fn brute_force(self, interaction: T) -> <BruteForce<T> as Interaction<Self>>::Output
    where
        BruteForce<T>: Interaction<Self>,
    {
        BruteForce(interaction).compute(self)
    }
}

impl<T, S1, S2> SequentialCompute<T> for Between<S1, S2> {}

/// An iterator that computes, for every object of an iterator, its interaction with all the
/// objects of a slice.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Interactions<'a, A, I, P2> {
    algorithm: A,
    affected: I,
    affecting: &'a [P2],
}

impl<'a, A, I, P2> Interactions<'a, A, I, P2> {
    #[inline]
    const fn new(algorithm: A, affected: I, affecting: &'a [P2]) -> Self {
        Self {
            algorithm,
            affected,
            affecting,
        }
    }
}

impl<'a, A, I, P2, U> Iterator for Interactions<'a, A, I, P2>
where
    I: Iterator,
    A: Interaction<Between<I::Item, &'a [P2]>, Output = U>,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.affected
            .next()
            .map(|p1| self.algorithm.compute(Between(p1, self.affecting)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.affected.size_hint()
    }
}

impl<'a, A, I, P2, U> ExactSizeIterator for Interactions<'a, A, I, P2>
where
    I: ExactSizeIterator,
    A: Interaction<Between<I::Item, &'a [P2]>, Output = U>,
{
    #[inline]
    fn len(&self) -> usize {
        self.affected.len()
    }
}

/// Brute-force algorithm using one CPU thread.
///
/// The interaction of an affected object with a slice is the sum of its interaction with every
/// object of the slice, in slice order. The interaction of a slice with another slice is an
/// [`Interactions`] iterator yielding one sum per affected object.
///
/// To use objects `P1` and `P2` with this algorithm, the interaction `T` should implement
/// [`Interaction<Between<&P1, &P2>>`].
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForce<T>(pub T);

impl<P1, P2, U, T> Interaction<Between<&P1, &[P2]>> for BruteForce<T>
where
    U: Add<Output = U> + Default,
    T: for<'a> Interaction<Between<&'a P1, &'a P2>, Output = U>,
{
    type Output = U;

    #[inline]
    fn compute(&mut self, Between(affected, affecting): Between<&P1, &[P2]>) -> Self::Output {
        affecting.iter().fold(U::default(), |interaction, p2| {
            interaction + self.0.compute(Between(affected, p2))
        })
    }
}

impl<'a, P1, P2, T> Interaction<Between<&'a [P1], &'a [P2]>> for BruteForce<T>
where
    T: Clone,
{
    type Output = Interactions<'a, Self, std::slice::Iter<'a, P1>, P2>;

    #[inline]
    fn compute(
        &mut self,
        Between(affected, affecting): Between<&'a [P1], &'a [P2]>,
    ) -> Self::Output {
        Interactions::new(self.clone(), affected.iter(), affecting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attractor::Attractor, force::InverseSquare, particle::Particle, vector::Vector2};

    fn scene() -> (Vec<Particle>, Vec<Attractor>) {
        let particles = vec![
            Particle::at_rest(Vector2::ZERO),
            Particle::at_rest(Vector2::new(250.0, -40.0)),
            Particle::at_rest(Vector2::new(-75.0, 320.0)),
        ];
        let attractors = vec![
            Attractor::new(Vector2::new(100.0, 0.0), 10_000.0),
            Attractor::new(Vector2::new(-300.0, 80.0), -25_000.0),
            Attractor::new(Vector2::new(10.0, 10.0), 5_000.0),
        ];

        (particles, attractors)
    }

    #[test]
    fn sum_over_slice() {
        let (particles, attractors) = scene();
        let mut law = InverseSquare::default();

        for particle in &particles {
            let expected = attractors
                .iter()
                .map(|attractor| law.compute(Between(particle, attractor)))
                .fold(Vector2::ZERO, |sum, force| sum + force);

            let computed = Between(particle, attractors.as_slice()).brute_force(law);
            assert_eq!(computed, expected);
        }
    }

    #[test]
    fn empty_slice_is_zero() {
        let particle = Particle::at_rest(Vector2::ONE);
        let attractors: [Attractor; 0] = [];

        let computed =
            Between(&particle, attractors.as_slice()).brute_force(InverseSquare::default());
        assert_eq!(computed, Vector2::ZERO);
    }

    #[test]
    fn slice_against_slice() {
        let (particles, attractors) = scene();
        let law = InverseSquare::default();

        let computed = Between(particles.as_slice(), attractors.as_slice()).brute_force(law);
        assert_eq!(computed.len(), particles.len());

        for (particle, force) in particles.iter().zip(computed) {
            assert_eq!(force, Between(particle, attractors.as_slice()).brute_force(law));
        }
    }
}
