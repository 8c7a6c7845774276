use crate::{Between, Interaction};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::ops::Add;

/// Trait to compute the interaction between objects using parallel algorithms.
pub trait ParallelCompute<T>: Sized {
    /// Returns the interaction(s) between these objects using a parallel brute-force algorithm.
    ///
    /// Refer to [`BruteForce`] for more information.
    #[inline]
    fn par_brute_force(self, interaction: T) -> <BruteForce<T> as Interaction<Self>>::Output
    where
        BruteForce<T>: Interaction<Self>,
    {
        BruteForce(interaction).compute(self)
    }
}

impl<T, S1, S2> ParallelCompute<T> for Between<S1, S2> {}

/// Brute-force algorithm using multiple CPU threads with
/// [rayon](https://github.com/rayon-rs/rayon).
///
/// Affected objects are split across threads; each one sums its interaction with every affecting
/// object, in slice order, so the result for one object is identical to the
/// [sequential](crate::sequential::BruteForce) one. Every interaction is computed before the
/// collected results are returned.
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForce<T>(pub T);

impl<P1, P2, U, T> Interaction<Between<&[P1], &[P2]>> for BruteForce<T>
where
    P1: Sync,
    P2: Sync,
    U: Add<Output = U> + Default + Send,
    T: for<'a> Interaction<Between<&'a P1, &'a P2>, Output = U> + Clone + Send,
{
    type Output = Vec<U>;

    #[inline]
    fn compute(&mut self, Between(affected, affecting): Between<&[P1], &[P2]>) -> Self::Output {
        affected
            .par_iter()
            .map_with(self.0.clone(), |interaction, p1| {
                affecting.iter().fold(U::default(), |sum, p2| {
                    sum + interaction.compute(Between(p1, p2))
                })
            })
            .collect()
    }
}
