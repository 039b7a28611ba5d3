// Copyright 2025 numbits developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructors for arrays with random elements.
//!
//! Generator state is always explicit and caller-owned: every fill takes a
//! distribution, and the `_using` variants take the `Rng` too, so tests can
//! inject deterministic seeds. The convenience variants construct a default
//! generator at the call site; there is no hidden process-wide engine.

use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution, Uniform};
use rand::Rng;
use rand_distr::{Normal, StandardNormal};

use num_traits::Float;

use crate::dimension::{size_of, Shape};
use crate::Array;

impl<A> Array<A>
{
    /// Create an array with the given shape, with elements drawn from
    /// `distribution` using the default generator.
    ///
    /// ```
    /// use numbits::Array;
    /// use rand_distr::Uniform;
    ///
    /// let a = Array::<f64>::random(vec![2, 5], Uniform::new(0., 10.).unwrap());
    /// assert_eq!(a.shape(), &[2, 5]);
    /// ```
    pub fn random<D>(shape: Shape, distribution: D) -> Array<A>
    where D: Distribution<A>
    {
        Self::random_using(shape, distribution, &mut rand::rng())
    }

    /// Create an array with the given shape, with elements drawn from
    /// `distribution` using the generator `rng`.
    ///
    /// ```
    /// use numbits::Array;
    /// use rand::rngs::SmallRng;
    /// use rand::SeedableRng;
    /// use rand_distr::StandardNormal;
    ///
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let a = Array::<f64>::random_using(vec![3, 3], StandardNormal, &mut rng);
    /// let b = Array::<f64>::random_using(vec![3, 3],
    ///                                    StandardNormal,
    ///                                    &mut SmallRng::seed_from_u64(42));
    /// assert_eq!(a, b);
    /// ```
    pub fn random_using<D, R>(shape: Shape, distribution: D, rng: &mut R) -> Array<A>
    where
        D: Distribution<A>,
        R: Rng + ?Sized,
    {
        let n = size_of(&shape);
        let data: Vec<A> = (0..n).map(|_| distribution.sample(rng)).collect();
        Array::from_data(shape, data)
    }

    /// Create an array with the given shape, with elements drawn uniformly
    /// from the half-open range `[low, high)` using the generator `rng`.
    ///
    /// Works for both float and integer elements.
    ///
    /// **Panics** if `low >= high` or the range is otherwise invalid.
    pub fn uniform<R>(shape: Shape, low: A, high: A, rng: &mut R) -> Array<A>
    where
        A: SampleUniform,
        R: Rng + ?Sized,
    {
        let dist = match Uniform::new(low, high) {
            Ok(dist) => dist,
            Err(e) => panic!("numbits: invalid uniform range: {}", e),
        };
        Self::random_using(shape, dist, rng)
    }

    /// Create an array with the given shape, with elements drawn from the
    /// normal distribution with the given mean and standard deviation, using
    /// the generator `rng`.
    ///
    /// **Panics** if `std_dev` is negative or not finite.
    pub fn normal<R>(shape: Shape, mean: A, std_dev: A, rng: &mut R) -> Array<A>
    where
        A: Float,
        StandardNormal: Distribution<A>,
        R: Rng + ?Sized,
    {
        let dist = match Normal::new(mean, std_dev) {
            Ok(dist) => dist,
            Err(e) => panic!("numbits: invalid normal parameters: {}", e),
        };
        Self::random_using(shape, dist, rng)
    }

    /// Create an array with the given shape, filling it in parallel from
    /// per-chunk generators derived from `seed`.
    ///
    /// Each worker owns an independent generator and writes a disjoint run
    /// of output positions, so no coordination between workers is needed.
    /// The result is deterministic in `seed` but differs from the
    /// sequential [`Array::random_using`] stream.
    #[cfg(feature = "rayon")]
    pub fn random_par<D>(shape: Shape, distribution: D, seed: u64) -> Array<A>
    where
        A: Send,
        D: Distribution<A> + Sync,
    {
        use rand::rngs::SmallRng;
        use rand::SeedableRng;
        use rayon::prelude::*;

        const CHUNK: usize = 1024;

        let n = size_of(&shape);
        let nchunks = (n + CHUNK - 1) / CHUNK;
        let data: Vec<A> = (0..nchunks)
            .into_par_iter()
            .flat_map_iter(|chunk| {
                let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(chunk as u64));
                let len = CHUNK.min(n - chunk * CHUNK);
                (0..len)
                    .map(|_| distribution.sample(&mut rng))
                    .collect::<Vec<A>>()
                    .into_iter()
            })
            .collect();
        Array::from_data(shape, data)
    }
}
