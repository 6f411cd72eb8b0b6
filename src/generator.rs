use std::fmt::{self, Display};

use log::debug;
use num::PrimInt;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::error::{Error, Result};

/// A stateful source of values: each call advances internal state and
/// yields the next value of the sequence.
///
/// This is the seam the population functions in [`crate::populate`] are
/// written against, so tests can drive them with deterministic stand-ins.
pub trait Draw {
    type Value;

    fn next(&mut self) -> Self::Value;
}

/// Generates integers uniformly distributed over a closed interval
/// `[low, high]`, from an engine seeded once at construction.
///
/// Deliberately neither `Clone` nor `Copy`: duplicating the engine state
/// would make two handles replay the same future draws, which is almost
/// never what a caller wants. Each independent consumer should construct
/// its own generator.
///
/// Draws require `&mut self`; for concurrent use, give each thread its own
/// separately seeded instance instead of locking a shared one.
pub struct UniformInt<T: SampleUniform> {
    rng: StdRng,
    dist: Uniform<T>,
}

impl<T> UniformInt<T>
where
    T: PrimInt + SampleUniform + Display,
{
    /// Creates a generator over `[low, high]`, seeded from the operating
    /// system's entropy source.
    ///
    /// Fails with [`Error::InvalidRange`] when `low > high`, or with
    /// [`Error::SeedUnavailable`] when the entropy read fails.
    pub fn new(low: T, high: T) -> Result<Self> {
        let mut seed = [0u8; 8];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| Error::SeedUnavailable {
                message: e.to_string(),
            })?;

        Self::with_seed(low, high, u64::from_le_bytes(seed))
    }

    /// Creates a generator over `[low, high]` from an explicit seed.
    ///
    /// Two generators built with the same seed and bounds produce
    /// identical sequences, which is what makes draws reproducible in
    /// tests and simulations.
    ///
    /// Fails with [`Error::InvalidRange`] when `low > high`.
    pub fn with_seed(low: T, high: T, seed: u64) -> Result<Self> {
        if low > high {
            return Err(Error::InvalidRange {
                low: low.to_string(),
                high: high.to_string(),
            });
        }

        debug!("seeding uniform generator over [{low}, {high}]");

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            // new_inclusive maps engine output to [low, high] without
            // modulo bias.
            dist: Uniform::new_inclusive(low, high),
        })
    }
}

// Manual impl: the engine state is opaque and `T::Sampler` has no
// useful rendering, so deriving would demand bounds nobody can meet.
impl<T: SampleUniform> fmt::Debug for UniformInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniformInt").finish_non_exhaustive()
    }
}

impl<T: SampleUniform> Draw for UniformInt<T> {
    type Value = T;

    fn next(&mut self) -> T {
        self.dist.sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn draws_stay_in_range() {
        let mut gen = UniformInt::with_seed(-3_i32, 17, 42).unwrap();

        for _ in 0..10_000 {
            let v = gen.next();
            assert!((-3..=17).contains(&v), "{v} escaped [-3, 17]");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = UniformInt::with_seed(0_u32, 1_000_000, 7).unwrap();
        let mut b = UniformInt::with_seed(0_u32, 1_000_000, 7).unwrap();

        for _ in 0..256 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = UniformInt::with_seed(0_u64, u64::MAX, 1).unwrap();
        let mut b = UniformInt::with_seed(0_u64, u64::MAX, 2).unwrap();

        let diverged = (0..64).any(|_| a.next() != b.next());
        assert!(diverged);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = UniformInt::with_seed(5_i32, 1, 0).unwrap_err();

        assert_eq!(
            err,
            Error::InvalidRange {
                low: "5".to_string(),
                high: "1".to_string(),
            }
        );
    }

    #[test]
    fn debug_output_hides_engine_state() {
        let gen = UniformInt::with_seed(1_i32, 6, 0).unwrap();

        assert_eq!(format!("{gen:?}"), "UniformInt { .. }");
    }

    #[test]
    fn degenerate_range_yields_constant() {
        let mut gen = UniformInt::with_seed(5_u8, 5, 99).unwrap();

        for _ in 0..64 {
            assert_eq!(gen.next(), 5);
        }
    }

    #[test]
    fn entropy_seeded_draws_are_in_range() {
        let mut gen = UniformInt::new(1_i64, 6).unwrap();

        for _ in 0..100 {
            assert!((1..=6).contains(&gen.next()));
        }
    }

    #[test]
    fn die_rolls_are_roughly_uniform() {
        let mut gen = UniformInt::with_seed(1_usize, 6, 2024).unwrap();

        const DRAWS: u32 = 100_000;
        let mut counts = [0_u32; 6];

        for _ in 0..DRAWS {
            counts[gen.next() - 1] += 1;
        }

        for count in counts {
            assert_relative_eq!(
                f64::from(count) / f64::from(DRAWS),
                1.0 / 6.0,
                max_relative = 0.05
            );
        }
    }
}
