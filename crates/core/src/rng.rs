//! RNG module - randomness consumed by beans
//!
//! Beans draw from a [`RandomSource`] exactly once, when they are created:
//! a skill bean takes one normal deviate to fix its landing slot, a luck bean
//! takes one seed for its own private coin-flip stream. After creation a bean
//! never touches the shared source again, so the order in which the machine
//! advances beans cannot perturb anyone else's stream.
//!
//! [`BeanRng`] is the production source: a small PCG generator that is fully
//! reproducible from a `u64` seed.

use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg64Mcg;

/// Golden-ratio increment used to decorrelate forked stream seeds.
const FORK_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// Source of the randomness a bean needs at creation time.
pub trait RandomSource {
    /// Draw a standard normal deviate (mean 0, standard deviation 1).
    fn next_gaussian(&mut self) -> f64;

    /// Draw a seed for a bean-private coin-flip stream.
    fn next_seed(&mut self) -> u64;
}

/// Deterministic PCG generator
#[derive(Debug, Clone)]
pub struct BeanRng {
    inner: Pcg64Mcg,
}

impl BeanRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            inner: Pcg64Mcg::from_entropy(),
        }
    }

    /// Fair coin flip: `true` with probability 0.5
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

impl RandomSource for BeanRng {
    fn next_gaussian(&mut self) -> f64 {
        self.inner.sample(StandardNormal)
    }

    fn next_seed(&mut self) -> u64 {
        self.inner.next_u64() ^ FORK_MIX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = BeanRng::new(12345);
        let mut rng2 = BeanRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.coin_flip(), rng2.coin_flip());
            assert_eq!(rng1.next_seed(), rng2.next_seed());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = BeanRng::new(12345);
        let mut rng2 = BeanRng::new(54321);

        assert_ne!(rng1.next_seed(), rng2.next_seed());
    }

    #[test]
    fn test_coin_flip_is_roughly_fair() {
        let mut rng = BeanRng::new(42);
        let heads = (0..10_000).filter(|_| rng.coin_flip()).count();

        // 10k flips: 5 standard deviations is 250.
        assert!((4750..=5250).contains(&heads), "heads = {}", heads);
    }

    #[test]
    fn test_gaussian_moments() {
        let mut rng = BeanRng::new(7);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.next_gaussian()).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.05, "mean = {}", mean);
        assert!((var - 1.0).abs() < 0.05, "variance = {}", var);
    }

    #[test]
    fn test_derived_streams_are_reproducible() {
        let mut parent1 = BeanRng::new(9);
        let mut parent2 = BeanRng::new(9);
        let mut child1 = BeanRng::new(parent1.next_seed());
        let mut child2 = BeanRng::new(parent2.next_seed());

        for _ in 0..32 {
            assert_eq!(child1.coin_flip(), child2.coin_flip());
        }
    }
}
