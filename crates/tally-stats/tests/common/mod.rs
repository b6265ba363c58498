//! Shared sample generators for integration tests

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Reproducible normal sample
pub fn normal_sample(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}
