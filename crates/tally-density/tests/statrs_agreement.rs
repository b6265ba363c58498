use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal as NormalSampler};
use statrs::distribution::{Continuous, Normal};
use tally_density::{Kernel, KernelDensityEstimation};

#[test]
fn gaussian_kernel_matches_standard_normal_pdf() {
    let standard = Normal::new(0.0, 1.0).unwrap();
    for i in -40..=40 {
        let x = i as f64 * 0.1;
        assert_relative_eq!(Kernel::Gaussian.evaluate(x), standard.pdf(x), max_relative = 1e-12);
    }
}

#[test]
fn two_point_estimate_is_a_normal_mixture() {
    let bandwidth = 0.7;
    let kde = KernelDensityEstimation::new(&[-1.0, 2.0]).with_bandwidth(bandwidth);
    let left = Normal::new(-1.0, bandwidth).unwrap();
    let right = Normal::new(2.0, bandwidth).unwrap();

    for p in kde.evaluate_points(-4.0, 5.0, 90) {
        let expected = 0.5 * (left.pdf(p.x) + right.pdf(p.x));
        assert_relative_eq!(p.y, expected, max_relative = 1e-10);
    }
}

#[test]
fn large_normal_sample_recovers_its_density() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let sampler = NormalSampler::new(10.0, 2.0).unwrap();
    let data: Vec<f64> = (0..5000).map(|_| sampler.sample(&mut rng)).collect();

    let kde = KernelDensityEstimation::new(&data);
    let truth = Normal::new(10.0, 2.0).unwrap();
    for x in [8.0, 9.0, 10.0, 11.0, 12.0] {
        let estimate = kde.density_at(x);
        assert!(
            (estimate - truth.pdf(x)).abs() < 0.02,
            "density at {x}: estimate {estimate} vs {}",
            truth.pdf(x)
        );
    }
}
