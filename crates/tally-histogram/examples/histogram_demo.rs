//! Demonstrates the histogram family on a seeded latency sample

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, LogNormal};
use tally_histogram::{
    BinEstimator, BinScaling, CategoricalHistogram, CategoricalOptions, FromDataConfig,
    SegmentHistogramBuilder, SortDirection,
};

fn main() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let latency = LogNormal::new(3.0, 0.6).unwrap();
    let sample: Vec<f64> = (0..500).map(|_| latency.sample(&mut rng)).collect();

    // Example 1: every estimator on the same sample
    println!("=== Bin count estimators ===");
    for estimator in BinEstimator::ALL {
        let bins = estimator.estimate(&sample).unwrap();
        println!("  {estimator:<18} {bins} bins");
    }

    // Example 2: nice boundaries chosen from the data
    println!("\n=== Nice continuous histogram ===");
    let hist = FromDataConfig::new()
        .with_bin_estimator(BinEstimator::Sturges)
        .with_nice_ranges(true)
        .build(&sample)
        .unwrap();
    for bin in hist.bins(BinScaling::ByNumDatapoints) {
        println!("  {bin}");
    }

    // Example 3: service level buckets that overlap
    println!("\n=== Segments ===");
    let mut slo = SegmentHistogramBuilder::new()
        .with_segment("fast", None, Some(20.0))
        .with_segment("ok", None, Some(50.0))
        .with_segment("slow", Some(50.0), None)
        .build()
        .unwrap();
    slo.add_all(sample.iter().copied()).unwrap();
    for bin in slo.bins_sorted_by_size(BinScaling::ByNumDatapoints, SortDirection::Descending) {
        println!("  {:<5} {:>4} ({:.1}%)", bin.key, bin.size, bin.scaled_size * 100.0);
    }

    // Example 4: categorical buckets derived from the values
    println!("\n=== Categorical ===");
    let mut tiers = CategoricalHistogram::create_empty(CategoricalOptions::default());
    for &value in &sample {
        let tier = if value < 15.0 { "gold" } else if value < 40.0 { "silver" } else { "bronze" };
        tiers.add(tier).unwrap();
    }
    for bin in tiers.bins_sorted_by_key(BinScaling::ByMaxBinSize, SortDirection::Ascending) {
        println!("  {bin}");
    }
}
