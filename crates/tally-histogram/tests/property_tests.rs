//! Property-based tests for the histogram family

use proptest::prelude::*;
use tally_histogram::*;

fn sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-500.0..500.0f64, 1..200)
}

proptest! {
    // Property: every accepted value lands in exactly one continuous bin
    #[test]
    fn prop_continuous_sizes_sum_to_data_points(data in sample(), num_bins in 1usize..30, nice in any::<bool>()) {
        let hist = FromDataConfig::new()
            .with_num_bins(num_bins)
            .with_nice_ranges(nice)
            .build(&data)
            .unwrap();
        let total: u64 = hist.bins(BinScaling::ByNumDatapoints).iter().map(|b| b.size).sum();
        prop_assert_eq!(total, data.len() as u64);
        prop_assert_eq!(hist.num_data_points(), data.len() as u64);
    }

    // Property: ByNumDatapoints scaled sizes sum to 1
    #[test]
    fn prop_scaled_sizes_sum_to_one(data in sample(), estimator in prop::sample::select(BinEstimator::ALL.to_vec())) {
        prop_assume!(data.len() >= 2);
        let hist = FromDataConfig::new().with_bin_estimator(estimator).build(&data).unwrap();
        let total: f64 = hist.bins(BinScaling::ByNumDatapoints).iter().map(|b| b.scaled_size).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    // Property: ByMaxBinSize peaks at exactly 1
    #[test]
    fn prop_max_scaled_size_is_one(keys in prop::collection::vec(0u8..12, 1..100)) {
        let mut hist = CategoricalHistogram::create_empty(CategoricalOptions::default());
        for key in &keys {
            hist.add(key.to_string().as_str()).unwrap();
        }
        let peak = hist
            .bins(BinScaling::ByMaxBinSize)
            .iter()
            .map(|b| b.scaled_size)
            .fold(0.0, f64::max);
        prop_assert!((peak - 1.0).abs() < 1e-12);
        prop_assert_eq!(hist.num_data_points(), keys.len() as u64);
    }

    // Property: integer bins sum to the data points and the full range covers every key
    #[test]
    fn prop_integer_full_range(values in prop::collection::vec(-20i32..20, 1..100)) {
        let hist = IntegerHistogram::create_from_data(
            values.iter().map(|&v| f64::from(v)),
            IntegerOptions::default(),
        )
        .unwrap();
        let full = hist.bins_for_full_range(None, BinScaling::ByNumDatapoints);
        let range = hist.value_range().unwrap();
        prop_assert_eq!(full.len() as i64, range.max - range.min + 1);
        prop_assert_eq!(full.iter().map(|b| b.size).sum::<u64>(), values.len() as u64);
    }

    // Property: each segment counts exactly the values its predicate accepts
    #[test]
    fn prop_segment_counts_match_predicates(
        data in sample(),
        bounds in prop::collection::vec((prop::option::of(-600.0..0.0f64), prop::option::of(0.0..600.0f64)), 1..6),
    ) {
        let mut builder = SegmentHistogramBuilder::new();
        for (i, (min, max)) in bounds.iter().enumerate() {
            builder = builder.with_segment(format!("s{i}"), *min, *max);
        }
        let mut hist = builder.build().unwrap();
        hist.add_all(data.iter().copied()).unwrap();

        for (i, (min, max)) in bounds.iter().enumerate() {
            let expected = data
                .iter()
                .filter(|&&v| min.map_or(true, |m| v >= m) && max.map_or(true, |m| v < m))
                .count() as u64;
            prop_assert_eq!(hist.value(&format!("s{i}")), Some(expected));
        }
        prop_assert_eq!(hist.num_data_points() + hist.num_outliers(), data.len() as u64);
    }

    // Property: a degenerate range always yields one bin
    #[test]
    fn prop_degenerate_range_single_bin(value in -1e6..1e6f64, num_bins in 1usize..50) {
        for strategy in [BinSizeStrategy::EqualWidth, BinSizeStrategy::EqualNiceWidth] {
            let layout = strategy.layout(num_bins, value, value).unwrap();
            prop_assert_eq!(layout.num_bins(), 1);
        }
    }
}

// Short decimal ranges whose nice grid bounds are not exactly representable
const SHORT_DECIMAL_RANGES: [(f64, f64, usize); 6] = [
    (1.7, 1.8, 3),
    (-30.0, -29.7, 5),
    (0.1, 0.3, 4),
    (0.7, 1.0, 3),
    (-0.3, -0.1, 2),
    (10.1, 10.4, 7),
];

#[test]
fn nice_layout_covers_short_decimal_ranges() {
    for (min, max, num_bins) in SHORT_DECIMAL_RANGES {
        let layout = BinSizeStrategy::EqualNiceWidth.layout(num_bins, min, max).unwrap();
        assert!(layout.min <= min && layout.max >= max, "{min}..{max}: {layout:?}");

        let hist = FromDataConfig::new()
            .with_num_bins(num_bins)
            .with_nice_ranges(true)
            .build(&[min, (min + max) / 2.0, max])
            .unwrap();
        assert_eq!(hist.num_data_points(), 3);
    }
}

proptest! {
    // Property: nice ranges over one-decimal bounds keep both bounds inside
    #[test]
    fn prop_nice_range_covers_decimal_bounds(start in -1000i32..1000, width in 1i32..20, num_bins in 1usize..12) {
        let min = f64::from(start) / 10.0;
        let max = f64::from(start + width) / 10.0;
        let hist = FromDataConfig::new()
            .with_num_bins(num_bins)
            .with_nice_ranges(true)
            .build(&[min, max])
            .unwrap();
        prop_assert!(hist.min() <= min && hist.max() >= max);
        prop_assert_eq!(hist.num_data_points(), 2);
    }
}
