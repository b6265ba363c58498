//! Reference samples checked end to end through the public API

use approx::assert_relative_eq;
use tally_histogram::*;

const SAMPLE: [f64; 20] = [
    1.0, 4.0, 2.0, 8.0, 9.0, 9.0, 6.0, 8.0, 4.0, 1.0, 1.1, 1.3, 2.6, 5.4, 6.2, 1.7, 2.3, 8.1, 8.2,
    2.0,
];

#[test]
fn test_equal_width_over_explicit_range() {
    let mut hist = FromRangeConfig::new().with_num_bins(5).build(0.0, 10.0).unwrap();
    hist.add_all(SAMPLE).unwrap();
    let sizes: Vec<u64> = hist.bins(BinScaling::ByNumDatapoints).iter().map(|b| b.size).collect();
    assert_eq!(sizes, vec![5, 4, 3, 2, 6]);
}

#[test]
fn test_square_root_estimator_on_sample() {
    assert_eq!(BinEstimator::SquareRoot.estimate(&SAMPLE).unwrap(), 5);
    let hist = FromDataConfig::new()
        .with_bin_estimator(BinEstimator::SquareRoot)
        .build(&SAMPLE)
        .unwrap();
    assert_eq!(hist.num_bins(), 5);
}

#[test]
fn test_segment_sample_through_sum_type() {
    let data = [
        1.0, 4.0, 2.0, 8.0, 9.0, 9.0, 6.0, 8.0, -5.0, 4.0, 1.0, -3.0, 1.1, 1.3, 2.6, 5.4, 6.2, 1.7,
        2.3, 8.1, 8.2, 2.0,
    ];
    let mut segments = SegmentHistogramBuilder::new()
        .with_segment("A", Some(0.0), Some(5.0))
        .with_segment("B", Some(4.0), Some(8.2))
        .with_segment("C", None, Some(0.0))
        .with_segment("D", Some(5.0), None)
        .build()
        .unwrap();
    segments.add_all(data).unwrap();

    let hist = Histogram::from(segments);
    assert_eq!(hist.num_data_points(), 22);
    let bins = hist.bins_sorted_by_size(BinScaling::ByMaxBinSize, SortDirection::Descending);
    let summary: Vec<(&str, u64)> = bins.iter().map(|b| (b.key.as_str(), b.size)).collect();
    assert_eq!(summary, vec![("A", 11), ("D", 9), ("B", 8), ("C", 2)]);
    assert_relative_eq!(bins[3].scaled_size, 2.0 / 11.0, epsilon = 1e-12);
}

#[test]
fn test_bins_serialize_for_reporting() {
    let mut hist = ContinuousHistogram::new(0.0, 10.0, vec![5.0], ContinuousOptions::default()).unwrap();
    hist.add_all([1.0, 6.0, 7.0]).unwrap();
    let json = serde_json::to_value(hist.bins(BinScaling::ByNumDatapoints)).unwrap();
    assert_eq!(json[0]["key"], "0 - 5");
    assert_eq!(json[1]["size"], 2);
    assert_eq!(json[1]["extent"]["max"], 10.0);
}
