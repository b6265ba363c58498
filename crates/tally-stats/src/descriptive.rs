//! Scalar statistics over finite numeric sequences
//!
//! Every function works on a materialized slice and fails instead of
//! returning a sentinel:
//!
//! - empty input yields [`Error::EmptyInput`]
//! - variance, standard deviation, covariance and correlation need at least
//!   two values and yield [`Error::InsufficientData`] otherwise
//! - paired functions yield [`Error::SizeMismatch`] for different lengths

use ordered_float::OrderedFloat;
use tally_core::{check_min_len, check_paired, Error, MinMaxPair, Result};

/// Sort a copy of `data` in ascending order
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by_key(|&x| OrderedFloat(x));
    sorted
}

pub fn min(data: &[f64]) -> Result<f64> {
    Ok(min_max(data)?.min)
}

pub fn max(data: &[f64]) -> Result<f64> {
    Ok(min_max(data)?.max)
}

/// Both extremes in a single pass
pub fn min_max(data: &[f64]) -> Result<MinMaxPair<f64>> {
    min_max_iter(data.iter().copied())
}

/// Both extremes of any value iterator in a single pass
pub fn min_max_iter<I>(values: I) -> Result<MinMaxPair<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let mut values = values.into_iter();
    let first = values.next().ok_or_else(|| Error::empty_input("min_max"))?;
    let (lo, hi) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    MinMaxPair::new(lo, hi)
}

/// Distance between the largest and smallest value
pub fn range(data: &[f64]) -> Result<f64> {
    Ok(min_max(data)?.span())
}

fn extreme_index<T, F>(records: &[T], field: F, better: fn(f64, f64) -> bool) -> Result<usize>
where
    F: Fn(&T) -> f64,
{
    let mut iter = records.iter().map(&field).enumerate();
    let (mut best_idx, mut best) = iter.next().ok_or_else(|| Error::empty_input("object extreme"))?;
    for (idx, value) in iter {
        if better(value, best) {
            best_idx = idx;
            best = value;
        }
    }
    Ok(best_idx)
}

/// Smallest value of a record field
pub fn min_object<T, F>(records: &[T], field: F) -> Result<f64>
where
    F: Fn(&T) -> f64,
{
    Ok(field(find_min_object(records, &field)?))
}

/// Record owning the smallest field value; the first one wins on ties
pub fn find_min_object<T, F>(records: &[T], field: F) -> Result<&T>
where
    F: Fn(&T) -> f64,
{
    let idx = extreme_index(records, field, |candidate, best| candidate < best)?;
    Ok(&records[idx])
}

/// Largest value of a record field
pub fn max_object<T, F>(records: &[T], field: F) -> Result<f64>
where
    F: Fn(&T) -> f64,
{
    Ok(field(find_max_object(records, &field)?))
}

/// Record owning the largest field value; the first one wins on ties
pub fn find_max_object<T, F>(records: &[T], field: F) -> Result<&T>
where
    F: Fn(&T) -> f64,
{
    let idx = extreme_index(records, field, |candidate, best| candidate > best)?;
    Ok(&records[idx])
}

/// Both extremes of a record field
pub fn min_max_object<T, F>(records: &[T], field: F) -> Result<MinMaxPair<f64>>
where
    F: Fn(&T) -> f64,
{
    min_max_iter(records.iter().map(field))
}

pub fn mean(data: &[f64]) -> Result<f64> {
    check_min_len(data, 1, "mean")?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Median of unsorted data; the two central values are averaged on even counts
pub fn median(data: &[f64]) -> Result<f64> {
    median_sorted(&sorted(data))
}

/// Median of data already sorted in ascending order
pub fn median_sorted(sorted: &[f64]) -> Result<f64> {
    check_min_len(sorted, 1, "median")?;
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

pub(crate) fn sum_squared_deviations(data: &[f64], mean: f64) -> f64 {
    data.iter().map(|&x| (x - mean) * (x - mean)).sum()
}

/// Squared deviation sum divided by N
pub fn variance_population(data: &[f64]) -> Result<f64> {
    check_min_len(data, 2, "variance")?;
    let m = mean(data)?;
    Ok(sum_squared_deviations(data, m) / data.len() as f64)
}

/// Squared deviation sum divided by N - 1
pub fn variance_sample(data: &[f64]) -> Result<f64> {
    check_min_len(data, 2, "variance")?;
    let m = mean(data)?;
    Ok(sum_squared_deviations(data, m) / (data.len() - 1) as f64)
}

pub fn std_dev_population(data: &[f64]) -> Result<f64> {
    variance_population(data).map(f64::sqrt)
}

pub fn std_dev_sample(data: &[f64]) -> Result<f64> {
    variance_sample(data).map(f64::sqrt)
}

/// Sample covariance (divides by N - 1)
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired(x, y, 2, "covariance")?;
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;
    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(&a, &b)| (a - mean_x) * (b - mean_y))
        .sum();
    Ok(sum / (x.len() - 1) as f64)
}

/// Pearson correlation coefficient
///
/// Fails with [`Error::Computation`] when either sequence has zero variance.
pub fn correlation_coefficient(x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired(x, y, 2, "correlation")?;
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        return Err(Error::Computation(
            "Cannot compute correlation: zero variance".to_string(),
        ));
    }
    Ok(numerator / denominator)
}

/// 1-based ascending ranks; tied values share the average rank of their block
pub fn ranks(data: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by_key(|&i| OrderedFloat(data[i]));

    let mut ranks = vec![0.0; data.len()];
    let mut start = 0;
    while start < order.len() {
        let value = data[order[start]];
        let mut end = start + 1;
        while end < order.len() && data[order[end]] == value {
            end += 1;
        }
        // positions start..end hold ranks start+1..=end
        let average = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = average;
        }
        start = end;
    }
    ranks
}

/// Spearman rank correlation: Pearson correlation of the tie-averaged ranks
pub fn rank_correlation_coefficient(x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired(x, y, 2, "rank correlation")?;
    correlation_coefficient(&ranks(x), &ranks(y))
}
