//! Scaling and ordering shared by all histogram types

use crate::types::{BinScaling, BinView, SortDirection};

/// Factor that turns raw counts into scaled sizes
///
/// An empty histogram yields 0 rather than a division by zero.
pub fn scale_factor<I>(scaling: BinScaling, num_data_points: u64, sizes: I) -> f64
where
    I: IntoIterator<Item = u64>,
{
    let divisor = match scaling {
        BinScaling::ByNumDatapoints => num_data_points,
        BinScaling::ByMaxBinSize => sizes.into_iter().max().unwrap_or(0),
    };
    if divisor == 0 {
        0.0
    } else {
        1.0 / divisor as f64
    }
}

/// Stable sort by bin size
pub fn sort_by_size<B: BinView>(bins: &mut [B], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => bins.sort_by(|a, b| a.size().cmp(&b.size())),
        SortDirection::Descending => bins.sort_by(|a, b| b.size().cmp(&a.size())),
    }
}

/// Sort by key in lexical order
pub fn sort_by_key<B: BinView>(bins: &mut [B], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => bins.sort_by(|a, b| a.key().cmp(b.key())),
        SortDirection::Descending => bins.sort_by(|a, b| b.key().cmp(a.key())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bin;

    fn bin(key: &str, size: u64) -> Bin {
        Bin {
            key: key.to_string(),
            size,
            scaled_size: 0.0,
        }
    }

    #[test]
    fn test_scale_factor() {
        assert_eq!(scale_factor(BinScaling::ByNumDatapoints, 4, [1, 3]), 0.25);
        assert_eq!(scale_factor(BinScaling::ByMaxBinSize, 4, [1, 3]), 1.0 / 3.0);
        assert_eq!(scale_factor(BinScaling::ByNumDatapoints, 0, [0, 0]), 0.0);
        assert_eq!(scale_factor(BinScaling::ByMaxBinSize, 0, Vec::new()), 0.0);
    }

    #[test]
    fn test_sort_by_size_is_stable() {
        let mut bins = vec![bin("a", 2), bin("b", 5), bin("c", 2), bin("d", 1)];
        sort_by_size(&mut bins, SortDirection::Descending);
        let keys: Vec<_> = bins.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c", "d"]);

        sort_by_size(&mut bins, SortDirection::Ascending);
        let keys: Vec<_> = bins.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["d", "a", "c", "b"]);
    }

    #[test]
    fn test_sort_by_key() {
        let mut bins = vec![bin("pear", 1), bin("apple", 1), bin("fig", 1)];
        sort_by_key(&mut bins, SortDirection::Ascending);
        let keys: Vec<_> = bins.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["apple", "fig", "pear"]);

        sort_by_key(&mut bins, SortDirection::Descending);
        assert_eq!(bins[0].key, "pear");
    }
}
