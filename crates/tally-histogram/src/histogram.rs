//! The closed family of histogram shapes

use crate::categorical::CategoricalHistogram;
use crate::continuous::ContinuousHistogram;
use crate::integer::IntegerHistogram;
use crate::ops::{sort_by_key, sort_by_size};
use crate::segment::SegmentHistogram;
use crate::types::{Bin, BinScaling, SortDirection};

/// Any of the four histogram types behind one interface
///
/// Bins are reported in the common [`Bin`] shape; use the concrete type for
/// integer keys or extents.
#[derive(Debug, Clone, PartialEq)]
pub enum Histogram {
    Categorical(CategoricalHistogram),
    Integer(IntegerHistogram),
    Continuous(ContinuousHistogram),
    Segment(SegmentHistogram),
}

impl Histogram {
    pub fn num_bins(&self) -> usize {
        match self {
            Histogram::Categorical(h) => h.num_bins(),
            Histogram::Integer(h) => h.num_bins(),
            Histogram::Continuous(h) => h.num_bins(),
            Histogram::Segment(h) => h.num_bins(),
        }
    }

    pub fn num_data_points(&self) -> u64 {
        match self {
            Histogram::Categorical(h) => h.num_data_points(),
            Histogram::Integer(h) => h.num_data_points(),
            Histogram::Continuous(h) => h.num_data_points(),
            Histogram::Segment(h) => h.num_data_points(),
        }
    }

    pub fn num_undefined(&self) -> u64 {
        match self {
            Histogram::Categorical(h) => h.num_undefined(),
            Histogram::Integer(h) => h.num_undefined(),
            Histogram::Continuous(h) => h.num_undefined(),
            Histogram::Segment(h) => h.num_undefined(),
        }
    }

    pub fn ratio_undefined(&self) -> f64 {
        self.num_undefined() as f64 / self.num_data_points() as f64
    }

    pub fn bins(&self, scaling: BinScaling) -> Vec<Bin> {
        match self {
            Histogram::Categorical(h) => h.bins(scaling),
            Histogram::Integer(h) => h.bins(scaling).into_iter().map(Bin::from).collect(),
            Histogram::Continuous(h) => h.bins(scaling).into_iter().map(Bin::from).collect(),
            Histogram::Segment(h) => h.bins(scaling).into_iter().map(Bin::from).collect(),
        }
    }

    pub fn bins_sorted_by_size(&self, scaling: BinScaling, direction: SortDirection) -> Vec<Bin> {
        let mut bins = self.bins(scaling);
        sort_by_size(&mut bins, direction);
        bins
    }

    pub fn bins_sorted_by_key(&self, scaling: BinScaling, direction: SortDirection) -> Vec<Bin> {
        let mut bins = self.bins(scaling);
        sort_by_key(&mut bins, direction);
        bins
    }
}

impl From<CategoricalHistogram> for Histogram {
    fn from(h: CategoricalHistogram) -> Self {
        Histogram::Categorical(h)
    }
}

impl From<IntegerHistogram> for Histogram {
    fn from(h: IntegerHistogram) -> Self {
        Histogram::Integer(h)
    }
}

impl From<ContinuousHistogram> for Histogram {
    fn from(h: ContinuousHistogram) -> Self {
        Histogram::Continuous(h)
    }
}

impl From<SegmentHistogram> for Histogram {
    fn from(h: SegmentHistogram) -> Self {
        Histogram::Segment(h)
    }
}
