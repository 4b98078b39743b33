//! Planar samples and their conversion into `linfa` datasets

use std::iter::FromIterator;
use std::ops::Index;
use std::slice;
use std::vec;

use linfa::Dataset;
use ndarray::{Array1, Array2, Ix1};

use crate::encoding::Encoder;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A coordinate in the plane
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// An observed output `z` at a given point
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub input: Point,
    pub output: f64,
}

impl Sample {
    pub fn new(input: Point, output: f64) -> Self {
        Sample { input, output }
    }
}

/// Ordered collection of samples
///
/// The order of samples does not influence training, but it fixes how
/// cross-validation folds are assigned. A set is never partially mutated;
/// phases that need fresh data replace it as a whole.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new(samples: Vec<Sample>) -> Self {
        SampleSet { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Outputs in sample order
    pub fn targets(&self) -> Array1<f64> {
        self.samples.iter().map(|s| s.output).collect()
    }

    /// Encode every input into a dense record matrix with shape `(n_samples, ndim)`
    ///
    /// `ndim` is the number of real features, i.e. the encoded length without
    /// the terminating node.
    pub fn records<E: Encoder<Point>>(&self, encoder: &E) -> Array2<f64> {
        let ndim = encoder.ndim();
        let mut records = Array2::zeros((self.samples.len(), ndim));
        for (mut row, sample) in records.rows_mut().into_iter().zip(self.samples.iter()) {
            row.assign(&encoder.encode(&sample.input).to_dense(ndim));
        }

        records
    }

    /// Build a `linfa` dataset, one row per sample in sample order
    pub fn to_dataset<E: Encoder<Point>>(&self, encoder: &E) -> Dataset<f64, f64, Ix1> {
        Dataset::new(self.records(encoder), self.targets())
            .with_feature_names(encoder.feature_names())
    }
}

impl From<Vec<Sample>> for SampleSet {
    fn from(samples: Vec<Sample>) -> Self {
        SampleSet { samples }
    }
}

impl FromIterator<Sample> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        SampleSet {
            samples: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SampleSet {
    type Item = Sample;
    type IntoIter = vec::IntoIter<Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl Index<usize> for SampleSet {
    type Output = Sample;

    fn index(&self, idx: usize) -> &Sample {
        &self.samples[idx]
    }
}
