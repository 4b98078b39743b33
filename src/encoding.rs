//! Sparse feature encoding of model inputs
//!
//! Inputs are turned into a list of `(index, value)` nodes with 1-based,
//! strictly increasing indices, closed by a terminator node with index `-1`.
//! The encoder hands out an owned vector of exactly the right length, so
//! callers never size a buffer themselves.

use std::slice;

use ndarray::Array1;

use crate::sample::Point;

/// Index of the node closing every feature vector
pub const TERMINATOR: i32 = -1;

/// A single `(index, value)` entry of a feature vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureNode {
    pub index: i32,
    pub value: f64,
}

impl FeatureNode {
    pub fn new(index: i32, value: f64) -> Self {
        FeatureNode { index, value }
    }

    pub fn terminator() -> Self {
        FeatureNode {
            index: TERMINATOR,
            value: 0.0,
        }
    }

    pub fn is_terminator(&self) -> bool {
        self.index == TERMINATOR
    }
}

/// Terminated list of feature nodes
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    nodes: Vec<FeatureNode>,
}

impl FeatureVector {
    /// Build a feature vector from `(index, value)` pairs and append the terminator
    ///
    /// # Panics
    ///
    /// If the indices are not 1-based and strictly increasing.
    pub fn from_pairs<I: IntoIterator<Item = (i32, f64)>>(pairs: I) -> Self {
        let iter = pairs.into_iter();
        let mut nodes = Vec::with_capacity(iter.size_hint().0 + 1);
        let mut last = 0;
        for (index, value) in iter {
            assert!(
                index > last,
                "feature indices must be 1-based and strictly increasing, got {} after {}",
                index,
                last
            );
            last = index;
            nodes.push(FeatureNode::new(index, value));
        }
        nodes.push(FeatureNode::terminator());

        FeatureVector { nodes }
    }

    /// Number of nodes, terminator included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A feature vector always holds its terminator
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn nodes(&self) -> &[FeatureNode] {
        &self.nodes
    }

    pub fn iter(&self) -> slice::Iter<'_, FeatureNode> {
        self.nodes.iter()
    }

    /// Nodes carrying a value, i.e. everything before the terminator
    pub fn features(&self) -> &[FeatureNode] {
        &self.nodes[..self.nodes.len() - 1]
    }

    /// Scatter the nodes into a dense row of length `ndim`
    ///
    /// Node `i` lands in column `i - 1`, columns without a node stay zero and
    /// nodes beyond `ndim` are dropped.
    pub fn to_dense(&self, ndim: usize) -> Array1<f64> {
        let mut row = Array1::zeros(ndim);
        for node in self.features() {
            let col = (node.index - 1) as usize;
            if col < ndim {
                row[col] = node.value;
            }
        }

        row
    }
}

impl<'a> IntoIterator for &'a FeatureVector {
    type Item = &'a FeatureNode;
    type IntoIter = slice::Iter<'a, FeatureNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Turns a model input into a feature vector
pub trait Encoder<I> {
    /// Number of real features produced for every input
    fn ndim(&self) -> usize;

    /// Length of the encoded vector for `input`, terminator included
    fn nfeatures(&self, input: &I) -> usize;

    fn encode(&self, input: &I) -> FeatureVector;

    fn feature_names(&self) -> Vec<String> {
        (1..=self.ndim()).map(|i| format!("feature {}", i)).collect()
    }
}

/// Encodes a point as `[(1, x), (2, y), (-1, _)]`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanarEncoder;

impl Encoder<Point> for PlanarEncoder {
    fn ndim(&self) -> usize {
        2
    }

    fn nfeatures(&self, _input: &Point) -> usize {
        3
    }

    fn encode(&self, input: &Point) -> FeatureVector {
        FeatureVector::from_pairs(vec![(1, input.x), (2, input.y)])
    }

    fn feature_names(&self) -> Vec<String> {
        vec!["x".to_string(), "y".to_string()]
    }
}
