use std::cmp::Ordering;

use num::Float;
use serde::{Deserialize, Serialize};

/// Dense integer id of a vocabulary term, 0-based.
pub type TermId = u32;

/// Sparse term-weight vector in canonical form.
///
/// Stored as SoA (term ids / weights) with term ids strictly increasing,
/// so a dot product is a single merge-walk over the two id lists.
///
/// `N` is the stored weight type (`f32` by default, `f64` for full
/// precision). Weights are built from f64 intermediates and quantized on
/// construction; accumulation always happens in f64.
///
/// Invariant: a vector produced by [`SparseVector::unit_from_raw`] either
/// has L2 norm 1.0 (within floating tolerance of `N`) or is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector<N = f32>
where
    N: Float,
{
    terms: Vec<TermId>,
    weights: Vec<N>,
}

impl<N> Default for SparseVector<N>
where
    N: Float,
{
    fn default() -> Self {
        SparseVector {
            terms: Vec::new(),
            weights: Vec::new(),
        }
    }
}

impl<N> SparseVector<N>
where
    N: Float + Into<f64>,
{
    /// Create an empty (all-zero) vector.
    pub fn new() -> Self {
        SparseVector {
            terms: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Build a unit vector from raw (term id, weight) pairs.
    ///
    /// `raw` must be sorted by strictly increasing term id. The weights are
    /// L2-normalized before quantization to `N`; pairs with zero weight are
    /// dropped. If every weight is zero the result is the empty vector.
    pub fn unit_from_raw(raw: Vec<(TermId, f64)>) -> Self {
        debug_assert!(
            raw.windows(2).all(|w| w[0].0 < w[1].0),
            "term ids must be strictly increasing"
        );
        let norm = raw.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Self::new();
        }
        let mut terms = Vec::with_capacity(raw.len());
        let mut weights = Vec::with_capacity(raw.len());
        for (term, w) in raw {
            if w == 0.0 {
                continue;
            }
            terms.push(term);
            weights.push(N::from(w / norm).unwrap_or_else(N::zero));
        }
        SparseVector { terms, weights }
    }

    /// Dot product by merge-walk over the two sorted term lists.
    ///
    /// O(overlap) instead of O(vocabulary); for two unit vectors this is
    /// their cosine similarity.
    pub fn dot(&self, other: &Self) -> f64 {
        let mut i = 0;
        let mut j = 0;
        let mut acc = 0.0f64;
        while i < self.terms.len() && j < other.terms.len() {
            match self.terms[i].cmp(&other.terms[j]) {
                Ordering::Equal => {
                    acc += self.weights[i].into() * other.weights[j].into();
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        acc
    }

    /// Euclidean norm, accumulated in f64.
    pub fn norm(&self) -> f64 {
        self.weights
            .iter()
            .map(|w| {
                let w: f64 = (*w).into();
                w * w
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Number of stored (non-zero) coordinates.
    pub fn nnz(&self) -> usize {
        self.terms.len()
    }

    /// True for the all-zero vector.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate stored coordinates in term id order.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, N)> + '_ {
        self.terms.iter().copied().zip(self.weights.iter().copied())
    }

    /// Expand into a dense f64 vector of the given dimensionality.
    /// Cross-check helper for the sparse dot product.
    pub fn to_dense(&self, dim: usize) -> Vec<f64> {
        let mut dense = vec![0.0; dim];
        for (term, w) in self.iter() {
            dense[term as usize] = w.into();
        }
        dense
    }
}
