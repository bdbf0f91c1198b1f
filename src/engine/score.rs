use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::error::{Error, Result};
use crate::engine::{Index, ItemId};
use crate::utils::spvec::SparseVector;
use crate::utils::topk::top_k;

/// One ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Position of the item in the corpus the index was built from.
    pub item: ItemId,
    /// Cosine similarity to the query, in [0, 1].
    pub score: f64,
    /// 1-based rank position.
    pub rank: usize,
}

/// Rank every indexed item against a projected query vector.
///
/// Both sides are unit vectors, so cosine similarity is a plain merge-walk
/// dot product. Scores are computed for all entries in parallel, then the
/// top k are selected with a bounded heap; equal scores order by ascending
/// item id, so the output is reproducible across runs.
///
/// Returns `min(k, |index|)` results. `k == 0` fails with
/// [`Error::InvalidArgument`]; a k beyond the corpus size clamps silently.
/// A zero query vector is legal: every score is 0.0 and the tie-break
/// order decides — callers wanting "no match" apply their own threshold.
pub fn rank<N>(query: &SparseVector<N>, index: &Index<N>, k: usize) -> Result<Vec<RankedResult>>
where
    N: Float + Into<f64> + Send + Sync,
{
    if k == 0 {
        return Err(Error::InvalidArgument("k must be at least 1".into()));
    }
    let scores: Vec<f64> = index
        .entries()
        .par_iter()
        .map(|entry| query.dot(entry.vector()).clamp(0.0, 1.0))
        .collect();
    let results = top_k(&scores, k)
        .into_iter()
        .enumerate()
        .map(|(i, (item, score))| RankedResult {
            item,
            score,
            rank: i + 1,
        })
        .collect();
    Ok(results)
}
