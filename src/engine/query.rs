use std::collections::BTreeMap;

use num::Float;

use crate::engine::analyzer::tokenize;
use crate::engine::error::{Error, Result};
use crate::engine::vocab::Vocabulary;
use crate::utils::spvec::{SparseVector, TermId};

/// Shared TF·IDF pipeline for documents and queries: count term
/// frequencies restricted to the vocabulary, weight by IDF, L2-normalize.
/// The BTreeMap keeps term ids sorted, which is the vector's canonical form.
pub(crate) fn tf_idf_vector<N>(tokens: &[String], vocab: &Vocabulary) -> SparseVector<N>
where
    N: Float + Into<f64>,
{
    let mut counts: BTreeMap<TermId, u32> = BTreeMap::new();
    for token in tokens {
        if let Some(id) = vocab.term_id(token) {
            *counts.entry(id).or_insert(0) += 1;
        }
    }
    let raw: Vec<(TermId, f64)> = counts
        .into_iter()
        .map(|(id, tf)| (id, f64::from(tf) * vocab.idf(id)))
        .collect();
    SparseVector::unit_from_raw(raw)
}

/// Project query text into the index's vector space.
///
/// Uses the frozen vocabulary and IDF table; out-of-vocabulary tokens are
/// silently dropped. A query with no in-vocabulary terms projects to the
/// zero vector, which is legal input for ranking (it scores 0 everywhere).
pub fn project<N>(text: &str, vocab: &Vocabulary) -> SparseVector<N>
where
    N: Float + Into<f64>,
{
    tf_idf_vector(&tokenize(text), vocab)
}

/// Project raw transport bytes, validating that they are text.
///
/// The only malformed-query condition: input that is not valid UTF-8 fails
/// with [`Error::InvalidQuery`]. "No matching terms" is never an error.
pub fn project_raw<N>(bytes: &[u8], vocab: &Vocabulary) -> Result<SparseVector<N>>
where
    N: Float + Into<f64>,
{
    let text =
        std::str::from_utf8(bytes).map_err(|e| Error::InvalidQuery(e.to_string()))?;
    Ok(project(text, vocab))
}
