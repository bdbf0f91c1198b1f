pub mod analyzer;
pub mod document;
pub mod error;
pub mod query;
pub mod score;
pub mod vocab;

use std::sync::{Arc, PoisonError, RwLock};

use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::analyzer::tokenize;
use crate::engine::document::Document;
use crate::engine::error::Result;
use crate::engine::query::{project, project_raw, tf_idf_vector};
use crate::engine::score::{rank, RankedResult};
use crate::engine::vocab::Vocabulary;
use crate::utils::spvec::SparseVector;

/// Position of an item in the corpus the index was built from.
pub type ItemId = u32;

/// One indexed catalog item: its id and unit TF·IDF vector.
///
/// Everything else about the item (title, price, stock) stays in the
/// caller's catalog, referenced by [`ItemId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry<N = f32>
where
    N: Float,
{
    item: ItemId,
    vector: SparseVector<N>,
}

impl<N> IndexEntry<N>
where
    N: Float,
{
    pub fn item(&self) -> ItemId {
        self.item
    }

    pub fn vector(&self) -> &SparseVector<N> {
        &self.vector
    }
}

/// Immutable searchable index over a corpus snapshot.
///
/// Built once from a corpus; read-only for its whole lifetime, so any
/// number of threads may query it concurrently without locking. There is
/// no incremental update: a changed catalog means building a new `Index`
/// and swapping it in via [`SharedIndex::publish`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index<N = f32>
where
    N: Float,
{
    vocab: Vocabulary,
    entries: Vec<IndexEntry<N>>,
}

impl<N> Index<N>
where
    N: Float + Into<f64> + Send + Sync,
{
    /// Build an index from a corpus snapshot.
    ///
    /// Tokenizes every document exactly once (in parallel), builds the
    /// frozen vocabulary, then vectorizes every document in parallel.
    /// Documents with no in-vocabulary terms are still indexed as zero
    /// vectors; they are unreachable by any query but keep item ids
    /// aligned with corpus positions.
    ///
    /// Fails with [`error::Error::EmptyCorpus`] for an empty corpus.
    pub fn build(corpus: &[Document], max_features: Option<usize>) -> Result<Self> {
        let docs_tokens: Vec<Vec<String>> = corpus
            .par_iter()
            .map(|doc| tokenize(&doc.combined_text()))
            .collect();
        let vocab = Vocabulary::build(&docs_tokens, max_features)?;
        let entries: Vec<IndexEntry<N>> = docs_tokens
            .par_iter()
            .enumerate()
            .map(|(i, tokens)| IndexEntry {
                item: i as ItemId,
                vector: tf_idf_vector(tokens, &vocab),
            })
            .collect();
        Ok(Index { vocab, entries })
    }

    /// Project query text and rank all items against it.
    pub fn search(&self, query: &str, k: usize) -> Result<Vec<RankedResult>> {
        let query_vec: SparseVector<N> = project(query, &self.vocab);
        rank(&query_vec, self, k)
    }

    /// [`Index::search`] for raw transport bytes; fails with
    /// [`error::Error::InvalidQuery`] when they are not valid UTF-8.
    pub fn search_raw(&self, query: &[u8], k: usize) -> Result<Vec<RankedResult>> {
        let query_vec: SparseVector<N> = project_raw(query, &self.vocab)?;
        rank(&query_vec, self, k)
    }

    /// The frozen vocabulary this index was built with.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Indexed entries in item-id order.
    pub fn entries(&self) -> &[IndexEntry<N>] {
        &self.entries
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build an index from a corpus snapshot. Convenience for
/// [`Index::build`].
pub fn build_index<N>(corpus: &[Document], max_features: Option<usize>) -> Result<Index<N>>
where
    N: Float + Into<f64> + Send + Sync,
{
    Index::build(corpus, max_features)
}

/// Published index slot for the rebuild-by-swap lifecycle.
///
/// Readers take a cheap [`Arc`] snapshot per query and keep using it for
/// the query's whole lifetime; [`SharedIndex::publish`] swaps the slot
/// wholesale, so a rebuild never tears an in-flight query.
#[derive(Debug)]
pub struct SharedIndex<N = f32>
where
    N: Float,
{
    slot: RwLock<Arc<Index<N>>>,
}

impl<N> SharedIndex<N>
where
    N: Float,
{
    pub fn new(index: Index<N>) -> Self {
        SharedIndex {
            slot: RwLock::new(Arc::new(index)),
        }
    }

    /// Snapshot of the currently published index.
    pub fn load(&self) -> Arc<Index<N>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Atomically replace the published index. In-flight readers keep the
    /// snapshot they loaded.
    pub fn publish(&self, index: Index<N>) -> Arc<Index<N>> {
        let next = Arc::new(index);
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = next.clone();
        next
    }
}
