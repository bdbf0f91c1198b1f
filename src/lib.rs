/// This crate is a lexical similarity ranking engine for fixed catalogs.
///
/// It answers free-text queries against a static corpus of catalog items
/// by building one unit TF·IDF vector per item, projecting each query into
/// the same vector space, and returning the top-K items by cosine
/// similarity with a deterministic, reproducible ordering.
///
/// Transport, catalog ingestion/cleaning and presentation belong to the
/// caller; this crate is the in-memory indexing and ranking core only.
pub mod engine;
pub mod utils;

/// Fixed, typed catalog record schema fed to the index build.
/// The engine indexes `combined_text()` and never guesses field names;
/// everything non-lexical stays in the caller's catalog, keyed by item id.
pub use engine::document::Document;

/// Immutable searchable index: frozen vocabulary plus one unit TF·IDF
/// vector per catalog item. Build once with `Index::build`, share
/// read-only across any number of query threads, rebuild by constructing
/// a new value.
pub use engine::Index;

/// One indexed item (id + vector) inside an `Index`.
pub use engine::IndexEntry;

/// Published index slot for the rebuild lifecycle: queries `load()` a
/// snapshot, rebuilds `publish()` a replacement atomically; in-flight
/// queries keep the snapshot they started with.
pub use engine::SharedIndex;

/// Build an index from a corpus snapshot. Convenience for `Index::build`.
pub use engine::build_index;

/// Position of an item in the corpus its index was built from.
pub use engine::ItemId;

/// Frozen term dictionary: term → dense id, plus document frequencies and
/// smoothed IDF weights per term. `DEFAULT_MAX_FEATURES` is the
/// conventional vocabulary cap for catalog-sized corpora.
pub use engine::vocab::{Vocabulary, DEFAULT_MAX_FEATURES};

/// Text normalization shared by documents and queries: lowercase, split
/// on non-alphanumeric boundaries, drop stop words.
pub use engine::analyzer::tokenize;

/// Query projection into an index's vector space. `project` takes text;
/// `project_raw` takes transport bytes that still need UTF-8 validation.
pub use engine::query::{project, project_raw};

/// Similarity ranking: cosine scores for every indexed item, bounded-heap
/// top-k selection, ties broken by ascending item id.
pub use engine::score::{rank, RankedResult};

/// Error taxonomy and result alias of the engine. Only out-of-contract
/// input is an error; unhelpful-but-valid input ranks normally.
pub use engine::error::{Error, Result};

/// Canonical sparse vector (strictly increasing term ids, unit L2 norm)
/// and the dense term id type.
pub use utils::spvec::{SparseVector, TermId};
