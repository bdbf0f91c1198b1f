use thiserror::Error;

/// Error taxonomy of the ranking engine.
///
/// Only out-of-contract input is an error. Capped vocabularies, zero-weight
/// documents, zero-weight queries and `k` beyond the corpus size are all
/// normal cases with well-defined output. The engine never logs, retries or
/// falls back internally; every error is returned to the immediate caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Index build was asked to run over zero documents.
    #[error("corpus contains no documents")]
    EmptyCorpus,

    /// An out-of-contract scalar argument, e.g. `k == 0`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Query input is not valid text. Distinct from a query with no
    /// matching terms, which ranks normally with all-zero scores.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

pub type Result<T> = core::result::Result<T, Error>;
