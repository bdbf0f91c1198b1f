use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::error::{Error, Result};
use crate::utils::spvec::TermId;

/// Conventional vocabulary cap for catalog-sized corpora.
pub const DEFAULT_MAX_FEATURES: usize = 3000;

/// Frozen term dictionary of an index.
///
/// Maps each retained term to a dense [`TermId`] and keeps the document
/// frequency and smoothed IDF weight per term. Term ids are assigned in
/// sorted term order so identical corpora always produce identical
/// vocabularies. Built once per index; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: IndexMap<Box<str>, TermId>,
    df: Vec<u32>,
    idf: Vec<f64>,
    doc_count: u32,
}

impl Vocabulary {
    /// Build a vocabulary from per-document token lists.
    ///
    /// Each document must have been tokenized exactly once by the caller;
    /// document frequency counts distinct terms per document. With
    /// `max_features` set, only the top-M terms by document frequency are
    /// retained, ties at the cutoff going to the lexically smaller term.
    ///
    /// Fails with [`Error::EmptyCorpus`] for a zero-document corpus. A
    /// corpus whose every token is filtered away yields a valid empty
    /// vocabulary.
    pub fn build(docs_tokens: &[Vec<String>], max_features: Option<usize>) -> Result<Self> {
        if docs_tokens.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        // Sharded document-frequency counting: each rayon worker folds its
        // own partial map, merged once at the end.
        let df_map: HashMap<&str, u32> = docs_tokens
            .par_iter()
            .fold(HashMap::new, |mut partial, tokens| {
                let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
                for term in distinct {
                    *partial.entry(term).or_insert(0) += 1;
                }
                partial
            })
            .reduce(HashMap::new, |mut left, right| {
                for (term, count) in right {
                    *left.entry(term).or_insert(0) += count;
                }
                left
            });

        let mut ranked: Vec<(&str, u32)> = df_map.into_iter().collect();
        if let Some(cap) = max_features {
            if ranked.len() > cap {
                ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
                ranked.truncate(cap);
            }
        }
        // Dense ids in sorted term order, independent of hash iteration.
        ranked.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let doc_count = docs_tokens.len() as u32;
        let n = f64::from(doc_count);
        let mut terms = IndexMap::with_capacity(ranked.len());
        let mut df = Vec::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        for (id, (term, count)) in ranked.into_iter().enumerate() {
            terms.insert(Box::from(term), id as TermId);
            df.push(count);
            // smoothed IDF: strictly positive, defined even for df == n
            idf.push(((1.0 + n) / (1.0 + f64::from(count))).ln() + 1.0);
        }

        Ok(Vocabulary {
            terms,
            df,
            idf,
            doc_count,
        })
    }

    /// Look up the id of a term; `None` for out-of-vocabulary terms.
    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.terms.get(term).copied()
    }

    /// IDF weight of a term; 0.0 for ids outside the vocabulary.
    pub fn idf(&self, term: TermId) -> f64 {
        self.idf.get(term as usize).copied().unwrap_or(0.0)
    }

    /// Document frequency of a term; 0 for ids outside the vocabulary.
    pub fn df(&self, term: TermId) -> u32 {
        self.df.get(term as usize).copied().unwrap_or(0)
    }

    /// Number of documents the vocabulary was built from.
    pub fn doc_count(&self) -> u32 {
        self.doc_count
    }

    /// Number of retained terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate (term, id) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TermId)> + '_ {
        self.terms.iter().map(|(term, id)| (term.as_ref(), *id))
    }
}
