//! # Parallel Vectorizer

use std::sync::Arc;

use crate::encoding::SurnameEncoder;
use crate::types::CharToken;
use crate::vocab::CharVocab;

/// Batch-Level Parallel Vectorizer Wrapper.
///
/// Enables ``rayon`` vectorization of batches. Safe because encoding is
/// pure over the frozen vocabulary; item order is preserved.
#[derive(Debug, Clone)]
pub struct ParallelRayonVectorizer<E: SurnameEncoder> {
    /// Inner vectorizer.
    pub inner: E,
}

impl<E: SurnameEncoder> ParallelRayonVectorizer<E> {
    /// Create a new parallel vectorizer.
    ///
    /// ## Arguments
    /// * `inner` - The surname vectorizer to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonVectorizer` instance.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: SurnameEncoder> SurnameEncoder for ParallelRayonVectorizer<E> {
    fn vocab(&self) -> &Arc<CharVocab> {
        self.inner.vocab()
    }

    fn max_len(&self) -> usize {
        self.inner.max_len()
    }

    fn vectorize(
        &self,
        surname: &str,
    ) -> Vec<CharToken> {
        self.inner.vectorize(surname)
    }

    fn vectorize_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<CharToken>> {
        use rayon::prelude::*;
        batch
            .par_iter()
            .map(|surname| self.inner.vectorize(surname))
            .collect()
    }
}
