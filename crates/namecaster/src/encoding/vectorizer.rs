//! # Surname Vectorizer

use std::sync::Arc;

use crate::types::CharToken;
use crate::vocab::{CharVocab, PAD_TOKEN};

/// Default number of character slots per encoded surname.
pub const DEFAULT_MAX_SURNAME_LEN: usize = 20;

/// A trait for surname vectorizers.
///
/// Encoding is pure given the frozen vocabulary: no side effects, no
/// failure modes. Unknown characters degrade to the unknown token.
pub trait SurnameEncoder: Send + Sync {
    /// Return the attached character vocabulary.
    ///
    /// ## Returns
    /// A reference to the internal `CharVocab` arc.
    fn vocab(&self) -> &Arc<CharVocab>;

    /// The fixed output length.
    fn max_len(&self) -> usize;

    /// Encode a surname into a fixed-length index sequence.
    ///
    /// ## Arguments
    /// * `surname` - The surname to encode.
    ///
    /// ## Returns
    /// A vector of exactly [`max_len`](Self::max_len) indices.
    fn vectorize(
        &self,
        surname: &str,
    ) -> Vec<CharToken>;

    /// Encode a batch of surnames.
    ///
    /// ## Arguments
    /// * `batch` - The surnames to encode.
    ///
    /// ## Returns
    /// One fixed-length index sequence per input, in order.
    fn vectorize_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<CharToken>> {
        batch.iter().map(|surname| self.vectorize(surname)).collect()
    }
}

/// Serial fixed-length vectorizer.
///
/// Surnames longer than `max_len` keep only their first `max_len`
/// characters; shorter ones are right-padded with [`PAD_TOKEN`]. A
/// sequence is never both truncated and padded.
#[derive(Debug, Clone)]
pub struct FixedLenVectorizer {
    vocab: Arc<CharVocab>,
    max_len: usize,
}

impl FixedLenVectorizer {
    /// Create a vectorizer with the default length.
    ///
    /// ## Arguments
    /// * `vocab` - The frozen character vocabulary.
    pub fn new(vocab: Arc<CharVocab>) -> Self {
        Self::with_max_len(vocab, DEFAULT_MAX_SURNAME_LEN)
    }

    /// Create a vectorizer with an explicit length.
    ///
    /// ## Arguments
    /// * `vocab` - The frozen character vocabulary.
    /// * `max_len` - The fixed output length.
    pub fn with_max_len(
        vocab: Arc<CharVocab>,
        max_len: usize,
    ) -> Self {
        Self { vocab, max_len }
    }

    /// Encode a surname appending to a target buffer.
    ///
    /// Appends exactly `max_len` indices.
    ///
    /// ## Arguments
    /// * `surname` - The surname to encode.
    /// * `out` - The target index buffer to append to.
    pub fn vectorize_append(
        &self,
        surname: &str,
        out: &mut Vec<CharToken>,
    ) {
        let mut produced = 0;
        for c in surname.chars().take(self.max_len) {
            out.push(self.vocab.lookup_index(c));
            produced += 1;
        }
        out.resize(out.len() + (self.max_len - produced), PAD_TOKEN);
    }
}

impl SurnameEncoder for FixedLenVectorizer {
    fn vocab(&self) -> &Arc<CharVocab> {
        &self.vocab
    }

    fn max_len(&self) -> usize {
        self.max_len
    }

    fn vectorize(
        &self,
        surname: &str,
    ) -> Vec<CharToken> {
        let mut out = Vec::with_capacity(self.max_len);
        self.vectorize_append(surname, &mut out);
        out
    }
}
