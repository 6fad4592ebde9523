//! # Character Vocabularies
//!
//! Vocabulary construction is two-phase: a [`CharVocabBuilder`] grows the
//! mapping during a corpus scan, and [`CharVocabBuilder::build`] freezes
//! it into a read-only [`CharVocab`] used for encoding.

pub mod char_vocab;

pub use char_vocab::{CharVocab, CharVocabBuilder, PAD_TEXT, PAD_TOKEN, UNK_TEXT, UNK_TOKEN};
