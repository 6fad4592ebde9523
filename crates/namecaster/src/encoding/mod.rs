//! # Fixed-Length Surname Encoding
//!
//! Vectorization maps each character of a surname through a frozen
//! [`crate::vocab::CharVocab`], truncates to the configured length, and
//! right-pads with the pad token. The output length is always exactly
//! the configured length.

pub mod vectorizer;

#[cfg(feature = "rayon")]
pub mod rayon_vectorizer;

pub use vectorizer::{DEFAULT_MAX_SURNAME_LEN, FixedLenVectorizer, SurnameEncoder};

#[cfg(feature = "rayon")]
pub use rayon_vectorizer::ParallelRayonVectorizer;
