//! # `namecaster` Surname Classification Core
//!
//! Character-level classification of surnames into nationality categories.
//!
//! The crate covers the deterministic text-to-tensor pipeline and the
//! classifier's forward pass; training loops, losses, optimizers, and
//! weight persistence are external collaborators.
//!
//! See:
//! * [`vocab`] to build and query character vocabularies.
//! * [`encoding`] to vectorize surnames into fixed-length index sequences.
//! * [`dataset`] to adapt raw rows into training examples.
//! * [`model`] for the feed-forward classifier.
//!
//! ## Pipeline
//!
//! The vocabulary is built in a distinct phase over the whole corpus,
//! then frozen; only the frozen [`vocab::CharVocab`] is used for
//! encoding, so index assignment is reproducible across runs and across
//! parallel encoding workers.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use namecaster::dataset::{LabelIndex, SurnameDataset, VecRowSource, build_vocab};
//! use namecaster::encoding::FixedLenVectorizer;
//!
//! let rows = VecRowSource::from_pairs([
//!     ("Nakamura", "Japanese"),
//!     ("O'Neill", "Irish"),
//! ]);
//! let labels = LabelIndex::from_pairs([("Japanese", 0), ("Irish", 1)]);
//!
//! let vocab = Arc::new(build_vocab(&rows).unwrap());
//! let encoder = FixedLenVectorizer::new(vocab);
//!
//! let dataset = SurnameDataset::new(rows, encoder, labels);
//! let example = dataset.get(0).unwrap();
//! assert_eq!(example.surname.len(), 20);
//! assert_eq!(example.nationality, 0);
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap` implementations for ``ahash``; which is a
//! performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::NCHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel batch vectorization wrappers using the
//! ``rayon`` crate.
#![warn(missing_docs, unused)]

pub mod dataset;
pub mod encoding;
pub mod errors;
pub mod model;
pub mod types;
pub mod vocab;

pub use errors::{NCResult, NamecasterError};
