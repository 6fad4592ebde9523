//! # Row Sources and Dataset Adaptation
//!
//! A [`RowSource`] provides positional access to raw
//! `(surname, nationality)` rows; a [`SurnameDataset`] adapts those rows
//! into fixed-length [`Example`] records for an external training loop.

pub mod label_index;
pub mod row_source;
pub mod surname_dataset;

pub use label_index::LabelIndex;
pub use row_source::{RowSource, SurnameRow, VecRowSource};
pub use surname_dataset::{Example, SurnameDataset, build_vocab};
