//! # Row → Example Adapter

use crate::dataset::{LabelIndex, RowSource};
use crate::encoding::SurnameEncoder;
use crate::errors::NCResult;
use crate::types::CharToken;
use crate::vocab::{CharVocab, CharVocabBuilder};

/// One training example.
///
/// This is the record format consumed by an external training loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Fixed-length character index sequence.
    pub surname: Vec<CharToken>,

    /// Class index of the nationality label.
    pub nationality: usize,
}

/// Scan every surname in a row source and build the character vocabulary.
///
/// This is the explicit build phase: it runs over the entire corpus and
/// freezes the vocabulary before any encoding begins, so index assignment
/// is reproducible across runs and across parallel encoding workers.
///
/// ## Arguments
/// * `rows` - The row source to scan.
///
/// ## Returns
/// The frozen vocabulary, or an error from the row source.
pub fn build_vocab<R: RowSource>(rows: &R) -> NCResult<CharVocab> {
    let mut builder = CharVocabBuilder::new();
    for i in 0..rows.count() {
        builder.observe(&rows.get(i)?.surname);
    }
    log::info!(
        "scanned {} rows: character vocabulary has {} entries",
        rows.count(),
        builder.len()
    );
    Ok(builder.build())
}

/// Adapter from raw rows to training examples.
///
/// `len()` equals the row source's count, and `get(i)` is valid for every
/// position in `[0, len)` whose row carries a mapped nationality.
pub struct SurnameDataset<R: RowSource, E: SurnameEncoder> {
    rows: R,
    encoder: E,
    labels: LabelIndex,
}

impl<R: RowSource, E: SurnameEncoder> SurnameDataset<R, E> {
    /// Create a new dataset adapter.
    ///
    /// ## Arguments
    /// * `rows` - The row source.
    /// * `encoder` - The surname vectorizer, built over a vocabulary
    ///   frozen before this call.
    /// * `labels` - The externally supplied nationality → index table.
    pub fn new(
        rows: R,
        encoder: E,
        labels: LabelIndex,
    ) -> Self {
        Self {
            rows,
            encoder,
            labels,
        }
    }

    /// Number of examples; equals the row source's count.
    pub fn len(&self) -> usize {
        self.rows.count()
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the attached label index.
    pub fn labels(&self) -> &LabelIndex {
        &self.labels
    }

    /// Get the attached vectorizer.
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Build the example for one row.
    ///
    /// The surname and the nationality are always read from the same row.
    /// A nationality missing from the label table propagates as
    /// [`crate::NamecasterError::UnknownNationality`]; no example is
    /// produced for that row.
    ///
    /// ## Arguments
    /// * `index` - The row position, valid in `[0, len)`.
    ///
    /// ## Returns
    /// The encoded example, or the first error encountered.
    pub fn get(
        &self,
        index: usize,
    ) -> NCResult<Example> {
        let row = self.rows.get(index)?;
        let nationality = self.labels.lookup(&row.nationality)?;
        Ok(Example {
            surname: self.encoder.vectorize(&row.surname),
            nationality,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dataset::VecRowSource;
    use crate::encoding::FixedLenVectorizer;
    use crate::errors::NamecasterError;
    use crate::types::{check_is_send, check_is_sync};
    use crate::vocab::PAD_TOKEN;

    fn test_dataset() -> SurnameDataset<VecRowSource, FixedLenVectorizer> {
        let rows = VecRowSource::from_pairs([
            ("Li", "Chinese"),
            ("Nguyen", "Vietnamese"),
            ("Xx", "Atlantean"),
        ]);
        let vocab = Arc::new(build_vocab(&rows).unwrap());
        let encoder = FixedLenVectorizer::with_max_len(vocab, 5);
        let labels = LabelIndex::from_pairs([("Chinese", 0), ("Vietnamese", 1)]);
        SurnameDataset::new(rows, encoder, labels)
    }

    #[test]
    fn test_len_matches_row_source() {
        let dataset = test_dataset();
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());

        check_is_send(&dataset);
        check_is_sync(&dataset);
    }

    #[test]
    fn test_get_pairs_sequence_and_label() {
        let dataset = test_dataset();
        let vocab = dataset.encoder().vocab().clone();

        let example = dataset.get(0).unwrap();
        assert_eq!(
            example.surname,
            vec![
                vocab.lookup_index('L'),
                vocab.lookup_index('i'),
                PAD_TOKEN,
                PAD_TOKEN,
                PAD_TOKEN,
            ]
        );
        assert_eq!(example.nationality, 0);

        // Label comes from the same row as the surname.
        assert_eq!(dataset.get(1).unwrap().nationality, 1);
    }

    #[test]
    fn test_unmapped_nationality_propagates() {
        let dataset = test_dataset();
        assert!(matches!(
            dataset.get(2),
            Err(NamecasterError::UnknownNationality { nationality }) if nationality == "Atlantean"
        ));
    }

    #[test]
    fn test_out_of_bounds_propagates() {
        let dataset = test_dataset();
        assert!(matches!(
            dataset.get(3),
            Err(NamecasterError::RowOutOfBounds { index: 3, count: 3 })
        ));
    }
}
