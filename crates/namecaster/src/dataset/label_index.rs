//! # Nationality Label Index

use crate::errors::{NCResult, NamecasterError};
use crate::types::NCHashMap;

/// Closed nationality → class index table.
///
/// The table is supplied by the caller and fixed at construction; looking
/// up an unmapped label is an error, never a silent default, since a miss
/// means the label configuration does not match the row source.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    map: NCHashMap<String, usize>,
}

impl LabelIndex {
    /// Create a label index from explicit `(label, index)` pairs.
    ///
    /// ## Arguments
    /// * `pairs` - An iterator of label strings and zero-based indices.
    ///
    /// ## Returns
    /// A new `LabelIndex` instance.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(label, index)| (label.into(), index))
                .collect(),
        }
    }

    /// Create a label index by enumerating labels in order.
    ///
    /// ## Arguments
    /// * `labels` - An iterator of label strings; position becomes index.
    ///
    /// ## Returns
    /// A new `LabelIndex` instance with contiguous zero-based indices.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            map: labels
                .into_iter()
                .enumerate()
                .map(|(index, label)| (label.into(), index))
                .collect(),
        }
    }

    /// Look up the class index for a nationality label.
    ///
    /// ## Arguments
    /// * `nationality` - The label to look up.
    ///
    /// ## Returns
    /// The class index, or [`NamecasterError::UnknownNationality`].
    pub fn lookup(
        &self,
        nationality: &str,
    ) -> NCResult<usize> {
        self.map
            .get(nationality)
            .copied()
            .ok_or_else(|| NamecasterError::UnknownNationality {
                nationality: nationality.into(),
            })
    }

    /// Number of labels in the table.
    pub fn num_classes(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let labels = LabelIndex::from_pairs([("Chinese", 0), ("Vietnamese", 1)]);
        assert_eq!(labels.num_classes(), 2);
        assert_eq!(labels.lookup("Vietnamese").unwrap(), 1);
    }

    #[test]
    fn test_from_labels_enumerates() {
        let labels = LabelIndex::from_labels(["Chinese", "Vietnamese", "Irish"]);
        assert_eq!(labels.lookup("Chinese").unwrap(), 0);
        assert_eq!(labels.lookup("Irish").unwrap(), 2);
    }

    #[test]
    fn test_missing_label_propagates() {
        let labels = LabelIndex::from_labels(["Chinese"]);
        assert!(matches!(
            labels.lookup("Klingon"),
            Err(NamecasterError::UnknownNationality { nationality }) if nationality == "Klingon"
        ));
    }
}
