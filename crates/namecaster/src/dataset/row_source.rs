//! # Row Source Trait

use crate::errors::{NCResult, NamecasterError};

/// One raw corpus row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurnameRow {
    /// The surname text.
    pub surname: String,

    /// The nationality label text.
    pub nationality: String,
}

/// A trait for positional access to `(surname, nationality)` rows.
///
/// Storage backends (in-memory lists, files, database cursors) implement
/// this so the encoding pipeline never touches storage directly.
pub trait RowSource: Send + Sync {
    /// Number of rows.
    fn count(&self) -> usize;

    /// Get the row at a position.
    ///
    /// ## Arguments
    /// * `index` - The row position, valid in `[0, count)`.
    ///
    /// ## Returns
    /// The row, or [`NamecasterError::RowOutOfBounds`].
    fn get(
        &self,
        index: usize,
    ) -> NCResult<SurnameRow>;
}

/// In-memory row source.
#[derive(Debug, Clone, Default)]
pub struct VecRowSource {
    rows: Vec<SurnameRow>,
}

impl From<Vec<SurnameRow>> for VecRowSource {
    fn from(rows: Vec<SurnameRow>) -> Self {
        Self { rows }
    }
}

impl VecRowSource {
    /// Create a row source from `(surname, nationality)` pairs.
    ///
    /// ## Arguments
    /// * `pairs` - An iterator of surname and nationality strings.
    ///
    /// ## Returns
    /// A new `VecRowSource` instance.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            rows: pairs
                .into_iter()
                .map(|(surname, nationality)| SurnameRow {
                    surname: surname.into(),
                    nationality: nationality.into(),
                })
                .collect(),
        }
    }
}

impl RowSource for VecRowSource {
    fn count(&self) -> usize {
        self.rows.len()
    }

    fn get(
        &self,
        index: usize,
    ) -> NCResult<SurnameRow> {
        self.rows
            .get(index)
            .cloned()
            .ok_or(NamecasterError::RowOutOfBounds {
                index,
                count: self.rows.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_row_source() {
        let rows = VecRowSource::from_pairs([("Li", "Chinese"), ("Nguyen", "Vietnamese")]);
        assert_eq!(rows.count(), 2);

        let row = rows.get(1).unwrap();
        assert_eq!(row.surname, "Nguyen");
        assert_eq!(row.nationality, "Vietnamese");
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let rows = VecRowSource::from_pairs([("Li", "Chinese")]);
        assert!(matches!(
            rows.get(1),
            Err(NamecasterError::RowOutOfBounds { index: 1, count: 1 })
        ));
    }
}
