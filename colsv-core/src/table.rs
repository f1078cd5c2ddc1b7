// The data model the engine formats. Deliberately dumb: a `Table` is just
// columns of equal length. Building one from raw application data (parsing,
// factor classification, etc.) is the caller's job; this crate only needs
// to format what it's handed.

use colsv_base::{err, Result};
use std::collections::HashMap;

/// One column's worth of typed, row-aligned data.
///
/// `Int32`/`Int64` carry their own NA sentinel (the platform min value),
/// matching how the wire format treats them: there is no separate validity
/// bitmap to consult. `Bool` and `String` use `Option` since there is no
/// in-band sentinel available for them.
#[derive(Debug, Clone)]
pub enum Column {
    Bool(Vec<Option<bool>>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    String(Vec<Option<Vec<u8>>>),
    /// 1-based codes into `dictionary`; code `0` denotes NA.
    Factor {
        codes: Vec<i32>,
        dictionary: Vec<Vec<u8>>,
    },
}

pub const NA_INT32: i32 = i32::MIN;
pub const NA_INT64: i64 = i64::MIN;

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Bool(v) => v.len(),
            Column::Int32(v) => v.len(),
            Column::Int64(v) => v.len(),
            Column::Float64(v) => v.len(),
            Column::String(v) => v.len(),
            Column::Factor { codes, .. } => codes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for columns whose cell values are formatted as IEEE doubles.
    pub(crate) fn is_float64(&self) -> bool {
        matches!(self, Column::Float64(_))
    }

    /// True for columns whose cell values are formatted as plain signed
    /// integers with no dictionary or boolean rendering in between.
    pub(crate) fn is_plain_int(&self) -> bool {
        matches!(self, Column::Int32(_) | Column::Int64(_))
    }
}

/// A rectangular, equal-length sequence of named columns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
    nrow: usize,
}

impl Table {
    /// Builds a table from named columns, checking that every column has
    /// the same length up front (spec invariant: all columns share `nrow`).
    pub fn new(columns: Vec<(String, Column)>) -> Result<Self> {
        let nrow = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        for (name, col) in &columns {
            if col.len() != nrow {
                return Err(err(format!(
                    "column '{name}' has length {} but column 1 has length {nrow}",
                    col.len()
                )));
            }
        }
        let (names, columns) = columns.into_iter().unzip();
        Ok(Table {
            names,
            columns,
            nrow,
        })
    }

    pub fn nrow(&self) -> usize {
        self.nrow
    }

    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// True when every column is `Float64`, the layout the turbo all-double
    /// fast path requires.
    pub(crate) fn all_float64(&self) -> bool {
        !self.columns.is_empty() && self.columns.iter().all(Column::is_float64)
    }

    /// True when every column is a plain (non-factor) integer column, the
    /// layout the turbo all-integer fast path requires.
    pub(crate) fn all_plain_int(&self) -> bool {
        !self.columns.is_empty() && self.columns.iter().all(Column::is_plain_int)
    }

    /// Builds a `Factor` column from raw byte strings, interning each value
    /// into a shared dictionary (hashing via `rapidhash` to keep the
    /// dedup lookup off the growing-linearly path `Heap`-style byte search
    /// would otherwise take). `None` values become code 0.
    ///
    /// This is a convenience for callers who don't already carry a
    /// dictionary-coded column; `write_table` itself never calls this.
    pub fn intern_column(values: impl IntoIterator<Item = Option<Vec<u8>>>) -> Column {
        let mut dictionary: Vec<Vec<u8>> = Vec::new();
        let mut index: HashMap<u64, Vec<u32>> = HashMap::new();
        let mut codes = Vec::new();
        for value in values {
            match value {
                None => codes.push(0),
                Some(bytes) => {
                    let hash = rapidhash::rapidhash(&bytes);
                    let bucket = index.entry(hash).or_default();
                    let found = bucket
                        .iter()
                        .find(|&&slot| dictionary[slot as usize] == bytes)
                        .copied();
                    let slot = match found {
                        Some(slot) => slot,
                        None => {
                            let slot = dictionary.len() as u32;
                            dictionary.push(bytes);
                            bucket.push(slot);
                            slot
                        }
                    };
                    codes.push(slot as i32 + 1);
                }
            }
        }
        Column::Factor { codes, dictionary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn mismatched_column_lengths_are_rejected() {
        let result = Table::new(vec![
            ("a".into(), Column::Int32(vec![1, 2, 3])),
            ("b".into(), Column::Int32(vec![1, 2])),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn equal_length_columns_are_accepted() {
        let table = Table::new(vec![
            ("a".into(), Column::Int32(vec![1, 2, 3])),
            ("b".into(), Column::Int32(vec![4, 5, 6])),
        ])
        .unwrap();
        assert_eq!(table.nrow(), 3);
        assert_eq!(table.ncol(), 2);
    }

    #[test]
    fn intern_column_deduplicates_values() {
        let column = Table::intern_column(vec![
            Some(b"red".to_vec()),
            None,
            Some(b"blue".to_vec()),
            Some(b"red".to_vec()),
        ]);
        match column {
            Column::Factor { codes, dictionary } => {
                assert_eq!(dictionary, vec![b"red".to_vec(), b"blue".to_vec()]);
                assert_eq!(codes, vec![1, 0, 2, 1]);
            }
            _ => panic!("expected a Factor column"),
        }
    }
}
