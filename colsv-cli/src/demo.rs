//! Builds the in-memory [`Table`] the `colsv` binary writes: either a
//! small built-in demo dataset touching every column type, or a table of
//! string columns read from a whitespace-separated input file.
//!
//! Real type inference (is this column a factor? int32 vs int64? etc.) is
//! the table object model's job, which spec.md explicitly places outside
//! the engine's scope; this front end only needs something to feed
//! `write_table`, not a general-purpose CSV importer.

use colsv_base::{err, Result};
use colsv_core::{Column, Table, NA_INT32};
use std::fs;
use std::path::Path;

/// A handful of rows exercising bool, int32 (with an NA), float64, string
/// (with an NA), and a factor column, matching the column types the
/// formatter itself is built to handle.
pub fn demo_table() -> Table {
    Table::new(vec![
        ("flag".into(), Column::Bool(vec![Some(true), Some(false), None, Some(true)])),
        ("count".into(), Column::Int32(vec![1, NA_INT32, 3, 42])),
        (
            "value".into(),
            Column::Float64(vec![3.1416, 30460.0, 0.0072, 1e-300]),
        ),
        (
            "label".into(),
            Column::String(vec![
                Some(b"alpha".to_vec()),
                Some(b"needs,quoting".to_vec()),
                None,
                Some(b"ok".to_vec()),
            ]),
        ),
        (
            "grade".into(),
            Column::Factor {
                codes: vec![1, 2, 0, 2],
                dictionary: vec![b"pass".to_vec(), b"fail".to_vec()],
            },
        ),
    ])
    .expect("demo columns share a length by construction")
}

/// Reads `path` as whitespace-separated rows and builds one `String`
/// column per token position (short rows are padded with NA past their
/// last token). Every line must not be empty after trimming.
pub fn table_from_whitespace_file(path: &Path) -> Result<Table> {
    let contents = fs::read_to_string(path).map_err(|e| err(format!("{e}: '{}'", path.display())))?;
    let rows: Vec<Vec<&str>> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().collect())
        .collect();
    let ncol = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut columns: Vec<Vec<Option<Vec<u8>>>> = vec![Vec::with_capacity(rows.len()); ncol];
    for row in &rows {
        for (j, column) in columns.iter_mut().enumerate() {
            column.push(row.get(j).map(|tok| tok.as_bytes().to_vec()));
        }
    }
    let named = columns
        .into_iter()
        .enumerate()
        .map(|(j, col)| (format!("col{j}"), Column::String(col)))
        .collect();
    Table::new(named)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn demo_table_has_five_columns_and_four_rows() {
        let table = demo_table();
        assert_eq!(table.ncol(), 5);
        assert_eq!(table.nrow(), 4);
    }

    #[test]
    fn whitespace_file_pads_short_rows_with_na() {
        let dir = std::env::temp_dir().join("colsv-cli-demo-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("in.txt");
        std::fs::write(&path, "a b c\nx y\n").unwrap();
        let table = table_from_whitespace_file(&path).unwrap();
        assert_eq!(table.nrow(), 2);
        assert_eq!(table.ncol(), 3);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
