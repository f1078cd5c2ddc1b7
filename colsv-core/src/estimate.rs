// Component E: LineSizeEstimator. A one-pass sampled estimate of the
// longest row, in bytes, feeding the batch scheduler (F). Deliberately a
// hint: an under-estimate only costs a `Vec` reallocation down the line,
// never correctness.

use crate::dblfmt::{write_double, MAX_DOUBLE_WIDTH};
use crate::intfmt::{write_int, MAX_INT_WIDTH};
use crate::options::WriteOptions;
use crate::table::{Column, Table, NA_INT32, NA_INT64};

/// Samples up to 10 contiguous ranges of up to 100 rows each, evenly
/// spaced through `[0, nrow)`, and returns the maximum observed per-row
/// byte width (spec §4.E). Returns at least 1.
pub fn estimate_max_line_len(table: &Table, options: &WriteOptions) -> usize {
    let nrow = table.nrow();
    if nrow == 0 {
        return 1;
    }
    let step = if nrow < 1000 { 100 } else { nrow / 10 };
    let mut scratch = vec![0u8; MAX_DOUBLE_WIDTH.max(MAX_INT_WIDTH).max(options.na_token.len()).max(1)];
    let mut max_len = 0usize;
    let mut start = 0usize;
    let mut sampled = 0;
    while start < nrow && sampled < 10 {
        let end = (start + 100).min(nrow);
        for row in start..end {
            let len = row_upper_bound(table.columns(), row, options, &mut scratch);
            max_len = max_len.max(len);
        }
        sampled += 1;
        start += step;
    }
    max_len.max(1)
}

fn row_upper_bound(columns: &[Column], row: usize, options: &WriteOptions, scratch: &mut [u8]) -> usize {
    let ncol = columns.len();
    let mut len = options.row_sep.len();
    if options.emit_row_index {
        len += options.quoted_reserve(MAX_INT_WIDTH) + 1;
    }
    for (j, col) in columns.iter().enumerate() {
        len += cell_upper_bound(col, row, options, scratch);
        if j + 1 < ncol {
            len += 1; // field_sep
        }
    }
    len
}

fn cell_upper_bound(col: &Column, row: usize, options: &WriteOptions, scratch: &mut [u8]) -> usize {
    match col {
        Column::Bool(v) => match v[row] {
            None => options.na_token.len(),
            Some(_) if options.bool_as_int => 1,
            Some(_) => "FALSE".len(),
        },
        Column::Int32(v) => {
            let x = v[row];
            if x == NA_INT32 {
                options.na_token.len()
            } else {
                write_int(x as i64, scratch, 0)
            }
        }
        Column::Int64(v) => {
            let x = v[row];
            if x == NA_INT64 {
                options.na_token.len()
            } else {
                write_int(x, scratch, 0)
            }
        }
        Column::Float64(v) => write_double(v[row], options.decimal_sep, &options.na_token, scratch, 0),
        Column::String(v) => match &v[row] {
            None => options.na_token.len(),
            Some(s) => string_cell_upper_bound(s, options),
        },
        Column::Factor { codes, dictionary } => {
            let code = codes[row];
            if code == 0 {
                options.na_token.len()
            } else {
                string_cell_upper_bound(&dictionary[(code - 1) as usize], options)
            }
        }
    }
}

fn string_cell_upper_bound(s: &[u8], options: &WriteOptions) -> usize {
    use crate::options::QuoteMode;
    match options.quote_mode {
        QuoteMode::Never => s.len(),
        QuoteMode::Always | QuoteMode::Auto => options.quoted_reserve(s.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{QuoteMethod, QuoteMode, RowSep};
    use test_log::test;

    fn opts() -> WriteOptions {
        WriteOptions {
            field_sep: b',',
            row_sep: RowSep::new(b"\n").unwrap(),
            na_token: Vec::new(),
            decimal_sep: b'.',
            quote_mode: QuoteMode::Auto,
            quote_method: QuoteMethod::Escape,
            bool_as_int: false,
            emit_row_index: false,
            emit_header: false,
            buffer_mib: 8,
            threads: 1,
            turbo: true,
        }
    }

    #[test]
    fn empty_table_estimate_is_at_least_one() {
        let table = Table::new(vec![]).unwrap();
        assert_eq!(estimate_max_line_len(&table, &opts()), 1);
    }

    #[test]
    fn wider_row_dominates_the_estimate() {
        let table = Table::new(vec![(
            "x".into(),
            Column::String(vec![Some(b"short".to_vec()), Some(b"a much longer string value".to_vec())]),
        )])
        .unwrap();
        let estimate = estimate_max_line_len(&table, &opts());
        assert!(estimate >= "a much longer string value".len() + 1);
    }

    #[test]
    fn sampling_covers_a_large_table() {
        let values: Vec<i32> = (0..5000).collect();
        let table = Table::new(vec![("x".into(), Column::Int32(values))]).unwrap();
        let estimate = estimate_max_line_len(&table, &opts());
        assert!(estimate >= 1);
    }
}
