// Component I: FastPaths. Specialized row loops for tables where every
// column shares one numeric type, eliminating the per-cell `match` the
// general `RowEncoder` pays in `row.rs`. Column slices are unwrapped once,
// outside the row loop, rather than on every cell.
//
// Observable output is byte-identical to the general path — these are
// pure specializations, not a different algorithm. Only reachable when
// `options.turbo` is true (see `lib.rs::turbo_kind`), so it always uses
// the same normative A/B formatters the general path uses under that same
// setting; the `turbo=false` standard-library fallback in `row.rs` never
// applies here.

use crate::dblfmt::{write_double, MAX_DOUBLE_WIDTH};
use crate::intfmt::{write_int, MAX_INT_WIDTH};
use crate::options::WriteOptions;
use crate::table::{Column, NA_INT32, NA_INT64};

/// One column's data, unwrapped from `Column` once per batch rather than
/// once per cell.
enum IntSlice<'a> {
    I32(&'a [i32]),
    I64(&'a [i64]),
}

pub struct TurboFloat64<'a> {
    columns: Vec<&'a [f64]>,
}

pub struct TurboInt<'a> {
    columns: Vec<IntSlice<'a>>,
}

impl<'a> TurboFloat64<'a> {
    /// Returns `None` unless every column is `Float64` (caller checks
    /// `Table::all_float64` first; this just unwraps).
    pub fn try_from(columns: &'a [Column]) -> Option<Self> {
        let mut out = Vec::with_capacity(columns.len());
        for col in columns {
            match col {
                Column::Float64(v) => out.push(v.as_slice()),
                _ => return None,
            }
        }
        Some(TurboFloat64 { columns: out })
    }

    pub fn encode_row(&self, row: usize, options: &WriteOptions, scratch: &mut [u8], out: &mut Vec<u8>) {
        let last = self.columns.len().wrapping_sub(1);
        for (j, col) in self.columns.iter().enumerate() {
            let end = write_double(col[row], options.decimal_sep, &options.na_token, scratch, 0);
            out.extend_from_slice(&scratch[..end]);
            if j != last {
                out.push(options.field_sep);
            }
        }
        out.extend_from_slice(options.row_sep.as_bytes());
    }
}

impl<'a> TurboInt<'a> {
    pub fn try_from(columns: &'a [Column]) -> Option<Self> {
        let mut out = Vec::with_capacity(columns.len());
        for col in columns {
            match col {
                Column::Int32(v) => out.push(IntSlice::I32(v.as_slice())),
                Column::Int64(v) => out.push(IntSlice::I64(v.as_slice())),
                _ => return None,
            }
        }
        Some(TurboInt { columns: out })
    }

    pub fn encode_row(&self, row: usize, options: &WriteOptions, scratch: &mut [u8], out: &mut Vec<u8>) {
        let last = self.columns.len().wrapping_sub(1);
        for (j, col) in self.columns.iter().enumerate() {
            match col {
                IntSlice::I32(v) => {
                    let x = v[row];
                    if x == NA_INT32 {
                        out.extend_from_slice(&options.na_token);
                    } else {
                        let end = write_int(x as i64, scratch, 0);
                        out.extend_from_slice(&scratch[..end]);
                    }
                }
                IntSlice::I64(v) => {
                    let x = v[row];
                    if x == NA_INT64 {
                        out.extend_from_slice(&options.na_token);
                    } else {
                        let end = write_int(x, scratch, 0);
                        out.extend_from_slice(&scratch[..end]);
                    }
                }
            }
            if j != last {
                out.push(options.field_sep);
            }
        }
        out.extend_from_slice(options.row_sep.as_bytes());
    }
}

/// Scratch buffer width sufficient for either turbo path.
pub fn turbo_scratch_width(options: &WriteOptions) -> usize {
    MAX_DOUBLE_WIDTH.max(MAX_INT_WIDTH).max(options.na_token.len()).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{QuoteMethod, QuoteMode, RowSep};
    use crate::row::RowEncoder;
    use crate::table::Table;
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
    fn turbo_float_matches_general_path() {
        let options = opts();
        let table = Table::new(vec![
            ("a".into(), Column::Float64(vec![1.5, 2.25, f64::NAN])),
            ("b".into(), Column::Float64(vec![-3.0, 0.0, 1e300])),
        ])
        .unwrap();
        let turbo = TurboFloat64::try_from(table.columns()).unwrap();
        let mut scratch = vec![0u8; turbo_scratch_width(&options)];
        let mut turbo_out = Vec::new();
        for row in 0..table.nrow() {
            turbo.encode_row(row, &options, &mut scratch, &mut turbo_out);
        }

        let mut general_out = Vec::new();
        let mut enc = RowEncoder::new(&options);
        for row in 0..table.nrow() {
            enc.encode_row(table.columns(), row, &options, &mut general_out);
        }
        assert_eq!(turbo_out, general_out);
    }

    #[test]
    fn turbo_int_matches_general_path() {
        let options = opts();
        let table = Table::new(vec![
            ("a".into(), Column::Int32(vec![1, NA_INT32, 3])),
            ("b".into(), Column::Int64(vec![100, 200, NA_INT64])),
        ])
        .unwrap();
        let turbo = TurboInt::try_from(table.columns()).unwrap();
        let mut scratch = vec![0u8; turbo_scratch_width(&options)];
        let mut turbo_out = Vec::new();
        for row in 0..table.nrow() {
            turbo.encode_row(row, &options, &mut scratch, &mut turbo_out);
        }

        let mut general_out = Vec::new();
        let mut enc = RowEncoder::new(&options);
        for row in 0..table.nrow() {
            enc.encode_row(table.columns(), row, &options, &mut general_out);
        }
        assert_eq!(turbo_out, general_out);
    }

    #[test]
    fn rejects_mixed_type_tables() {
        let table = Table::new(vec![
            ("a".into(), Column::Int32(vec![1])),
            ("b".into(), Column::Float64(vec![1.0])),
        ])
        .unwrap();
        assert!(TurboFloat64::try_from(table.columns()).is_none());
        assert!(TurboInt::try_from(table.columns()).is_none());
    }
}
