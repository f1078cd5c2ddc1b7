// Test-only support: a small hand-rolled parser that undoes exactly what
// this crate's writer produces for a given (field_sep, row_sep,
// quote_method, na_token) configuration. Not a general CSV parser and not
// part of the public API — it exists so the "round-trip law" tests in
// spec.md §8 ("a generic CSV parser configured with the same separators
// recovers an equivalent table") can be exercised without pulling in an
// external CSV crate as a test dependency.

use crate::options::QuoteMethod;

/// Parses `bytes` into rows of cells. A cell is `None` iff it was
/// unquoted and exactly equal to `na_token` (quoted fields are never NA,
/// matching `strfield::write_string`'s contract).
pub(crate) fn parse_rows(bytes: &[u8], field_sep: u8, row_sep: &[u8], quote_method: QuoteMethod, na_token: &[u8]) -> Vec<Vec<Option<Vec<u8>>>> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while pos < bytes.len() {
        let mut row = Vec::new();
        loop {
            let (cell, quoted, next) = parse_cell(bytes, pos, field_sep, row_sep, quote_method);
            pos = next;
            row.push(if !quoted && cell == na_token { None } else { Some(cell) });
            if pos >= bytes.len() {
                break;
            }
            if bytes[pos] == field_sep {
                pos += 1;
                continue;
            }
            if bytes[pos..].starts_with(row_sep) {
                pos += row_sep.len();
                break;
            }
            unreachable!("parser desynced at byte {pos}");
        }
        rows.push(row);
    }
    rows
}

fn parse_cell(
    bytes: &[u8],
    mut pos: usize,
    field_sep: u8,
    row_sep: &[u8],
    quote_method: QuoteMethod,
) -> (Vec<u8>, bool, usize) {
    if bytes.get(pos) == Some(&b'"') {
        pos += 1;
        let mut out = Vec::new();
        loop {
            match quote_method {
                QuoteMethod::Escape => match bytes[pos] {
                    b'\\' => {
                        out.push(bytes[pos + 1]);
                        pos += 2;
                    }
                    b'"' => {
                        pos += 1;
                        break;
                    }
                    b => {
                        out.push(b);
                        pos += 1;
                    }
                },
                QuoteMethod::Double => match bytes[pos] {
                    b'"' if bytes.get(pos + 1) == Some(&b'"') => {
                        out.push(b'"');
                        pos += 2;
                    }
                    b'"' => {
                        pos += 1;
                        break;
                    }
                    b => {
                        out.push(b);
                        pos += 1;
                    }
                },
            }
        }
        (out, true, pos)
    } else {
        let start = pos;
        while pos < bytes.len() && bytes[pos] != field_sep && !bytes[pos..].starts_with(row_sep) {
            pos += 1;
        }
        (bytes[start..pos].to_vec(), false, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{QuoteMethod, QuoteMode, RowSep, WriteOptions};
    use crate::table::{Column, Table, NA_INT32, NA_INT64};
    use crate::{write_table, SinkTarget};
    use test_log::test;

    fn opts() -> WriteOptions {
        WriteOptions {
            field_sep: b',',
            row_sep: RowSep::new(b"\n").unwrap(),
            na_token: b"NA".to_vec(),
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

    fn write(table: &Table, options: &WriteOptions) -> Vec<u8> {
        let mut out = Vec::new();
        write_table(table, options, SinkTarget::Capture(&mut out), None).unwrap();
        out
    }

    #[test]
    fn recovers_string_and_integer_columns() {
        let options = opts();
        let table = Table::new(vec![
            ("n".into(), Column::Int32(vec![1, NA_INT32, -7])),
            (
                "s".into(),
                Column::String(vec![Some(b"a,b".to_vec()), None, Some(b"plain".to_vec())]),
            ),
        ])
        .unwrap();
        let bytes = write(&table, &options);
        let rows = parse_rows(&bytes, options.field_sep, options.row_sep.as_bytes(), options.quote_method, &options.na_token);
        assert_eq!(
            rows,
            vec![
                vec![Some(b"1".to_vec()), Some(b"a,b".to_vec())],
                vec![None, None],
                vec![Some(b"-7".to_vec()), Some(b"plain".to_vec())],
            ]
        );
    }

    #[test]
    fn recovers_doubles_bitwise_via_reparse() {
        let options = opts();
        let values = vec![3.1416, -0.0072, 1e-300, 1e300, 0.0, -42.5];
        let table = Table::new(vec![("x".into(), Column::Float64(values.clone()))]).unwrap();
        let bytes = write(&table, &options);
        let rows = parse_rows(&bytes, options.field_sep, options.row_sep.as_bytes(), options.quote_method, &options.na_token);
        for (row, expected) in rows.iter().zip(values.iter()) {
            let cell = row[0].as_ref().unwrap();
            let s = std::str::from_utf8(cell).unwrap();
            let parsed: f64 = s.parse().unwrap();
            assert_eq!(parsed.to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn recovers_quoted_fields_containing_row_separator() {
        let mut options = opts();
        options.quote_method = QuoteMethod::Double;
        let table = Table::new(vec![(
            "s".into(),
            Column::String(vec![Some(b"line1\nline2".to_vec()), Some(b"has\"quote".to_vec())]),
        )])
        .unwrap();
        let bytes = write(&table, &options);
        let rows = parse_rows(&bytes, options.field_sep, options.row_sep.as_bytes(), options.quote_method, &options.na_token);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Some(b"line1\nline2".to_vec()));
        assert_eq!(rows[1][0], Some(b"has\"quote".to_vec()));
    }

    #[test]
    fn recovers_int64_and_factor_columns() {
        let options = opts();
        let table = Table::new(vec![
            ("big".into(), Column::Int64(vec![9_000_000_000, NA_INT64, -9_000_000_000])),
            (
                "grade".into(),
                Column::Factor {
                    codes: vec![1, 0, 2],
                    dictionary: vec![b"pass".to_vec(), b"fail".to_vec()],
                },
            ),
        ])
        .unwrap();
        let bytes = write(&table, &options);
        let rows = parse_rows(&bytes, options.field_sep, options.row_sep.as_bytes(), options.quote_method, &options.na_token);
        assert_eq!(rows[0], vec![Some(b"9000000000".to_vec()), Some(b"pass".to_vec())]);
        assert_eq!(rows[1], vec![None, None]);
        assert_eq!(rows[2], vec![Some(b"-9000000000".to_vec()), Some(b"fail".to_vec())]);
    }
}
