// Component C: StringFieldEncoder. Raw / escape-quoted / doubled-quote
// rendering with auto-detection of embedded separators or newlines.
//
// Unlike `intfmt`/`dblfmt`, which write into a fixed-capacity scratch
// buffer (their output width is bounded), a string field's worst-case
// width is proportional to its input length, so this operates directly
// on the batch's growing `Vec<u8>` rather than a fixed cursor.

use crate::options::{QuoteMethod, QuoteMode};
use memchr::memchr2;

/// Writes `s` (or, if `None`, `na_token`) to `out` under the given quoting
/// policy. `field_sep` is the byte that (together with `\n`) triggers
/// quoting in `Auto` mode.
pub fn write_string(
    s: Option<&[u8]>,
    field_sep: u8,
    na_token: &[u8],
    quote_mode: QuoteMode,
    quote_method: QuoteMethod,
    out: &mut Vec<u8>,
) {
    let bytes = match s {
        None => {
            // NA is never quoted, even under `Always` — this is what lets
            // a reader tell missing apart from the literal string "NA".
            out.extend_from_slice(na_token);
            return;
        }
        Some(b) => b,
    };

    let needs_quote = match quote_mode {
        QuoteMode::Never => false,
        QuoteMode::Always => true,
        QuoteMode::Auto => memchr2(field_sep, b'\n', bytes).is_some(),
    };

    if !needs_quote {
        out.extend_from_slice(bytes);
        return;
    }
    write_quoted(bytes, quote_method, out);
}

fn write_quoted(bytes: &[u8], quote_method: QuoteMethod, out: &mut Vec<u8>) {
    out.push(b'"');
    match quote_method {
        QuoteMethod::Escape => {
            for &b in bytes {
                if b == b'"' || b == b'\\' {
                    out.push(b'\\');
                }
                out.push(b);
            }
        }
        QuoteMethod::Double => {
            for &b in bytes {
                out.push(b);
                if b == b'"' {
                    out.push(b'"');
                }
            }
        }
    }
    out.push(b'"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn enc(s: Option<&str>, mode: QuoteMode, method: QuoteMethod) -> String {
        let mut out = Vec::new();
        write_string(s.map(str::as_bytes), b',', b"", mode, method, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn na_is_never_quoted() {
        assert_eq!(enc(None, QuoteMode::Always, QuoteMethod::Escape), "");
        let mut out = Vec::new();
        write_string(None, b',', b"NA", QuoteMode::Always, QuoteMethod::Escape, &mut out);
        assert_eq!(out, b"NA");
    }

    #[test]
    fn never_copies_raw_even_with_separators() {
        assert_eq!(enc(Some("a,b"), QuoteMode::Never, QuoteMethod::Escape), "a,b");
    }

    #[test]
    fn auto_quotes_only_on_separator_or_newline() {
        assert_eq!(enc(Some("a,b"), QuoteMode::Auto, QuoteMethod::Escape), "\"a,b\"");
        assert_eq!(enc(Some("a\nb"), QuoteMode::Auto, QuoteMethod::Escape), "\"a\nb\"");
        // Embedded quote alone does not trigger quoting under auto.
        assert_eq!(enc(Some("c\"d"), QuoteMode::Auto, QuoteMethod::Escape), "c\"d");
        assert_eq!(enc(Some("ok"), QuoteMode::Auto, QuoteMethod::Escape), "ok");
    }

    #[test]
    fn always_quotes_unconditionally() {
        assert_eq!(enc(Some("ok"), QuoteMode::Always, QuoteMethod::Escape), "\"ok\"");
    }

    #[test]
    fn escape_method_prefixes_quote_and_backslash() {
        assert_eq!(
            enc(Some("a\"b\\c"), QuoteMode::Always, QuoteMethod::Escape),
            "\"a\\\"b\\\\c\""
        );
    }

    #[test]
    fn double_method_doubles_quote_leaves_backslash() {
        assert_eq!(
            enc(Some("a\"b\\c"), QuoteMode::Always, QuoteMethod::Double),
            "\"a\"\"b\\c\""
        );
    }

    #[test]
    fn empty_string_quoted_is_empty_pair() {
        assert_eq!(enc(Some(""), QuoteMode::Always, QuoteMethod::Escape), "\"\"");
    }
}
