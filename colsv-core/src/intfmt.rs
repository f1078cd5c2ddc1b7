// Component A: IntegerFormatter. Decimal encoding of signed 32/64-bit
// integers directly into a byte buffer, no allocation beyond what the
// caller already reserved. Mirrors the classic "write digits backwards,
// then reverse" trick rather than computing the digit count up front via
// a log10 call.

/// Maximum bytes `write_int` can ever emit (`-` plus 20 digits for
/// `i64::MIN`, `-9223372036854775808`).
pub const MAX_INT_WIDTH: usize = 20;

/// Writes the decimal representation of `x` into `buf` starting at
/// `buf[pos]`, returning the new position just past the last digit
/// written. Caller guarantees `buf.len() - pos >= MAX_INT_WIDTH`.
///
/// Never emits a leading `+`. Handles `i64::MIN` correctly: negating it
/// would overflow `i64`, so we negate into `u64` instead.
pub fn write_int(x: i64, buf: &mut [u8], pos: usize) -> usize {
    let mut pos = pos;
    if x == 0 {
        buf[pos] = b'0';
        return pos + 1;
    }
    let negative = x < 0;
    let mut mag: u64 = if negative {
        (x as i128).unsigned_abs() as u64
    } else {
        x as u64
    };
    if negative {
        buf[pos] = b'-';
        pos += 1;
    }
    let start = pos;
    while mag > 0 {
        buf[pos] = b'0' + (mag % 10) as u8;
        mag /= 10;
        pos += 1;
    }
    buf[start..pos].reverse();
    pos
}

/// The `turbo=false` correctness escape hatch (spec.md §4.D, §9): delegates
/// to Rust's standard integer formatting rather than the write-backwards-
/// then-reverse algorithm above. Integers have no precision concerns the
/// way doubles do, so this exists purely for parity with the spec's "a
/// fallback path exists per numeric type" wording — its output is always
/// identical to `write_int`'s.
pub fn write_int_fallback(x: i64, buf: &mut [u8], pos: usize) -> usize {
    let rendered = x.to_string();
    buf[pos..pos + rendered.len()].copy_from_slice(rendered.as_bytes());
    pos + rendered.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn fmt(x: i64) -> String {
        let mut buf = [0u8; 32];
        let end = write_int(x, &mut buf, 0);
        String::from_utf8(buf[..end].to_vec()).unwrap()
    }

    #[test]
    fn zero() {
        assert_eq!(fmt(0), "0");
    }

    #[test]
    fn positive_and_negative() {
        assert_eq!(fmt(1), "1");
        assert_eq!(fmt(-1), "-1");
        assert_eq!(fmt(123456789), "123456789");
        assert_eq!(fmt(-123456789), "-123456789");
    }

    #[test]
    fn extremes() {
        assert_eq!(fmt(i64::MAX), "9223372036854775807");
        assert_eq!(fmt(i64::MIN), "-9223372036854775808");
        assert_eq!(fmt(i32::MIN as i64), "-2147483648");
    }

    #[test]
    fn no_leading_plus() {
        assert!(!fmt(42).starts_with('+'));
    }

    #[test]
    fn round_trips() {
        for x in [0_i64, 1, -1, 42, -42, 1_000_000_000_000, i64::MIN, i64::MAX] {
            assert_eq!(fmt(x).parse::<i64>().unwrap(), x);
        }
    }

    #[test]
    fn fallback_matches_normative_path() {
        for x in [0_i64, 1, -1, 42, -42, i64::MIN, i64::MAX, i32::MIN as i64] {
            let mut a = [0u8; 32];
            let mut b = [0u8; 32];
            let end_a = write_int(x, &mut a, 0);
            let end_b = write_int_fallback(x, &mut b, 0);
            assert_eq!(&a[..end_a], &b[..end_b]);
        }
    }
}
