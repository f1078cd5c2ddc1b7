// Component B: DoubleFormatter. Shortest-round-trippable decimal encoding
// of a finite IEEE-754 double, written directly into a byte buffer via bit
// decomposition against the SIGPARTS/EXPSIG/EXPPOW lookup tables (H) —
// no libm calls (`log10`, `pow`, `ldexp`) on the hot path.

use crate::lookups::{EXPPOW, EXPSIG, SIGPARTS};

/// Maximum bytes either `write_double` or `write_double_fallback` can ever
/// emit: sign, up to 17 significant digits (the fallback's worst case), a
/// decimal point, and a 3-digit signed exponent, plus slack.
pub const MAX_DOUBLE_WIDTH: usize = 32;

const NUM_SF: u32 = 15;
const SIZE_SF: u64 = 1_000_000_000_000_000; // 10^NUM_SF

/// Writes `x` to `buf` starting at `pos`, returning the position just past
/// the last byte written. `na_token` is emitted verbatim for NaN (NaN
/// classifies as NA at this layer, per spec). Infinities render as `Inf` /
/// `-Inf`. Caller reserves at least `MAX_DOUBLE_WIDTH.max(na_token.len())`
/// writable bytes beyond `pos`.
pub fn write_double(x: f64, decimal_sep: u8, na_token: &[u8], buf: &mut [u8], pos: usize) -> usize {
    let mut pos = pos;
    if x.is_nan() {
        buf[pos..pos + na_token.len()].copy_from_slice(na_token);
        return pos + na_token.len();
    }
    if x.is_infinite() {
        if x < 0.0 {
            buf[pos] = b'-';
            pos += 1;
        }
        buf[pos..pos + 3].copy_from_slice(b"Inf");
        return pos + 3;
    }
    if x == 0.0 {
        buf[pos] = b'0';
        return pos + 1;
    }

    let negative = x < 0.0;
    let x = x.abs();
    if negative {
        buf[pos] = b'-';
        pos += 1;
    }

    let bits = x.to_bits();
    let mut fraction = bits & 0xF_FFFF_FFFF_FFFF; // low 52 bits
    let exponent = ((bits >> 52) & 0x7FF) as usize;

    // Sum the powers of two present in the mantissa, least-significant bit
    // first (important for accuracy: start with the smallest term).
    let mut acc = 0.0_f64;
    if fraction != 0 {
        let mut i: i32 = 52;
        while fraction & 0xFF == 0 {
            fraction >>= 8;
            i -= 8;
        }
        while fraction != 0 {
            if fraction & 1 != 0 {
                acc += SIGPARTS[i as usize];
            }
            i -= 1;
            fraction >>= 1;
        }
    }

    // (1+acc) in [1,2), expsig[exponent] in [1,10) by construction, so y
    // lands in [1,20) and a single conditional normalizes it into [1,10).
    let mut y = (1.0 + acc) * EXPSIG[exponent];
    let mut exp_out = EXPPOW[exponent];
    if y >= 10.0 {
        y /= 10.0;
        exp_out += 1;
    }

    let mut l = (y * SIZE_SF as f64) as u64;
    if l % 10 >= 5 {
        l += 10;
    }
    l /= 10;

    if l == 0 {
        // Only reachable for denormals at the extreme low end of the
        // exponent range, where the implicit leading-1 assumption above
        // doesn't quite hold; fall back to plain "0".
        if negative {
            pos -= 1;
        }
        buf[pos] = b'0';
        return pos + 1;
    }

    let mut trail_zero = 0;
    while l % 10 == 0 {
        l /= 10;
        trail_zero += 1;
    }
    let mut sf = NUM_SF - trail_zero;
    if sf == 0 {
        sf = 1;
        exp_out += 1;
    }

    // Extract `sf` decimal digits of `l`, most-significant first.
    let mut digits = [0u8; NUM_SF as usize];
    for slot in digits[..sf as usize].iter_mut().rev() {
        *slot = b'0' + (l % 10) as u8;
        l /= 10;
    }
    let digits = &digits[..sf as usize];

    let sf_i = sf as i32;
    let mut dr = sf_i - exp_out - 1;
    let dl0;
    let width;
    if dr <= 0 {
        dl0 = -dr;
        dr = 0;
        width = sf_i + dl0;
    } else if sf_i > dr {
        dl0 = 0;
        width = sf_i + 1;
    } else {
        dl0 = 1;
        width = dr + 1 + dl0;
    }

    let sci_width = sf_i + i32::from(sf_i > 1) + 2 + if exp_out.abs() > 99 { 3 } else { 2 };
    if width <= sci_width {
        pos = write_fixed(digits, dr, dl0, decimal_sep, buf, pos);
    } else {
        pos = write_scientific(digits, exp_out, decimal_sep, buf, pos);
    }
    pos
}

/// The `turbo=false` correctness escape hatch (spec.md §4.D, §9 "Replacing
/// `sprintf`-style fallbacks"): delegates to Rust's own standard-library
/// float formatting — a conformant, round-trip-guaranteed equivalent of a
/// platform `%.15g` — instead of the hand-rolled bit-decomposition
/// algorithm above. `write_double` (component B) remains the normative
/// path; this is only ever reached when the caller has opted out of it.
pub fn write_double_fallback(x: f64, decimal_sep: u8, na_token: &[u8], buf: &mut [u8], pos: usize) -> usize {
    let mut pos = pos;
    if x.is_nan() {
        buf[pos..pos + na_token.len()].copy_from_slice(na_token);
        return pos + na_token.len();
    }
    if x.is_infinite() {
        let s: &[u8] = if x < 0.0 { b"-Inf" } else { b"Inf" };
        buf[pos..pos + s.len()].copy_from_slice(s);
        return pos + s.len();
    }
    if x == 0.0 {
        buf[pos] = b'0';
        return pos + 1;
    }
    // `{:e}` is the standard library's own shortest-round-trip scientific
    // formatter: bounded width (unlike `{}`, which expands small/large
    // magnitudes out in full) and always at least as precise as a 15
    // significant digit `%.15g`.
    let rendered = format!("{x:e}");
    for b in rendered.bytes() {
        buf[pos] = if b == b'.' { decimal_sep } else { b };
        pos += 1;
    }
    pos
}

fn write_fixed(digits: &[u8], dr: i32, dl0: i32, decimal_sep: u8, buf: &mut [u8], mut pos: usize) -> usize {
    if dr <= 0 {
        for _ in 0..dl0 {
            buf[pos] = b'0';
            pos += 1;
        }
        buf[pos..pos + digits.len()].copy_from_slice(digits);
        pos += digits.len();
    } else if digits.len() as i32 > dr {
        let split = digits.len() - dr as usize;
        buf[pos..pos + split].copy_from_slice(&digits[..split]);
        pos += split;
        buf[pos] = decimal_sep;
        pos += 1;
        buf[pos..pos + digits.len() - split].copy_from_slice(&digits[split..]);
        pos += digits.len() - split;
    } else {
        buf[pos] = b'0';
        pos += 1;
        buf[pos] = decimal_sep;
        pos += 1;
        for _ in 0..(dr - digits.len() as i32) {
            buf[pos] = b'0';
            pos += 1;
        }
        buf[pos..pos + digits.len()].copy_from_slice(digits);
        pos += digits.len();
    }
    pos
}

fn write_scientific(digits: &[u8], exp_out: i32, decimal_sep: u8, buf: &mut [u8], mut pos: usize) -> usize {
    buf[pos] = digits[0];
    pos += 1;
    if digits.len() > 1 {
        buf[pos] = decimal_sep;
        pos += 1;
        buf[pos..pos + digits.len() - 1].copy_from_slice(&digits[1..]);
        pos += digits.len() - 1;
    }
    buf[pos] = b'e';
    pos += 1;
    let (sign, mag) = if exp_out < 0 { (b'-', -exp_out) } else { (b'+', exp_out) };
    buf[pos] = sign;
    pos += 1;
    if mag < 100 {
        buf[pos] = b'0' + (mag / 10) as u8;
        buf[pos + 1] = b'0' + (mag % 10) as u8;
        pos += 2;
    } else {
        buf[pos] = b'0' + (mag / 100) as u8;
        buf[pos + 1] = b'0' + ((mag / 10) % 10) as u8;
        buf[pos + 2] = b'0' + (mag % 10) as u8;
        pos += 3;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn fmt(x: f64) -> String {
        let mut buf = [0u8; 64];
        let end = write_double(x, b'.', b"", &mut buf, 0);
        String::from_utf8(buf[..end].to_vec()).unwrap()
    }

    #[test]
    fn zero_has_no_sign() {
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(-0.0), "0");
    }

    #[test]
    fn non_finite() {
        assert_eq!(fmt(f64::INFINITY), "Inf");
        assert_eq!(fmt(f64::NEG_INFINITY), "-Inf");
        let mut buf = [0u8; 64];
        let end = write_double(f64::NAN, b'.', b"NA", &mut buf, 0);
        assert_eq!(&buf[..end], b"NA");
    }

    #[test]
    fn concrete_scenarios_from_spec() {
        assert_eq!(fmt(3.1416), "3.1416");
        assert_eq!(fmt(30460.0), "30460");
        assert_eq!(fmt(0.0072), "0.0072");
        assert_eq!(fmt(1e-300), "1e-300");
        assert_eq!(fmt(1e300), "1e+300");
    }

    #[test]
    fn shortness_trailing_zeros_suppressed() {
        assert_eq!(fmt(1.0), "1");
        assert_eq!(fmt(100.0), "100");
        assert_eq!(fmt(0.1), "0.1");
        assert_eq!(fmt(2.5), "2.5");
    }

    #[test]
    fn decimal_sep_is_honored() {
        let mut buf = [0u8; 64];
        let end = write_double(3.5, b',', b"", &mut buf, 0);
        assert_eq!(&buf[..end], b"3,5");
    }

    #[test]
    fn round_trips_over_many_values() {
        let samples: Vec<f64> = vec![
            1.0, -1.0, 0.5, 123.456, -123.456, 1e-10, 1e10, 1e-300, 1e300,
            f64::MIN_POSITIVE, f64::MAX, -f64::MAX, 9_007_199_254_740_993.0,
            0.1 + 0.2, std::f64::consts::PI, std::f64::consts::E,
        ];
        for x in samples {
            let s = fmt(x);
            let parsed: f64 = s.parse().unwrap();
            assert_eq!(parsed.to_bits(), x.to_bits(), "round-trip failed for {x}: got {s}");
        }
    }

    #[test]
    fn fallback_matches_non_finite_and_zero_handling() {
        let mut buf = [0u8; 64];
        let end = write_double_fallback(0.0, b'.', b"", &mut buf, 0);
        assert_eq!(&buf[..end], b"0");
        let end = write_double_fallback(f64::INFINITY, b'.', b"", &mut buf, 0);
        assert_eq!(&buf[..end], b"Inf");
        let end = write_double_fallback(f64::NEG_INFINITY, b'.', b"", &mut buf, 0);
        assert_eq!(&buf[..end], b"-Inf");
        let end = write_double_fallback(f64::NAN, b'.', b"NA", &mut buf, 0);
        assert_eq!(&buf[..end], b"NA");
    }

    #[test]
    fn fallback_honors_decimal_sep_and_round_trips() {
        let samples = [3.1416, -123.456, 1e-300, 1e300, 0.1, std::f64::consts::PI];
        for x in samples {
            let mut buf = [0u8; 64];
            let end = write_double_fallback(x, b',', b"", &mut buf, 0);
            let s = std::str::from_utf8(&buf[..end]).unwrap();
            assert!(!s.contains('.'), "decimal_sep override leaked a literal '.': {s}");
            let parsed: f64 = s.replace(',', ".").parse().unwrap();
            assert_eq!(parsed.to_bits(), x.to_bits(), "fallback round-trip failed for {x}: got {s}");
        }
    }

    #[test]
    fn round_trips_over_bit_patterns() {
        // Deterministic spread of bit patterns (not a PRNG, since this
        // crate avoids depending on Date.now()-style nondeterminism in
        // anything reachable from build scripts).
        for i in 0..5000u64 {
            let bits = i.wrapping_mul(0x9E3779B97F4A7C15).rotate_left((i % 61) as u32);
            let x = f64::from_bits(bits);
            if !x.is_finite() || x == 0.0 {
                continue;
            }
            let s = fmt(x);
            let parsed: f64 = s.parse().unwrap();
            assert_eq!(parsed.to_bits(), x.to_bits(), "round-trip failed for bits {bits:#x}: got {s}");
        }
    }
}
