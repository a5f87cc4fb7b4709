// functions for working with fixed-offset fields of a sentence
//
// None of these panic: out-of-range offsets and offsets that do not fall on a
// char boundary yield an empty field, which the numeric parsers reject.

use std::str::FromStr;

pub fn parse_bytes<T: FromStr>(b: &[u8]) -> Option<T> {
    std::str::from_utf8(b).ok()?.parse().ok()
}

/// Returns up to `len` bytes of `s` starting at `start`, clamped to the end of `s`.
pub fn field(s: &str, start: usize, len: usize) -> &str {
    let end = start.saturating_add(len).min(s.len());
    s.get(start..end).unwrap_or("")
}

/// Returns everything after `start`, or an empty string.
pub fn tail(s: &str, start: usize) -> &str {
    s.get(start..).unwrap_or("")
}

/// Finds `needle` in `s` at or after byte offset `from`.
pub fn find_from(s: &str, needle: char, from: usize) -> Option<usize> {
    s.as_bytes()
        .get(from..)?
        .iter()
        .position(|&b| b == needle as u8)
        .map(|i| i + from)
}

/// Parses the longest leading integer (`-?[0-9]+`) of `s`, ignoring whatever follows it.
pub fn parse_leading<T: FromStr>(s: &str) -> Option<T> {
    let b = s.as_bytes();
    let sign = usize::from(b.first() == Some(&b'-'));
    let digits = b[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    parse_bytes(&b[..sign + digits])
}

/// Parses the longest leading decimal number (`-?[0-9]*(\.[0-9]*)?`) of `s`.
pub fn parse_leading_decimal(s: &str) -> Option<f64> {
    let b = s.as_bytes();
    let sign = usize::from(b.first() == Some(&b'-'));
    let int_digits = b[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    let mut end = sign + int_digits;

    let mut frac_digits = 0;
    if b.get(end) == Some(&b'.') {
        frac_digits = b[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    parse_bytes(&b[..end])
}
