//! Quantifier detection.

use super::token::{Quantifier, QuantifierMode, TokenKind};

/// Recognise a quantifier starting at byte `i`.
///
/// `{` only counts when it has the shape `{n}`, `{n,}` or `{n,m}`.
pub fn detect_quantifier(pattern: &str, i: usize) -> Option<Quantifier> {
    let bytes = pattern.as_bytes();
    let (min, max, braced, mut len) = match bytes.get(i)? {
        b'*' => (0, None, false, 1),
        b'+' => (1, None, false, 1),
        b'?' => (0, Some(1), false, 1),
        b'{' => {
            let (min, max, len) = parse_bounds(bytes, i)?;
            (min, max, true, len)
        }
        _ => return None,
    };
    let mode = match bytes.get(i + len) {
        Some(b'?') => QuantifierMode::Lazy,
        Some(b'+') => QuantifierMode::Possessive,
        _ => QuantifierMode::Greedy,
    };
    if mode != QuantifierMode::Greedy {
        len += 1;
    }
    Some(Quantifier {
        min,
        max,
        mode,
        braced,
        len,
    })
}

/// The token kind of a standalone quantifier with the given mode.
pub fn quantifier_kind(mode: QuantifierMode) -> TokenKind {
    match mode {
        QuantifierMode::Greedy => TokenKind::QuantifierGreedy,
        QuantifierMode::Lazy => TokenKind::QuantifierLazy,
        QuantifierMode::Possessive => TokenKind::QuantifierPossessive,
    }
}

/// Parse `{n}`, `{n,}` or `{n,m}` at `open`, returning `(min, max, len)`.
fn parse_bounds(bytes: &[u8], open: usize) -> Option<(u32, Option<u32>, usize)> {
    let mut i = open + 1;
    let min = parse_number(bytes, &mut i)?;
    match bytes.get(i)? {
        b'}' => Some((min, Some(min), i + 1 - open)),
        b',' => {
            i += 1;
            if bytes.get(i) == Some(&b'}') {
                return Some((min, None, i + 1 - open));
            }
            let max = parse_number(bytes, &mut i)?;
            (bytes.get(i) == Some(&b'}')).then_some((min, Some(max), i + 1 - open))
        }
        _ => None,
    }
}

fn parse_number(bytes: &[u8], i: &mut usize) -> Option<u32> {
    let start = *i;
    while bytes.get(*i).is_some_and(u8::is_ascii_digit) {
        *i += 1;
    }
    if start == *i {
        return None;
    }
    std::str::from_utf8(&bytes[start..*i]).ok()?.parse().ok()
}
