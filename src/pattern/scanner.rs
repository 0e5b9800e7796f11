//! Delimiter scanning over raw pattern bytes.
//!
//! All syntax characters are ASCII, so scanning works on bytes and every index
//! returned lands on a character boundary. Escaped characters never count
//! towards nesting.

/// Find the index of the delimiter closing the `(` or `[` at `open`.
///
/// Returns `None` when the delimiter is unterminated or `open` does not point
/// at an opening delimiter.
pub fn find_closing_delimiter(pattern: &str, open: usize) -> Option<usize> {
    let bytes = pattern.as_bytes();
    match bytes.get(open)? {
        b'(' => closing_paren(bytes, open),
        b'[' => closing_bracket(bytes, open),
        _ => None,
    }
}

/// Split `inner` at each `|` that is not nested inside a group or set.
///
/// Always returns at least one (possibly empty) alternative.
pub fn split_alternatives(inner: &str) -> Vec<&str> {
    let bytes = inner.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i = skip_escape(bytes, i);
                continue;
            }
            b'[' => {
                if let Some(close) = closing_bracket(bytes, i) {
                    i = close + 1;
                    continue;
                }
            }
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b'|' if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(&inner[start..]);
    parts
}

fn closing_paren(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i = skip_escape(bytes, i);
                continue;
            }
            // Parentheses inside a set are members, not nesting.
            b'[' => {
                if let Some(close) = closing_bracket(bytes, i) {
                    i = close + 1;
                    continue;
                }
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn closing_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    let mut i = open + 1;
    if bytes.get(i) == Some(&b'^') {
        i += 1;
    }
    // A `]` straight after `[` or `[^` is a member of the set.
    if bytes.get(i) == Some(&b']') {
        i += 1;
    }
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i = skip_escape(bytes, i);
                continue;
            }
            b'[' if bytes.get(i + 1) == Some(&b':') => {
                if let Some(close) = posix_bracket_end(bytes, i) {
                    i = close + 1;
                    continue;
                }
            }
            b']' => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Index of the `]` ending a `[:name:]` bracket starting at `open`.
fn posix_bracket_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut i = open + 2;
    while i < bytes.len() && (bytes[i].is_ascii_alphabetic() || bytes[i] == b'^') {
        i += 1;
    }
    (i > open + 2 && bytes.get(i) == Some(&b':') && bytes.get(i + 1) == Some(&b']'))
        .then_some(i + 1)
}

/// Index just past the escape sequence starting at the `\` at `i`.
///
/// `\Q...\E` quotes everything up to `\E` (or end of input).
pub(crate) fn skip_escape(bytes: &[u8], i: usize) -> usize {
    if bytes.get(i + 1) == Some(&b'Q') {
        return find_quote_end(bytes, i + 2).unwrap_or(bytes.len());
    }
    (i + 2).min(bytes.len())
}

/// Index just past the `\E` that ends a quoted run starting at `from`.
pub(crate) fn find_quote_end(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(2)
        .position(|w| w == b"\\E")
        .map(|p| from + p + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_group() {
        assert_eq!(find_closing_delimiter("(abc)d", 0), Some(4));
    }

    #[test]
    fn nested_groups() {
        assert_eq!(find_closing_delimiter("(a(b)c)", 0), Some(6));
        assert_eq!(find_closing_delimiter("(a(b)c)", 2), Some(4));
    }

    #[test]
    fn escaped_parens_do_not_count() {
        assert_eq!(find_closing_delimiter(r"(a\)b)", 0), Some(5));
        assert_eq!(find_closing_delimiter(r"(a\(b)", 0), Some(5));
    }

    #[test]
    fn paren_inside_set_is_a_member() {
        assert_eq!(find_closing_delimiter("([)]x)", 0), Some(5));
    }

    #[test]
    fn unterminated_group() {
        assert_eq!(find_closing_delimiter("(ab", 0), None);
        assert_eq!(find_closing_delimiter(r"(ab\)", 0), None);
    }

    #[test]
    fn simple_set() {
        assert_eq!(find_closing_delimiter("[abc]d", 0), Some(4));
    }

    #[test]
    fn escaped_bracket_in_set() {
        assert_eq!(find_closing_delimiter(r"[a\]b]", 0), Some(5));
    }

    #[test]
    fn leading_bracket_is_literal() {
        assert_eq!(find_closing_delimiter("[]a]", 0), Some(3));
        assert_eq!(find_closing_delimiter("[^]a]", 0), Some(4));
        assert_eq!(find_closing_delimiter("[]", 0), None);
    }

    #[test]
    fn posix_bracket_inside_set() {
        assert_eq!(find_closing_delimiter("[[:alpha:]_]", 0), Some(11));
        assert_eq!(find_closing_delimiter("[[:^digit:]]", 0), Some(11));
    }

    #[test]
    fn unterminated_set() {
        assert_eq!(find_closing_delimiter("[", 0), None);
        assert_eq!(find_closing_delimiter("[abc", 0), None);
    }

    #[test]
    fn not_a_delimiter() {
        assert_eq!(find_closing_delimiter("abc", 0), None);
        assert_eq!(find_closing_delimiter("", 0), None);
    }

    #[test]
    fn quoted_run_hides_delimiters() {
        assert_eq!(find_closing_delimiter(r"(\Q)(\E)", 0), Some(7));
    }

    #[test]
    fn split_top_level_only() {
        assert_eq!(split_alternatives("a|b(c|d)|[|]"), vec!["a", "b(c|d)", "[|]"]);
    }

    #[test]
    fn split_ignores_escaped_bar() {
        assert_eq!(split_alternatives(r"a\|b"), vec![r"a\|b"]);
    }

    #[test]
    fn split_keeps_empty_alternatives() {
        assert_eq!(split_alternatives("|a|"), vec!["", "a", ""]);
        assert_eq!(split_alternatives(""), vec![""]);
    }
}
