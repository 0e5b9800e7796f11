//! Single-token classification.
//!
//! [`classify`] looks at one position of a pattern and decides which construct
//! starts there. Prefixes overlap heavily (`(?<` may open a named group or a
//! lookbehind, `\g` may be a backreference or a subroutine call), so every
//! branch checks the longest form first. Malformed constructs never fail: they
//! shrink to a one-character literal and scanning carries on.

use super::quantifier::{detect_quantifier, quantifier_kind};
use super::scanner::{find_closing_delimiter, find_quote_end};
use super::token::{Token, TokenKind};

/// Classify the construct starting at byte `index` of `pattern`.
///
/// `index` must lie on a character boundary before the end of the pattern.
/// The returned token always consumes at least one character.
pub fn classify(pattern: &str, index: usize) -> Token {
    let rest = &pattern[index..];
    let Some(ch) = rest.chars().next() else {
        return Token::new(TokenKind::Literal, "", index);
    };

    let (kind, len) = match ch {
        '\\' => classify_escape(rest),
        '(' => classify_paren(rest),
        '[' => classify_bracket(rest),
        '*' | '+' | '?' | '{' => match detect_quantifier(pattern, index) {
            // A quantifier with nothing before it to repeat.
            Some(q) => {
                let mut token = Token::new(quantifier_kind(q.mode), &rest[..q.len], index);
                token.quantifier = Some(q);
                return token;
            }
            None => (TokenKind::Literal, 1),
        },
        '^' | '$' => (TokenKind::Anchor, 1),
        '|' => (TokenKind::Alternation, 1),
        '.' => (TokenKind::CharacterClass, 1),
        c => (TokenKind::Literal, c.len_utf8()),
    };

    let mut token = Token::new(kind, &rest[..len], index);
    if kind.takes_quantifier()
        && let Some(q) = detect_quantifier(pattern, index + len)
    {
        token.value = rest[..len + q.len].to_string();
        token.quantifier = Some(q);
    }
    token
}

/// Classify the escape sequence at the start of `rest` (which begins with `\`).
fn classify_escape(rest: &str) -> (TokenKind, usize) {
    let Some(next) = rest[1..].chars().next() else {
        // Trailing lone backslash.
        return (TokenKind::Literal, 1);
    };
    let after = &rest[1 + next.len_utf8()..];

    match next {
        'Q' => (
            TokenKind::LiteralMode,
            find_quote_end(rest.as_bytes(), 2).unwrap_or(rest.len()),
        ),
        'k' => match delimited(after, b"<'{") {
            Some((len, _)) => (TokenKind::BackreferenceNamed, 2 + len),
            None => (TokenKind::EscapeSpecial, 2),
        },
        'g' => classify_g(after),
        'p' | 'P' => match braced(after).or_else(|| letter(after)) {
            Some(len) => (TokenKind::UnicodeProperty, 2 + len),
            None => (TokenKind::EscapeSpecial, 2),
        },
        'x' => match braced(after).or_else(|| hex_run(after, 2, 2)) {
            Some(len) => (TokenKind::EscapeHex, 2 + len),
            None => (TokenKind::EscapeSpecial, 2),
        },
        'u' => match braced(after).or_else(|| hex_run(after, 4, 4)) {
            Some(len) => (TokenKind::EscapeUnicode, 2 + len),
            None => (TokenKind::EscapeSpecial, 2),
        },
        'c' => match letter(after) {
            Some(_) => (TokenKind::EscapeControl, 3),
            None => (TokenKind::EscapeSpecial, 2),
        },
        '0' => (TokenKind::EscapeOctal, 2 + count_while(after, 2, |b| (b'0'..=b'7').contains(&b))),
        'o' => match braced(after) {
            Some(len) => (TokenKind::EscapeOctal, 2 + len),
            None => (TokenKind::EscapeSpecial, 2),
        },
        '1'..='9' => (
            TokenKind::BackreferenceNumbered,
            2 + count_while(after, usize::MAX, |b| b.is_ascii_digit()),
        ),
        'b' | 'B' => (TokenKind::Boundary, 2),
        'A' | 'z' | 'Z' | 'G' => (TokenKind::Anchor, 2),
        'd' | 'D' | 'w' | 'W' | 's' | 'S' | 'h' | 'H' | 'N' | 'R' | 'X' => {
            (TokenKind::CharacterClass, 2)
        }
        't' | 'n' | 'r' | 'f' | 'v' | 'e' | 'a' => (TokenKind::EscapeControl, 2),
        'K' => (TokenKind::SpecialConstruct, 2),
        c => (TokenKind::EscapeSpecial, 1 + c.len_utf8()),
    }
}

/// `\g` forms: `\g<name>`/`\g'name'` call a group, `\g{..}`/`\gN`/`\g-N` refer back.
fn classify_g(after: &str) -> (TokenKind, usize) {
    if let Some((len, _)) = delimited(after, b"<'") {
        return (TokenKind::Subroutine, 2 + len);
    }
    if let Some((len, name)) = delimited(after, b"{") {
        let kind = if is_relative_number(name) {
            TokenKind::BackreferenceNumbered
        } else {
            TokenKind::BackreferenceNamed
        };
        return (kind, 2 + len);
    }
    let sign = usize::from(after.starts_with('-'));
    match count_while(&after[sign..], usize::MAX, |b| b.is_ascii_digit()) {
        0 => (TokenKind::EscapeSpecial, 2),
        digits => (TokenKind::BackreferenceNumbered, 2 + sign + digits),
    }
}

/// Classify a construct opening with `(` at the start of `rest`.
fn classify_paren(rest: &str) -> (TokenKind, usize) {
    let bytes = rest.as_bytes();

    // Control verbs and comments end at the first `)`; they do not nest.
    let is_verb = bytes.get(1) == Some(&b'*')
        && bytes
            .get(2)
            .is_some_and(|b| b.is_ascii_uppercase() || *b == b':');
    if is_verb || rest.starts_with("(?#") {
        let kind = if is_verb {
            TokenKind::Verb
        } else {
            TokenKind::Comment
        };
        return match rest.find(')') {
            Some(close) => (kind, close + 1),
            None => (TokenKind::Literal, 1),
        };
    }

    match find_closing_delimiter(rest, 0) {
        Some(close) => (group_kind(&rest[..=close]), close + 1),
        None => (TokenKind::Literal, 1),
    }
}

/// Classify a complete parenthesised construct by its prefix.
pub(crate) fn group_kind(group: &str) -> TokenKind {
    let Some(body) = group.strip_prefix("(?") else {
        return TokenKind::GroupCapture;
    };
    let b = body.as_bytes();
    match (b.first(), b.get(1)) {
        (Some(b'('), _) => TokenKind::GroupConditional,
        (Some(b'|'), _) => TokenKind::GroupBranchReset,
        (Some(b'<'), Some(b'=')) => TokenKind::AssertionLookbehindPos,
        (Some(b'<'), Some(b'!')) => TokenKind::AssertionLookbehindNeg,
        (Some(b'<'), _) | (Some(b'\''), _) | (Some(b'P'), Some(b'<')) => TokenKind::GroupNamed,
        (Some(b'P'), Some(b'=')) => TokenKind::BackreferenceNamed,
        (Some(b'P'), Some(b'>')) | (Some(b'&'), _) => TokenKind::Subroutine,
        (Some(b'='), _) => TokenKind::AssertionLookaheadPos,
        (Some(b'!'), _) => TokenKind::AssertionLookaheadNeg,
        (Some(b'>'), _) => TokenKind::GroupAtomic,
        (Some(b':'), _) => TokenKind::GroupNoncapture,
        _ if is_recursion(body) => TokenKind::Recursion,
        _ if is_mode_modifier(body) => TokenKind::ModeModifier,
        _ => TokenKind::SpecialConstruct,
    }
}

/// `R)`, `0)`, `2)`, `+1)`, `-1)`.
fn is_recursion(body: &str) -> bool {
    let Some(inner) = body.strip_suffix(')') else {
        return false;
    };
    inner == "R" || is_relative_number(inner)
}

/// `i)`, `im-sx)`, `i:...)`.
fn is_mode_modifier(body: &str) -> bool {
    let Some(end) = body.find([':', ')']) else {
        return false;
    };
    let flags = &body[..end];
    !flags.is_empty() && flags.bytes().all(|b| b.is_ascii_alphabetic() || b == b'-')
}

fn classify_bracket(rest: &str) -> (TokenKind, usize) {
    match find_closing_delimiter(rest, 0) {
        Some(close) if rest[1..close].contains("[:") => (TokenKind::PosixClass, close + 1),
        Some(close) => (TokenKind::CharacterSet, close + 1),
        None => (TokenKind::Literal, 1),
    }
}

/// A name wrapped in one of the `openers` (`<..>`, `'..'` or `{..}`).
///
/// Returns the length including delimiters and the name itself.
fn delimited<'a>(s: &'a str, openers: &[u8]) -> Option<(usize, &'a str)> {
    let open = *s.as_bytes().first()?;
    if !openers.contains(&open) {
        return None;
    }
    let close = match open {
        b'<' => '>',
        b'{' => '}',
        _ => '\'',
    };
    let end = s[1..].find(close)? + 1;
    let name = &s[1..end];
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'+'));
    valid.then_some((end + 1, name))
}

/// Length of a `{...}` run with non-empty contents.
fn braced(s: &str) -> Option<usize> {
    if !s.starts_with('{') {
        return None;
    }
    let close = s.find('}')?;
    (close > 1).then_some(close + 1)
}

fn letter(s: &str) -> Option<usize> {
    s.as_bytes()
        .first()
        .is_some_and(u8::is_ascii_alphabetic)
        .then_some(1)
}

fn hex_run(s: &str, min: usize, max: usize) -> Option<usize> {
    let n = count_while(s, max, |b| b.is_ascii_hexdigit());
    (n >= min).then_some(n)
}

fn count_while(s: &str, max: usize, pred: impl Fn(u8) -> bool) -> usize {
    s.bytes().take(max).take_while(|&b| pred(b)).count()
}

fn is_relative_number(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
