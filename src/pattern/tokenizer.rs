//! Left-to-right tokenization of a whole pattern.

use super::classifier::classify;
use super::token::Token;

/// Split `pattern` into classified tokens.
///
/// Whitespace-only input yields no tokens. Otherwise the token values
/// concatenate back to exactly `pattern`.
pub fn tokenize(pattern: &str) -> Vec<Token> {
    if pattern.trim().is_empty() {
        return Vec::new();
    }
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < pattern.len() {
        let token = classify(pattern, pos);
        pos = token.end();
        tokens.push(token);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::token::TokenKind;

    fn kinds(pattern: &str) -> Vec<(TokenKind, String)> {
        tokenize(pattern)
            .into_iter()
            .map(|t| (t.kind, t.value))
            .collect()
    }

    fn rebuild(pattern: &str) -> String {
        tokenize(pattern).into_iter().map(|t| t.value).collect()
    }

    #[test]
    fn empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("\t\n").is_empty());
    }

    #[test]
    fn dot_between_literals() {
        assert_eq!(
            kinds("a.c"),
            vec![
                (TokenKind::Literal, "a".to_string()),
                (TokenKind::CharacterClass, ".".to_string()),
                (TokenKind::Literal, "c".to_string()),
            ]
        );
    }

    #[test]
    fn quantified_noncapture_group_is_one_token() {
        assert_eq!(
            kinds("(?:abc)+"),
            vec![(TokenKind::GroupNoncapture, "(?:abc)+".to_string())]
        );
    }

    #[test]
    fn repeated_word() {
        assert_eq!(
            kinds(r"(\w+)\s+\1"),
            vec![
                (TokenKind::GroupCapture, r"(\w+)".to_string()),
                (TokenKind::CharacterClass, r"\s+".to_string()),
                (TokenKind::BackreferenceNumbered, r"\1".to_string()),
            ]
        );
    }

    #[test]
    fn lone_open_bracket() {
        assert_eq!(kinds("["), vec![(TokenKind::Literal, "[".to_string())]);
    }

    #[test]
    fn unterminated_group_keeps_going() {
        assert_eq!(
            kinds("a(b"),
            vec![
                (TokenKind::Literal, "a".to_string()),
                (TokenKind::Literal, "(".to_string()),
                (TokenKind::Literal, "b".to_string()),
            ]
        );
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = tokenize("é.b");
        let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 2, 3]);
    }

    #[test]
    fn alternation_and_anchors() {
        assert_eq!(
            kinds("^a|b$"),
            vec![
                (TokenKind::Anchor, "^".to_string()),
                (TokenKind::Literal, "a".to_string()),
                (TokenKind::Alternation, "|".to_string()),
                (TokenKind::Literal, "b".to_string()),
                (TokenKind::Anchor, "$".to_string()),
            ]
        );
    }

    #[test]
    fn reconstruction_of_awkward_patterns() {
        for pattern in [
            r"(?<y>\d{4})-(?<m>\d\d)",
            r"[[:alpha:]]+\b(?=\s)",
            r"((((a))))",
            r"(((",
            r"]]][[[",
            r"\Q.*\E\x{41}é",
            r"a{2,4}?b{,}c{3}+",
            r"(*SKIP)(*F)|\p{Greek}+",
            " leading space",
            "\\",
        ] {
            assert_eq!(rebuild(pattern), pattern);
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let pattern = r"(?i)(\w+)@(\w+)\.(com|org)";
        assert_eq!(tokenize(pattern), tokenize(pattern));
    }
}
