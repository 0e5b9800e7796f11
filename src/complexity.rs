//! Complexity scoring of a tokenized pattern.

use serde::Serialize;

use crate::pattern::{Token, TokenKind};

/// Fixed cost of one token of the given kind.
pub fn weight(kind: TokenKind) -> u32 {
    match kind {
        TokenKind::Literal
        | TokenKind::CharacterClass
        | TokenKind::Anchor
        | TokenKind::Boundary
        | TokenKind::Comment
        | TokenKind::EscapeSpecial => 1,
        TokenKind::CharacterSet
        | TokenKind::PosixClass
        | TokenKind::Alternation
        | TokenKind::EscapeControl
        | TokenKind::EscapeHex
        | TokenKind::EscapeUnicode
        | TokenKind::EscapeOctal
        | TokenKind::LiteralMode => 2,
        TokenKind::QuantifierGreedy
        | TokenKind::GroupNoncapture
        | TokenKind::ModeModifier
        | TokenKind::UnicodeProperty => 3,
        TokenKind::QuantifierLazy | TokenKind::GroupCapture => 4,
        TokenKind::QuantifierPossessive
        | TokenKind::GroupNamed
        | TokenKind::BackreferenceNumbered => 5,
        TokenKind::AssertionLookaheadPos
        | TokenKind::BackreferenceNamed
        | TokenKind::SpecialConstruct => 6,
        TokenKind::AssertionLookaheadNeg
        | TokenKind::AssertionLookbehindPos
        | TokenKind::GroupAtomic => 7,
        TokenKind::AssertionLookbehindNeg | TokenKind::GroupBranchReset => 8,
        TokenKind::GroupConditional | TokenKind::Subroutine => 9,
        TokenKind::Recursion | TokenKind::Verb => 10,
    }
}

/// Score `tokens` on a 0-100 scale: the mean weight times ten, capped at 100.
///
/// An empty pattern has no score.
pub fn score(tokens: &[Token]) -> Option<u8> {
    if tokens.is_empty() {
        return None;
    }
    let total: u32 = tokens.iter().map(|t| weight(t.kind)).sum();
    let mean = f64::from(total) / tokens.len() as f64;
    Some((mean * 10.0).round().min(100.0) as u8)
}

/// Coarse band for a score, used by summary indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Simple,
    Moderate,
    Complex,
    Expert,
}

impl Difficulty {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=20 => Difficulty::Simple,
            21..=40 => Difficulty::Moderate,
            41..=65 => Difficulty::Complex,
            _ => Difficulty::Expert,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Simple => "simple",
            Difficulty::Moderate => "moderate",
            Difficulty::Complex => "complex",
            Difficulty::Expert => "expert",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::tokenize;

    #[test]
    fn empty_has_no_score() {
        assert_eq!(score(&[]), None);
    }

    #[test]
    fn plain_literals_score_ten() {
        assert_eq!(score(&tokenize("abc")), Some(10));
    }

    #[test]
    fn mean_is_rounded() {
        // literal (1) + character-set (2) = 1.5 -> 15
        assert_eq!(score(&tokenize("a[bc]")), Some(15));
        // group-capture (4), character-class (1), backreference (5) = 3.33 -> 33
        assert_eq!(score(&tokenize(r"(\w+)\s+\1")), Some(33));
    }

    #[test]
    fn recursion_saturates() {
        assert_eq!(score(&tokenize("(?R)")), Some(100));
        assert_eq!(score(&tokenize("(*FAIL)(?R)")), Some(100));
    }

    #[test]
    fn every_kind_is_weighted_between_one_and_ten() {
        for kind in TokenKind::ALL {
            assert!((1..=10).contains(&weight(kind)), "{kind}");
        }
    }

    #[test]
    fn difficulty_bands() {
        assert_eq!(Difficulty::from_score(10), Difficulty::Simple);
        assert_eq!(Difficulty::from_score(33), Difficulty::Moderate);
        assert_eq!(Difficulty::from_score(50), Difficulty::Complex);
        assert_eq!(Difficulty::from_score(100), Difficulty::Expert);
    }
}
