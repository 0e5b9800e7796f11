//! Token types produced by the pattern tokenizer.

use std::fmt;

use serde::Serialize;

/// The closed set of syntactic categories a token can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Literal,
    CharacterClass, // \d, \w, \s, ... and `.`
    CharacterSet,   // [abc], [^a-z]
    PosixClass,     // [[:alpha:]]
    QuantifierGreedy,
    QuantifierLazy,
    QuantifierPossessive,
    Anchor,   // ^ $ \A \z \Z \G
    Boundary, // \b \B
    GroupCapture,
    GroupNoncapture,
    GroupNamed,
    GroupAtomic,
    GroupConditional,
    GroupBranchReset,
    Comment,
    ModeModifier,
    AssertionLookaheadPos,
    AssertionLookaheadNeg,
    AssertionLookbehindPos,
    AssertionLookbehindNeg,
    BackreferenceNumbered,
    BackreferenceNamed,
    Recursion,
    Subroutine,
    UnicodeProperty,
    EscapeControl,
    EscapeHex,
    EscapeUnicode,
    EscapeOctal,
    EscapeSpecial,
    LiteralMode, // \Q...\E
    SpecialConstruct,
    Verb, // (*FAIL), (*SKIP), ...
    Alternation,
}

impl TokenKind {
    pub const ALL: [TokenKind; 35] = [
        TokenKind::Literal,
        TokenKind::CharacterClass,
        TokenKind::CharacterSet,
        TokenKind::PosixClass,
        TokenKind::QuantifierGreedy,
        TokenKind::QuantifierLazy,
        TokenKind::QuantifierPossessive,
        TokenKind::Anchor,
        TokenKind::Boundary,
        TokenKind::GroupCapture,
        TokenKind::GroupNoncapture,
        TokenKind::GroupNamed,
        TokenKind::GroupAtomic,
        TokenKind::GroupConditional,
        TokenKind::GroupBranchReset,
        TokenKind::Comment,
        TokenKind::ModeModifier,
        TokenKind::AssertionLookaheadPos,
        TokenKind::AssertionLookaheadNeg,
        TokenKind::AssertionLookbehindPos,
        TokenKind::AssertionLookbehindNeg,
        TokenKind::BackreferenceNumbered,
        TokenKind::BackreferenceNamed,
        TokenKind::Recursion,
        TokenKind::Subroutine,
        TokenKind::UnicodeProperty,
        TokenKind::EscapeControl,
        TokenKind::EscapeHex,
        TokenKind::EscapeUnicode,
        TokenKind::EscapeOctal,
        TokenKind::EscapeSpecial,
        TokenKind::LiteralMode,
        TokenKind::SpecialConstruct,
        TokenKind::Verb,
        TokenKind::Alternation,
    ];

    /// The kebab-case tag used in output and knowledge-base keys.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Literal => "literal",
            TokenKind::CharacterClass => "character-class",
            TokenKind::CharacterSet => "character-set",
            TokenKind::PosixClass => "posix-class",
            TokenKind::QuantifierGreedy => "quantifier-greedy",
            TokenKind::QuantifierLazy => "quantifier-lazy",
            TokenKind::QuantifierPossessive => "quantifier-possessive",
            TokenKind::Anchor => "anchor",
            TokenKind::Boundary => "boundary",
            TokenKind::GroupCapture => "group-capture",
            TokenKind::GroupNoncapture => "group-noncapture",
            TokenKind::GroupNamed => "group-named",
            TokenKind::GroupAtomic => "group-atomic",
            TokenKind::GroupConditional => "group-conditional",
            TokenKind::GroupBranchReset => "group-branch-reset",
            TokenKind::Comment => "comment",
            TokenKind::ModeModifier => "mode-modifier",
            TokenKind::AssertionLookaheadPos => "assertion-lookahead-pos",
            TokenKind::AssertionLookaheadNeg => "assertion-lookahead-neg",
            TokenKind::AssertionLookbehindPos => "assertion-lookbehind-pos",
            TokenKind::AssertionLookbehindNeg => "assertion-lookbehind-neg",
            TokenKind::BackreferenceNumbered => "backreference-numbered",
            TokenKind::BackreferenceNamed => "backreference-named",
            TokenKind::Recursion => "recursion",
            TokenKind::Subroutine => "subroutine",
            TokenKind::UnicodeProperty => "unicode-property",
            TokenKind::EscapeControl => "escape-control",
            TokenKind::EscapeHex => "escape-hex",
            TokenKind::EscapeUnicode => "escape-unicode",
            TokenKind::EscapeOctal => "escape-octal",
            TokenKind::EscapeSpecial => "escape-special",
            TokenKind::LiteralMode => "literal-mode",
            TokenKind::SpecialConstruct => "special-construct",
            TokenKind::Verb => "verb",
            TokenKind::Alternation => "alternation",
        }
    }

    pub fn is_quantifier(self) -> bool {
        matches!(
            self,
            TokenKind::QuantifierGreedy
                | TokenKind::QuantifierLazy
                | TokenKind::QuantifierPossessive
        )
    }

    /// Whether a token of this kind absorbs a directly following quantifier.
    pub fn takes_quantifier(self) -> bool {
        !matches!(
            self,
            TokenKind::Anchor
                | TokenKind::Boundary
                | TokenKind::Alternation
                | TokenKind::Comment
                | TokenKind::ModeModifier
                | TokenKind::Verb
                | TokenKind::LiteralMode
                | TokenKind::QuantifierGreedy
                | TokenKind::QuantifierLazy
                | TokenKind::QuantifierPossessive
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a quantifier trades off repetition count against backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantifierMode {
    Greedy,
    Lazy,
    Possessive,
}

/// A parsed repetition suffix: `*`, `+`, `?` or `{n}`, `{n,}`, `{n,m}`,
/// optionally followed by `?` (lazy) or `+` (possessive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quantifier {
    pub min: u32,
    /// `None` means unbounded.
    pub max: Option<u32>,
    pub mode: QuantifierMode,
    /// Whether the quantifier was written with braces.
    pub braced: bool,
    /// Length in bytes of the quantifier text.
    #[serde(skip)]
    pub len: usize,
}

/// One classified unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    pub position: usize,
    /// The quantifier folded into `value`, or the quantifier itself for
    /// standalone quantifier tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantifier: Option<Quantifier>,
}

impl Token {
    pub fn new(kind: TokenKind, value: &str, position: usize) -> Self {
        Self {
            kind,
            value: value.to_string(),
            position,
            quantifier: None,
        }
    }

    /// Byte offset one past the last character of the token.
    pub fn end(&self) -> usize {
        self.position + self.value.len()
    }

    /// The token text without any folded quantifier suffix.
    pub fn atom(&self) -> &str {
        match self.quantifier {
            Some(q) if !self.kind.is_quantifier() => &self.value[..self.value.len() - q.len],
            _ => &self.value,
        }
    }

    /// The folded quantifier suffix text, if any.
    pub fn quantifier_text(&self) -> Option<&str> {
        match self.quantifier {
            Some(q) if !self.kind.is_quantifier() => Some(&self.value[self.value.len() - q.len..]),
            _ => None,
        }
    }
}
