//! Token to explanation resolution.

use super::narrate::{describe_quantifier, narrate_token, phrase};
use super::{Category, Explanation, KnowledgeBase};
use crate::flags::Flags;
use crate::pattern::{QuantifierMode, Token, TokenKind};

const NEEDS_UNICODE: &str = "Requires unicode mode (the u flag).";
const NOT_EXECUTABLE: &str = "Recognized but not executable by the matching engine; \
    testing this pattern will report an error.";
const BOUNDED_LOOKBEHIND: &str =
    "Many engines only accept lookbehind contents with a bounded length.";

/// Resolves tokens against a knowledge base under a set of flags.
pub struct Resolver<'kb, K: KnowledgeBase + ?Sized> {
    kb: &'kb K,
    flags: Flags,
}

impl<'kb, K: KnowledgeBase + ?Sized> Resolver<'kb, K> {
    pub fn new(kb: &'kb K) -> Self {
        Self {
            kb,
            flags: Flags::default(),
        }
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Explain `token` without narrating its contents. Never fails.
    pub fn resolve(&self, token: &Token) -> Explanation {
        let mut explanation = self
            .specific(token)
            .or_else(|| self.kb.lookup(Category::Kind, token.kind.as_str()))
            .unwrap_or_else(|| fallback(token));

        if token.kind == TokenKind::Literal {
            explanation.title = format!("Literal {:?}", token.atom());
        }
        if explanation.matches.is_none() {
            explanation.matches = Some(phrase(token));
        }
        if !token.kind.is_quantifier() {
            explanation.repetition = token.quantifier.map(|q| describe_quantifier(&q));
        }
        explanation.caveats = self.caveats(token);
        explanation
    }

    /// Explain `token` and narrate what it contains.
    pub fn explain(&self, token: &Token) -> Explanation {
        let mut explanation = self.resolve(token);
        explanation.narration = narrate_token(token);
        explanation
    }

    /// The most specific table entry for the token, if there is one.
    fn specific(&self, token: &Token) -> Option<Explanation> {
        let atom = token.atom();
        let lookup = |category, key: &str| self.kb.lookup(category, key);
        match token.kind {
            TokenKind::Literal
            | TokenKind::CharacterSet
            | TokenKind::PosixClass
            | TokenKind::Alternation => None,
            TokenKind::CharacterClass => lookup(Category::CharacterClass, atom),
            TokenKind::Anchor => lookup(Category::Anchor, atom),
            TokenKind::Boundary => lookup(Category::Boundary, atom),
            TokenKind::QuantifierGreedy
            | TokenKind::QuantifierLazy
            | TokenKind::QuantifierPossessive => {
                lookup(Category::Quantifier, &quantifier_key(token))
            }
            TokenKind::EscapeControl if atom.starts_with("\\c") => lookup(Category::Escape, "\\c"),
            TokenKind::EscapeControl => lookup(Category::Escape, atom),
            TokenKind::EscapeHex | TokenKind::EscapeUnicode | TokenKind::EscapeOctal => {
                lookup(Category::Escape, atom.get(..2)?)
            }
            TokenKind::EscapeSpecial => lookup(Category::Escape, "\\"),
            TokenKind::UnicodeProperty => {
                let key = match atom.get(2..) {
                    Some(name) if !name.starts_with('{') => format!("{}{{{name}}}", &atom[..2]),
                    _ => atom.to_string(),
                };
                lookup(Category::UnicodeProperty, &key)
                    .or_else(|| lookup(Category::UnicodeProperty, atom.get(..2)?))
            }
            TokenKind::GroupCapture => lookup(Category::Group, "(...)"),
            TokenKind::GroupNoncapture => lookup(Category::Group, "(?:...)"),
            TokenKind::GroupNamed => lookup(Category::Group, "(?<name>...)"),
            TokenKind::GroupAtomic => lookup(Category::Group, "(?>...)"),
            TokenKind::GroupConditional => lookup(Category::Group, "(?(cond)yes|no)"),
            TokenKind::GroupBranchReset => lookup(Category::Group, "(?|...)"),
            TokenKind::ModeModifier if atom.contains(':') => {
                lookup(Category::Group, "(?flags:...)")
            }
            TokenKind::ModeModifier => lookup(Category::Group, "(?flags)"),
            TokenKind::AssertionLookaheadPos => lookup(Category::Assertion, "(?=...)"),
            TokenKind::AssertionLookaheadNeg => lookup(Category::Assertion, "(?!...)"),
            TokenKind::AssertionLookbehindPos => lookup(Category::Assertion, "(?<=...)"),
            TokenKind::AssertionLookbehindNeg => lookup(Category::Assertion, "(?<!...)"),
            TokenKind::BackreferenceNumbered if atom.contains('-') => {
                lookup(Category::Backreference, "\\g{-N}")
            }
            TokenKind::BackreferenceNumbered => lookup(Category::Backreference, "\\N"),
            TokenKind::BackreferenceNamed => lookup(Category::Backreference, "\\k<name>"),
            TokenKind::Recursion if matches!(atom, "(?R)" | "(?0)") => {
                lookup(Category::Special, "(?R)")
            }
            TokenKind::Recursion => lookup(Category::Special, "(?N)"),
            TokenKind::Subroutine => lookup(Category::Special, "(?&name)"),
            TokenKind::Comment => lookup(Category::Special, "(?#...)"),
            TokenKind::LiteralMode => lookup(Category::Special, "\\Q...\\E"),
            TokenKind::SpecialConstruct if atom == "\\K" => lookup(Category::Special, "\\K"),
            TokenKind::SpecialConstruct => lookup(Category::Special, "(?...)"),
            TokenKind::Verb => {
                let name = atom.split(':').next().unwrap_or(atom).trim_end_matches(')');
                lookup(Category::Special, &format!("{name})"))
                    .or_else(|| lookup(Category::Special, "(*VERB)"))
            }
        }
    }

    fn caveats(&self, token: &Token) -> Vec<String> {
        let mut caveats = Vec::new();
        let needs_unicode = matches!(
            token.kind,
            TokenKind::UnicodeProperty | TokenKind::BackreferenceNamed
        );
        if needs_unicode && !self.flags.unicode {
            caveats.push(NEEDS_UNICODE.to_string());
        }
        let unsupported = matches!(
            token.kind,
            TokenKind::Recursion
                | TokenKind::Subroutine
                | TokenKind::Verb
                | TokenKind::GroupBranchReset
        );
        if unsupported {
            caveats.push(NOT_EXECUTABLE.to_string());
        }
        if matches!(
            token.kind,
            TokenKind::AssertionLookbehindPos | TokenKind::AssertionLookbehindNeg
        ) {
            caveats.push(BOUNDED_LOOKBEHIND.to_string());
        }
        caveats
    }
}

/// `*`, `+?` and so on as written; braced forms collapse to `{n}`, `{n,}` or `{n,m}`.
fn quantifier_key(token: &Token) -> String {
    let Some(q) = token.quantifier else {
        return token.value.clone();
    };
    if !q.braced {
        return token.value.clone();
    }
    let shape = match q.max {
        Some(max) if max == q.min => "{n}",
        Some(_) => "{n,m}",
        None => "{n,}",
    };
    let suffix = match q.mode {
        QuantifierMode::Greedy => "",
        QuantifierMode::Lazy => "?",
        QuantifierMode::Possessive => "+",
    };
    format!("{shape}{suffix}")
}

/// A bare explanation built from the token alone.
fn fallback(token: &Token) -> Explanation {
    Explanation::new(
        token.kind.as_str().replace('-', " "),
        format!("The construct {:?}.", token.atom()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::BuiltinKnowledge;
    use crate::pattern::tokenize;

    struct Empty;

    impl KnowledgeBase for Empty {
        fn lookup(&self, _: Category, _: &str) -> Option<Explanation> {
            None
        }
    }

    /// Answers every specific lookup with the key as the title.
    struct Echo;

    impl KnowledgeBase for Echo {
        fn lookup(&self, category: Category, key: &str) -> Option<Explanation> {
            (category != Category::Kind).then(|| Explanation::new(key, "echo"))
        }
    }

    fn first(pattern: &str) -> Token {
        tokenize(pattern).remove(0)
    }

    fn key(pattern: &str) -> String {
        Resolver::new(&Echo).resolve(&first(pattern)).title
    }

    #[test]
    fn lookup_keys() {
        let cases = [
            (r"\d", r"\d"),
            ("^", "^"),
            (r"\b", r"\b"),
            ("*?", "*?"),
            ("{3}", "{n}"),
            ("{2,}+", "{n,}+"),
            ("{2,4}?", "{n,m}?"),
            (r"\t", r"\t"),
            (r"\cM", r"\c"),
            (r"\x41", r"\x"),
            (r"\u{e9}", r"\u"),
            (r"\012", r"\0"),
            (r"\o{17}", r"\o"),
            (r"\.", "\\"),
            (r"\pL", r"\p{L}"),
            (r"\P{Greek}", r"\P{Greek}"),
            ("(a)", "(...)"),
            ("(?:a)", "(?:...)"),
            ("(?P<n>a)", "(?<name>...)"),
            ("(?>a)", "(?>...)"),
            ("(?(1)a|b)", "(?(cond)yes|no)"),
            ("(?|a)", "(?|...)"),
            ("(?i)", "(?flags)"),
            ("(?i:a)", "(?flags:...)"),
            ("(?=a)", "(?=...)"),
            ("(?<!a)", "(?<!...)"),
            (r"\2", r"\N"),
            (r"\g{-1}", r"\g{-N}"),
            (r"\k<n>", r"\k<name>"),
            ("(?0)", "(?R)"),
            ("(?-1)", "(?N)"),
            (r"\g<n>", "(?&name)"),
            ("(?#x)", "(?#...)"),
            (r"\Qa\E", r"\Q...\E"),
            (r"\K", r"\K"),
            ("(?@)", "(?...)"),
            ("(*MARK:x)", "(*MARK)"),
        ];
        for (pattern, expected) in cases {
            assert_eq!(key(pattern), expected, "{pattern}");
        }
    }

    #[test]
    fn specific_entry_wins() {
        let e = Resolver::new(&BuiltinKnowledge).resolve(&first(r"\d"));
        assert_eq!(e.syntax.as_deref(), Some(r"\d"));
        assert!(e.caveats.is_empty());
    }

    #[test]
    fn unknown_property_falls_back_to_generic() {
        let e = Resolver::new(&BuiltinKnowledge).resolve(&first(r"\p{Cyrillic}"));
        let generic = BuiltinKnowledge.lookup(Category::UnicodeProperty, r"\p").unwrap();
        assert_eq!(e.title, generic.title);
    }

    #[test]
    fn unknown_verb_falls_back_to_generic() {
        let e = Resolver::new(&BuiltinKnowledge).resolve(&first("(*NOPE)"));
        let generic = BuiltinKnowledge.lookup(Category::Special, "(*VERB)").unwrap();
        assert_eq!(e.title, generic.title);
    }

    #[test]
    fn empty_knowledge_base_still_explains() {
        let resolver = Resolver::new(&Empty);
        for token in tokenize(r"a\d[x](?:y)+(?R)") {
            let e = resolver.resolve(&token);
            assert!(!e.title.is_empty());
            assert!(!e.description.is_empty());
        }
        let e = resolver.resolve(&first("(?:y)"));
        assert_eq!(e.title, "group noncapture");
        assert_eq!(e.description, "The construct \"(?:y)\".");
    }

    #[test]
    fn literal_title_and_matches() {
        let e = Resolver::new(&BuiltinKnowledge).resolve(&first("a"));
        assert_eq!(e.title, "Literal \"a\"");
        assert_eq!(e.matches.as_deref(), Some("the character \"a\""));
    }

    #[test]
    fn folded_quantifier_sets_repetition() {
        let resolver = Resolver::new(&BuiltinKnowledge);
        let e = resolver.resolve(&first("(?:abc)+"));
        assert_eq!(e.repetition.as_deref(), Some("1 or more times"));
        assert!(e.narration.is_empty());
        let e = resolver.explain(&first("(?:abc)+"));
        assert_eq!(e.narration[0].text, "the literal text \"abc\"");
    }

    #[test]
    fn unicode_caveat_depends_on_flags() {
        let token = first(r"\p{L}");
        let plain = Resolver::new(&BuiltinKnowledge).resolve(&token);
        assert_eq!(plain.caveats, vec![NEEDS_UNICODE.to_string()]);
        let unicode = Resolver::new(&BuiltinKnowledge)
            .with_flags("u".parse().unwrap())
            .resolve(&token);
        assert!(unicode.caveats.is_empty());
    }

    #[test]
    fn engine_support_caveats() {
        let resolver = Resolver::new(&BuiltinKnowledge);
        for pattern in ["(?R)", "(?1)", r"\g<n>", "(*FAIL)", "(?|a)"] {
            let e = resolver.resolve(&first(pattern));
            assert!(e.caveats.contains(&NOT_EXECUTABLE.to_string()), "{pattern}");
        }
        for pattern in ["a+", "a++", "(?>a)", "(?(1)a|b)"] {
            assert!(resolver.resolve(&first(pattern)).caveats.is_empty(), "{pattern}");
        }
    }

    #[test]
    fn lookbehind_caveat() {
        let e = Resolver::new(&BuiltinKnowledge).resolve(&first("(?<=ab)"));
        assert_eq!(e.caveats, vec![BOUNDED_LOOKBEHIND.to_string()]);
    }
}
