//! The built-in knowledge base of construct descriptions.
//!
//! Tables are compile-time `phf` maps keyed by the literal fragment they
//! describe (`\d`, `*?`, `(?<=...)`). Composite constructs are keyed by a
//! canonical spelling of their prefix, so every lookbehind shares one entry.
//! Please keep each table grouped the way the constructs are grouped in the
//! pattern module docs.

use phf::{Map, phf_map};

use super::Explanation;

/// Which table a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CharacterClass,
    Anchor,
    Boundary,
    Quantifier,
    Escape,
    UnicodeProperty,
    Group,
    Assertion,
    Backreference,
    Special,
    /// Kind-level fallback, keyed by the token kind's tag.
    Kind,
}

/// Read-only source of explanations.
pub trait KnowledgeBase {
    fn lookup(&self, category: Category, key: &str) -> Option<Explanation>;
}

/// The tables compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinKnowledge;

impl KnowledgeBase for BuiltinKnowledge {
    fn lookup(&self, category: Category, key: &str) -> Option<Explanation> {
        table(category).get(key).map(Entry::to_explanation)
    }
}

fn table(category: Category) -> &'static Map<&'static str, Entry> {
    match category {
        Category::CharacterClass => &CHARACTER_CLASSES,
        Category::Anchor => &ANCHORS,
        Category::Boundary => &BOUNDARIES,
        Category::Quantifier => &QUANTIFIERS,
        Category::Escape => &ESCAPES,
        Category::UnicodeProperty => &UNICODE_PROPERTIES,
        Category::Group => &GROUPS,
        Category::Assertion => &ASSERTIONS,
        Category::Backreference => &BACKREFERENCES,
        Category::Special => &SPECIAL,
        Category::Kind => &KINDS,
    }
}

/// A static table row.
struct Entry {
    title: &'static str,
    description: &'static str,
    syntax: Option<&'static str>,
    example: Option<&'static str>,
    matches: Option<&'static str>,
    details: Option<&'static str>,
    reference: Option<&'static str>,
}

impl Entry {
    const EMPTY: Entry = Entry {
        title: "",
        description: "",
        syntax: None,
        example: None,
        matches: None,
        details: None,
        reference: None,
    };

    fn to_explanation(&self) -> Explanation {
        Explanation {
            title: self.title.to_string(),
            description: self.description.to_string(),
            syntax: self.syntax.map(str::to_string),
            example: self.example.map(str::to_string),
            matches: self.matches.map(str::to_string),
            details: self.details.map(str::to_string),
            reference: self.reference.map(str::to_string),
            ..Explanation::default()
        }
    }
}

macro_rules! entry {
    ($title:expr, $description:expr $(, $field:ident: $value:expr)* $(,)?) => {
        Entry {
            title: $title,
            description: $description,
            $($field: Some($value),)*
            ..Entry::EMPTY
        }
    };
}

const REF_CLASSES: &str = "https://www.regular-expressions.info/shorthand.html";
const REF_ANCHORS: &str = "https://www.regular-expressions.info/anchors.html";
const REF_REPEAT: &str = "https://www.regular-expressions.info/repeat.html";
const REF_GROUPS: &str = "https://www.regular-expressions.info/brackets.html";
const REF_LOOKAROUND: &str = "https://www.regular-expressions.info/lookaround.html";
const REF_BACKREF: &str = "https://www.regular-expressions.info/backref.html";
const REF_UNICODE: &str = "https://www.regular-expressions.info/unicode.html";
const REF_RECURSION: &str = "https://www.regular-expressions.info/recurse.html";

static CHARACTER_CLASSES: Map<&'static str, Entry> = phf_map! {
    "." => entry!("Any character", "Matches any character except newline.",
        syntax: ".", example: "a.c matches \"abc\" and \"a-c\"",
        details: "With the s flag the dot matches newlines too.", reference: REF_CLASSES),
    "\\d" => entry!("Digit", "Matches any digit character.",
        syntax: "\\d", example: "\\d\\d matches \"42\"", matches: "0-9 (and other Unicode digits)",
        reference: REF_CLASSES),
    "\\D" => entry!("Non-digit", "Matches any character that is not a digit.",
        syntax: "\\D", example: "\\D matches \"a\" but not \"7\"", reference: REF_CLASSES),
    "\\w" => entry!("Word character", "Matches a letter, digit or underscore.",
        syntax: "\\w", example: "\\w+ matches \"hello_42\"", matches: "A-Z, a-z, 0-9 and _",
        reference: REF_CLASSES),
    "\\W" => entry!("Non-word character", "Matches any character that is not a letter, digit or underscore.",
        syntax: "\\W", example: "\\W matches \"!\" and \" \"", reference: REF_CLASSES),
    "\\s" => entry!("Whitespace", "Matches any whitespace character.",
        syntax: "\\s", example: "a\\sb matches \"a b\"", matches: "space, tab, newline, carriage return, form feed",
        reference: REF_CLASSES),
    "\\S" => entry!("Non-whitespace", "Matches any character that is not whitespace.",
        syntax: "\\S", example: "\\S+ matches \"word\"", reference: REF_CLASSES),
    "\\h" => entry!("Horizontal whitespace", "Matches a space, tab or other horizontal whitespace character.",
        syntax: "\\h", reference: REF_CLASSES),
    "\\H" => entry!("Non-horizontal-whitespace", "Matches any character that is not horizontal whitespace.",
        syntax: "\\H", reference: REF_CLASSES),
    "\\N" => entry!("Non-newline", "Matches any character except a newline, regardless of flags.",
        syntax: "\\N"),
    "\\R" => entry!("Line break", "Matches any line-break sequence, including \\r\\n as a unit.",
        syntax: "\\R"),
    "\\X" => entry!("Grapheme cluster", "Matches one user-perceived character, such as a letter with combining accents.",
        syntax: "\\X", reference: REF_UNICODE),
};

static ANCHORS: Map<&'static str, Entry> = phf_map! {
    "^" => entry!("Start anchor", "Matches at the start of the text, or of each line with the m flag.",
        syntax: "^", example: "^abc matches \"abc\" only at the beginning", reference: REF_ANCHORS),
    "$" => entry!("End anchor", "Matches at the end of the text, or of each line with the m flag.",
        syntax: "$", example: "abc$ matches \"abc\" only at the end", reference: REF_ANCHORS),
    "\\A" => entry!("Start of text", "Matches only at the very start of the text, ignoring the m flag.",
        syntax: "\\A", reference: REF_ANCHORS),
    "\\z" => entry!("End of text", "Matches only at the very end of the text.",
        syntax: "\\z", reference: REF_ANCHORS),
    "\\Z" => entry!("End of text before final newline", "Matches at the end of the text or before a final newline.",
        syntax: "\\Z", reference: REF_ANCHORS),
    "\\G" => entry!("End of previous match", "Matches where the previous match ended, or at the start for the first match.",
        syntax: "\\G", reference: REF_ANCHORS),
};

static BOUNDARIES: Map<&'static str, Entry> = phf_map! {
    "\\b" => entry!("Word boundary", "Matches between a word character and a non-word character, without consuming text.",
        syntax: "\\b", example: "\\bcat\\b matches \"cat\" but not \"concat\"", reference: REF_ANCHORS),
    "\\B" => entry!("Non-word boundary", "Matches wherever \\b does not.",
        syntax: "\\B", example: "\\Bcat matches the \"cat\" in \"concat\"", reference: REF_ANCHORS),
};

static QUANTIFIERS: Map<&'static str, Entry> = phf_map! {
    "*" => entry!("Zero or more", "Repeats the previous item zero or more times, as many as possible.",
        syntax: "*", example: "ab*c matches \"ac\" and \"abbbc\"", reference: REF_REPEAT),
    "+" => entry!("One or more", "Repeats the previous item one or more times, as many as possible.",
        syntax: "+", example: "ab+c matches \"abc\" but not \"ac\"", reference: REF_REPEAT),
    "?" => entry!("Optional", "Makes the previous item optional.",
        syntax: "?", example: "colou?r matches \"color\" and \"colour\"", reference: REF_REPEAT),
    "*?" => entry!("Zero or more, lazy", "Repeats the previous item zero or more times, as few as possible.",
        syntax: "*?", example: "<.*?> matches \"<a>\" in \"<a><b>\"", reference: REF_REPEAT),
    "+?" => entry!("One or more, lazy", "Repeats the previous item one or more times, as few as possible.",
        syntax: "+?", reference: REF_REPEAT),
    "??" => entry!("Optional, lazy", "Makes the previous item optional, preferring to skip it.",
        syntax: "??", reference: REF_REPEAT),
    "*+" => entry!("Zero or more, possessive", "Repeats the previous item as many times as possible and never gives any back.",
        syntax: "*+", reference: REF_REPEAT),
    "++" => entry!("One or more, possessive", "Repeats the previous item at least once, as many times as possible, never giving any back.",
        syntax: "++", reference: REF_REPEAT),
    "?+" => entry!("Optional, possessive", "Takes the previous item if it can and never gives it back.",
        syntax: "?+", reference: REF_REPEAT),
    "{n}" => entry!("Exact count", "Repeats the previous item exactly n times.",
        syntax: "{n}", example: "\\d{4} matches \"2024\"", reference: REF_REPEAT),
    "{n,}" => entry!("At least n", "Repeats the previous item n or more times, as many as possible.",
        syntax: "{n,}", example: "a{2,} matches \"aa\" and \"aaaa\"", reference: REF_REPEAT),
    "{n,m}" => entry!("Between n and m", "Repeats the previous item between n and m times, as many as possible.",
        syntax: "{n,m}", example: "a{2,4} matches \"aa\", \"aaa\" and \"aaaa\"", reference: REF_REPEAT),
    "{n}?" => entry!("Exact count, lazy", "Repeats the previous item exactly n times; laziness makes no difference.",
        syntax: "{n}?", reference: REF_REPEAT),
    "{n,}?" => entry!("At least n, lazy", "Repeats the previous item n or more times, as few as possible.",
        syntax: "{n,}?", reference: REF_REPEAT),
    "{n,m}?" => entry!("Between n and m, lazy", "Repeats the previous item between n and m times, as few as possible.",
        syntax: "{n,m}?", reference: REF_REPEAT),
    "{n}+" => entry!("Exact count, possessive", "Repeats the previous item exactly n times without backtracking.",
        syntax: "{n}+", reference: REF_REPEAT),
    "{n,}+" => entry!("At least n, possessive", "Repeats the previous item n or more times and never gives any back.",
        syntax: "{n,}+", reference: REF_REPEAT),
    "{n,m}+" => entry!("Between n and m, possessive", "Repeats the previous item between n and m times and never gives any back.",
        syntax: "{n,m}+", reference: REF_REPEAT),
};

static ESCAPES: Map<&'static str, Entry> = phf_map! {
    "\\t" => entry!("Tab", "Matches a horizontal tab character.", syntax: "\\t", matches: "U+0009"),
    "\\n" => entry!("Newline", "Matches a line feed character.", syntax: "\\n", matches: "U+000A"),
    "\\r" => entry!("Carriage return", "Matches a carriage return character.", syntax: "\\r", matches: "U+000D"),
    "\\f" => entry!("Form feed", "Matches a form feed character.", syntax: "\\f", matches: "U+000C"),
    "\\v" => entry!("Vertical tab", "Matches a vertical tab character.", syntax: "\\v", matches: "U+000B"),
    "\\e" => entry!("Escape", "Matches the escape control character.", syntax: "\\e", matches: "U+001B"),
    "\\a" => entry!("Bell", "Matches the bell control character.", syntax: "\\a", matches: "U+0007"),
    "\\c" => entry!("Control character", "Matches the control character produced by Ctrl plus the given letter.",
        syntax: "\\cX", example: "\\cM matches a carriage return"),
    "\\x" => entry!("Hex escape", "Matches the character with the given hexadecimal code.",
        syntax: "\\xHH or \\x{H...}", example: "\\x41 matches \"A\""),
    "\\u" => entry!("Unicode escape", "Matches the character with the given Unicode code point.",
        syntax: "\\uHHHH or \\u{H...}", example: "\\u00e9 matches \"\u{e9}\"", reference: REF_UNICODE),
    "\\0" => entry!("Octal escape", "Matches the character with the given octal code; \\0 alone is the NUL character.",
        syntax: "\\0oo", example: "\\012 matches a newline"),
    "\\o" => entry!("Octal escape", "Matches the character with the given octal code.",
        syntax: "\\o{o...}", example: "\\o{101} matches \"A\""),
    "\\" => entry!("Escaped character", "Matches the escaped character literally instead of giving it special meaning.",
        syntax: "\\char", example: "\\. matches a literal dot"),
};

static UNICODE_PROPERTIES: Map<&'static str, Entry> = phf_map! {
    "\\p{L}" => entry!("Unicode letter", "Matches any kind of letter from any language.", syntax: "\\p{L}", reference: REF_UNICODE),
    "\\p{Lu}" => entry!("Unicode uppercase letter", "Matches an uppercase letter that has a lowercase variant.", syntax: "\\p{Lu}", reference: REF_UNICODE),
    "\\p{Ll}" => entry!("Unicode lowercase letter", "Matches a lowercase letter that has an uppercase variant.", syntax: "\\p{Ll}", reference: REF_UNICODE),
    "\\p{N}" => entry!("Unicode number", "Matches any kind of numeric character in any script.", syntax: "\\p{N}", reference: REF_UNICODE),
    "\\p{Nd}" => entry!("Unicode decimal digit", "Matches a digit zero through nine in any script.", syntax: "\\p{Nd}", reference: REF_UNICODE),
    "\\p{P}" => entry!("Unicode punctuation", "Matches any kind of punctuation character.", syntax: "\\p{P}", reference: REF_UNICODE),
    "\\p{S}" => entry!("Unicode symbol", "Matches math symbols, currency signs and other symbols.", syntax: "\\p{S}", reference: REF_UNICODE),
    "\\p{Z}" => entry!("Unicode separator", "Matches any kind of whitespace or invisible separator.", syntax: "\\p{Z}", reference: REF_UNICODE),
    "\\p{M}" => entry!("Unicode mark", "Matches a character intended to be combined with another, such as an accent.", syntax: "\\p{M}", reference: REF_UNICODE),
    "\\p{Greek}" => entry!("Greek script", "Matches a character from the Greek script.", syntax: "\\p{Greek}", reference: REF_UNICODE),
    "\\p{Latin}" => entry!("Latin script", "Matches a character from the Latin script.", syntax: "\\p{Latin}", reference: REF_UNICODE),
    "\\p{Han}" => entry!("Han script", "Matches a Chinese, Japanese or Korean ideograph.", syntax: "\\p{Han}", reference: REF_UNICODE),
    "\\p" => entry!("Unicode property", "Matches one character that has the named Unicode property, category or script.",
        syntax: "\\p{Name}", example: "\\p{L} matches any letter", reference: REF_UNICODE),
    "\\P" => entry!("Negated Unicode property", "Matches one character that does not have the named Unicode property.",
        syntax: "\\P{Name}", example: "\\P{L} matches anything but a letter", reference: REF_UNICODE),
};

static GROUPS: Map<&'static str, Entry> = phf_map! {
    "(...)" => entry!("Capturing group", "Groups its contents and remembers the matched text under the next group number.",
        syntax: "(...)", example: "(ab)+ matches \"abab\" and captures \"ab\"", reference: REF_GROUPS),
    "(?:...)" => entry!("Non-capturing group", "Groups its contents without remembering the matched text.",
        syntax: "(?:...)", example: "(?:ab)+ matches \"abab\"", reference: REF_GROUPS),
    "(?<name>...)" => entry!("Named capturing group", "Groups its contents and remembers the matched text under a name as well as a number.",
        syntax: "(?<name>...)", example: "(?<year>\\d{4}) captures a year as \"year\"",
        reference: "https://www.regular-expressions.info/named.html"),
    "(?>...)" => entry!("Atomic group", "Matches its contents once and discards the backtracking positions inside it.",
        syntax: "(?>...)", example: "(?>a+)b fails fast on \"aaaa\"",
        reference: "https://www.regular-expressions.info/atomic.html"),
    "(?(cond)yes|no)" => entry!("Conditional", "Tries the yes branch when the condition holds and the no branch otherwise.",
        syntax: "(?(cond)yes|no)", example: "(<)?\\w+(?(1)>) matches \"<a>\" and \"a\"",
        reference: "https://www.regular-expressions.info/conditional.html"),
    "(?|...)" => entry!("Branch reset group", "Each alternative numbers its capturing groups from the same starting number.",
        syntax: "(?|...)", example: "(?|(a)|(b)) captures either letter as group 1",
        reference: "https://www.regular-expressions.info/branchreset.html"),
    "(?flags)" => entry!("Mode modifier", "Turns matching options on or off for the rest of the enclosing group.",
        syntax: "(?imsx-imsx)", example: "(?i)abc matches \"ABC\"",
        reference: "https://www.regular-expressions.info/modifiers.html"),
    "(?flags:...)" => entry!("Scoped mode modifier", "A non-capturing group whose contents match with the given options.",
        syntax: "(?imsx-imsx:...)", example: "a(?i:b)c matches \"aBc\" but not \"ABc\"",
        reference: "https://www.regular-expressions.info/modifiers.html"),
};

static ASSERTIONS: Map<&'static str, Entry> = phf_map! {
    "(?=...)" => entry!("Positive lookahead", "Succeeds if its contents match right here, without consuming them.",
        syntax: "(?=...)", example: "q(?=u) matches the \"q\" in \"queen\"", reference: REF_LOOKAROUND),
    "(?!...)" => entry!("Negative lookahead", "Succeeds if its contents do not match right here.",
        syntax: "(?!...)", example: "q(?!u) matches the \"q\" in \"Iraq\"", reference: REF_LOOKAROUND),
    "(?<=...)" => entry!("Positive lookbehind", "Succeeds if its contents match immediately before this position.",
        syntax: "(?<=...)", example: "(?<=\\$)\\d+ matches \"42\" in \"$42\"", reference: REF_LOOKAROUND),
    "(?<!...)" => entry!("Negative lookbehind", "Succeeds if its contents do not match immediately before this position.",
        syntax: "(?<!...)", example: "(?<!\\$)\\b\\d+ matches \"42\" in \"x 42\"", reference: REF_LOOKAROUND),
};

static BACKREFERENCES: Map<&'static str, Entry> = phf_map! {
    "\\N" => entry!("Backreference", "Matches the same text most recently captured by the numbered group.",
        syntax: "\\1 ... \\9", example: "(\\w)\\1 matches \"ee\" in \"feet\"", reference: REF_BACKREF),
    "\\g{-N}" => entry!("Relative backreference", "Matches the text captured by the group N positions before this reference.",
        syntax: "\\g{-1}", reference: REF_BACKREF),
    "\\k<name>" => entry!("Named backreference", "Matches the same text most recently captured by the named group.",
        syntax: "\\k<name>", example: "(?<q>['\"]).*?\\k<q> matches a quoted string", reference: REF_BACKREF),
};

static SPECIAL: Map<&'static str, Entry> = phf_map! {
    "(?R)" => entry!("Recursion", "Matches the whole pattern again at this point.",
        syntax: "(?R) or (?0)", example: "\\((?:[^()]|(?R))*\\) matches balanced parentheses", reference: REF_RECURSION),
    "(?N)" => entry!("Group recursion", "Matches the pattern of the numbered group again at this point.",
        syntax: "(?1), (?-1), (?+1)", reference: REF_RECURSION),
    "(?&name)" => entry!("Subroutine call", "Matches the pattern of the named group again at this point.",
        syntax: "(?&name), \\g<name>, (?P>name)",
        reference: "https://www.regular-expressions.info/subroutine.html"),
    "(?#...)" => entry!("Comment", "Ignored by the engine; documents the pattern.",
        syntax: "(?#text)", example: "\\d+(?#digits)"),
    "\\Q...\\E" => entry!("Quoted text", "Everything between \\Q and \\E matches literally.",
        syntax: "\\Q...\\E", example: "\\Q1+1\\E matches \"1+1\""),
    "\\K" => entry!("Match reset", "Drops everything matched so far from the reported match.",
        syntax: "\\K", example: "foo\\Kbar reports \"bar\" in \"foobar\""),
    "(?...)" => entry!("Special construct", "An extension group this tool does not know in detail."),
    "(*VERB)" => entry!("Backtracking control verb", "Controls how the engine backtracks.",
        syntax: "(*VERB) or (*VERB:arg)", reference: "https://www.regular-expressions.info/verb.html"),
    "(*FAIL)" => entry!("Fail", "Forces the current path to fail and backtrack.", syntax: "(*FAIL) or (*F)"),
    "(*F)" => entry!("Fail", "Forces the current path to fail and backtrack.", syntax: "(*FAIL) or (*F)"),
    "(*ACCEPT)" => entry!("Accept", "Ends the match successfully right here.", syntax: "(*ACCEPT)"),
    "(*COMMIT)" => entry!("Commit", "Once passed, a later failure fails the whole match with no further attempts.", syntax: "(*COMMIT)"),
    "(*PRUNE)" => entry!("Prune", "Once passed, a later failure fails the attempt at the current start position.", syntax: "(*PRUNE)"),
    "(*SKIP)" => entry!("Skip", "Once passed, a later failure restarts matching at this position.", syntax: "(*SKIP)"),
    "(*THEN)" => entry!("Then", "Once passed, a later failure skips to the next alternative.", syntax: "(*THEN)"),
    "(*MARK)" => entry!("Mark", "Names a position for use by (*SKIP:name).", syntax: "(*MARK:name)"),
};

static KINDS: Map<&'static str, Entry> = phf_map! {
    "literal" => entry!("Literal", "Matches this exact character."),
    "character-class" => entry!("Character class", "Matches one character from a predefined class.", reference: REF_CLASSES),
    "character-set" => entry!("Character set", "Matches one character listed between the brackets; a leading ^ negates the set.",
        syntax: "[abc], [a-z], [^abc]", example: "gr[ae]y matches \"gray\" and \"grey\"",
        reference: "https://www.regular-expressions.info/charclass.html"),
    "posix-class" => entry!("POSIX class", "A character set using named POSIX classes such as [:alpha:].",
        syntax: "[[:name:]]", example: "[[:digit:]] matches \"5\"",
        reference: "https://www.regular-expressions.info/posixbrackets.html"),
    "quantifier-greedy" => entry!("Greedy quantifier", "Repeats the previous item as many times as possible.", reference: REF_REPEAT),
    "quantifier-lazy" => entry!("Lazy quantifier", "Repeats the previous item as few times as possible.", reference: REF_REPEAT),
    "quantifier-possessive" => entry!("Possessive quantifier", "Repeats the previous item as many times as possible, never backtracking.", reference: REF_REPEAT),
    "anchor" => entry!("Anchor", "Matches a position rather than a character.", reference: REF_ANCHORS),
    "boundary" => entry!("Boundary", "Matches a position between characters.", reference: REF_ANCHORS),
    "group-capture" => entry!("Capturing group", "Groups its contents and remembers the matched text.", reference: REF_GROUPS),
    "group-noncapture" => entry!("Non-capturing group", "Groups its contents without remembering them.", reference: REF_GROUPS),
    "group-named" => entry!("Named capturing group", "Groups its contents and remembers them under a name.", reference: REF_GROUPS),
    "group-atomic" => entry!("Atomic group", "Matches its contents without allowing backtracking into them."),
    "group-conditional" => entry!("Conditional", "Chooses between two branches based on a condition."),
    "group-branch-reset" => entry!("Branch reset group", "Alternatives share capture group numbers."),
    "comment" => entry!("Comment", "Ignored by the engine."),
    "mode-modifier" => entry!("Mode modifier", "Changes matching options."),
    "assertion-lookahead-pos" => entry!("Positive lookahead", "Requires what follows to match.", reference: REF_LOOKAROUND),
    "assertion-lookahead-neg" => entry!("Negative lookahead", "Requires what follows not to match.", reference: REF_LOOKAROUND),
    "assertion-lookbehind-pos" => entry!("Positive lookbehind", "Requires what precedes to match.", reference: REF_LOOKAROUND),
    "assertion-lookbehind-neg" => entry!("Negative lookbehind", "Requires what precedes not to match.", reference: REF_LOOKAROUND),
    "backreference-numbered" => entry!("Backreference", "Matches the text captured by a numbered group.", reference: REF_BACKREF),
    "backreference-named" => entry!("Named backreference", "Matches the text captured by a named group.", reference: REF_BACKREF),
    "recursion" => entry!("Recursion", "Re-enters the pattern or a group recursively.", reference: REF_RECURSION),
    "subroutine" => entry!("Subroutine call", "Re-uses the pattern of another group."),
    "unicode-property" => entry!("Unicode property", "Matches a character by Unicode property.", reference: REF_UNICODE),
    "escape-control" => entry!("Control character", "Matches a non-printing control character."),
    "escape-hex" => entry!("Hex escape", "Matches a character given by hexadecimal code."),
    "escape-unicode" => entry!("Unicode escape", "Matches a character given by code point.", reference: REF_UNICODE),
    "escape-octal" => entry!("Octal escape", "Matches a character given by octal code."),
    "escape-special" => entry!("Escaped character", "Matches the escaped character literally."),
    "literal-mode" => entry!("Quoted text", "Matches the quoted text literally."),
    "special-construct" => entry!("Special construct", "An engine-specific construct."),
    "verb" => entry!("Backtracking control verb", "Controls backtracking."),
    "alternation" => entry!("Alternation", "Matches either the part before or the part after the bar.",
        syntax: "a|b", example: "cat|dog matches \"cat\" or \"dog\"",
        reference: "https://www.regular-expressions.info/alternation.html"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::TokenKind;

    #[test]
    fn every_kind_has_a_fallback_entry() {
        for kind in TokenKind::ALL {
            assert!(
                BuiltinKnowledge.lookup(Category::Kind, kind.as_str()).is_some(),
                "{kind}"
            );
        }
    }

    #[test]
    fn lookup_copies_all_fields() {
        let e = BuiltinKnowledge
            .lookup(Category::CharacterClass, ".")
            .unwrap();
        assert_eq!(e.title, "Any character");
        assert_eq!(e.description, "Matches any character except newline.");
        assert_eq!(e.syntax.as_deref(), Some("."));
        assert!(e.details.is_some());
        assert!(e.reference.is_some());
        assert!(e.caveats.is_empty());
    }

    #[test]
    fn missing_key() {
        assert!(BuiltinKnowledge.lookup(Category::Anchor, "\\d").is_none());
    }
}
