//! Narration of sub-patterns.
//!
//! Explains what sits inside a group or set by re-tokenizing it and describing
//! each construct as a short bullet. Groups inside the contents become child
//! bullets. The walk keeps its own work stack, so nesting depth is bounded by
//! memory rather than by the native stack.

use itertools::Itertools;

use super::Narration;
use crate::pattern::scanner::find_closing_delimiter;
use crate::pattern::{Quantifier, QuantifierMode, Token, TokenKind, classify, split_alternatives};

/// Pending narration.
enum Work<'a> {
    /// A sub-pattern still to be scanned into bullets.
    Contents(&'a str),
    /// A finished bullet and the work that produces its children.
    Entry(Narration, Vec<Work<'a>>),
}

/// Narrate the contents of a group, alternation or sub-pattern.
pub fn explain_contents(inner: &str) -> Vec<Narration> {
    build(vec![Work::Contents(inner)])
}

/// Narrate what is inside a composite token; empty for simple tokens.
pub fn narrate_token(token: &Token) -> Vec<Narration> {
    build(contents(token.atom(), token.kind))
}

/// Run `roots` to completion, then fold the flat pre-order list into a tree.
fn build(roots: Vec<Work<'_>>) -> Vec<Narration> {
    let mut flat: Vec<(Narration, Option<usize>)> = Vec::new();
    let mut stack: Vec<(Work<'_>, Option<usize>)> =
        roots.into_iter().rev().map(|work| (work, None)).collect();

    while let Some((work, parent)) = stack.pop() {
        match work {
            Work::Contents(inner) => {
                stack.extend(scan(inner).into_iter().rev().map(|work| (work, parent)));
            }
            Work::Entry(entry, children) => {
                flat.push((entry, parent));
                let index = Some(flat.len() - 1);
                stack.extend(children.into_iter().rev().map(|work| (work, index)));
            }
        }
    }

    // Parents precede their descendants, so walking backwards finishes every
    // entry before it is attached.
    let mut roots = Vec::new();
    while let Some((mut entry, parent)) = flat.pop() {
        entry.children.reverse();
        match parent {
            Some(index) => flat[index].0.children.push(entry),
            None => roots.push(entry),
        }
    }
    roots.reverse();
    roots
}

/// One level of bullets for `inner`; nested contents are left as work.
fn scan(inner: &str) -> Vec<Work<'_>> {
    let alternatives = split_alternatives(inner);
    if alternatives.len() > 1 {
        return alternatives
            .into_iter()
            .enumerate()
            .map(|(i, alt)| option(format!("Option {}", i + 1), alt))
            .collect();
    }

    let mut entries = Vec::new();
    let mut run = String::new();
    let mut pos = 0;
    while pos < inner.len() {
        let token = classify(inner, pos);
        pos = token.end();
        match literal_char(&token) {
            Some(text) if token.quantifier.is_none() => run.push_str(text),
            _ => {
                flush_run(&mut run, &mut entries);
                let atom = &inner[token.position..token.position + token.atom().len()];
                entries.push(Work::Entry(narrate(&token), contents(atom, token.kind)));
            }
        }
    }
    flush_run(&mut run, &mut entries);
    entries
}

/// The work that narrates the inside of a construct.
fn contents(atom: &str, kind: TokenKind) -> Vec<Work<'_>> {
    match kind {
        TokenKind::GroupConditional => conditional_branches(atom),
        TokenKind::CharacterSet | TokenKind::PosixClass => set_members(atom)
            .into_iter()
            .map(|member| Work::Entry(Narration::new(member), Vec::new()))
            .collect(),
        kind => group_body(atom, kind)
            .map(|body| vec![Work::Contents(body)])
            .unwrap_or_default(),
    }
}

/// Plain-English repetition clause, e.g. "between 2 and 4 times, prefers maximum".
pub fn describe_quantifier(q: &Quantifier) -> String {
    let base = match (q.min, q.max) {
        (0, None) => "0 or more times".to_string(),
        (1, None) => "1 or more times".to_string(),
        (0, Some(1)) if !q.braced => "optionally (0 or 1 time)".to_string(),
        (n, None) => format!("{n} or more times"),
        (n, Some(m)) if n == m => format!("exactly {n} {}", if n == 1 { "time" } else { "times" }),
        (n, Some(m)) => format!("between {n} and {m} times"),
    };
    let ranged = q.max != Some(q.min);
    let bounded = q.max.is_some_and(|m| m > q.min);
    match q.mode {
        QuantifierMode::Greedy if bounded && q.braced => format!("{base}, prefers maximum"),
        QuantifierMode::Lazy if ranged => format!("{base}, as few as possible"),
        QuantifierMode::Possessive if ranged => format!("{base}, without giving back"),
        _ => base,
    }
}

/// Short description of a single construct, without its quantifier.
pub fn phrase(token: &Token) -> String {
    let atom = token.atom();
    match token.kind {
        TokenKind::Literal => format!("the character {}", quoted(atom)),
        TokenKind::EscapeSpecial => format!("a literal {}", quoted(&atom[1..])),
        TokenKind::CharacterClass => class_phrase(atom).to_string(),
        TokenKind::CharacterSet | TokenKind::PosixClass => {
            let lead = if atom.starts_with("[^") {
                "one character not in"
            } else {
                "one character from"
            };
            format!("{lead}: {}", set_members(atom).join(", "))
        }
        TokenKind::QuantifierGreedy
        | TokenKind::QuantifierLazy
        | TokenKind::QuantifierPossessive => match &token.quantifier {
            Some(q) => {
                format!("a quantifier with nothing to repeat ({})", describe_quantifier(q))
            }
            None => "a quantifier with nothing to repeat".to_string(),
        }
        TokenKind::Anchor => match atom {
            "^" => "the start of the text (or line, in multiline mode)",
            "$" => "the end of the text (or line, in multiline mode)",
            "\\A" => "the very start of the text",
            "\\z" => "the very end of the text",
            "\\Z" => "the end of the text, before any final newline",
            _ => "the position where the previous match ended",
        }
        .to_string(),
        TokenKind::Boundary => match atom {
            "\\b" => "a word boundary",
            _ => "a position that is not a word boundary",
        }
        .to_string(),
        TokenKind::GroupCapture => "a capture group containing:".to_string(),
        TokenKind::GroupNamed => format!(
            "a capture group named {} containing:",
            quoted(group_name(atom).unwrap_or("?"))
        ),
        TokenKind::GroupNoncapture => "a group containing:".to_string(),
        TokenKind::GroupAtomic => {
            "an atomic group (no backtracking into it) containing:".to_string()
        }
        TokenKind::GroupConditional => match condition(atom) {
            Some(cond) => format!("a conditional on ({cond}):"),
            None => "a conditional:".to_string(),
        },
        TokenKind::GroupBranchReset => {
            "a branch-reset group (alternatives share group numbers) containing:".to_string()
        }
        TokenKind::AssertionLookaheadPos => "followed by (not consumed):".to_string(),
        TokenKind::AssertionLookaheadNeg => "not followed by:".to_string(),
        TokenKind::AssertionLookbehindPos => "preceded by:".to_string(),
        TokenKind::AssertionLookbehindNeg => "not preceded by:".to_string(),
        TokenKind::Comment => {
            let text = atom.strip_prefix("(?#").unwrap_or(atom);
            format!("a comment {} (ignored)", quoted(text.strip_suffix(')').unwrap_or(text)))
        }
        TokenKind::ModeModifier => modifier_phrase(atom),
        TokenKind::BackreferenceNumbered => match reference_target(atom) {
            Some(n) if n.starts_with('-') => {
                format!("the same text captured {} group(s) back", &n[1..])
            }
            Some(n) => format!("the same text captured by group {n}"),
            None => "the same text captured earlier".to_string(),
        },
        TokenKind::BackreferenceNamed => format!(
            "the same text captured by group {}",
            quoted(reference_target(atom).unwrap_or("?"))
        ),
        TokenKind::Recursion => match atom {
            "(?R)" | "(?0)" => "the whole pattern again, recursively".to_string(),
            _ => format!("the pattern of group {} again", &atom[2..atom.len() - 1]),
        },
        TokenKind::Subroutine => format!(
            "the pattern of group {} again",
            quoted(reference_target(atom).unwrap_or("?"))
        ),
        TokenKind::UnicodeProperty => {
            let name = atom[2..].trim_start_matches('{').trim_end_matches('}');
            if atom.starts_with("\\P") {
                format!("a character without the Unicode property {}", quoted(name))
            } else {
                format!("a character with the Unicode property {}", quoted(name))
            }
        }
        TokenKind::EscapeControl => control_phrase(atom),
        TokenKind::EscapeHex | TokenKind::EscapeUnicode | TokenKind::EscapeOctal => {
            match code_point(atom, token.kind) {
                Some(c) => format!("the character U+{:04X} ({})", c as u32, quoted(&c.to_string())),
                None => format!("the character written as {atom}"),
            }
        }
        TokenKind::LiteralMode => {
            let text = atom.strip_prefix("\\Q").unwrap_or(atom);
            format!("the literal text {}", quoted(text.strip_suffix("\\E").unwrap_or(text)))
        }
        TokenKind::SpecialConstruct if atom == "\\K" => {
            "reset the start of the reported match here".to_string()
        }
        TokenKind::SpecialConstruct => format!("the special construct {atom}"),
        TokenKind::Verb => format!("the backtracking control verb {atom}"),
        TokenKind::Alternation => "or".to_string(),
    }
}

/// The pattern between a group's opening prefix and its closing `)`.
pub fn group_body(atom: &str, kind: TokenKind) -> Option<&str> {
    let inner = atom.strip_suffix(')')?;
    let start = match kind {
        TokenKind::GroupCapture => 1,
        TokenKind::GroupNoncapture
        | TokenKind::GroupAtomic
        | TokenKind::GroupBranchReset
        | TokenKind::AssertionLookaheadPos
        | TokenKind::AssertionLookaheadNeg => 3,
        TokenKind::AssertionLookbehindPos | TokenKind::AssertionLookbehindNeg => 4,
        TokenKind::GroupNamed => {
            let (name_start, close) = name_delimiters(atom)?;
            atom[name_start..].find(close)? + name_start + 1
        }
        TokenKind::ModeModifier => inner.find(':')? + 1,
        _ => return None,
    };
    inner.get(start..)
}

/// The name of a `(?<name>...)`, `(?'name'...)` or `(?P<name>...)` group.
pub fn group_name(atom: &str) -> Option<&str> {
    let (start, close) = name_delimiters(atom)?;
    let end = atom[start..].find(close)? + start;
    Some(&atom[start..end])
}

fn name_delimiters(atom: &str) -> Option<(usize, char)> {
    if atom.starts_with("(?P<") {
        Some((4, '>'))
    } else if atom.starts_with("(?<") {
        Some((3, '>'))
    } else if atom.starts_with("(?'") {
        Some((3, '\''))
    } else {
        None
    }
}

fn option(label: String, alternative: &str) -> Work<'_> {
    if alternative.is_empty() {
        let entry = Narration::new(format!("{label}: nothing (matches the empty string)"));
        return Work::Entry(entry, Vec::new());
    }
    Work::Entry(
        Narration::new(format!("{label}:")),
        vec![Work::Contents(alternative)],
    )
}

/// The bullet for a token, without its children.
fn narrate(token: &Token) -> Narration {
    let mut entry = Narration::new(phrase(token));
    entry.quantifier = token
        .quantifier
        .filter(|_| !token.kind.is_quantifier())
        .map(|q| describe_quantifier(&q));
    entry
}

/// The single character a plain literal token stands for.
fn literal_char(token: &Token) -> Option<&str> {
    match token.kind {
        TokenKind::Literal => Some(token.atom()),
        TokenKind::EscapeSpecial => Some(&token.atom()[1..]),
        _ => None,
    }
}

fn flush_run(run: &mut String, entries: &mut Vec<Work<'_>>) {
    if run.is_empty() {
        return;
    }
    let text = if run.chars().count() == 1 {
        format!("the character {}", quoted(run))
    } else {
        format!("the literal text {}", quoted(run))
    };
    entries.push(Work::Entry(Narration::new(text), Vec::new()));
    run.clear();
}

fn conditional_branches(atom: &str) -> Vec<Work<'_>> {
    let Some(close) = find_closing_delimiter(atom, 2) else {
        return Vec::new();
    };
    let Some(branches) = atom.get(close + 1..atom.len() - 1) else {
        return Vec::new();
    };
    let Some(yes) = split_alternatives(branches).into_iter().next() else {
        return Vec::new();
    };
    let mut entries = vec![option("If it holds".to_string(), yes)];
    // Everything after the first top-level `|`.
    let otherwise = branches.get(yes.len() + 1..).unwrap_or("");
    if !otherwise.is_empty() {
        entries.push(option("Otherwise".to_string(), otherwise));
    }
    entries
}

fn condition(atom: &str) -> Option<&str> {
    let close = find_closing_delimiter(atom, 2)?;
    atom.get(3..close)
}

/// `1` for `\1`, `-1` for `\g{-1}`, `name` for `\k<name>` or `(?&name)`.
fn reference_target(atom: &str) -> Option<&str> {
    let target = if let Some(rest) = atom.strip_prefix("(?") {
        let rest = rest.strip_suffix(')')?;
        ["P=", "P>", "&"]
            .iter()
            .find_map(|prefix| rest.strip_prefix(prefix))
            .unwrap_or(rest)
    } else {
        atom.get(2..)?
            .trim_start_matches(['<', '{', '\''])
            .trim_end_matches(['>', '}', '\''])
    };
    if atom.starts_with('\\') && atom.as_bytes().get(1).is_some_and(u8::is_ascii_digit) {
        return atom.get(1..);
    }
    (!target.is_empty()).then_some(target)
}

fn class_phrase(atom: &str) -> &'static str {
    match atom {
        "." => "any character except newline",
        "\\d" => "a digit (0-9)",
        "\\D" => "a character that is not a digit",
        "\\w" => "a word character (letter, digit or underscore)",
        "\\W" => "a character that is not a word character",
        "\\s" => "a whitespace character",
        "\\S" => "a character that is not whitespace",
        "\\h" => "a horizontal whitespace character",
        "\\H" => "a character that is not horizontal whitespace",
        "\\N" => "any character except newline",
        "\\R" => "a line break",
        "\\X" => "one grapheme cluster",
        _ => "a character from a built-in class",
    }
}

fn control_phrase(atom: &str) -> String {
    match atom {
        "\\t" => "a tab".to_string(),
        "\\n" => "a newline".to_string(),
        "\\r" => "a carriage return".to_string(),
        "\\f" => "a form feed".to_string(),
        "\\v" => "a vertical tab".to_string(),
        "\\e" => "an escape character".to_string(),
        "\\a" => "a bell character".to_string(),
        _ => format!("the control character Ctrl-{}", atom[2..].to_ascii_uppercase()),
    }
}

fn modifier_phrase(atom: &str) -> String {
    let flags = atom
        .trim_start_matches("(?")
        .split([':', ')'])
        .next()
        .unwrap_or("");
    let (on, off) = flags.split_once('-').unwrap_or((flags, ""));
    let names = |letters: &str| letters.chars().map(modifier_name).join(", ");
    let mut parts = Vec::new();
    if !on.is_empty() {
        parts.push(format!("turn on {}", names(on)));
    }
    if !off.is_empty() {
        parts.push(format!("turn off {}", names(off)));
    }
    let action = if parts.is_empty() {
        "change no options".to_string()
    } else {
        parts.join(" and ")
    };
    if atom.contains(':') {
        format!("{action} for:")
    } else {
        action
    }
}

fn modifier_name(letter: char) -> String {
    match letter {
        'i' => "case-insensitive".to_string(),
        'm' => "multiline".to_string(),
        's' => "dot-all".to_string(),
        'x' => "extended (ignore whitespace)".to_string(),
        'U' => "swap greediness".to_string(),
        'u' => "unicode".to_string(),
        'n' => "no automatic capture".to_string(),
        'J' => "duplicate group names".to_string(),
        other => format!("option {other}"),
    }
}

/// Members and ranges of a `[...]` set, in order.
fn set_members(atom: &str) -> Vec<String> {
    let Some(body) = atom.strip_prefix('[').and_then(|s| s.strip_suffix(']')) else {
        return Vec::new();
    };
    let mut rest = body.strip_prefix('^').unwrap_or(body);
    let mut members = Vec::new();
    // A `]` right after the opening bracket is a member, not the end.
    if let Some(after) = rest.strip_prefix(']') {
        members.push(quoted("]"));
        rest = after;
    }
    while !rest.is_empty() {
        if rest.starts_with("[:")
            && let Some(end) = rest[2..].find(":]").map(|i| i + 2)
        {
            members.push(format!("{} characters", posix_name(&rest[2..end])));
            rest = &rest[end + 2..];
            continue;
        }
        let (low, used) = set_item(rest);
        rest = &rest[used..];
        if let Some(after_dash) = rest.strip_prefix('-')
            && !after_dash.is_empty()
            && let SetItem::Char(lo) = &low
        {
            let (high, used) = set_item(after_dash);
            if let SetItem::Char(hi) = high {
                members.push(format!("{} to {}", quoted(lo), quoted(&hi)));
                rest = &after_dash[used..];
                continue;
            }
        }
        members.push(low.describe());
    }
    members
}

enum SetItem {
    Char(String),
    Class(&'static str),
}

impl SetItem {
    fn describe(self) -> String {
        match self {
            SetItem::Char(c) => quoted(&c),
            SetItem::Class(phrase) => phrase.to_string(),
        }
    }
}

/// One member at the start of `s`, with its byte length.
fn set_item(s: &str) -> (SetItem, usize) {
    let Some(c) = s.chars().next() else {
        return (SetItem::Char(String::new()), 0);
    };
    if c != '\\' {
        return (SetItem::Char(c.to_string()), c.len_utf8());
    }
    let token = classify(s, 0);
    let len = token.atom().len();
    let item = match token.kind {
        TokenKind::CharacterClass => SetItem::Class(class_phrase(token.atom())),
        TokenKind::EscapeSpecial => SetItem::Char(token.atom()[1..].to_string()),
        TokenKind::EscapeControl => match control_char(token.atom()) {
            Some(ch) => SetItem::Char(ch.to_string()),
            None => SetItem::Char(token.atom().to_string()),
        },
        TokenKind::EscapeHex | TokenKind::EscapeUnicode | TokenKind::EscapeOctal => {
            match code_point(token.atom(), token.kind) {
                Some(ch) => SetItem::Char(ch.to_string()),
                None => SetItem::Char(token.atom().to_string()),
            }
        }
        _ => SetItem::Char(token.atom().to_string()),
    };
    (item, len)
}

fn posix_name(name: &str) -> String {
    let (negated, name) = match name.strip_prefix('^') {
        Some(rest) => (true, rest),
        None => (false, name),
    };
    let base = match name {
        "alpha" => "alphabetic",
        "digit" => "digit",
        "alnum" => "alphanumeric",
        "upper" => "uppercase",
        "lower" => "lowercase",
        "space" => "whitespace",
        "punct" => "punctuation",
        "xdigit" => "hex digit",
        "word" => "word",
        "blank" => "blank",
        "cntrl" => "control",
        "print" => "printable",
        "graph" => "visible",
        other => other,
    };
    if negated {
        format!("non-{base}")
    } else {
        base.to_string()
    }
}

/// Decode a numeric escape into the character it denotes.
fn code_point(atom: &str, kind: TokenKind) -> Option<char> {
    let digits = atom.get(2..)?.trim_start_matches('{').trim_end_matches('}');
    let radix = match kind {
        TokenKind::EscapeOctal => 8,
        _ => 16,
    };
    let digits = if digits.is_empty() { "0" } else { digits };
    char::from_u32(u32::from_str_radix(digits, radix).ok()?)
}

fn control_char(atom: &str) -> Option<char> {
    Some(match atom {
        "\\t" => '\t',
        "\\n" => '\n',
        "\\r" => '\r',
        "\\f" => '\u{c}',
        "\\v" => '\u{b}',
        "\\e" => '\u{1b}',
        "\\a" => '\u{7}',
        _ => {
            let letter = atom.strip_prefix("\\c")?.chars().next()?;
            char::from_u32(letter.to_ascii_uppercase() as u32 ^ 0x40)?
        }
    })
}

fn quoted(s: &str) -> String {
    format!("{s:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::render_narration;
    use crate::pattern::tokenize;

    fn lines(inner: &str) -> String {
        render_narration(&explain_contents(inner))
    }

    fn token(pattern: &str) -> Token {
        tokenize(pattern).remove(0)
    }

    #[test]
    fn literal_run_merges() {
        assert_eq!(lines("abc"), "- the literal text \"abc\"\n");
    }

    #[test]
    fn quantified_literal_splits_run() {
        assert_eq!(
            lines("abc+"),
            "- the literal text \"ab\"\n- the character \"c\", 1 or more times\n"
        );
    }

    #[test]
    fn escaped_metacharacters_join_the_run() {
        assert_eq!(lines(r"a\.b"), "- the literal text \"a.b\"\n");
    }

    #[test]
    fn noncapture_group_token() {
        let t = token("(?:abc)+");
        let narration = narrate_token(&t);
        assert_eq!(render_narration(&narration), "- the literal text \"abc\"\n");
        assert_eq!(
            t.quantifier.map(|q| describe_quantifier(&q)).as_deref(),
            Some("1 or more times")
        );
    }

    #[test]
    fn top_level_alternation_gives_options() {
        assert_eq!(
            lines("cat|do(g|t)|"),
            "- Option 1:\n  - the literal text \"cat\"\n\
             - Option 2:\n  - the literal text \"do\"\n  - a capture group containing:\n    \
             - Option 1:\n      - the character \"g\"\n    \
             - Option 2:\n      - the character \"t\"\n\
             - Option 3: nothing (matches the empty string)\n"
        );
    }

    #[test]
    fn nested_groups_nest_narration() {
        assert_eq!(
            lines(r"(a(\d{2,4}))"),
            "- a capture group containing:\n  - the character \"a\"\n  \
             - a capture group containing:\n    \
             - a digit (0-9), between 2 and 4 times, prefers maximum\n"
        );
    }

    #[test]
    fn lookarounds_and_named_groups() {
        assert_eq!(
            lines(r"(?<year>\d+)(?=-)"),
            "- a capture group named \"year\" containing:\n  - a digit (0-9), 1 or more times\n\
             - followed by (not consumed):\n  - the character \"-\"\n"
        );
    }

    #[test]
    fn sets_list_members() {
        assert_eq!(
            phrase(&token(r"[a-z0-9_\-]")),
            "one character from: \"a\" to \"z\", \"0\" to \"9\", \"_\", \"-\""
        );
        assert_eq!(
            phrase(&token(r"[^\s,]")),
            "one character not in: a whitespace character, \",\""
        );
        assert_eq!(
            phrase(&token("[[:alpha:]_]")),
            "one character from: alphabetic characters, \"_\""
        );
        assert_eq!(phrase(&token("[]a]")), "one character from: \"]\", \"a\"");
        assert_eq!(phrase(&token("[a-]")), "one character from: \"a\", \"-\"");
    }

    #[test]
    fn quantifier_clauses() {
        let q = |p: &str| describe_quantifier(&token(p).quantifier.unwrap());
        assert_eq!(q("a*"), "0 or more times");
        assert_eq!(q("a+"), "1 or more times");
        assert_eq!(q("a?"), "optionally (0 or 1 time)");
        assert_eq!(q("a{3}"), "exactly 3 times");
        assert_eq!(q("a{1}"), "exactly 1 time");
        assert_eq!(q("a{2,}"), "2 or more times");
        assert_eq!(q("a{2,4}"), "between 2 and 4 times, prefers maximum");
        assert_eq!(q("a{2,4}?"), "between 2 and 4 times, as few as possible");
        assert_eq!(q("a*?"), "0 or more times, as few as possible");
        assert_eq!(q("a++"), "1 or more times, without giving back");
    }

    #[test]
    fn escape_phrases() {
        assert_eq!(phrase(&token(r"\x41")), "the character U+0041 (\"A\")");
        assert_eq!(phrase(&token(r"\u{e9}")), "the character U+00E9 (\"é\")");
        assert_eq!(phrase(&token(r"\012")), "the character U+000A (\"\\n\")");
        assert_eq!(phrase(&token(r"\cM")), "the control character Ctrl-M");
        assert_eq!(phrase(&token(r"\t")), "a tab");
        assert_eq!(phrase(&token(r"\Q*+\E")), "the literal text \"*+\"");
    }

    #[test]
    fn reference_phrases() {
        assert_eq!(phrase(&token(r"\1")), "the same text captured by group 1");
        assert_eq!(phrase(&token(r"\g{-2}")), "the same text captured 2 group(s) back");
        assert_eq!(phrase(&token(r"\k<q>")), "the same text captured by group \"q\"");
        assert_eq!(phrase(&token("(?P=q)")), "the same text captured by group \"q\"");
        assert_eq!(phrase(&token("(?&word)")), "the pattern of group \"word\" again");
        assert_eq!(phrase(&token(r"\g<word>")), "the pattern of group \"word\" again");
        assert_eq!(phrase(&token("(?R)")), "the whole pattern again, recursively");
        assert_eq!(phrase(&token("(?2)")), "the pattern of group 2 again");
    }

    #[test]
    fn modifier_phrases() {
        assert_eq!(phrase(&token("(?i)")), "turn on case-insensitive");
        assert_eq!(
            phrase(&token("(?im-s:x)")),
            "turn on case-insensitive, multiline and turn off dot-all for:"
        );
        assert_eq!(
            render_narration(&narrate_token(&token("(?i:ab)"))),
            "- the literal text \"ab\"\n"
        );
    }

    #[test]
    fn conditional_branches_are_labelled() {
        let t = token("(?(1)a|b)");
        assert_eq!(phrase(&t), "a conditional on (1):");
        assert_eq!(
            render_narration(&narrate_token(&t)),
            "- If it holds:\n  - the character \"a\"\n- Otherwise:\n  - the character \"b\"\n"
        );
    }

    #[test]
    fn every_kind_has_a_phrase() {
        for pattern in [
            "a", ".", "[a]", "[[:digit:]]", "*", "^", r"\b", "(a)", "(?:a)", "(?<n>a)",
            "(?>a)", "(?(1)a)", "(?|a)", "(?#c)", "(?i)", "(?=a)", "(?!a)", "(?<=a)",
            "(?<!a)", r"\1", r"\k<n>", "(?R)", "(?&n)", r"\pL", r"\t", r"\x41", r"\u0041",
            r"\0", r"\.", r"\Qa\E", r"\K", "(*FAIL)", "|",
        ] {
            assert!(!phrase(&token(pattern)).is_empty(), "{pattern}");
        }
    }

    #[test]
    fn unterminated_contents_terminate() {
        assert_eq!(lines("(((").lines().count(), 1);
        assert_eq!(lines("[").lines().count(), 1);
        assert!(lines("").is_empty());
    }
}
