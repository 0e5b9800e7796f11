//! Validation and match execution on the host engine.
//!
//! Patterns are compiled with `fancy_regex`, which adds backreferences and
//! lookaround on top of the `regex` crate. The `i`, `m` and `s` flags become an
//! inline `(?ims)` prefix; every other flag is applied while iterating. Parse
//! error positions are reported against the pattern as written, not the
//! prefixed source.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::flags::Flags;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Compile(fancy_regex::Error),

    #[error("execution failed: {0}")]
    Execution(fancy_regex::Error),
}

/// Outcome of compiling a pattern without running it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error_message: None,
        }
    }

    pub fn failed(err: &EngineError) -> Self {
        Self {
            valid: false,
            error_message: Some(err.to_string()),
        }
    }
}

/// One match of a pattern in the sample text. Offsets are in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub value: String,
    pub start: usize,
    pub end: usize,
    /// Numbered groups from 1, `None` where a group did not participate.
    pub groups: Vec<Option<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub named: BTreeMap<String, Option<String>>,
}

/// A pattern compiled under a set of flags.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: fancy_regex::Regex,
    flags: Flags,
    names: Vec<String>,
}

/// Compile `pattern` under `flags`.
pub fn compile(pattern: &str, flags: Flags) -> Result<CompiledPattern, EngineError> {
    let prefix = flags.inline_prefix();
    let source = format!("{prefix}{pattern}");
    let regex = fancy_regex::Regex::new(&source).map_err(|err| match err {
        fancy_regex::Error::ParseError(pos, kind) => EngineError::Compile(
            fancy_regex::Error::ParseError(pos.saturating_sub(prefix.len()), kind),
        ),
        err => EngineError::Compile(err),
    })?;
    let names = regex
        .capture_names()
        .flatten()
        .map(str::to_string)
        .collect();
    Ok(CompiledPattern {
        regex,
        flags,
        names,
    })
}

/// Check that `pattern` compiles. Never panics.
pub fn validate(pattern: &str, flags: Flags) -> Validation {
    match compile(pattern, flags) {
        Ok(_) => Validation::ok(),
        Err(err) => Validation::failed(&err),
    }
}

/// Compile and run in one step; nothing is matched if compilation fails.
pub fn execute(pattern: &str, flags: Flags, text: &str) -> Result<Vec<Match>, EngineError> {
    compile(pattern, flags)?.execute(text)
}

impl CompiledPattern {
    /// Names of the named groups, in declaration order.
    pub fn group_names(&self) -> &[String] {
        &self.names
    }

    /// Every non-overlapping match in `text`, left to right.
    ///
    /// With the sticky flag each match must start exactly where the previous
    /// one ended, the first at 0, and enumeration stops at the first gap. An
    /// empty sticky match moves the next start on by one character.
    pub fn execute(&self, text: &str) -> Result<Vec<Match>, EngineError> {
        if self.flags.sticky {
            return self.execute_sticky(text);
        }
        let mut matches = Vec::new();
        for caps in self.regex.captures_iter(text) {
            let caps = caps.map_err(EngineError::Execution)?;
            matches.extend(self.to_match(&caps));
        }
        Ok(matches)
    }

    fn execute_sticky(&self, text: &str) -> Result<Vec<Match>, EngineError> {
        let mut matches = Vec::new();
        let mut pos = 0;
        while pos <= text.len() {
            let caps = self
                .regex
                .captures_from_pos(text, pos)
                .map_err(EngineError::Execution)?;
            let Some(found) = caps.as_ref().and_then(|caps| self.to_match(caps)) else {
                break;
            };
            if found.start != pos {
                break;
            }
            pos = if found.end > found.start {
                found.end
            } else {
                match text[pos..].chars().next() {
                    Some(c) => pos + c.len_utf8(),
                    None => text.len() + 1,
                }
            };
            matches.push(found);
        }
        Ok(matches)
    }

    fn to_match(&self, caps: &fancy_regex::Captures<'_>) -> Option<Match> {
        let whole = caps.get(0)?;
        let groups = (1..caps.len())
            .map(|i| caps.get(i).map(|m| m.as_str().to_string()))
            .collect();
        let named = self
            .names
            .iter()
            .map(|name| {
                let value = caps.name(name).map(|m| m.as_str().to_string());
                (name.clone(), value)
            })
            .collect();
        Some(Match {
            value: whole.as_str().to_string(),
            start: whole.start(),
            end: whole.end(),
            groups,
            named,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.value.as_str()).collect()
    }

    #[test]
    fn bounded_repetition_prefers_maximum() {
        let matches = execute("a{2,4}", Flags::global(), "aaaa aaa aa a").unwrap();
        assert_eq!(values(&matches), ["aaaa", "aaa", "aa"]);
        assert_eq!((matches[1].start, matches[1].end), (5, 8));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let validation = validate("a(", Flags::global());
        assert!(!validation.valid);
        assert!(validation.error_message.is_some_and(|m| !m.is_empty()));
        assert!(matches!(
            execute("a(", Flags::global(), "a"),
            Err(EngineError::Compile(_))
        ));
    }

    #[test]
    fn valid_pattern() {
        assert_eq!(validate(r"\d+", Flags::default()), Validation::ok());
    }

    #[test]
    fn zero_matches_is_empty() {
        assert!(execute("z", Flags::global(), "abc").unwrap().is_empty());
    }

    #[test]
    fn backreference_groups() {
        let matches = execute(r"(\w+)\s+\1", Flags::global(), "the the").unwrap();
        assert_eq!(values(&matches), ["the the"]);
        assert_eq!(matches[0].groups, vec![Some("the".to_string())]);
    }

    #[test]
    fn non_participating_group_is_none() {
        let matches = execute("(a)|(b)", Flags::global(), "b").unwrap();
        assert_eq!(matches[0].groups, vec![None, Some("b".to_string())]);
    }

    #[test]
    fn named_groups() {
        let compiled = compile(r"(?<y>\d{4})-(?<m>\d\d)?", Flags::global()).unwrap();
        assert_eq!(compiled.group_names(), ["y", "m"]);
        let matches = compiled.execute("2024-").unwrap();
        assert_eq!(matches[0].named["y"].as_deref(), Some("2024"));
        assert_eq!(matches[0].named["m"], None);
    }

    #[test]
    fn inline_flags_apply() {
        let flags: Flags = "gi".parse().unwrap();
        assert_eq!(values(&execute("abc", flags, "ABC abc").unwrap()), ["ABC", "abc"]);
        let flags: Flags = "gm".parse().unwrap();
        assert_eq!(values(&execute("^x", flags, "x\nx").unwrap()), ["x", "x"]);
        let flags: Flags = "gs".parse().unwrap();
        assert_eq!(values(&execute("a.b", flags, "a\nb").unwrap()), ["a\nb"]);
        assert!(execute("a.b", Flags::global(), "a\nb").unwrap().is_empty());
    }

    #[test]
    fn sticky_stops_at_gap() {
        let flags: Flags = "gy".parse().unwrap();
        assert_eq!(values(&execute("a", flags, "aab a").unwrap()), ["a", "a"]);
        assert!(execute("a", flags, "ba").unwrap().is_empty());
    }

    #[test]
    fn sticky_empty_match_advances_one_character() {
        let flags: Flags = "gy".parse().unwrap();
        let spans = |text| {
            execute("a*", flags, text)
                .unwrap()
                .iter()
                .map(|m| (m.start, m.end))
                .collect::<Vec<_>>()
        };
        assert_eq!(spans("b"), [(0, 0), (1, 1)]);
        assert_eq!(spans("ab"), [(0, 1), (1, 1), (2, 2)]);
        assert_eq!(spans("é"), [(0, 0), (2, 2)]);
    }

    #[test]
    fn error_position_ignores_flag_prefix() {
        for pattern in ["a(", "a)"] {
            let plain = validate(pattern, Flags::global());
            assert!(plain.error_message.is_some());
            for flags in ["gi", "gims"] {
                let flagged = validate(pattern, flags.parse().unwrap());
                assert_eq!(flagged.error_message, plain.error_message, "{pattern} /{flags}");
            }
        }
    }

    #[test]
    fn runaway_backtracking_is_an_execution_error() {
        let err = execute(r"(a+)+\1b", Flags::global(), &"a".repeat(30)).unwrap_err();
        assert!(matches!(err, EngineError::Execution(_)));
        assert!(err.to_string().starts_with("execution failed: "));
    }

    #[test]
    fn lookaround_is_supported() {
        let matches = execute(r"(?<=\$)\d+", Flags::global(), "cost: $42").unwrap();
        assert_eq!(values(&matches), ["42"]);
        assert_eq!(matches[0].start, 7);
    }

    #[test]
    fn offsets_slice_the_text() {
        let text = "héllo wörld";
        for m in execute(r"\w+", Flags::global(), text).unwrap() {
            assert_eq!(&text[m.start..m.end], m.value);
        }
    }
}
