//! Pattern flags.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// The flag set passed alongside a pattern, spelled `gimsuy`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Flags {
    /// `i`
    pub case_insensitive: bool,
    /// `g`: report every match rather than the first.
    pub global: bool,
    /// `m`: `^` and `$` match at line breaks.
    pub multiline: bool,
    /// `s`: `.` also matches `\n`.
    pub dot_all: bool,
    /// `u`
    pub unicode: bool,
    /// `y`: matches must be contiguous from the start of the text.
    pub sticky: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagsError {
    #[error("Unknown flag {0:?}; expected any of \"gimsuy\"")]
    Unknown(char),
    #[error("Flag {0:?} given more than once")]
    Duplicate(char),
}

impl Flags {
    pub const ALPHABET: &'static str = "gimsuy";

    pub fn global() -> Self {
        Self {
            global: true,
            ..Self::default()
        }
    }

    /// Inline-flag group understood by the matching engine, e.g. `(?im)`.
    ///
    /// `g`, `u` and `y` have no inline form and are handled by the executor.
    pub fn inline_prefix(&self) -> String {
        let mut letters = String::new();
        if self.case_insensitive {
            letters.push('i');
        }
        if self.multiline {
            letters.push('m');
        }
        if self.dot_all {
            letters.push('s');
        }
        if letters.is_empty() {
            letters
        } else {
            format!("(?{letters})")
        }
    }

    /// Plain-language name of a single flag letter.
    pub fn describe(letter: char) -> Option<&'static str> {
        Some(match letter {
            'g' => "global: find all matches",
            'i' => "case-insensitive",
            'm' => "multiline: ^ and $ match at line breaks",
            's' => "dot-all: . also matches newlines",
            'u' => "unicode mode",
            'y' => "sticky: matches must follow each other without gaps",
            _ => return None,
        })
    }

    fn slot(&mut self, letter: char) -> Option<&mut bool> {
        Some(match letter {
            'g' => &mut self.global,
            'i' => &mut self.case_insensitive,
            'm' => &mut self.multiline,
            's' => &mut self.dot_all,
            'u' => &mut self.unicode,
            'y' => &mut self.sticky,
            _ => return None,
        })
    }
}

impl FromStr for Flags {
    type Err = FlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::default();
        for letter in s.chars() {
            let slot = flags.slot(letter).ok_or(FlagsError::Unknown(letter))?;
            if *slot {
                return Err(FlagsError::Duplicate(letter));
            }
            *slot = true;
        }
        Ok(flags)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = [
            self.global,
            self.case_insensitive,
            self.multiline,
            self.dot_all,
            self.unicode,
            self.sticky,
        ];
        for (letter, on) in Self::ALPHABET.chars().zip(set) {
            if on {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
